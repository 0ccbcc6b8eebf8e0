//! Traits which, typically, may be imported without concern: `use defcmd::prelude::*`.

use crate::model::Command;

/// Behaviour to receive each [`Command`] as soon as it is matched.
///
/// Implemented for any `FnMut(&Command)`.
pub trait CommandListener {
    /// Handle a freshly matched command.
    fn handle(&mut self, command: &Command);
}

impl<F> CommandListener for F
where
    F: FnMut(&Command),
{
    fn handle(&mut self, command: &Command) {
        self(command)
    }
}

/// Behaviour to store the `-D<key>=<value>` system properties found on the command line.
pub trait PropertySink {
    /// Store the property `key` with `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}
