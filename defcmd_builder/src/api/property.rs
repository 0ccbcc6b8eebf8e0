use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::rc::Rc;

use crate::prelude::PropertySink;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The default [`PropertySink`], writing each property into the process environment.
///
/// Keys which the environment cannot hold (empty, or containing `=` or `NUL`) are skipped.
///
/// ### Example
/// ```
/// # use defcmd_builder as defcmd;
/// use defcmd::CommandLine;
///
/// let mut command_line = CommandLine::new("program").unwrap();
/// command_line.define("run").unwrap();
/// command_line
///     .parse(&["-Dexample.system.property=on", "run"])
///     .unwrap();
///
/// assert_eq!(std::env::var("example.system.property").unwrap(), "on");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProperties;

impl PropertySink for SystemProperties {
    fn set(&mut self, key: &str, value: &str) {
        if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Skipping the system property '{key}', which the environment cannot hold.");
            }

            return;
        }

        env::set_var(key, value);
    }
}

/// An in-memory [`PropertySink`].
///
/// Clones share the same underlying map, so a clone kept by the caller observes every write.
///
/// ### Example
/// ```
/// # use defcmd_builder as defcmd;
/// use defcmd::{CommandLine, PropertyMap};
///
/// let properties = PropertyMap::default();
/// let mut command_line = CommandLine::new("program")
///     .unwrap()
///     .properties(properties.clone());
/// command_line.parse(&["-Dlog.level=debug"]).unwrap();
///
/// assert_eq!(properties.get("log.level"), Some("debug".to_string()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct PropertyMap {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl PropertyMap {
    /// Get the value of the property `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// The number of properties set.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether no property has been set.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PropertySink for PropertyMap {
    fn set(&mut self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
