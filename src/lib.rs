//! `defcmd` is a command line parser for Rust, driven by compact definition strings.
//!
//! Rather than describing each parameter through a builder or derive, every command is declared in a single line:
//! ```text
//! "cp, copy, !source, !targets..., #Copy the source into each target., :\w+\.txt"
//! ```
//! The clauses of a definition are comma separated, and classified by their leading sigil:
//! * `cp`: a command name.
//! Repeat for aliases; the command is reported under the alias as typed.
//! * `#..`: the description of the command (at most one).
//! * `!name`: a required variable, consuming exactly one value.
//! * `?name`: an optional variable, consuming one value when available.
//! * `!name...`: a required list, consuming one or more values.
//! * `?name...`: an optional list, consuming zero or more values.
//! * `:..`: a regex every value of the command must match in full (at most one).
//!
//! Required variables must come before every optional variable, and a command may declare at most one list.
//! Variable names are unique across every definition of a [`CommandLine`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_copier.rs")]
//! ```
//!
//! ```console
//! $ copier copy=a.txt,b.txt c.txt -v
//! a.txt -> b.txt
//! a.txt -> c.txt
//! Copies: 2
//!
//! $ copier cpy a.txt b.txt
//! Unsupported error: The command name 'cpy' is not defined.
//! Did you mean: cp, copy?
//!
//! $ copier copy a.txt
//! Missing error: The value for the required variable 'targets' is missing.
//! ```
//!
//! # Parsing
//! Each argument is first split on `=` and then on `,`, with surrounding whitespace trimmed.
//! This way, `copy=a.txt,b.txt` and the shell split `copy = a.txt , b.txt` are equivalent.
//!
//! The resulting tokens are consumed front to back.
//! Every token in command position must be a defined command name (or a system property, see below).
//! A command then takes its values in the following order:
//! 1. The required variables, one value each.
//! 2. The required list, taking every token up to the next defined command name (at least one).
//! 3. The optional variables, one value each (when any tokens remain).
//! 4. The optional list, again up to the next defined command name.
//!
//! Lists are greedy, so an optional variable following a list only ever sees the tokens after the list.
//! Notice, optional variables do not stop at command names; a defined name in an optional position is taken as its value.
//!
//! The parse results in the [`Command`]s in the order they were consumed.
//! Variables which received no values are absent from their `Command`.
//!
//! ### System properties
//! A `-D<key>=<value>` token is an escape hatch outside of the defined commands.
//! It is accepted in command position, and amongst the values of a list.
//! The property is written to the session's [`PropertySink`] (by default [`SystemProperties`], the process environment) and also reported as a `Command` named after the token, with the single variable `key`.
//!
//! ```
//! use defcmd::{CommandLine, PropertyMap};
//!
//! let properties = PropertyMap::default();
//! let mut command_line = CommandLine::new("program")
//!     .unwrap()
//!     .properties(properties.clone());
//! command_line.define("run, ?tasks...").unwrap();
//!
//! let commands = command_line
//!     .parse(&["run", "a", "-Dlog.level=debug", "b"])
//!     .unwrap();
//!
//! // The property is reported as soon as it is consumed, ahead of the list which surrounds it.
//! assert_eq!(commands[0].name(), "-Dlog.level");
//! assert_eq!(commands[0].value("log.level"), Some("debug"));
//! assert_eq!(commands[1].name(), "run");
//! assert_eq!(
//!     commands[1].values("tasks"),
//!     Some(&["a".to_string(), "b".to_string()][..])
//! );
//! assert_eq!(properties.get("log.level"), Some("debug".to_string()));
//! ```
//!
//! # Errors
//! Every failure is a [`CmdLineError`], terminal for the call which raised it:
//! * `Validation`: malformed input to an entry point (ex: an empty definition, or more than 256 arguments).
//! * `Duplicate`: a name, description, regex, or variable that is already defined.
//! * `Missing`: a definition without a command name, or a required variable without a value.
//! * `Unsupported`: invalid definition grammar, or an unrecognized token in command position.
//! In the latter case, the error carries the similarly named commands via [`CmdLineError::suggestions`].
//! * `Match`: a value which fails the command's regex.
//!
//! A definition which fails leaves the session untouched.
//!
//! ```
//! use defcmd::{CmdLineError, CommandLine};
//!
//! let mut command_line = CommandLine::new("program").unwrap();
//! command_line.define("install, !package").unwrap();
//!
//! let error = command_line.parse(&["instal", "defcmd"]).unwrap_err();
//! assert!(matches!(error, CmdLineError::Unsupported { .. }));
//! assert_eq!(error.suggestions(), &["install".to_string()]);
//! ```
//!
//! # Listeners
//! [`CommandLine::parse_with`] hands each `Command` to a [`CommandListener`] as soon as it is matched.
//! Any `FnMut(&Command)` is a listener; implement the trait for anything more involved.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_shell.rs")]
//! ```
pub use defcmd_builder::*;
