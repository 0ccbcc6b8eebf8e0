use std::env;

use crate::api::SystemProperties;
use crate::constant::MAX_LENGTH;
use crate::definition::split_definition;
use crate::matcher::{Registry, TokenMatcher};
use crate::model::{Command, CommandDefinition};
use crate::parser::{report, CmdLineError, ConsoleInterface, UserInterface};
use crate::prelude::{CommandListener, PropertySink};
use crate::tokenizer::tokenize;

/// A command line session: the defined commands, and the means to parse arguments against them.
///
/// Commands are declared through definition strings.
/// Each definition is a comma separated list of clauses, classified by their leading sigil:
/// * `name`: a command name (repeat for aliases).
/// * `#text`: the description.
/// * `!var` / `?var`: a required / optional variable, consuming exactly one value.
/// * `!var...` / `?var...`: a required / optional list, consuming values up to the next defined command name.
/// * `:regex`: the pattern every value of the command must match in full.
///
/// ### Example
/// ```
/// # use defcmd_builder as defcmd;
/// use defcmd::CommandLine;
///
/// let mut command_line = CommandLine::new("copier").unwrap();
/// command_line
///     .define("cp, copy, !source, !targets..., #Copy a file, :\\w+\\.txt")
///     .unwrap()
///     .define("-v, --verbose, #Print each copy")
///     .unwrap();
///
/// let commands = command_line
///     .parse(&["copy=a.txt,b.txt", "c.txt", "-v"])
///     .unwrap();
///
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[0].name(), "copy");
/// assert_eq!(commands[0].value("source"), Some("a.txt"));
/// assert_eq!(
///     commands[0].values("targets"),
///     Some(&["b.txt".to_string(), "c.txt".to_string()][..])
/// );
/// assert_eq!(commands[1].name(), "-v");
/// ```
pub struct CommandLine {
    application_name: String,
    version: Option<String>,
    registry: Registry,
    properties: Box<dyn PropertySink>,
}

impl std::fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLine")
            .field("application_name", &self.application_name)
            .field("version", &self.version)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl CommandLine {
    /// Create an empty command line session.
    ///
    /// The application name must be non-empty, and at most 256 characters.
    ///
    /// ### Example
    /// ```
    /// # use defcmd_builder as defcmd;
    /// use defcmd::CommandLine;
    ///
    /// let command_line = CommandLine::new("program").unwrap();
    /// assert_eq!(command_line.application_name(), "program");
    /// assert!(CommandLine::new(" ").is_err());
    /// ```
    pub fn new(application_name: impl Into<String>) -> Result<Self, CmdLineError> {
        let application_name = application_name.into();
        validate_text("application name", &application_name)?;

        Ok(Self {
            application_name,
            version: None,
            registry: Registry::default(),
            properties: Box::new(SystemProperties),
        })
    }

    /// Document the version of the application.
    /// If repeated, only the final version will apply.
    ///
    /// ### Example
    /// ```
    /// # use defcmd_builder as defcmd;
    /// use defcmd::CommandLine;
    ///
    /// let command_line = CommandLine::new("program")
    ///     .unwrap()
    ///     .version("1.0.0")
    ///     .unwrap();
    /// assert_eq!(command_line.version_name(), Some("1.0.0"));
    /// ```
    pub fn version(mut self, version: impl Into<String>) -> Result<Self, CmdLineError> {
        let version = version.into();
        validate_text("version", &version)?;
        self.version.replace(version);
        Ok(self)
    }

    /// Replace the sink which receives the `-D<key>=<value>` system properties.
    /// Defaults to [`SystemProperties`].
    pub fn properties(mut self, sink: impl PropertySink + 'static) -> Self {
        self.properties = Box::new(sink);
        self
    }

    /// The application name of this session.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// The version of this session, if documented.
    pub fn version_name(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Define a command from a single definition string.
    ///
    /// The definition is split on commas (surrounding whitespace is trimmed, empty clauses are dropped) and then compiled as per [`CommandLine::define_clauses`].
    ///
    /// ### Example
    /// ```
    /// # use defcmd_builder as defcmd;
    /// use defcmd::{CmdLineError, CommandLine};
    ///
    /// let mut command_line = CommandLine::new("program").unwrap();
    /// command_line.define("file, !name").unwrap();
    ///
    /// // Variable names are unique across every definition.
    /// let error = command_line.define("load, !name").unwrap_err();
    /// assert!(matches!(error, CmdLineError::Duplicate(_)));
    /// ```
    pub fn define(&mut self, definition: &str) -> Result<&mut Self, CmdLineError> {
        validate_text("definition", definition)?;
        let clauses = split_definition(definition);
        self.define_clauses(&clauses)
    }

    /// Define a command from its pre-split clauses.
    ///
    /// Nothing from a rejected definition is retained.
    pub fn define_clauses(&mut self, clauses: &[&str]) -> Result<&mut Self, CmdLineError> {
        validate_count("definition clauses", clauses.len())?;
        self.registry.define(clauses)?;
        Ok(self)
    }

    /// Get the definition registered under `name` (any of its aliases).
    pub fn definition(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Iterate the definitions, in the order they were defined.
    pub fn definitions(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.registry.definitions()
    }

    /// Forget every definition.
    /// The application name, version, and property sink are retained.
    pub fn clear(&mut self) -> &mut Self {
        self.registry.clear();
        self
    }

    /// Parse the arguments into their matched commands.
    ///
    /// Each argument is first split on `=` and `,` (so `k=v1,v2` and `k = v1 , v2` are equivalent).
    /// Commands are then consumed left to right, with each command taking its values in definition order.
    /// Lists take every value up to the next defined command name.
    ///
    /// A `-D<key>=<value>` token is accepted anywhere a command name or list value is expected.
    /// It sets the system property, and is itself returned as a command named after the token.
    pub fn parse(&mut self, args: &[&str]) -> Result<Vec<Command>, CmdLineError> {
        self.parse_with(args, &mut |_: &Command| {})
    }

    /// Parse the arguments, as per [`CommandLine::parse`], handing each command to the `listener` as soon as it is matched.
    ///
    /// ### Example
    /// ```
    /// # use defcmd_builder as defcmd;
    /// use defcmd::{Command, CommandLine};
    ///
    /// let mut command_line = CommandLine::new("program").unwrap();
    /// command_line.define("a").unwrap().define("b").unwrap();
    ///
    /// let mut names = Vec::default();
    /// command_line
    ///     .parse_with(&["b", "a"], &mut |command: &Command| {
    ///         names.push(command.name().to_string())
    ///     })
    ///     .unwrap();
    /// assert_eq!(names, vec!["b", "a"]);
    /// ```
    pub fn parse_with(
        &mut self,
        args: &[&str],
        listener: &mut impl CommandListener,
    ) -> Result<Vec<Command>, CmdLineError> {
        validate_count("arguments", args.len())?;
        let tokens = tokenize(args);
        let commands =
            TokenMatcher::new(&self.registry, tokens).run(self.properties.as_mut(), listener)?;
        Ok(commands)
    }

    /// Parse the arguments, as per [`CommandLine::parse`].
    ///
    /// If the parse fails, the error (and any suggestions) is printed to stderr and the result is `Err(1)`.
    ///
    /// ### Example
    /// ```
    /// # use defcmd_builder as defcmd;
    /// use defcmd::CommandLine;
    ///
    /// let mut command_line = CommandLine::new("program").unwrap();
    /// command_line.define("help").unwrap();
    ///
    /// assert_eq!(command_line.parse_tokens(&["help"]).unwrap().len(), 1);
    /// // Prints "Did you mean: help?".
    /// assert_eq!(command_line.parse_tokens(&["hepl"]).unwrap_err(), 1);
    /// ```
    pub fn parse_tokens(&mut self, args: &[&str]) -> Result<Vec<Command>, i32> {
        self.parse_tokens_with(args, &mut |_: &Command| {})
    }

    /// Parse the arguments, as per [`CommandLine::parse_with`], reporting any failure as per [`CommandLine::parse_tokens`].
    ///
    /// ### Example
    /// ```
    /// # use defcmd_builder as defcmd;
    /// use defcmd::{Command, CommandLine};
    ///
    /// let mut command_line = CommandLine::new("program").unwrap();
    /// command_line.define("install, !package").unwrap();
    ///
    /// let mut seen = 0;
    /// let mut count = |_: &Command| seen += 1;
    /// assert!(command_line.parse_tokens_with(&["install", "a"], &mut count).is_ok());
    /// // Prints "Did you mean: install?".
    /// assert_eq!(command_line.parse_tokens_with(&["instal", "b"], &mut count).unwrap_err(), 1);
    /// assert_eq!(seen, 1);
    /// ```
    pub fn parse_tokens_with(
        &mut self,
        args: &[&str],
        listener: &mut impl CommandListener,
    ) -> Result<Vec<Command>, i32> {
        self.parse_reporting(args, listener, &ConsoleInterface::default())
    }

    pub(crate) fn parse_reporting(
        &mut self,
        args: &[&str],
        listener: &mut impl CommandListener,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Vec<Command>, i32> {
        self.parse_with(args, listener).map_err(|error| {
            report(&error, user_interface);
            1
        })
    }

    /// Parse the Cli [`env::args`], as per [`CommandLine::parse_tokens`].
    ///
    /// No arguments at all results in no commands.
    /// If the parse fails, the process exits with error code `1` (via `std::process::exit`).
    pub fn parse_env(&mut self) -> Vec<Command> {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if command_input.is_empty() {
            return Vec::default();
        }

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(commands) => commands,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

fn validate_text(subject: &str, text: &str) -> Result<(), CmdLineError> {
    if text.trim().is_empty() {
        return Err(CmdLineError::Validation(format!(
            "The {subject} cannot be empty."
        )));
    }

    if text.chars().count() > MAX_LENGTH {
        return Err(CmdLineError::Validation(format!(
            "The {subject} cannot exceed {MAX_LENGTH} characters."
        )));
    }

    Ok(())
}

fn validate_count(subject: &str, count: usize) -> Result<(), CmdLineError> {
    if count == 0 {
        return Err(CmdLineError::Validation(format!(
            "The {subject} cannot be empty."
        )));
    }

    if count > MAX_LENGTH {
        return Err(CmdLineError::Validation(format!(
            "The {subject} cannot exceed {MAX_LENGTH} entries (found {count})."
        )));
    }

    Ok(())
}
