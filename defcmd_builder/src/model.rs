use regex::Regex;
use std::collections::HashMap;

/// A compiled command definition.
///
/// Produced by [`crate::CommandLine::define`]; every alias in [`CommandDefinition::names`] resolves to the same definition.
#[derive(Debug, Clone, Default)]
pub struct CommandDefinition {
    names: Vec<String>,
    description: Option<String>,
    regex: Option<(String, Regex)>,
    required_variables: Vec<String>,
    optional_variables: Vec<String>,
    required_list: Option<String>,
    optional_list: Option<String>,
}

impl CommandDefinition {
    pub(crate) fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description.replace(description.into());
    }

    pub(crate) fn set_regex(&mut self, source: impl Into<String>, regex: Regex) {
        self.regex.replace((source.into(), regex));
    }

    pub(crate) fn add_required_variable(&mut self, name: impl Into<String>) {
        self.required_variables.push(name.into());
    }

    pub(crate) fn add_optional_variable(&mut self, name: impl Into<String>) {
        self.optional_variables.push(name.into());
    }

    pub(crate) fn set_required_list(&mut self, name: impl Into<String>) {
        self.required_list.replace(name.into());
    }

    pub(crate) fn set_optional_list(&mut self, name: impl Into<String>) {
        self.optional_list.replace(name.into());
    }

    pub(crate) fn pattern(&self) -> Option<&Regex> {
        self.regex.as_ref().map(|(_, regex)| regex)
    }

    /// The command names (aliases), in definition order.
    /// The first name is the canonical one.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The `#` description, if defined.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The `:` regex source, if defined.
    /// Every value consumed for this command must match it in full.
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_ref().map(|(source, _)| source.as_str())
    }

    /// The `!` variables, in definition order.
    pub fn required_variables(&self) -> &[String] {
        &self.required_variables
    }

    /// The `?` variables, in definition order.
    pub fn optional_variables(&self) -> &[String] {
        &self.optional_variables
    }

    /// The `!...` list variable, if defined.
    pub fn required_list(&self) -> Option<&str> {
        self.required_list.as_deref()
    }

    /// The `?...` list variable, if defined.
    pub fn optional_list(&self) -> Option<&str> {
        self.optional_list.as_deref()
    }

    /// Every variable name declared by this definition.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.required_variables
            .iter()
            .map(String::as_str)
            .chain(self.required_list.as_deref())
            .chain(self.optional_variables.iter().map(String::as_str))
            .chain(self.optional_list.as_deref())
    }
}

/// A matched command, along with the values captured for its variables.
///
/// Each variable is multi-valued; values appear in the order they were consumed.
/// Variables which captured no values are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    variables: HashMap<String, Vec<String>>,
}

impl Command {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: HashMap::default(),
        }
    }

    pub(crate) fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// The command name, exactly as it was matched on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any variable captured a value.
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    /// All the values captured for the variable `name`.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.variables.get(name).map(Vec::as_slice)
    }

    /// The first value captured for the variable `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Iterate the captured variables (in no particular order).
    pub fn variables(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.variables
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.variables.keys().collect();
        names.sort();
        write!(f, "{}", self.name)?;

        if !names.is_empty() {
            let variables: Vec<String> = names
                .into_iter()
                .map(|name| format!("{name}=[{}]", self.variables[name].join(", ")))
                .collect();
            write!(f, " {{{}}}", variables.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn command_values() {
        let mut command = Command::new("file");
        assert!(!command.has_variables());
        assert_eq!(command.values("f"), None);
        assert_eq!(command.value("f"), None);

        command.add_variable("f", "1.txt");
        command.add_variable("f", "2.txt");

        assert!(command.has_variables());
        assert_eq!(
            command.values("f").unwrap(),
            &["1.txt".to_string(), "2.txt".to_string()]
        );
        assert_eq!(command.value("f"), Some("1.txt"));
        assert_eq!(command.variables().count(), 1);
    }

    #[rstest]
    #[case(vec![], "quit")]
    #[case(vec![("f", "1.txt")], "file {f=[1.txt]}")]
    #[case(vec![("f", "1.txt"), ("f", "2.txt")], "file {f=[1.txt, 2.txt]}")]
    #[case(vec![("z", "1"), ("a", "2")], "file {a=[2], z=[1]}")]
    fn command_display(#[case] variables: Vec<(&str, &str)>, #[case] expected: &str) {
        let mut command = Command::new(if variables.is_empty() { "quit" } else { "file" });

        for (name, value) in variables {
            command.add_variable(name, value);
        }

        assert_eq!(command.to_string(), expected);
    }

    #[test]
    fn definition_variables() {
        let mut definition = CommandDefinition::default();
        definition.add_name("file");
        definition.add_required_variable("a");
        definition.set_required_list("b");
        definition.add_optional_variable("c");
        assert_eq!(definition.names(), &["file".to_string()]);
        assert_eq!(definition.variables().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(definition.optional_list(), None);
        assert_eq!(definition.regex(), None);
        assert!(definition.pattern().is_none());
    }
}
