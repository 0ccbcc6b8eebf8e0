use std::collections::VecDeque;
use thiserror::Error;

use crate::constant::SYSTEM_PROPERTY_MARKER;
use crate::matcher::model::*;
use crate::matcher::registry::Registry;
use crate::model::{Command, CommandDefinition};
use crate::prelude::{CommandListener, PropertySink};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("The value for the required variable '{0}' is missing.")]
    Undercomplete(String),

    #[error("The command name '{token}' is not defined.")]
    Unmatched {
        token: String,
        suggestions: Vec<String>,
    },

    #[error("The value '{value}' does not match the expected pattern '{pattern}'.")]
    InvalidValue { value: String, pattern: String },
}

impl From<CloseError> for MatchError {
    fn from(error: CloseError) -> Self {
        match error {
            CloseError::TooFewValues { name, .. } => MatchError::Undercomplete(name),
        }
    }
}

/// Consumes the argument tokens, front to back, against the registered definitions.
///
/// Each step consumes either a command (along with its values) or a `-D<key> <value>` property pair.
/// Commands are dispatched to the listener in consumption order.
pub(crate) struct TokenMatcher<'r> {
    registry: &'r Registry,
    tokens: VecDeque<String>,
    commands: Vec<Command>,
}

impl<'r> TokenMatcher<'r> {
    pub(crate) fn new(registry: &'r Registry, tokens: Vec<String>) -> Self {
        Self {
            registry,
            tokens: VecDeque::from(tokens),
            commands: Vec::default(),
        }
    }

    pub(crate) fn run(
        mut self,
        properties: &mut dyn PropertySink,
        listener: &mut dyn CommandListener,
    ) -> Result<Vec<Command>, MatchError> {
        let registry = self.registry;

        while let Some(token) = self.tokens.pop_front() {
            if let Some(definition) = registry.get(&token) {
                let command = self.consume(token, definition, properties, listener)?;
                self.dispatch(command, listener);
            } else if !self.system_property(&token, properties, listener) {
                return Err(MatchError::Unmatched {
                    suggestions: registry.suggest(&token),
                    token,
                });
            }
        }

        Ok(self.commands)
    }

    fn consume(
        &mut self,
        name: String,
        definition: &CommandDefinition,
        properties: &mut dyn PropertySink,
        listener: &mut dyn CommandListener,
    ) -> Result<Command, MatchError> {
        let mut command = Command::new(name);

        for variable in definition.required_variables() {
            let tokens = self.consume_scalar(definition, variable, VariableKind::Required)?;
            collect(&mut command, tokens);
        }

        if let Some(variable) = definition.required_list() {
            let tokens = self.consume_list(
                definition,
                variable,
                VariableKind::RequiredList,
                properties,
                listener,
            )?;
            collect(&mut command, tokens);
        }

        for variable in definition.optional_variables() {
            let tokens = self.consume_scalar(definition, variable, VariableKind::Optional)?;
            collect(&mut command, tokens);
        }

        if let Some(variable) = definition.optional_list() {
            let tokens = self.consume_list(
                definition,
                variable,
                VariableKind::OptionalList,
                properties,
                listener,
            )?;
            collect(&mut command, tokens);
        }

        Ok(command)
    }

    fn consume_scalar(
        &mut self,
        definition: &CommandDefinition,
        variable: &str,
        kind: VariableKind,
    ) -> Result<MatchTokens, MatchError> {
        let mut buffer = ValueBuffer::new(variable, kind);

        while buffer.is_open() {
            match self.tokens.pop_front() {
                Some(value) => {
                    validate(definition, &value)?;
                    buffer.push(value);
                }
                None => break,
            }
        }

        Ok(buffer.close()?)
    }

    // Lists are greedy up to (but excluding) the next registered command name.
    fn consume_list(
        &mut self,
        definition: &CommandDefinition,
        variable: &str,
        kind: VariableKind,
        properties: &mut dyn PropertySink,
        listener: &mut dyn CommandListener,
    ) -> Result<MatchTokens, MatchError> {
        debug_assert!(kind.is_list(), "internal error - scalar kind consumed as a list");
        let mut buffer = ValueBuffer::new(variable, kind);

        while let Some(next) = self.tokens.front() {
            if self.registry.contains(next) {
                break;
            }

            let Some(value) = self.tokens.pop_front() else {
                unreachable!("internal error - the front token must be present");
            };

            if self.system_property(&value, properties, listener) {
                continue;
            }

            validate(definition, &value)?;
            buffer.push(value);
        }

        Ok(buffer.close()?)
    }

    /// Attempt to consume `token` as the key of a `-D<key> <value>` pair.
    /// The value is the next token in line.
    fn system_property(
        &mut self,
        token: &str,
        properties: &mut dyn PropertySink,
        listener: &mut dyn CommandListener,
    ) -> bool {
        let key = match token.find(SYSTEM_PROPERTY_MARKER) {
            Some(index) => &token[index + SYSTEM_PROPERTY_MARKER.len()..],
            None => return false,
        };

        if key.is_empty() {
            return false;
        }

        let value = match self.tokens.pop_front() {
            Some(value) => value,
            None => return false,
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Setting system property: {key}={value}.");
        }

        properties.set(key, &value);
        let mut command = Command::new(token);
        command.add_variable(key, value);
        self.dispatch(command, listener);
        true
    }

    fn dispatch(&mut self, command: Command, listener: &mut dyn CommandListener) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched command: {command}.");
        }

        listener.handle(&command);
        self.commands.push(command);
    }
}

fn validate(definition: &CommandDefinition, value: &str) -> Result<(), MatchError> {
    match (definition.pattern(), definition.regex()) {
        (Some(pattern), Some(source)) if !pattern.is_match(value) => {
            Err(MatchError::InvalidValue {
                value: value.to_string(),
                pattern: source.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn collect(command: &mut Command, tokens: MatchTokens) {
    let MatchTokens { name, values } = tokens;

    for value in values {
        command.add_variable(name.as_str(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PropertyMap;
    use crate::tokenizer::tokenize;
    use rstest::rstest;

    fn registry(definitions: &[&[&str]]) -> Registry {
        let mut registry = Registry::default();

        for clauses in definitions {
            registry.define(clauses).unwrap();
        }

        registry
    }

    fn run(registry: &Registry, args: &[&str]) -> Result<Vec<Command>, MatchError> {
        let mut properties = PropertyMap::default();
        TokenMatcher::new(registry, tokenize(args)).run(&mut properties, &mut |_: &Command| {})
    }

    fn command(name: &str, variables: &[(&str, &[&str])]) -> Command {
        let mut command = Command::new(name);

        for (variable, values) in variables {
            for value in values.iter() {
                command.add_variable(*variable, *value);
            }
        }

        command
    }

    #[test]
    fn match_required_scalar() {
        let registry = registry(&[&["file", "!name", ":\\d+\\.txt", "#desc"]]);
        assert_eq!(
            run(&registry, &["file=1.txt"]).unwrap(),
            vec![command("file", &[("name", &["1.txt"])])]
        );
    }

    #[rstest]
    #[case(vec!["-f=file1.txt"], vec![("fileName1", vec!["file1.txt"])])]
    #[case(vec!["-f=file1.txt,file2.txt"], vec![("fileName1", vec!["file1.txt"]), ("fileName2", vec!["file2.txt"])])]
    #[case(vec!["--file", "=", "file1.txt", ",", "file2.txt", ",", "file3.txt"], vec![("fileName1", vec!["file1.txt"]), ("fileName2", vec!["file2.txt"]), ("fileName3", vec!["file3.txt"])])]
    fn match_optional_scalars(#[case] args: Vec<&str>, #[case] expected: Vec<(&str, Vec<&str>)>) {
        let registry = registry(&[&["-f", "--file", "!fileName1", "?fileName2", "?fileName3"]]);
        let commands = run(&registry, &args).unwrap();
        assert_eq!(commands.len(), 1);
        let expected_variables: Vec<(&str, &[&str])> = expected
            .iter()
            .map(|(name, values)| (*name, values.as_slice()))
            .collect();
        assert_eq!(
            commands[0],
            command(commands[0].name(), &expected_variables)
        );
    }

    #[test]
    fn match_missing_required() {
        let registry = registry(&[&["cmd", "!a", "!b"]]);
        assert_eq!(
            run(&registry, &["cmd", "v1"]).unwrap_err(),
            MatchError::Undercomplete("b".to_string())
        );
    }

    #[test]
    fn match_list_stops_at_command() {
        let registry = registry(&[&["file", "!f", "!fs..."], &["quit"]]);
        assert_eq!(
            run(&registry, &["file", "1.txt", "2.txt", "quit"]).unwrap(),
            vec![
                command("file", &[("f", &["1.txt"]), ("fs", &["2.txt"])]),
                command("quit", &[]),
            ]
        );
    }

    #[rstest]
    #[case(vec!["file", "a"])]
    #[case(vec!["file", "a", "quit"])]
    fn match_required_list_empty_window(#[case] args: Vec<&str>) {
        let registry = registry(&[&["file", "!f", "!fs..."], &["quit"]]);
        assert_eq!(
            run(&registry, &args).unwrap_err(),
            MatchError::Undercomplete("fs".to_string())
        );
    }

    #[rstest]
    #[case(vec!["list"], vec![])]
    #[case(vec!["list", "a"], vec!["a"])]
    #[case(vec!["list", "a", "b", "c"], vec!["a", "b", "c"])]
    fn match_optional_list(#[case] args: Vec<&str>, #[case] expected: Vec<&str>) {
        let registry = registry(&[&["list", "?items..."]]);
        let commands = run(&registry, &args).unwrap();
        assert_eq!(commands, vec![command("list", &[("items", expected.as_slice())])]);
        assert_eq!(commands[0].has_variables(), !expected.is_empty());
    }

    #[test]
    fn match_order_required_list_before_optional() {
        let registry = registry(&[&["cmd", "!a", "!b...", "?c"], &["quit"]]);
        // The optional scalar only sees the tokens after the list window.
        assert_eq!(
            run(&registry, &["cmd", "1", "2", "3"]).unwrap(),
            vec![command("cmd", &[("a", &["1"]), ("b", &["2", "3"])])]
        );
    }

    #[test]
    fn match_system_property() {
        let registry = registry(&[&["cmd"]]);
        let mut properties = PropertyMap::default();
        let commands = TokenMatcher::new(&registry, tokenize(&["-Dk=v", "cmd"]))
            .run(&mut properties, &mut |_: &Command| {})
            .unwrap();

        assert_eq!(
            commands,
            vec![command("-Dk", &[("k", &["v"])]), command("cmd", &[])]
        );
        assert_eq!(properties.get("k"), Some("v".to_string()));
    }

    #[test]
    fn match_system_property_consecutive() {
        let registry = Registry::default();
        let commands = run(
            &registry,
            &["-Da.debug=true", "-Da.screen=false", "-Da.gfx=1"],
        )
        .unwrap();

        assert_eq!(
            commands,
            vec![
                command("-Da.debug", &[("a.debug", &["true"])]),
                command("-Da.screen", &[("a.screen", &["false"])]),
                command("-Da.gfx", &[("a.gfx", &["1"])]),
            ]
        );
    }

    #[test]
    fn match_system_property_in_list() {
        let registry = registry(&[
            &["-f", "--file", "!fileNames...", ":file\\d.txt"],
            &["-l", "--list"],
        ]);
        let mut properties = PropertyMap::default();
        let mut order = Vec::default();
        let commands = TokenMatcher::new(
            &registry,
            tokenize(&["-f", "=", "file1.txt", "-Dcmd.debug=true", "file2.txt", "--list"]),
        )
        .run(&mut properties, &mut |command: &Command| {
            order.push(command.name().to_string())
        })
        .unwrap();

        // The property is diverted out of the list and dispatched as soon as it is consumed.
        assert_eq!(order, vec!["-Dcmd.debug", "-f", "--list"]);
        assert_eq!(
            commands,
            vec![
                command("-Dcmd.debug", &[("cmd.debug", &["true"])]),
                command("-f", &[("fileNames", &["file1.txt", "file2.txt"])]),
                command("--list", &[]),
            ]
        );
        assert_eq!(properties.get("cmd.debug"), Some("true".to_string()));
    }

    #[test]
    fn match_system_property_without_value() {
        let registry = registry(&[&["cmd"]]);
        assert_matches!(
            run(&registry, &["cmd", "-Dk"]).unwrap_err(),
            MatchError::Unmatched { token, .. } if token == "-Dk"
        );
    }

    #[test]
    fn match_system_property_empty_key() {
        let registry = registry(&[&["cmd"]]);
        assert_matches!(
            run(&registry, &["-D", "v"]).unwrap_err(),
            MatchError::Unmatched { token, .. } if token == "-D"
        );
    }

    #[test]
    fn match_unmatched_suggestions() {
        let registry = registry(&[
            &["file", "!file", "!files...", ":file\\d.txt"],
            &["help"],
            &["quit"],
            &["install", "!installOption"],
            &["info"],
        ]);

        assert_eq!(
            run(&registry, &["instolll"]).unwrap_err(),
            MatchError::Unmatched {
                token: "instolll".to_string(),
                suggestions: vec!["install".to_string()],
            }
        );
        assert_eq!(
            run(&registry, &["qwerty"]).unwrap_err(),
            MatchError::Unmatched {
                token: "qwerty".to_string(),
                suggestions: vec![],
            }
        );
    }

    #[rstest]
    #[case(vec!["file", "abc"], "abc")]
    #[case(vec!["file", "1.txt", "x.txt"], "x.txt")]
    fn match_invalid_value(#[case] args: Vec<&str>, #[case] value: &str) {
        let registry = registry(&[&["file", "!f", "?fs...", ":\\d+\\.txt"]]);
        assert_eq!(
            run(&registry, &args).unwrap_err(),
            MatchError::InvalidValue {
                value: value.to_string(),
                pattern: "\\d+\\.txt".to_string(),
            }
        );
    }

    #[test]
    fn match_listener_order() {
        let registry = registry(&[&["a", "!x"], &["b"]]);
        let mut properties = PropertyMap::default();
        let mut seen = Vec::default();
        let commands = TokenMatcher::new(&registry, tokenize(&["a", "1", "b", "a", "2"]))
            .run(&mut properties, &mut |command: &Command| {
                seen.push(command.clone())
            })
            .unwrap();

        assert_eq!(seen, commands);
        assert_eq!(
            commands
                .iter()
                .map(|c| c.name().to_string())
                .collect::<Vec<_>>(),
            vec!["a", "b", "a"]
        );
    }

    #[test]
    fn match_listener_fires_before_error() {
        let registry = registry(&[&["a"], &["b", "!x"]]);
        let mut properties = PropertyMap::default();
        let mut seen = Vec::default();
        let error = TokenMatcher::new(&registry, tokenize(&["a", "b"]))
            .run(&mut properties, &mut |command: &Command| {
                seen.push(command.name().to_string())
            })
            .unwrap_err();

        assert_eq!(error, MatchError::Undercomplete("x".to_string()));
        assert_eq!(seen, vec!["a"]);
    }

    #[test]
    fn match_many_tokens() {
        // Consumption is iterative, so long argument vectors do not grow the stack.
        let registry = registry(&[&["n", "!v"]]);
        let args: Vec<String> = (0..50_000).flat_map(|i| ["n".to_string(), i.to_string()]).collect();
        let mut properties = PropertyMap::default();
        let commands = TokenMatcher::new(&registry, args)
            .run(&mut properties, &mut |_: &Command| {})
            .unwrap();
        assert_eq!(commands.len(), 50_000);
        assert_eq!(commands[49_999].value("v"), Some("49999"));
    }
}
