use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

use crate::definition::token::*;
use crate::model::CommandDefinition;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CompileError {
    #[error("The command name was not defined and is missing.")]
    MissingName,

    #[error("The command name '{0}' is repeated within the same definition.")]
    DuplicateName(String),

    #[error("The command '{0}' has already been defined.  Define a new command name.")]
    DuplicateCommand(String),

    #[error("The description '{0}' cannot follow an existing description.")]
    DuplicateDescription(String),

    #[error("The regex '{0}' cannot follow an existing regex.")]
    DuplicateRegex(String),

    #[error("The variable '{0}' has already been defined.  Define a new variable name.")]
    DuplicateVariable(String),

    #[error("The {0} '{1}' contains whitespace, which is not supported.  The definition may need a comma.")]
    ContainsWhitespace(&'static str, String),

    #[error("The {0} cannot be empty.")]
    Empty(&'static str),

    #[error("The required variable '{0}' must be defined before every optional variable.")]
    RequiredAfterOptional(String),

    #[error("The list variable '{0}' cannot follow an existing list.  A command can only define one list.")]
    MultipleLists(String),

    #[error("The regex '{0}' is invalid: {1}.")]
    InvalidRegex(String, String),
}

/// Fold the definition tokens into a single `CommandDefinition`.
///
/// Grammar rules are applied strictly in token order; the first violation aborts.
/// `known_variables` holds the variable names of every previously compiled definition.
pub(crate) fn compile(
    tokens: &[Token],
    known_variables: &HashSet<String>,
) -> Result<CommandDefinition, CompileError> {
    let mut definition = CommandDefinition::default();
    let mut variables: HashSet<&str> = HashSet::default();
    let mut list_defined = false;
    let mut optional_defined = false;

    for token in tokens {
        let value = token.value();

        match token.kind() {
            TokenKind::Command => {
                if value.chars().any(char::is_whitespace) {
                    return Err(CompileError::ContainsWhitespace(
                        "command name",
                        value.to_string(),
                    ));
                }

                if definition.names().iter().any(|name| name == value) {
                    return Err(CompileError::DuplicateName(value.to_string()));
                }

                definition.add_name(value);
            }
            TokenKind::Description => {
                if definition.description().is_some() {
                    return Err(CompileError::DuplicateDescription(value.to_string()));
                }

                // An empty description leaves the slot open.
                if !value.is_empty() {
                    definition.set_description(value);
                }
            }
            TokenKind::RegexValue => {
                if definition.regex().is_some() {
                    return Err(CompileError::DuplicateRegex(value.to_string()));
                }

                // An empty regex leaves the slot open.
                if value.is_empty() {
                    continue;
                }

                // Values must match the pattern in full.
                let regex = Regex::new(&format!("^(?:{value})$")).map_err(|error| {
                    CompileError::InvalidRegex(value.to_string(), error.to_string())
                })?;
                definition.set_regex(value, regex);
            }
            TokenKind::RequiredValue => {
                if optional_defined {
                    return Err(CompileError::RequiredAfterOptional(value.to_string()));
                }

                check_variable(value, known_variables, &mut variables)?;
                definition.add_required_variable(value);
            }
            TokenKind::RequiredListValue => {
                if optional_defined {
                    return Err(CompileError::RequiredAfterOptional(value.to_string()));
                }

                if list_defined {
                    return Err(CompileError::MultipleLists(value.to_string()));
                }

                check_variable(value, known_variables, &mut variables)?;
                list_defined = true;
                definition.set_required_list(value);
            }
            TokenKind::OptionalValue => {
                check_variable(value, known_variables, &mut variables)?;
                optional_defined = true;
                definition.add_optional_variable(value);
            }
            TokenKind::OptionalListValue => {
                if list_defined {
                    return Err(CompileError::MultipleLists(value.to_string()));
                }

                check_variable(value, known_variables, &mut variables)?;
                list_defined = true;
                optional_defined = true;
                definition.set_optional_list(value);
            }
        }
    }

    if definition.names().is_empty() {
        return Err(CompileError::MissingName);
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Compiled definition: {definition:?}.");
    }

    Ok(definition)
}

fn check_variable<'t>(
    name: &'t str,
    known_variables: &HashSet<String>,
    variables: &mut HashSet<&'t str>,
) -> Result<(), CompileError> {
    if name.is_empty() {
        return Err(CompileError::Empty("variable name"));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(CompileError::ContainsWhitespace(
            "variable name",
            name.to_string(),
        ));
    }

    if known_variables.contains(name) || !variables.insert(name) {
        return Err(CompileError::DuplicateVariable(name.to_string()));
    }

    Ok(())
}
