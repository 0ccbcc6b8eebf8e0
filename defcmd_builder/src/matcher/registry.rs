use std::collections::{HashMap, HashSet};

use crate::definition::*;
use crate::model::CommandDefinition;
use crate::suggest::SuggestionIndex;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The compiled definitions of a session, addressable by any of their names.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    definitions: Vec<CommandDefinition>,
    names: HashMap<String, usize>,
    variables: HashSet<String>,
    suggestions: SuggestionIndex,
}

impl Registry {
    /// Compile and register the definition clauses.
    ///
    /// Nothing is registered unless the whole definition is accepted.
    pub(crate) fn define(&mut self, clauses: &[&str]) -> Result<&CommandDefinition, CompileError> {
        let tokens = tokenize_clauses(clauses);
        let definition = compile(&tokens, &self.variables)?;

        for name in definition.names() {
            if self.names.contains_key(name) {
                return Err(CompileError::DuplicateCommand(name.clone()));
            }
        }

        let index = self.definitions.len();

        for name in definition.names() {
            self.names.insert(name.clone(), index);
            self.suggestions.add(name.clone());
        }

        self.variables
            .extend(definition.variables().map(str::to_string));

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registered definition #{index} under the names {:?}.",
                definition.names()
            );
        }

        self.definitions.push(definition);
        Ok(&self.definitions[index])
    }

    pub(crate) fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.names.get(name).map(|index| &self.definitions[*index])
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub(crate) fn definitions(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    pub(crate) fn suggest(&self, token: &str) -> Vec<String> {
        self.suggestions.suggest(token)
    }

    pub(crate) fn clear(&mut self) {
        self.definitions.clear();
        self.names.clear();
        self.variables.clear();
        self.suggestions.clear();
    }
}
