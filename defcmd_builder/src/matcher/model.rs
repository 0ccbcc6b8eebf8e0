use thiserror::Error;

/// How a declared variable consumes values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum VariableKind {
    Required,
    Optional,
    RequiredList,
    OptionalList,
}

impl VariableKind {
    pub(crate) fn is_list(&self) -> bool {
        matches!(self, VariableKind::RequiredList | VariableKind::OptionalList)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Bound {
    Range(u8, u8),
    Lower(u8),
}

impl From<VariableKind> for Bound {
    fn from(value: VariableKind) -> Self {
        match value {
            VariableKind::Required => Bound::Range(1, 1),
            VariableKind::Optional => Bound::Range(0, 1),
            VariableKind::RequiredList => Bound::Lower(1),
            VariableKind::OptionalList => Bound::Lower(0),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct MatchTokens {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CloseError {
    #[error("The value for the required variable '{name}' is missing (provided={provided}, expected={expected}).")]
    TooFewValues {
        name: String,
        provided: usize,
        expected: u8,
    },
}

/// Accumulates the values for a single variable, as bounded by its kind.
#[derive(Debug)]
pub(crate) struct ValueBuffer {
    name: String,
    bound: Bound,
    values: Vec<String>,
}

impl ValueBuffer {
    pub(crate) fn new(name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            name: name.into(),
            bound: Bound::from(kind),
            values: Vec::default(),
        }
    }

    pub(crate) fn push(&mut self, value: String) {
        self.values.push(value);
    }

    pub(crate) fn is_open(&self) -> bool {
        match self.bound {
            Bound::Range(_, n) => self.values.len() < n as usize,
            Bound::Lower(_) => true,
        }
    }

    pub(crate) fn can_close(&self) -> bool {
        let n = match self.bound {
            Bound::Range(n, _) => n,
            Bound::Lower(n) => n,
        };
        self.values.len() >= n as usize
    }

    pub(crate) fn close(self) -> Result<MatchTokens, CloseError> {
        if !self.can_close() {
            let expected = match self.bound {
                Bound::Range(n, _) => n,
                Bound::Lower(n) => n,
            };

            return Err(CloseError::TooFewValues {
                name: self.name,
                provided: self.values.len(),
                expected,
            });
        }

        Ok(MatchTokens {
            name: self.name,
            values: self.values,
        })
    }
}
