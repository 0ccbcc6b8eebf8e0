use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TokenKind {
    Command,
    Description,
    RequiredValue,
    OptionalValue,
    RegexValue,
    RequiredListValue,
    OptionalListValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.kind
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }
}

/// Split a single definition string into its clauses.
/// Whitespace surrounding each comma is dropped, as are empty clauses.
pub(crate) fn split_definition(definition: &str) -> Vec<&str> {
    definition
        .split(DEFINITION_DELIMITER)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}

/// Classify each clause by its leading sigil.
pub(crate) fn tokenize_clauses(clauses: &[&str]) -> Vec<Token> {
    let tokens: Vec<Token> = clauses
        .iter()
        .map(|clause| clause.trim())
        .filter(|clause| !clause.is_empty())
        .map(classify)
        .collect();

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Definition clauses {clauses:?} classified as {tokens:?}.");
    }

    tokens
}

fn classify(clause: &str) -> Token {
    if let Some(description) = clause.strip_prefix(DESCRIPTION_SIGIL) {
        Token::new(TokenKind::Description, description)
    } else if let Some(regex) = clause.strip_prefix(REGEX_SIGIL) {
        Token::new(TokenKind::RegexValue, regex)
    } else if let Some(variable) = clause.strip_prefix(REQUIRED_SIGIL) {
        match variable.strip_suffix(LIST_SUFFIX) {
            Some(list) => Token::new(TokenKind::RequiredListValue, list),
            None => Token::new(TokenKind::RequiredValue, variable),
        }
    } else if let Some(variable) = clause.strip_prefix(OPTIONAL_SIGIL) {
        match variable.strip_suffix(LIST_SUFFIX) {
            Some(list) => Token::new(TokenKind::OptionalListValue, list),
            None => Token::new(TokenKind::OptionalValue, variable),
        }
    } else {
        Token::new(TokenKind::Command, clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("file", TokenKind::Command, "file")]
    #[case("--file", TokenKind::Command, "--file")]
    #[case("...", TokenKind::Command, "...")]
    #[case("#Load files into the system", TokenKind::Description, "Load files into the system")]
    #[case(":file\\d.txt", TokenKind::RegexValue, "file\\d.txt")]
    #[case("!name", TokenKind::RequiredValue, "name")]
    #[case("!names...", TokenKind::RequiredListValue, "names")]
    #[case("!names..", TokenKind::RequiredValue, "names..")]
    #[case("?name", TokenKind::OptionalValue, "name")]
    #[case("?names...", TokenKind::OptionalListValue, "names")]
    #[case("!...", TokenKind::RequiredListValue, "")]
    #[case("#", TokenKind::Description, "")]
    fn classify_clause(#[case] clause: &str, #[case] kind: TokenKind, #[case] value: &str) {
        assert_eq!(classify(clause), Token::new(kind, value));
    }

    #[rstest]
    #[case("file", vec!["file"])]
    #[case("file, !name, #desc", vec!["file", "!name", "#desc"])]
    #[case("file ,!name,   #Load a file  ", vec!["file", "!name", "#Load a file"])]
    #[case("file,,!name,", vec!["file", "!name"])]
    #[case(" , ", vec![])]
    fn split(#[case] definition: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_definition(definition), expected);
    }

    #[test]
    fn tokenize_ordered() {
        let tokens = tokenize_clauses(&["-f", " --file ", "", "!fileNames...", ":file\\d.txt"]);
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Command, "-f"),
                Token::new(TokenKind::Command, "--file"),
                Token::new(TokenKind::RequiredListValue, "fileNames"),
                Token::new(TokenKind::RegexValue, "file\\d.txt"),
            ]
        );
        assert_eq!(tokens[2].kind(), TokenKind::RequiredListValue);
        assert_eq!(tokens[2].value(), "fileNames");
    }
}
