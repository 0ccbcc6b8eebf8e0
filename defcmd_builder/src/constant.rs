// Upper bound on definition string length, clause count, and argument count.
pub(crate) const MAX_LENGTH: usize = 256;

pub(crate) const DESCRIPTION_SIGIL: char = '#';
pub(crate) const REGEX_SIGIL: char = ':';
pub(crate) const REQUIRED_SIGIL: char = '!';
pub(crate) const OPTIONAL_SIGIL: char = '?';
pub(crate) const LIST_SUFFIX: &str = "...";

pub(crate) const DEFINITION_DELIMITER: char = ',';
pub(crate) const EQUALS_DELIMITER: char = '=';
pub(crate) const COMMA_DELIMITER: char = ',';

pub(crate) const SYSTEM_PROPERTY_MARKER: &str = "-D";

// A name is suggested when its edit distance is within 1/SUGGESTION_DIVISOR of the longer word.
pub(crate) const SUGGESTION_DIVISOR: usize = 2;
