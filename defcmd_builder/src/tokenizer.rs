use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Normalize the raw argument vector into atomic tokens.
///
/// Each argument is split on `=` first, then each piece on `,`.
/// Pieces are trimmed and empty pieces are dropped.
/// As a result, `-f=a,b` and the shell pre-split `-f = a , b` produce the same tokens.
pub(crate) fn tokenize<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut tokens = Vec::default();

    for arg in args {
        let arg = arg.as_ref();

        for piece in arg.split(EQUALS_DELIMITER) {
            for part in piece.split(COMMA_DELIMITER) {
                let part = part.trim();

                if !part.is_empty() {
                    tokens.push(part.to_string());
                }
            }
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized {} argument(s) into {tokens:?}.", args.len());
    }

    tokens
}
