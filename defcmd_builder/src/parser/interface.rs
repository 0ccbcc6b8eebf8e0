use crate::parser::base::CmdLineError;

/// The follow-up line printed after an error, listing the suggested command names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    suggestions: Vec<String>,
}

impl ErrorContext {
    /// Returns `None` when there is nothing to suggest.
    pub(crate) fn new(error: &CmdLineError) -> Option<Self> {
        let suggestions = error.suggestions();

        if suggestions.is_empty() {
            None
        } else {
            Some(Self {
                suggestions: suggestions.to_vec(),
            })
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Did you mean: {}?", self.suggestions.join(", "))
    }
}

pub(crate) trait UserInterface {
    fn print_error(&self, error: &CmdLineError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: &CmdLineError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

/// Print the error, followed by its suggestions (if any).
pub(crate) fn report(error: &CmdLineError, user_interface: &(impl UserInterface + ?Sized)) {
    user_interface.print_error(error);

    if let Some(error_context) = ErrorContext::new(error) {
        user_interface.print_error_context(error_context);
    }
}
