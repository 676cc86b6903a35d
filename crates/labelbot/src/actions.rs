//! GitHub Actions workflow commands.

use std::fmt::Display;

/// Workflow command, printed on standard output and interpreted by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WorkflowCommand {
    Notice,
    Warning,
    Error,
}

impl WorkflowCommand {
    fn name(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Build the command line for a message.
    pub fn format<T: Display>(self, message: T) -> String {
        format!("::{}::{}", self.name(), escape_data(&message.to_string()))
    }
}

/// Messages must fit on a single line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
