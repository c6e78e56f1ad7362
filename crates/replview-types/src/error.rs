use std::fmt;

use crate::diagnostic::Diagnostic;

/// Result type for reads against the runtime value model
pub type Result<T> = std::result::Result<T, Fault>;

/// Failure raised while reading a runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// A diagnostic that no installed handler accepted
    Diagnostic(Diagnostic),

    /// An exception thrown by user code (e.g. a property getter)
    Thrown { class: String, message: String },
}

impl Fault {
    pub fn thrown(class: impl Into<String>, message: impl Into<String>) -> Self {
        Fault::Thrown {
            class: class.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Diagnostic(diagnostic) => write!(f, "{}", diagnostic),
            Fault::Thrown { class, message } => write!(f, "{}: {}", class, message),
        }
    }
}

impl std::error::Error for Fault {}

impl From<Diagnostic> for Fault {
    fn from(diagnostic: Diagnostic) -> Self {
        Fault::Diagnostic(diagnostic)
    }
}
