use std::fmt;

use replview_types::Fault;

/// Result type for presentation calls
pub type Result<T> = std::result::Result<T, PresentError>;

/// Error types that can occur while presenting a value
#[derive(Debug, Clone, PartialEq)]
pub enum PresentError {
    /// Reading part of the value failed (getter threw, diagnostic escalated)
    Fault(Fault),

    /// A presenter was handed a value it cannot present
    Unsupported {
        presenter: &'static str,
        value_type: String,
    },

    /// No registered presenter accepts the value
    NoPresenter { value_type: String },
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::Fault(fault) => write!(f, "{}", fault),
            PresentError::Unsupported {
                presenter,
                value_type,
            } => write!(f, "{} presenter cannot present {}", presenter, value_type),
            PresentError::NoPresenter { value_type } => {
                write!(f, "Unable to present {}", value_type)
            }
        }
    }
}

impl std::error::Error for PresentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresentError::Fault(fault) => Some(fault),
            PresentError::Unsupported { .. } | PresentError::NoPresenter { .. } => None,
        }
    }
}

impl From<Fault> for PresentError {
    fn from(fault: Fault) -> Self {
        PresentError::Fault(fault)
    }
}
