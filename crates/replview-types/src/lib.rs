pub mod diagnostic;
pub mod error;
pub mod object;
pub mod value;

pub use diagnostic::{Diagnostic, DiagnosticHandler, DiagnosticKind, Disposition, HandlerScope};
pub use error::{Fault, Result};
pub use object::{Instance, Object, ObjectId, ObjectRef, PropertyDecl, Visibility};
pub use value::Value;
