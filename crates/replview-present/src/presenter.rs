use replview_types::Value;

use crate::error::Result;
use crate::mode::{Depth, Mode};

/// A presenter for one family of value shapes.
pub trait Presenter {
    /// Stable name, used by the registry to replace presenters.
    fn name(&self) -> &'static str;

    /// Must be cheap and side-effect free; the registry probes every
    /// presenter in turn.
    fn can_present(&self, value: &Value) -> bool;

    /// One-line reference form.
    fn present_ref(&self, value: &Value, mode: Mode) -> Result<String>;

    /// Full form. Nested values go back through `nested` with a reduced
    /// depth so that sibling presenters handle them.
    fn present(&self, value: &Value, depth: Depth, mode: Mode, nested: &dyn Present)
    -> Result<String>;
}

/// Presents any value by delegating to whichever presenter accepts it.
pub trait Present {
    fn can_present(&self, value: &Value) -> bool;

    fn present_ref(&self, value: &Value, mode: Mode) -> Result<String>;

    fn present(&self, value: &Value, depth: Depth, mode: Mode) -> Result<String>;
}
