use replview_types::{ObjectRef, Value};

use crate::error::{PresentError, Result};
use crate::identity;
use crate::mode::{Depth, Mode};
use crate::presenter::{Present, Presenter};
use crate::properties;
use crate::recursive::{self, Entry, Recursive};

/// Presents object instances as their identity plus public properties.
///
/// ```text
/// <Foo #12> {
///     a: 1,
///     b: "x"
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectPresenter;

impl ObjectPresenter {
    pub fn new() -> Self {
        Self
    }

    fn expect_object<'v>(&self, value: &'v Value) -> Result<&'v ObjectRef> {
        value.as_object().ok_or_else(|| PresentError::Unsupported {
            presenter: self.name(),
            value_type: value.type_name().to_string(),
        })
    }
}

impl Recursive for ObjectPresenter {
    fn reference(&self, value: &Value, mode: Mode) -> Result<String> {
        let object = self.expect_object(value)?;
        Ok(identity::present_object_ref(object, mode))
    }

    fn entries(&self, value: &Value) -> Result<Vec<Entry>> {
        let object = self.expect_object(value)?;
        let props = properties::extract_properties(object)?;
        Ok(props
            .into_iter()
            .map(|(name, value)| Entry::named(name, value))
            .collect())
    }
}

impl Presenter for ObjectPresenter {
    fn name(&self) -> &'static str {
        "object"
    }

    fn can_present(&self, value: &Value) -> bool {
        value.is_object()
    }

    fn present_ref(&self, value: &Value, mode: Mode) -> Result<String> {
        self.reference(value, mode)
    }

    fn present(
        &self,
        value: &Value,
        depth: Depth,
        mode: Mode,
        nested: &dyn Present,
    ) -> Result<String> {
        recursive::present_value(self, value, depth, mode, nested)
    }
}
