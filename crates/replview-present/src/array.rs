use replview_types::Value;

use crate::error::{PresentError, Result};
use crate::markup::{self, Tag};
use crate::mode::{Depth, Mode};
use crate::presenter::{Present, Presenter};
use crate::recursive::{self, Delimiters, Entry};

/// Presents arrays. The reference form is a size summary (`Array(3)`), the
/// full form lists every element one level deeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayPresenter;

impl ArrayPresenter {
    pub fn new() -> Self {
        Self
    }

    fn expect_array<'v>(&self, value: &'v Value) -> Result<&'v [Value]> {
        value.as_array().ok_or_else(|| PresentError::Unsupported {
            presenter: self.name(),
            value_type: value.type_name().to_string(),
        })
    }
}

impl Presenter for ArrayPresenter {
    fn name(&self) -> &'static str {
        "array"
    }

    fn can_present(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    fn present_ref(&self, value: &Value, mode: Mode) -> Result<String> {
        let items = self.expect_array(value)?;
        if items.is_empty() {
            return Ok("[]".to_string());
        }

        let count = items.len().to_string();
        Ok(match mode {
            Mode::Plain => format!("Array({})", count),
            Mode::Color => format!("Array({})", markup::wrap(Tag::Number, &count)),
        })
    }

    fn present(
        &self,
        value: &Value,
        depth: Depth,
        mode: Mode,
        nested: &dyn Present,
    ) -> Result<String> {
        let items = self.expect_array(value)?;
        if items.is_empty() || depth.is_exhausted() {
            return self.present_ref(value, mode);
        }

        let entries: Vec<Entry> = items.iter().cloned().map(Entry::positional).collect();
        recursive::format_block(&entries, Delimiters::Brackets, depth, mode, nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PresenterRegistry;

    fn present(value: &Value, depth: Depth, mode: Mode) -> String {
        let registry = PresenterRegistry::with_defaults();
        ArrayPresenter::new()
            .present(value, depth, mode, &registry)
            .unwrap()
    }

    #[test]
    fn test_references() {
        let presenter = ArrayPresenter::new();
        let empty = Value::Array(Vec::new());
        let three = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);

        assert_eq!(presenter.present_ref(&empty, Mode::Plain).unwrap(), "[]");
        assert_eq!(presenter.present_ref(&three, Mode::Plain).unwrap(), "Array(3)");
        assert_eq!(
            presenter.present_ref(&three, Mode::Color).unwrap(),
            "Array(<number>3</number>)"
        );
    }

    #[test]
    fn test_full_form() {
        let value = Value::from(vec![Value::from(1), Value::from("two")]);
        assert_eq!(
            present(&value, Depth::Unbounded, Mode::Plain),
            "[\n    1,\n    \"two\"\n]"
        );
    }

    #[test]
    fn test_nested_arrays_collapse_at_depth() {
        let inner = Value::from(vec![Value::from(1), Value::from(2)]);
        let outer = Value::from(vec![inner]);

        assert_eq!(
            present(&outer, Depth::Limited(1), Mode::Plain),
            "[\n    Array(2)\n]"
        );
        assert_eq!(
            present(&outer, Depth::Limited(2), Mode::Plain),
            "[\n    [\n        1,\n        2\n    ]\n]"
        );
    }

    #[test]
    fn test_empty_array_ignores_depth() {
        let empty = Value::Array(Vec::new());
        assert_eq!(present(&empty, Depth::Unbounded, Mode::Plain), "[]");
        assert_eq!(present(&empty, Depth::Limited(0), Mode::Plain), "[]");
    }
}
