use replview_types::Value;

use crate::array::ArrayPresenter;
use crate::error::{PresentError, Result};
use crate::mode::{Depth, Mode};
use crate::object::ObjectPresenter;
use crate::presenter::{Present, Presenter};
use crate::scalar::ScalarPresenter;

/// Ordered set of presenters. The first presenter that accepts a value
/// handles it; presenters added later take priority.
#[derive(Default)]
pub struct PresenterRegistry {
    presenters: Vec<Box<dyn Presenter>>,
}

impl PresenterRegistry {
    /// Empty registry; nothing can be presented until presenters are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in object, array and scalar presenters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add(ObjectPresenter::new());
        registry.add(ArrayPresenter::new());
        registry.add(ScalarPresenter::new());
        registry
    }

    /// Register `presenter` with the highest priority, replacing any
    /// presenter registered under the same name.
    pub fn add(&mut self, presenter: impl Presenter + 'static) {
        self.remove(presenter.name());
        self.presenters.insert(0, Box::new(presenter));
    }

    /// Returns `true` if a presenter named `name` was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.presenters.len();
        self.presenters.retain(|presenter| presenter.name() != name);
        self.presenters.len() != before
    }

    /// Presenter names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.presenters.iter().map(|presenter| presenter.name()).collect()
    }

    pub fn resolve(&self, value: &Value) -> Option<&dyn Presenter> {
        self.presenters
            .iter()
            .find(|presenter| presenter.can_present(value))
            .map(|presenter| presenter.as_ref())
    }

    fn resolve_or_err(&self, value: &Value) -> Result<&dyn Presenter> {
        self.resolve(value).ok_or_else(|| PresentError::NoPresenter {
            value_type: value.type_name().to_string(),
        })
    }
}

impl Present for PresenterRegistry {
    fn can_present(&self, value: &Value) -> bool {
        self.resolve(value).is_some()
    }

    fn present_ref(&self, value: &Value, mode: Mode) -> Result<String> {
        self.resolve_or_err(value)?.present_ref(value, mode)
    }

    fn present(&self, value: &Value, depth: Depth, mode: Mode) -> Result<String> {
        let presenter = self.resolve_or_err(value)?;
        tracing::trace!(
            presenter = presenter.name(),
            value_type = value.type_name(),
            ?depth,
            "presenting value"
        );
        presenter.present(value, depth, mode, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replview_types::Instance;

    struct ShoutingScalars;

    impl Presenter for ShoutingScalars {
        fn name(&self) -> &'static str {
            "shouting"
        }

        fn can_present(&self, value: &Value) -> bool {
            matches!(value, Value::Str(_))
        }

        fn present_ref(&self, value: &Value, _mode: Mode) -> Result<String> {
            match value {
                Value::Str(s) => Ok(s.to_uppercase()),
                other => Err(PresentError::Unsupported {
                    presenter: self.name(),
                    value_type: other.type_name().to_string(),
                }),
            }
        }

        fn present(
            &self,
            value: &Value,
            _depth: Depth,
            mode: Mode,
            _nested: &dyn Present,
        ) -> Result<String> {
            self.present_ref(value, mode)
        }
    }

    #[test]
    fn test_defaults() {
        let registry = PresenterRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["scalar", "array", "object"]);
        assert!(registry.can_present(&Value::Null));
        assert!(registry.can_present(&Value::Array(Vec::new())));
        assert!(registry.can_present(&Value::from(Instance::new("Foo").into_ref())));
    }

    #[test]
    fn test_empty_registry_reports_missing_presenter() {
        let registry = PresenterRegistry::new();
        let err = registry
            .present(&Value::from(1), Depth::Unbounded, Mode::Plain)
            .unwrap_err();
        assert_eq!(
            err,
            PresentError::NoPresenter {
                value_type: "int".to_string()
            }
        );
    }

    #[test]
    fn test_later_presenters_take_priority() {
        let mut registry = PresenterRegistry::with_defaults();
        registry.add(ShoutingScalars);

        let out = registry
            .present(&Value::from("hi"), Depth::Unbounded, Mode::Plain)
            .unwrap();
        assert_eq!(out, "HI");
        assert_eq!(
            registry
                .present(&Value::from(1), Depth::Unbounded, Mode::Plain)
                .unwrap(),
            "1"
        );
    }

    #[test]
    fn test_nested_values_use_registry() {
        let mut registry = PresenterRegistry::with_defaults();
        registry.add(ShoutingScalars);

        let object = Instance::new("Greeting").with_property("text", "hello").into_ref();
        let out = registry
            .present(&Value::from(object.clone()), Depth::Unbounded, Mode::Plain)
            .unwrap();
        assert_eq!(out, format!("<Greeting #{}> {{\n    text: HELLO\n}}", object.id()));
    }

    #[test]
    fn test_add_replaces_same_name() {
        let mut registry = PresenterRegistry::with_defaults();
        registry.add(ObjectPresenter::new());
        assert_eq!(registry.names(), vec!["object", "scalar", "array"]);

        assert!(registry.remove("array"));
        assert!(!registry.remove("array"));
        assert!(!registry.can_present(&Value::Array(Vec::new())));
    }
}
