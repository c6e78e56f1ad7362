use replview_types::Value;

use crate::error::{PresentError, Result};
use crate::markup::{self, Tag};
use crate::mode::{Depth, Mode};
use crate::presenter::{Present, Presenter};

/// Presents null, booleans, numbers and strings. Scalars have no contents,
/// so the full form and the reference form are the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarPresenter;

impl ScalarPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ScalarPresenter {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn can_present(&self, value: &Value) -> bool {
        value.is_scalar()
    }

    fn present_ref(&self, value: &Value, mode: Mode) -> Result<String> {
        let (text, tag) = match value {
            Value::Null => ("null".to_string(), Tag::Const),
            Value::Bool(b) => (b.to_string(), Tag::Bool),
            Value::Int(n) => (n.to_string(), Tag::Number),
            Value::Float(n) => (format_float(*n), Tag::Number),
            Value::Str(s) => (quote(s), Tag::String),
            other => {
                return Err(PresentError::Unsupported {
                    presenter: self.name(),
                    value_type: other.type_name().to_string(),
                });
            }
        };

        Ok(match mode {
            Mode::Plain => text,
            Mode::Color => markup::wrap(tag, &markup::escape(&text)),
        })
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

/// Floats always show a fractional part so they read differently from ints.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NAN".to_string()
    } else if n.is_infinite() {
        (if n > 0.0 { "INF" } else { "-INF" }).to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.1}", n)
    } else if n.fract() == 0.0 {
        // 1e20 -> 1.0e20
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !mantissa.contains('.') => {
                format!("{}.0e{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(value: Value) -> String {
        ScalarPresenter::new().present_ref(&value, Mode::Plain).unwrap()
    }

    fn color(value: Value) -> String {
        ScalarPresenter::new().present_ref(&value, Mode::Color).unwrap()
    }

    #[test]
    fn test_plain_scalars() {
        assert_eq!(plain(Value::Null), "null");
        assert_eq!(plain(Value::from(false)), "false");
        assert_eq!(plain(Value::from(-12)), "-12");
        assert_eq!(plain(Value::from("x")), "\"x\"");
        assert_eq!(plain(Value::from("say \"hi\"\n")), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_floats() {
        assert_eq!(plain(Value::from(2.0)), "2.0");
        assert_eq!(plain(Value::from(0.25)), "0.25");
        assert_eq!(plain(Value::from(f64::NAN)), "NAN");
        assert_eq!(plain(Value::from(f64::NEG_INFINITY)), "-INF");
    }

    #[test]
    fn test_large_whole_floats_keep_float_form() {
        assert_eq!(plain(Value::from(1e20)), "1.0e20");
        assert_eq!(plain(Value::from(-1e16)), "-1.0e16");
        assert_eq!(plain(Value::from(1e15)), "1.0e15");
        assert_eq!(plain(Value::from(1.5e300)), "1.5e300");
        assert_eq!(plain(Value::from(999_999_999_999_999.0)), "999999999999999.0");
    }

    #[test]
    fn test_color_tags() {
        assert_eq!(color(Value::Null), "<const>null</const>");
        assert_eq!(color(Value::from(true)), "<bool>true</bool>");
        assert_eq!(color(Value::from(7)), "<number>7</number>");
        assert_eq!(color(Value::from("a<b")), "<string>\"a\\<b\"</string>");
    }

    #[test]
    fn test_rejects_arrays() {
        let err = ScalarPresenter::new()
            .present_ref(&Value::Array(Vec::new()), Mode::Plain)
            .unwrap_err();
        assert!(matches!(err, PresentError::Unsupported { presenter: "scalar", .. }));
    }
}
