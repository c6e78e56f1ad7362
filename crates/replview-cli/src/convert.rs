use replview_types::{Instance, Value};

/// Key naming the class of a JSON object; not shown as a property.
pub const CLASS_KEY: &str = "@class";

/// Build a runtime value from a JSON document.
///
/// Objects become instances with one public property per key, in document
/// order. Each object gets its id before its children, so ids follow
/// document order.
pub fn json_to_value(json: &serde_json::Value, default_class: &str) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| json_to_value(item, default_class))
                .collect(),
        ),
        serde_json::Value::Object(map) => {
            let class = map
                .get(CLASS_KEY)
                .and_then(|class| class.as_str())
                .unwrap_or(default_class);
            let instance = Instance::new(class);

            for (key, value) in map {
                if key == CLASS_KEY && value.is_string() {
                    continue;
                }
                instance.set(key, json_to_value(value, default_class));
            }

            Value::Object(instance.into_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(json_to_value(&json!(null), "stdClass"), Value::Null);
        assert_eq!(json_to_value(&json!(7), "stdClass"), Value::Int(7));
        assert_eq!(json_to_value(&json!(7.5), "stdClass"), Value::Float(7.5));
        assert_eq!(json_to_value(&json!("x"), "stdClass"), Value::from("x"));
    }

    #[test]
    fn test_object_keeps_key_order_and_class() {
        let value = json_to_value(&json!({"@class": "Foo", "z": 1, "a": 2}), "stdClass");
        let object = value.as_object().expect("object");

        assert_eq!(object.class_name(), "Foo");
        let names: Vec<String> = object.properties().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_default_class_and_non_string_class_key() {
        let value = json_to_value(&json!({"@class": 3}), "Record");
        let object = value.as_object().expect("object");

        assert_eq!(object.class_name(), "Record");
        assert_eq!(object.read_property(CLASS_KEY), Ok(Value::Int(3)));
    }

    #[test]
    fn test_ids_follow_document_order() {
        let value = json_to_value(&json!({"child": {}}), "stdClass");
        let parent = value.as_object().expect("object");

        match parent.read_property("child") {
            Ok(Value::Object(child)) => assert!(child.id() > parent.id()),
            other => panic!("unexpected child: {:?}", other),
        }
    }
}
