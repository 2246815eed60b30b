use liquid::model::Value as LiquidValue;

/// Convert a JSON value to a Liquid value
pub fn json_to_liquid(json: serde_json::Value) -> LiquidValue {
    match json {
        serde_json::Value::Null => LiquidValue::Nil,
        serde_json::Value::Bool(b) => LiquidValue::scalar(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                // Default to string
                LiquidValue::scalar(n.to_string())
            }
        },
        serde_json::Value::String(s) => LiquidValue::scalar(s),
        serde_json::Value::Array(arr) => {
            let values: Vec<LiquidValue> = arr.into_iter()
                .map(json_to_liquid)
                .collect();
            LiquidValue::Array(values)
        },
        serde_json::Value::Object(obj) => {
            let mut liquid_obj = liquid::Object::new();
            for (k, v) in obj {
                liquid_obj.insert(k.into(), json_to_liquid(v));
            }
            LiquidValue::Object(liquid_obj)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(json_to_liquid(json!(null)), LiquidValue::Nil);
        assert_eq!(json_to_liquid(json!(true)), LiquidValue::scalar(true));
        assert_eq!(json_to_liquid(json!(42)), LiquidValue::scalar(42i64));
        assert_eq!(json_to_liquid(json!(1.5)), LiquidValue::scalar(1.5));
        assert_eq!(json_to_liquid(json!("hi")), LiquidValue::scalar("hi".to_string()));
    }

    #[test]
    fn test_nested_structures() {
        let value = json_to_liquid(json!({"tags": ["a", "b"], "meta": {"n": 1}}));
        let obj = value.into_object().unwrap();
        assert_eq!(
            obj.get("tags"),
            Some(&LiquidValue::Array(vec![
                LiquidValue::scalar("a".to_string()),
                LiquidValue::scalar("b".to_string()),
            ]))
        );
        let meta = obj.get("meta").cloned().unwrap().into_object().unwrap();
        assert_eq!(meta.get("n"), Some(&LiquidValue::scalar(1i64)));
    }
}
