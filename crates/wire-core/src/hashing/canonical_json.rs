//! JSON canónico: claves de objetos ordenadas y sin espacios. Dos `Value`
//! iguales producen siempre el mismo texto, lo que da wire values
//! deterministas y hashes reproducibles.

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(_) => value.to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let items: Vec<String> = tree.into_iter()
                                         .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), v))
                                         .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(true)), "true");
        assert_eq!(to_canonical_json(&json!(123)), "123");
        assert_eq!(to_canonical_json(&json!("hola")), "\"hola\"");
    }

    #[test]
    fn object_keys_sorted_at_every_level() {
        let val = json!({ "z": [ { "y": "yes", "b": 1 }, null ], "a": { "x": 10 } });
        assert_eq!(to_canonical_json(&val), "{\"a\":{\"x\":10},\"z\":[{\"b\":1,\"y\":\"yes\"},null]}");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(to_canonical_json(&json!({"k\"": "a\nb"})), "{\"k\\\"\":\"a\\nb\"}");
    }
}
