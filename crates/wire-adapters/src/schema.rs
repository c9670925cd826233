//! JSON con esquema: el serializer sólo acepta valores que encajan en `T`.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use wire_core::{SerializerError, TypedSerializer};

pub struct SchemaJsonSerializer<T> {
    _schema: PhantomData<fn() -> T>,
}

impl<T> SchemaJsonSerializer<T> {
    pub fn new() -> Self {
        Self { _schema: PhantomData }
    }
}

impl<T> Default for SchemaJsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + DeserializeOwned> TypedSerializer for SchemaJsonSerializer<T> {
    type Value = T;

    fn name(&self) -> &str {
        "schema-json"
    }

    fn encode(&self, value: &T) -> Result<String, SerializerError> {
        serde_json::to_string(value).map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn decode(&self, text: &str) -> Result<T, SerializerError> {
        serde_json::from_str(text).map_err(|e| SerializerError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use wire_core::Serializer;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Reading {
        sensor: String,
        value: f64,
    }

    #[test]
    fn matching_value_round_trips() {
        let s = SchemaJsonSerializer::<Reading>::new();
        let wire = s.serialize(&json!({"sensor": "t1", "value": 20.5})).unwrap();
        assert_eq!(wire, json!("{\"sensor\":\"t1\",\"value\":20.5}"));
        let back = s.deserialize(wire.as_str().unwrap()).unwrap();
        assert_eq!(back, json!({"sensor": "t1", "value": 20.5}));
    }

    #[test]
    fn value_outside_schema_fails_both_ways() {
        let s = SchemaJsonSerializer::<Reading>::new();
        assert!(matches!(s.serialize(&json!({"sensor": 1})), Err(SerializerError::Encode(_))));
        assert!(matches!(s.deserialize("{\"other\":true}"), Err(SerializerError::Decode(_))));
    }
}
