use serde_json::Value;
use wire_core::hashing::to_canonical_json;
use wire_core::{Serializer, SerializerError};

/// JSON compacto. Conserva el orden de claves del `Value` de entrada.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub const NAME: &'static str = "json";
}

impl Serializer for JsonSerializer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn serialize(&self, data: &Value) -> Result<Value, SerializerError> {
        serde_json::to_string(data).map(Value::String)
                                   .map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn deserialize(&self, text: &str) -> Result<Value, SerializerError> {
        parse_json(text)
    }
}

/// JSON canónico: claves ordenadas en todos los niveles y sin espacios.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalJsonSerializer;

impl CanonicalJsonSerializer {
    pub const NAME: &'static str = "canonical";
}

impl Serializer for CanonicalJsonSerializer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn serialize(&self, data: &Value) -> Result<Value, SerializerError> {
        Ok(Value::String(to_canonical_json(data)))
    }

    fn deserialize(&self, text: &str) -> Result<Value, SerializerError> {
        parse_json(text)
    }
}

fn parse_json(text: &str) -> Result<Value, SerializerError> {
    serde_json::from_str(text).map_err(|e| SerializerError::Decode(e.to_string()))
}
