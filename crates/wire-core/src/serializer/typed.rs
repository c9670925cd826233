use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::Serializer;
use crate::errors::SerializerError;

/// Serializer con tipos fuertes.
///
/// Implementadores escriben `encode`/`decode` sobre `Self::Value`; el
/// adaptador de abajo los expone como `Serializer` neutro. Un `Value` de
/// entrada que no encaja en `Self::Value` es un fallo de codificación, y un
/// valor decodificado que no puede volver a `Value` es un fallo de
/// decodificación.
pub trait TypedSerializer {
    type Value: Serialize + DeserializeOwned;

    fn name(&self) -> &str {
        std::any::type_name::<Self::Value>()
    }

    fn encode(&self, value: &Self::Value) -> Result<String, SerializerError>;

    fn decode(&self, text: &str) -> Result<Self::Value, SerializerError>;
}

// -------------------------------------------------------------
// Adaptador: cualquier `TypedSerializer` implementa `Serializer` neutro.
// -------------------------------------------------------------
impl<T> Serializer for T where T: TypedSerializer + Send + Sync
{
    fn name(&self) -> &str {
        <Self as TypedSerializer>::name(self)
    }

    fn serialize(&self, data: &Value) -> Result<Value, SerializerError> {
        let typed: <T as TypedSerializer>::Value =
            serde_json::from_value(data.clone()).map_err(|e| SerializerError::Encode(e.to_string()))?;
        self.encode(&typed).map(Value::String)
    }

    fn deserialize(&self, text: &str) -> Result<Value, SerializerError> {
        let typed = self.decode(text)?;
        serde_json::to_value(typed).map_err(|e| SerializerError::Decode(e.to_string()))
    }
}
