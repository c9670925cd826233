//! Contrato del colaborador `Serializer`.
//!
//! - `Serializer`: interfaz neutra (`Value` ↔ texto) que consumen los steps.
//! - `TypedSerializer`: interfaz de alto nivel con un tipo concreto; cualquier
//!   implementación es también un `Serializer` mediante el adaptador de
//!   `typed`.

pub mod typed;

use serde_json::Value;

use crate::errors::SerializerError;

pub use typed::TypedSerializer;

/// Capacidad de convertir un valor a texto y de vuelta.
///
/// `serialize` devuelve un `Value` y no un `String`: la interfaz neutra no
/// garantiza el tipo de retorno y es `SerializeStep` quien lo verifica.
/// Implementaciones bien comportadas devuelven siempre `Value::String`.
///
/// Los steps comparten la instancia (`Arc<dyn Serializer>`) y el orquestador
/// puede invocarlos concurrentemente, de ahí `Send + Sync`: las
/// implementaciones deben ser inmutables o sincronizarse internamente.
pub trait Serializer: Send + Sync {
    /// Nombre usado en logs y en los `base_params` de los steps.
    fn name(&self) -> &str {
        "serializer"
    }

    /// Codifica `data`. Los fallos se reportan como `SerializerError::Encode`.
    fn serialize(&self, data: &Value) -> Result<Value, SerializerError>;

    /// Decodifica `text`. Los fallos se reportan como `SerializerError::Decode`.
    fn deserialize(&self, text: &str) -> Result<Value, SerializerError>;
}
