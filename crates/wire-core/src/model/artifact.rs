//! Artifact neutral del flujo.
//!
//! Un `Artifact` es la unidad de datos que el orquestador entrega a un step y
//! recibe de él:
//! - `payload` es JSON genérico; el núcleo no interpreta su semántica.
//! - `hash` es el blake3 del payload canonicalizado (ver
//!   `hashing::hash_value`) y sirve como identidad para trazabilidad.
//! - `metadata` permite anotar información auxiliar que no entra al hash.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hashing::hash_value;

/// Tipos neutrales de artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// JSON genérico sin semántica
    GenericJson,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub hash: String,            // hash canónico del payload
    pub payload: Value,          // contenido neutro JSON
    pub metadata: Option<Value>, // información auxiliar (no entra al hash)
}

impl Artifact {
    /// Construye un artifact `GenericJson` calculando su hash.
    pub fn new(payload: Value, metadata: Option<Value>) -> Self {
        Self { kind: ArtifactKind::GenericJson,
               hash: hash_value(&payload),
               payload,
               metadata }
    }
}

/// Nombre del tipo en tiempo de ejecución de un `Value`. Los números enteros
/// se reportan como `integer` y el resto como `float`.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_ignores_metadata_and_key_order() {
        let a = Artifact::new(json!({"a": 1, "b": 2}), Some(json!({"note": "x"})));
        let b = Artifact::new(json!({"b": 2, "a": 1}), None);
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.hash.len(), 64);
    }

    #[test]
    fn type_names() {
        assert_eq!(value_type_name(&json!(42)), "integer");
        assert_eq!(value_type_name(&json!(-7)), "integer");
        assert_eq!(value_type_name(&json!(1.5)), "float");
        assert_eq!(value_type_name(&json!({"a": 1})), "object");
        assert_eq!(value_type_name(&json!([1])), "array");
        assert_eq!(value_type_name(&json!(false)), "boolean");
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!("s")), "string");
    }
}
