//! Taxonomía de errores del núcleo.
//!
//! `SerializerError` es el tipo que comparten el colaborador (`Serializer`) y
//! los steps: los fallos de codificación/decodificación del colaborador se
//! propagan tal cual con `?`, y `SerializeStep` añade sus dos violaciones
//! locales (tipo y tamaño). Ninguna variante transporta el payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_SERIALIZED_BYTES;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SerializerError {
    /// Valor no codificable (lo emite el `Serializer`).
    #[error("encoding failed: {0}")]
    Encode(String),
    /// Texto malformado o incompatible (lo emite el `Serializer`).
    #[error("decoding failed: {0}")]
    Decode(String),
    /// El `Serializer` devolvió algo que no es un string.
    #[error("serialized value must be a string; received {found}")]
    TypeViolation { found: String },
    /// Codificación válida pero mayor que `MAX_SERIALIZED_BYTES`.
    #[error("serialized value exceeds the {limit}-byte limit ({size} bytes)")]
    SizeViolation { size: usize, limit: usize },
}

impl SerializerError {
    pub fn size_violation(size: usize) -> Self {
        Self::SizeViolation { size,
                              limit: MAX_SERIALIZED_BYTES }
    }

    /// `true` para las violaciones que añade el step (tipo/tamaño), `false`
    /// para los fallos propios del colaborador.
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::TypeViolation { .. } | Self::SizeViolation { .. })
    }
}

/// Fallos al ejecutar un step a través de la interfaz neutra
/// (`StepDefinition`).
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    #[error("missing required inputs")]
    MissingInputs,
    #[error("input artifact payload must be a string; received {found}")]
    InputNotWire { found: String },
    #[error(transparent)]
    Serializer(#[from] SerializerError),
}
