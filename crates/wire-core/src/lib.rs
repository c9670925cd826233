//! wire-core: steps de serialización acotada para pipelines.
//!
//! `SerializeStep` convierte un valor arbitrario (`serde_json::Value`) en un
//! wire value de texto de como máximo `MAX_SERIALIZED_BYTES` bytes UTF-8;
//! `DeserializeStep` hace el camino inverso. La codificación la aporta el
//! integrador mediante el trait `Serializer`.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod serializer;
pub mod step;

pub use constants::MAX_SERIALIZED_BYTES;
pub use errors::{CoreEngineError, SerializerError};
pub use model::{Artifact, ArtifactKind, ExecutionContext};
pub use serializer::{Serializer, TypedSerializer};
pub use step::{DeserializeStep, SerializeStep, StepDefinition, StepKind, StepRunResult};
