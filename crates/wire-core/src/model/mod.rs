//! Modelos neutrales intercambiados con el orquestador (Artifact,
//! ExecutionContext).

pub mod artifact;
pub mod context;

pub use artifact::{value_type_name, Artifact, ArtifactKind};
pub use context::ExecutionContext;
