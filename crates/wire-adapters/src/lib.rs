//! wire-adapters: implementaciones concretas de `Serializer`.
//!
//! - `JsonSerializer`: JSON compacto vía `serde_json`.
//! - `CanonicalJsonSerializer`: JSON canónico (claves ordenadas), mismo valor
//!   produce siempre el mismo wire value.
//! - `SchemaJsonSerializer<T>`: JSON restringido a un esquema `T`
//!   (`TypedSerializer`).
//!
//! Todas son inmutables y seguras para uso concurrente.

pub mod json;
pub mod schema;

use std::sync::Arc;

use wire_core::Serializer;

pub use json::{CanonicalJsonSerializer, JsonSerializer};
pub use schema::SchemaJsonSerializer;

/// Nombres aceptados por `serializer_by_name`.
pub const SERIALIZER_NAMES: &[&str] = &[JsonSerializer::NAME, CanonicalJsonSerializer::NAME];

/// Resuelve un serializer neutro por nombre (`json`, `canonical`).
pub fn serializer_by_name(name: &str) -> Option<Arc<dyn Serializer>> {
    match name {
        JsonSerializer::NAME => Some(Arc::new(JsonSerializer)),
        CanonicalJsonSerializer::NAME => Some(Arc::new(CanonicalJsonSerializer)),
        _ => None,
    }
}
