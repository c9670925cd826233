//! wireflow
//!
//! Librería central:
//! - Reexporta `wire_core` (steps, contrato `Serializer`, errores) y
//!   `wire_adapters` (serializers concretos).
//! - Expone `config` para leer la configuración de entorno y `errors` con el
//!   error de aplicación.
//! - `pipeline` arma el par SerializeStep/DeserializeStep sobre un serializer
//!   compartido.

pub mod config;
pub mod errors;
pub mod pipeline;

pub use wire_adapters::{serializer_by_name, CanonicalJsonSerializer, JsonSerializer, SchemaJsonSerializer};
pub use wire_core::{DeserializeStep, SerializeStep, Serializer, SerializerError, TypedSerializer, MAX_SERIALIZED_BYTES};

pub use config::AppConfig;
pub use errors::AppError;
pub use pipeline::WirePipeline;
