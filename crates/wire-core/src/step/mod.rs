//! Steps del pipeline.
//!
//! Un step es una unidad pura de entrada única y salida única que el
//! orquestador invoca. Este módulo define:
//! - `StepDefinition`: interfaz neutra usada por el orquestador.
//! - `StepRunResult`: resultado neutro (éxito con artifacts o fallo).
//! - `SerializeStep` / `DeserializeStep`: los dos steps de wire value.
//! - `into_wire_value` / `check_wire_size`: la política que aplica
//!   `SerializeStep` sobre la salida del `Serializer`.

pub mod definition;
pub mod deserialize;
mod run_result;
pub mod serialize;
pub mod wire;

pub use definition::{StepDefinition, StepKind};
pub use deserialize::DeserializeStep;
pub use run_result::StepRunResult;
pub use serialize::SerializeStep;
pub use wire::{check_wire_size, into_wire_value};
