use serde_json::Value;

use super::run_result::StepRunResult;
use crate::model::ExecutionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind { Transform }

/// Trait que define un Step. Implementaciones deben ser puras respecto a su input.
pub trait StepDefinition {
    /// Identificador estable y único dentro del Flow.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str { self.id() }

    /// Parámetros base deterministas.
    fn base_params(&self) -> Value;

    /// Ejecución pura del step. Debe usar únicamente el input del contexto.
    fn run(&self, ctx: &ExecutionContext) -> StepRunResult;

    /// Tipo general del step.
    fn kind(&self) -> StepKind;

    /// Hash estable de la definición (id, kind y parámetros base).
    fn definition_hash(&self) -> String {
        let hash_input = serde_json::json!({
            "id": self.id(),
            "kind": format!("{:?}", self.kind()),
            "base_params": self.base_params(),
        });
        crate::hashing::hash_value(&hash_input)
    }
}
