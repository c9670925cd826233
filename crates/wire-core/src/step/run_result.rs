use crate::{errors::CoreEngineError, model::Artifact};

/// Resultado abstracto de ejecutar un step. No existe éxito parcial.
#[derive(Debug, Clone, PartialEq)]
pub enum StepRunResult {
    Success { outputs: Vec<Artifact> },
    Failure { error: CoreEngineError },
}

impl StepRunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
