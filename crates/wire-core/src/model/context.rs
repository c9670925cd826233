use super::Artifact;

/// Contexto de ejecución entregado al `StepDefinition::run`.
pub struct ExecutionContext {
    pub input: Option<Artifact>, // artifact único de entrada
}

impl ExecutionContext {
    pub fn with_input(input: Artifact) -> Self {
        Self { input: Some(input) }
    }
}
