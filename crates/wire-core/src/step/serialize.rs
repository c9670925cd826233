//! SerializeStep: valor → wire value acotado.
//!
//! 1. Invoca `Serializer::serialize`; sus errores se devuelven tal cual.
//! 2. Exige que el resultado sea un string (`TypeViolation` si no).
//! 3. Exige como máximo `MAX_SERIALIZED_BYTES` bytes UTF-8 (`SizeViolation`).
//! 4. Devuelve el string sin recortar ni normalizar.
//!
//! Sin reintentos ni caché; el step no guarda estado entre invocaciones.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};

use super::{into_wire_value, StepDefinition, StepKind, StepRunResult};
use crate::constants::MAX_SERIALIZED_BYTES;
use crate::errors::{CoreEngineError, SerializerError};
use crate::model::{Artifact, ExecutionContext};
use crate::serializer::Serializer;

pub struct SerializeStep {
    id: String,
    name: Option<String>,
    serializer: Arc<dyn Serializer>,
}

impl SerializeStep {
    pub const DEFAULT_ID: &'static str = "serialize";

    pub fn new<S: Serializer + 'static>(serializer: S) -> Self {
        Self::from_shared(Arc::new(serializer))
    }

    /// Usa un serializer ya compartido (p. ej. con un `DeserializeStep`).
    pub fn from_shared(serializer: Arc<dyn Serializer>) -> Self {
        Self { id: Self::DEFAULT_ID.to_string(),
               name: None,
               serializer }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn serializer(&self) -> &Arc<dyn Serializer> {
        &self.serializer
    }

    /// Serializa `data` y valida el wire value resultante.
    ///
    /// Nota: `StepDefinition::run` tiene otra firma; para la interfaz neutra
    /// usar `StepDefinition::run(&step, &ctx)`.
    pub fn run(&self, data: &Value) -> Result<String, SerializerError> {
        let serialized = self.serializer.serialize(data)?;
        match into_wire_value(serialized) {
            Ok(wire) => {
                debug!("step '{}' serialized {} bytes with '{}'", self.id, wire.len(), self.serializer.name());
                Ok(wire)
            }
            Err(e) => {
                warn!("step '{}' rejected output of '{}': {}", self.id, self.serializer.name(), e);
                Err(e)
            }
        }
    }

    /// Variante tipada de `run`. Si `data` no puede representarse como
    /// `Value` se trata como fallo de codificación.
    pub fn run_typed<T: Serialize>(&self, data: &T) -> Result<String, SerializerError> {
        let value = serde_json::to_value(data).map_err(|e| SerializerError::Encode(e.to_string()))?;
        self.run(&value)
    }
}

impl fmt::Debug for SerializeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializeStep")
         .field("id", &self.id)
         .field("name", &self.name)
         .field("serializer", &self.serializer.name())
         .finish()
    }
}

impl StepDefinition for SerializeStep {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    fn base_params(&self) -> Value {
        json!({ "serializer": self.serializer.name(), "max_bytes": MAX_SERIALIZED_BYTES })
    }

    fn run(&self, ctx: &ExecutionContext) -> StepRunResult {
        let Some(input) = ctx.input.as_ref() else {
            return StepRunResult::Failure { error: CoreEngineError::MissingInputs };
        };
        match SerializeStep::run(self, &input.payload) {
            Ok(wire) => {
                let bytes = wire.len();
                let art = Artifact::new(Value::String(wire), Some(json!({ "bytes": bytes })));
                StepRunResult::Success { outputs: vec![art] }
            }
            Err(e) => StepRunResult::Failure { error: e.into() },
        }
    }

    fn kind(&self) -> StepKind {
        StepKind::Transform
    }
}
