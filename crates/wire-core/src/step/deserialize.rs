//! DeserializeStep: wire value → valor.
//!
//! Delegación directa a `Serializer::deserialize`. El límite de tamaño se
//! aplica sólo al producir el wire value; aquí no se revalida ni la entrada
//! ni la salida.

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::{StepDefinition, StepKind, StepRunResult};
use crate::errors::{CoreEngineError, SerializerError};
use crate::model::{value_type_name, Artifact, ExecutionContext};
use crate::serializer::Serializer;

pub struct DeserializeStep {
    id: String,
    name: Option<String>,
    serializer: Arc<dyn Serializer>,
}

impl DeserializeStep {
    pub const DEFAULT_ID: &'static str = "deserialize";

    pub fn new<S: Serializer + 'static>(serializer: S) -> Self {
        Self::from_shared(Arc::new(serializer))
    }

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

    pub fn run(&self, serialized: &str) -> Result<Value, SerializerError> {
        let value = self.serializer.deserialize(serialized)?;
        debug!("step '{}' deserialized {} bytes with '{}'", self.id, serialized.len(), self.serializer.name());
        Ok(value)
    }

    /// Variante tipada de `run`; un valor que no encaja en `T` es un fallo de
    /// decodificación.
    pub fn run_as<T: DeserializeOwned>(&self, serialized: &str) -> Result<T, SerializerError> {
        let value = self.run(serialized)?;
        serde_json::from_value(value).map_err(|e| SerializerError::Decode(e.to_string()))
    }
}

impl fmt::Debug for DeserializeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializeStep")
         .field("id", &self.id)
         .field("name", &self.name)
         .field("serializer", &self.serializer.name())
         .finish()
    }
}

impl StepDefinition for DeserializeStep {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    fn base_params(&self) -> Value {
        json!({ "serializer": self.serializer.name() })
    }

    fn run(&self, ctx: &ExecutionContext) -> StepRunResult {
        let Some(input) = ctx.input.as_ref() else {
            return StepRunResult::Failure { error: CoreEngineError::MissingInputs };
        };
        let Value::String(serialized) = &input.payload else {
            let found = value_type_name(&input.payload).to_string();
            return StepRunResult::Failure { error: CoreEngineError::InputNotWire { found } };
        };
        match DeserializeStep::run(self, serialized) {
            Ok(value) => StepRunResult::Success { outputs: vec![Artifact::new(value, None)] },
            Err(e) => StepRunResult::Failure { error: e.into() },
        }
    }

    fn kind(&self) -> StepKind {
        StepKind::Transform
    }
}
