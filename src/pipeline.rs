//! Par de steps que comparten un mismo serializer.

use std::sync::Arc;

use serde_json::Value;
use wire_adapters::serializer_by_name;
use wire_core::{DeserializeStep, SerializeStep, Serializer};

use crate::config::{parse_serializer_name, AppConfig};
use crate::errors::AppError;

#[derive(Debug)]
pub struct WirePipeline {
    pub serialize: SerializeStep,
    pub deserialize: DeserializeStep,
}

impl WirePipeline {
    pub fn new(serializer: Arc<dyn Serializer>) -> Self {
        Self { serialize: SerializeStep::from_shared(serializer.clone()),
               deserialize: DeserializeStep::from_shared(serializer) }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        let name = parse_serializer_name(name)?;
        serializer_by_name(&name).map(Self::new)
                                 .ok_or_else(|| AppError::Config(format!("serializer desconocido: {name}")))
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, AppError> {
        Self::from_name(&cfg.serializer)
    }

    /// Serializa y vuelve a deserializar `value`.
    pub fn roundtrip(&self, value: &Value) -> Result<Value, AppError> {
        let wire = self.serialize.run(value)?;
        Ok(self.deserialize.run(&wire)?)
    }
}
