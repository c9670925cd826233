//! Configuración de la aplicación desde variables de entorno (`.env` opcional).
//!
//! - `WIREFLOW_SERIALIZER`: `json` (por defecto) | `canonical`.
//! - `WIREFLOW_LOG`: `off|error|warn|info|debug|trace` (por defecto `info`).
//!
//! El límite de tamaño del wire value no es configurable.

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use log::LevelFilter;
use once_cell::sync::Lazy;
use wire_adapters::SERIALIZER_NAMES;

use crate::errors::AppError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_SERIALIZER: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Nombre del serializer (ver `wire_adapters::serializer_by_name`).
    pub serializer: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { serializer: DEFAULT_SERIALIZER.to_string(),
               log_level: LevelFilter::Info }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_vars(env::var("WIREFLOW_SERIALIZER").ok(), env::var("WIREFLOW_LOG").ok())
    }

    /// Construye la config a partir de valores ya leídos (vacío = por defecto).
    pub fn from_vars(serializer: Option<String>, log: Option<String>) -> Result<Self, AppError> {
        let mut cfg = Self::default();
        if let Some(name) = serializer.filter(|s| !s.trim().is_empty()) {
            cfg.serializer = parse_serializer_name(&name)?;
        }
        if let Some(level) = log.filter(|s| !s.trim().is_empty()) {
            cfg.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| AppError::Config(format!("WIREFLOW_LOG inválido: {level}")))?;
        }
        Ok(cfg)
    }
}

pub fn parse_serializer_name(name: &str) -> Result<String, AppError> {
    let name = name.trim().to_ascii_lowercase();
    if SERIALIZER_NAMES.contains(&name.as_str()) {
        Ok(name)
    } else {
        Err(AppError::Config(format!("serializer desconocido: {name} (opciones: {})", SERIALIZER_NAMES.join(", "))))
    }
}
