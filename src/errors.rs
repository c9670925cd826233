use thiserror::Error;
use wire_core::SerializerError;

/// Errores de la aplicación (config, CLI y steps).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Uso incorrecto: {0}")]
    Usage(String),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Step(#[from] SerializerError),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}
