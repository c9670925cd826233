//! Constantes del núcleo.
//!
//! El límite de tamaño del wire value es fijo: no se expone en ninguna
//! configuración ni parámetro de step.

/// Tamaño máximo (en bytes UTF-8) de un wire value producido por
/// `SerializeStep`. Se mide sobre la codificación, nunca sobre el número de
/// caracteres.
pub const MAX_SERIALIZED_BYTES: usize = 1024;
