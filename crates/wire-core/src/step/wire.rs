//! Política de wire value: la salida de `Serializer::serialize` debe ser un
//! string y su codificación UTF-8 no puede superar `MAX_SERIALIZED_BYTES`.

use serde_json::Value;

use crate::constants::MAX_SERIALIZED_BYTES;
use crate::errors::SerializerError;
use crate::model::value_type_name;

/// Verifica el tipo y el tamaño de lo que devolvió un `Serializer` y entrega
/// el string sin modificar. El tipo se comprueba antes que el tamaño, así que
/// un valor no-string es siempre `TypeViolation`, sea cual sea su tamaño.
pub fn into_wire_value(serialized: Value) -> Result<String, SerializerError> {
    match serialized {
        Value::String(wire) => {
            check_wire_size(&wire)?;
            Ok(wire)
        }
        other => Err(SerializerError::TypeViolation { found: value_type_name(&other).to_string() }),
    }
}

/// Mide bytes UTF-8 (`str::len`), no caracteres.
pub fn check_wire_size(wire: &str) -> Result<(), SerializerError> {
    let size = wire.len();
    if size > MAX_SERIALIZED_BYTES {
        return Err(SerializerError::size_violation(size));
    }
    Ok(())
}
