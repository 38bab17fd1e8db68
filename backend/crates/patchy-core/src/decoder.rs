use crate::{DecodeError, PresenceMap};

use serde_json::Value;

/// Turns a raw request body into a [`PresenceMap`].
///
/// Implementations must keep keys exactly as supplied: no renaming, no
/// default-filling. Later stages treat key existence as "the client sent it".
pub trait PayloadDecoder: Send + Sync {
    fn decode(&self, payload: &[u8]) -> Result<PresenceMap, DecodeError>;
}

/// Decodes JSON object bodies.
///
/// An empty body and a literal `null` both mean "no fields supplied".
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl PayloadDecoder for JsonDecoder {
    fn decode(&self, payload: &[u8]) -> Result<PresenceMap, DecodeError> {
        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(PresenceMap::default());
        }

        let value: Value = match serde_json::from_slice(payload) {
            Ok(value) => value,
            Err(e) => return Err(DecodeError::malformed(e)),
        };

        match value {
            Value::Object(entries) => Ok(PresenceMap::new(entries)),
            Value::Null => Ok(PresenceMap::default()),
            other => Err(DecodeError::not_an_object(json_type_name(&other))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
