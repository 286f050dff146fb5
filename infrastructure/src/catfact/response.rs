//! Response body decoding

use catfact_application::FactSourceError;
use catfact_domain::{Fact, truncate};
use serde_json::Value;

/// Bytes of the raw body quoted in a decode error
const BODY_PREVIEW_LEN: usize = 120;

/// Decode a JSON body and pull out one string field.
///
/// The field is checked explicitly: absent (or a body that is not an object)
/// and present-but-not-a-string are distinct errors.
pub fn extract_fact(body: &str, field: &str) -> Result<Fact, FactSourceError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        FactSourceError::InvalidBody(format!(
            "{} (body: {:?})",
            e,
            truncate(body, BODY_PREVIEW_LEN)
        ))
    })?;

    match value.get(field) {
        Some(Value::String(text)) => Ok(Fact::new(text.as_str())),
        Some(other) => Err(FactSourceError::InvalidField {
            field: field.to_string(),
            found: json_type_name(other).to_string(),
        }),
        None => Err(FactSourceError::MissingField(field.to_string())),
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
