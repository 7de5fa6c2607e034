use clerk_api::{ClerkError, Metadata};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `--flag` value that must be a JSON object.
pub fn parse_json_object(raw: &str, flag: &str) -> Result<Metadata, ClerkError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ClerkError::Validation(format!(
            "invalid JSON for --{flag}: expected a JSON object"
        ))),
        Err(error) => Err(ClerkError::Validation(format!(
            "invalid JSON for --{flag}: {error}"
        ))),
    }
}

/// [`parse_json_object`] lifted over an optional flag.
pub fn parse_optional_object(raw: Option<&str>, flag: &str) -> Result<Option<Metadata>, ClerkError> {
    raw.map(|raw| parse_json_object(raw, flag)).transpose()
}
