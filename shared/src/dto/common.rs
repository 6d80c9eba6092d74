use serde::{Deserialize, Deserializer, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Reads a string that may be `null` on the wire, mapping `null` to `""`.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an identifier the backend may send either as a string or a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(n)) => n.to_string(),
    })
}

/// Same as [`string_or_number`] but keeps absence distinguishable.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = string_or_number(deserializer)?;
    Ok(if id.is_empty() { None } else { Some(id) })
}
