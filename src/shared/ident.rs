use serde::{Deserialize, Deserializer};

/// Identifier as it appears in source JSON: either a string or a bare integer
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Deserialize an identifier field, normalising integers to their decimal string
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
