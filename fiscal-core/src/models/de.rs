//! Field deserializers for the loosely typed JSON served by the data store.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Deserializes an id that may arrive as a JSON number or a numeric string.
///
/// The backing store mixes both forms (`3` and `"3"`) depending on which
/// client wrote the record, so every id field normalizes through here.
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid id {s:?}"))),
    }
}
