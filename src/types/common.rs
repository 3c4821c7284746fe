//! Shared response containers.

use serde::{Deserialize, Deserializer, Serialize};

/// Laravel-style paginated wrapper around a list of result records.
///
/// `data.len() <= per_page` is enforced by the server, not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paginated<T> {
    pub current_page: i64,
    pub data: Vec<T>,
    pub next_page_url: Option<String>,
    pub path: String,
    /// The server types this as int-or-string depending on the endpoint.
    #[serde(deserialize_with = "int_or_string")]
    pub per_page: i64,
    pub prev_page_url: Option<String>,
    #[serde(deserialize_with = "int_or_string")]
    pub to: i64,
    pub total: i64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            current_page: 0,
            data: Vec::new(),
            next_page_url: None,
            path: String::new(),
            per_page: 0,
            prev_page_url: None,
            to: 0,
            total: 0,
        }
    }
}

/// Accept an integer, a float, or a numeric string. Non-numeric strings
/// collapse to zero rather than failing the whole decode.
pub(crate) fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(value) => value,
        Raw::Float(value) => value as i64,
        Raw::Text(text) => text.trim().parse().unwrap_or(0),
    })
}
