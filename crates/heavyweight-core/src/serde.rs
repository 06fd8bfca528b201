//! Serde helpers for query-string input.
//!
//! Query strings deliver every value as text and send `page=` for a cleared
//! form field. These helpers treat an empty value the same as a missing one.

use serde::de::IntoDeserializer;
use serde::de::value::StringDeserializer;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, mapping `""` to `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes an optional string into an optional i64.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer `{}`", s))),
        None => Ok(None),
    }
}

/// Deserializes an optional string into any type that deserializes from a
/// string (such as a unit-variant enum).
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => {
            let de: StringDeserializer<D::Error> = s.into_deserializer();
            T::deserialize(de).map(Some)
        }
        None => Ok(None),
    }
}
