//! This module provides serde implementations for base64-encoded byte fields.

use base64::prelude::*;
use serde::{de, Deserialize, Deserializer};

/// Serializes anything byte-like as a standard base64 string.
///
/// # Errors
/// Returns an error if the serializer rejects the encoded string.
pub fn serialize<S, T: AsRef<[u8]>>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&BASE64_STANDARD.encode(data))
}

/// Deserializes a standard base64 string into any `TryFrom<Vec<u8>>` value.
///
/// # Errors
/// Returns an error if the string is not valid base64 or the decoded bytes are
/// rejected by the target type.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<Vec<u8>>,
{
    let s = String::deserialize(deserializer)?;
    let decoded = BASE64_STANDARD
        .decode(s.as_bytes())
        .map_err(de::Error::custom)?;
    T::try_from(decoded).map_err(|_| de::Error::custom("invalid base64 data"))
}
