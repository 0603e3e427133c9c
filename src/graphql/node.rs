//! Global object identifiers: base64 of `"<Type>:<id>"`.

use crate::error::AppError;
use async_graphql::ID;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn encode_global_id(type_name: &str, id: i32) -> ID {
    ID(STANDARD.encode(format!("{}:{}", type_name, id)))
}

/// Splits a global id into its type name and numeric key.
pub fn decode_global_id(raw: &str) -> Option<(String, i32)> {
    let bytes = STANDARD.decode(raw.trim()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let (type_name, id) = text.split_once(':')?;
    let id = id.parse().ok()?;
    Some((type_name.to_string(), id))
}

/// Numeric key for `expected` from a global id or a bare numeric string.
pub fn parse_id(expected: &str, raw: &str) -> Result<i32, AppError> {
    if let Ok(n) = raw.trim().parse::<i32>() {
        return Ok(n);
    }
    match decode_global_id(raw) {
        Some((type_name, id)) if type_name == expected => Ok(id),
        _ => Err(AppError::BadRequest(format!("invalid id '{}' for {}", raw, expected))),
    }
}
