//! JSON formatting, minification and validation
//!
//! Object keys keep their input order.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{KitError, Result};

pub const DEFAULT_INDENT: usize = 2;

fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| {
        let display = e.to_string();
        // Position is reported separately
        let message = display
            .split(" at line ")
            .next()
            .unwrap_or(&display)
            .to_string();
        KitError::InvalidJson {
            line: e.line(),
            column: e.column(),
            message,
        }
    })
}

/// Pretty-print with `indent` spaces per level.
pub fn format(input: &str, indent: usize) -> Result<String> {
    let value = parse(input)?;
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value
        .serialize(&mut serializer)
        .map_err(|e| KitError::InvalidJson {
            line: 0,
            column: 0,
            message: e.to_string(),
        })?;
    // serde_json only writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Remove all insignificant whitespace.
pub fn minify(input: &str) -> Result<String> {
    let value = parse(input)?;
    Ok(value.to_string())
}

/// Check that `input` is a single JSON value.
pub fn validate(input: &str) -> Result<()> {
    parse(input).map(|value| {
        tracing::debug!(kind = value_kind(&value), "Valid JSON");
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
