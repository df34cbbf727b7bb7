//! Parsing of textual node values.
//!
//! Used at untyped boundaries such as administrative commands, where a value
//! arrives as text and the node's kind decides how to read it.

use crate::value::{NodeValue, ValueKind};


/// Parse a string value into a [`NodeValue`] of the given kind.
pub fn parse_value_for_kind(value: &str, kind: ValueKind) -> Result<NodeValue, String> {
	match kind {
		ValueKind::Integer => parse_int(value).map(NodeValue::Integer),
		ValueKind::Real => parse_real(value).map(NodeValue::Real),
		ValueKind::Boolean => parse_bool(value).map(NodeValue::Boolean),
		ValueKind::Text => Ok(NodeValue::Text(value.to_string())),
		ValueKind::TextList => Ok(NodeValue::TextList(parse_text_list(value))),
		ValueKind::Effect => value.parse().map(NodeValue::Effect),
		ValueKind::BlockType => value.parse().map(NodeValue::BlockType),
		ValueKind::BlockTypeList => value.parse().map(NodeValue::BlockTypeList),
		ValueKind::BlockRelationList => value.parse().map(NodeValue::BlockRelationList),
	}
}

/// Parse a boolean value from common string representations.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(format!(
			"invalid boolean: '{value}' (expected true/false, yes/no, on/off, 1/0)"
		)),
	}
}

/// Parse an integer value. A decimal is accepted and truncated, matching the
/// write path's coercion. Non-finite or out-of-range numbers are rejected.
pub fn parse_int(value: &str) -> Result<i64, String> {
	let value = value.trim();
	if let Ok(int) = value.parse::<i64>() {
		return Ok(int);
	}
	match value.parse::<f64>() {
		// i64::MAX as f64 rounds up to 2^63, hence the exclusive bound
		Ok(real) if real.is_finite() && real >= i64::MIN as f64 && real < i64::MAX as f64 => Ok(real.trunc() as i64),
		_ => Err(format!("invalid integer: '{value}'")),
	}
}

pub fn parse_real(value: &str) -> Result<f64, String> {
	value
		.trim()
		.parse::<f64>()
		.map_err(|_| format!("invalid number: '{value}'"))
}

/// Comma-separated entries; blanks are dropped.
pub fn parse_text_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|entry| !entry.is_empty())
		.map(str::to_string)
		.collect()
}
