use serde::Deserialize;
use serde_json::Value;

use crate::gear::Result;

/// Parse a byte buffer into a JSON value tree.
///
/// Nesting depth is not limited; deep documents grow the stack on demand
/// instead of being rejected.
pub fn parse(bytes: &[u8]) -> Result<Value> {
	let mut json = serde_json::Deserializer::from_slice(bytes);
	json.disable_recursion_limit();
	let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
	json.end()?;
	log::debug!("parsed document of {} bytes", bytes.len());
	Ok(value)
}

/// Parse JSON text into a value tree.
pub fn parse_str(text: &str) -> Result<Value> {
	parse(text.as_bytes())
}
