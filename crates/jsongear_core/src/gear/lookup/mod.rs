use serde_json::Value;

use crate::gear::PathOptions;

/// Resolve one path segment against the children of `value`.
///
/// Objects look the segment up as a literal key, even when it looks like an
/// index. Arrays only accept segments matching the configured index pattern
/// and in bounds. Scalars have no children.
///
/// A stored JSON `null` is reported as `None`, the same as a miss.
pub fn lookup<'a>(segment: &str, value: &'a Value, options: &PathOptions) -> Option<&'a Value> {
	let child = match value {
		Value::Object(map) => map.get(segment),
		Value::Array(items) => options.index_pattern.parse_index(segment).and_then(|index| items.get(index)),
		Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
	};

	child.filter(|item| !item.is_null())
}
