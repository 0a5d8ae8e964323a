use serde_json::Value;

use crate::gear::{PathOptions, get_path};

/// List the direct child keys of the value at `root_path`.
///
/// An empty `root_path` lists the document root. Objects yield their keys in
/// map order, which is document order for this build; callers should not
/// rely on it. Arrays yield `[0]` through `[N-1]` in ascending order.
///
/// Returns `None` when the path misses or lands on a scalar, and an empty
/// list for an empty container.
pub fn list_keys(root_path: &str, root: &Value, options: &PathOptions) -> Option<Vec<String>> {
	let target = if root_path.is_empty() { root } else { get_path(root_path, root, options)? };

	match target {
		Value::Object(map) => Some(map.keys().cloned().collect()),
		Value::Array(items) => Some((0..items.len()).map(|index| format!("[{index}]")).collect()),
		Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
	}
}
