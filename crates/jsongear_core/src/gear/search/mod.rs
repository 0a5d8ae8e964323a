use serde_json::Value;

use crate::gear::{PathOptions, lookup};

/// Search for `target` as a child key, descending at most `max_depth` levels.
///
/// Every container first tries a direct lookup of `target`; a hit there wins
/// over anything deeper. Otherwise children are searched in enumeration order
/// (object map order, then ascending array index) and the first hit is
/// returned. With `max_depth == 0` only the root's own children are checked.
///
/// The result is the first match, not a unique one: duplicate keys in sibling
/// subtrees resolve to whichever subtree enumerates first.
pub fn search<'a>(target: &str, root: &'a Value, max_depth: usize, options: &PathOptions) -> Option<&'a Value> {
	log::debug!("searching for {target:?} up to depth {max_depth}");
	search_at(target, root, 0, max_depth, options)
}

fn search_at<'a>(target: &str, value: &'a Value, depth: usize, max_depth: usize, options: &PathOptions) -> Option<&'a Value> {
	if !matches!(value, Value::Object(_) | Value::Array(_)) {
		return None;
	}

	if let Some(found) = lookup(target, value, options) {
		log::trace!("found {target:?} at depth {depth}");
		return Some(found);
	}

	if depth >= max_depth {
		return None;
	}

	let descend = |child: &'a Value| search_at(target, child, depth + 1, max_depth, options);
	match value {
		Value::Object(map) => map.values().find_map(descend),
		Value::Array(items) => items.iter().find_map(descend),
		Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
	}
}
