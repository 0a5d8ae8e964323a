use serde_json::Value;

use crate::gear::{PathOptions, lookup};

/// Split a path string into its raw segments.
///
/// Splitting is purely syntactic. An empty path yields one empty segment.
pub fn split_path<'p>(path: &'p str, options: &'p PathOptions) -> impl Iterator<Item = &'p str> {
	path.split(options.separator.as_str())
}

/// Resolve a separator-delimited path from `root`.
///
/// Segments are applied left to right; the first miss ends resolution and the
/// whole path resolves to `None`.
pub fn get_path<'a>(path: &str, root: &'a Value, options: &PathOptions) -> Option<&'a Value> {
	log::debug!("resolving path {path:?}");

	let mut current = root;
	for (depth, segment) in split_path(path, options).enumerate() {
		match lookup(segment, current, options) {
			Some(child) => current = child,
			None => {
				log::trace!("path {path:?} missed at segment {depth} ({segment:?})");
				return None;
			}
		}
	}

	Some(current)
}
