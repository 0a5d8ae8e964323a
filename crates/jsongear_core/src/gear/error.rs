use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GearError>;

/// Errors produced while reading, parsing, configuring, or rendering.
///
/// Lookup misses are not errors; resolver operations report them as `None`.
#[derive(Debug, Error)]
pub enum GearError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input bytes are not a valid JSON document.
	#[error("parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// Resolved value could not be serialized for output.
	#[error("render: {0}")]
	Render(#[source] serde_json::Error),
	/// No key was given for a mode that needs one.
	#[error("field `-k` is required")]
	MissingKey,
	/// Path separator was configured as an empty string.
	#[error("path separator must not be empty")]
	EmptySeparator,
	/// Custom index pattern was rejected.
	#[error("invalid index pattern {pattern:?}: {reason}")]
	InvalidIndexPattern {
		/// Pattern text as supplied.
		pattern: String,
		/// Compile error or structural problem.
		reason: String,
	},
}
