use regex::Regex;

use crate::gear::{GearError, Result};

/// How a path segment is recognized as an array index.
#[derive(Debug, Clone, Default)]
pub enum IndexPattern {
	/// `[N]` with one or more ASCII digits and nothing else.
	#[default]
	Brackets,
	/// User pattern; capture group 1 holds the decimal digits.
	Custom(Regex),
}

impl IndexPattern {
	/// Compile a custom index pattern.
	///
	/// The pattern must contain at least one capture group. Group 1 is read as
	/// the index digits, so `^<(\d+)>$` accepts segments like `<2>`.
	pub fn custom(pattern: &str) -> Result<Self> {
		let regex = Regex::new(pattern).map_err(|err| GearError::InvalidIndexPattern {
			pattern: pattern.to_owned(),
			reason: err.to_string(),
		})?;

		if regex.captures_len() < 2 {
			return Err(GearError::InvalidIndexPattern {
				pattern: pattern.to_owned(),
				reason: "pattern needs a capture group for the index digits".to_owned(),
			});
		}

		Ok(Self::Custom(regex))
	}

	/// Decode an index selector into a zero-based position.
	///
	/// Returns `None` for non-matching segments and for digit runs that do not
	/// fit in `usize`; such an index could never be in bounds anyway.
	pub fn parse_index(&self, segment: &str) -> Option<usize> {
		let digits = match self {
			Self::Brackets => bracket_digits(segment)?,
			Self::Custom(regex) => regex.captures(segment)?.get(1)?.as_str(),
		};
		digits.parse::<usize>().ok()
	}
}

fn bracket_digits(segment: &str) -> Option<&str> {
	let inner = segment.strip_prefix('[')?.strip_suffix(']')?;
	if inner.is_empty() || !inner.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	Some(inner)
}

/// Path syntax settings shared by every resolver operation.
#[derive(Debug, Clone)]
pub struct PathOptions {
	/// Text that separates path segments.
	pub separator: String,
	/// Recognizer for array index segments.
	pub index_pattern: IndexPattern,
}

impl Default for PathOptions {
	fn default() -> Self {
		Self {
			separator: ".".to_owned(),
			index_pattern: IndexPattern::Brackets,
		}
	}
}

impl PathOptions {
	/// Build options, rejecting an empty separator.
	pub fn new(separator: impl Into<String>, index_pattern: IndexPattern) -> Result<Self> {
		let separator = separator.into();
		if separator.is_empty() {
			return Err(GearError::EmptySeparator);
		}
		Ok(Self { separator, index_pattern })
	}
}
