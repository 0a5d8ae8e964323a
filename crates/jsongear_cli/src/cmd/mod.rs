use jsongear::gear::{IndexPattern, PathOptions, Result};

/// Path resolution command.
pub mod get;
/// Document input reading.
pub mod input;
/// Key listing command.
pub mod keys;
/// Value and payload rendering.
pub mod render;
/// Bounded-depth search command.
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;

/// Path syntax flags shared by every mode.
#[derive(clap::Args, Debug, Clone)]
pub struct PathArgs {
	/// Separator between path segments.
	#[arg(long = "sep", default_value = ".")]
	pub separator: String,
	/// Regex recognizing array index segments; capture group 1 holds the digits.
	#[arg(long = "index-pattern")]
	pub index_pattern: Option<String>,
}

impl PathArgs {
	/// Build resolver options from the flags.
	pub fn to_options(&self) -> Result<PathOptions> {
		let index_pattern = match self.index_pattern.as_deref() {
			Some(pattern) => IndexPattern::custom(pattern)?,
			None => IndexPattern::Brackets,
		};
		PathOptions::new(self.separator.as_str(), index_pattern)
	}
}
