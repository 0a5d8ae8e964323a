mod document;
mod error;
mod keys;
mod lookup;
mod options;
mod resolve;
mod search;

/// Document parsing entry points.
pub use document::{parse, parse_str};
/// Error and result aliases.
pub use error::{GearError, Result};
/// Child key enumeration.
pub use keys::list_keys;
/// Single-segment child lookup.
pub use lookup::lookup;
/// Path syntax configuration.
pub use options::{IndexPattern, PathOptions};
/// Multi-segment path resolution.
pub use resolve::{get_path, split_path};
/// Bounded-depth recursive search.
pub use search::search;
/// Parsed JSON value tree.
pub use serde_json::Value;
