//! Public library API for addressing values inside parsed JSON documents.

/// Document parsing, dotted-path resolution, key listing, and bounded search.
pub mod gear;
