use std::path::PathBuf;

use jsongear_testkit::{fixture_path as shared_fixture_path, load_fixture};

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn inspect_document() -> serde_json::Value {
	load_fixture("container_inspect.json")
}
