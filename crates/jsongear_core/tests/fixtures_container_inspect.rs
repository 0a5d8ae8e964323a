#![allow(missing_docs)]

use jsongear::gear::{PathOptions, get_path, list_keys, parse, search};
use jsongear_testkit::{fixture_path, load_fixture};
use serde_json::json;

#[test]
fn parses_fixture_bytes() {
	let bytes = std::fs::read(fixture_path("container_inspect.json")).expect("fixture readable");
	let doc = parse(&bytes).expect("fixture parses");
	assert_eq!(doc["Path"], "/bin/bash");
}

#[test]
fn resolves_nested_fields() {
	let doc = load_fixture("container_inspect.json");
	let options = PathOptions::default();

	assert_eq!(get_path("State.Status", &doc, &options), Some(&json!("running")));
	assert_eq!(get_path("State.Health.FailingStreak", &doc, &options), Some(&json!(0)));
	assert_eq!(get_path("Args.[0].bool", &doc, &options), Some(&json!(true)));
	assert_eq!(get_path("Args.[1].bool", &doc, &options), None);
	assert_eq!(get_path("Restarting", &doc, &options), None);
}

#[test]
fn lists_fixture_keys() {
	let doc = load_fixture("container_inspect.json");
	let options = PathOptions::default();

	let mut root = list_keys("", &doc, &options).expect("root is an object");
	root.sort();
	assert_eq!(root, vec!["Args", "Created", "Id", "Labels", "Mounts", "Path", "Restarting", "State"]);

	assert_eq!(list_keys("Args", &doc, &options), Some(vec!["[0]".to_owned()]));
	assert_eq!(list_keys("Mounts", &doc, &options), Some(Vec::new()));
	assert_eq!(list_keys("Path", &doc, &options), None);
}

#[test]
fn search_prefers_shallow_status() {
	let doc = load_fixture("container_inspect.json");
	let options = PathOptions::default();

	assert_eq!(search("Status", &doc, 3, &options), Some(&json!("running")));
	assert_eq!(search("FailingStreak", &doc, 0, &options), None);
	assert_eq!(search("FailingStreak", &doc, 1, &options), None);
	assert_eq!(search("FailingStreak", &doc, 2, &options), Some(&json!(0)));
}

#[test]
fn top_level_array_fixture() {
	let doc = load_fixture("containers.json");
	let options = PathOptions::default();

	assert_eq!(get_path("[0].State.Running", &doc, &options), Some(&json!(true)));
	assert_eq!(get_path("[1].Id", &doc, &options), None);
	assert_eq!(list_keys("", &doc, &options), Some(vec!["[0]".to_owned(), "[1]".to_owned()]));
	assert_eq!(search("Id", &doc, 1, &options), Some(&json!(23)));
}

#[test]
fn concurrent_resolution_over_shared_document() {
	let doc = load_fixture("container_inspect.json");
	let options = PathOptions::default();
	let (doc, options) = (&doc, &options);

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(move || get_path("State.Health.Status", doc, options).cloned()))
			.collect();
		for handle in handles {
			assert_eq!(handle.join().expect("thread joins"), Some(json!("healthy")));
		}
	});
}
