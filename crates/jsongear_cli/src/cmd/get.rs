use jsongear::gear::{PathOptions, Result, Value, get_path};

use crate::cmd::render::{RenderArgs, render_json, render_value};

#[derive(serde::Serialize)]
struct GetJson<'a> {
	mode: &'static str,
	path: &'a str,
	value: Option<&'a Value>,
}

/// Resolve `path` and print the value.
pub fn run(document: &Value, path: &str, options: &PathOptions, render: &RenderArgs) -> Result<()> {
	println!("{}", output(document, path, options, render)?);
	Ok(())
}

fn output(document: &Value, path: &str, options: &PathOptions, render: &RenderArgs) -> Result<String> {
	let value = get_path(path, document, options);
	if value.is_none() {
		log::info!("path {path:?} resolved to nothing");
	}

	if render.json {
		render_json(&GetJson { mode: "get", path, value }, render)
	} else {
		render_value(value, render)
	}
}

#[cfg(test)]
mod tests {
	use jsongear::gear::PathOptions;

	use super::output;
	use crate::cmd::render::RenderArgs;
	use crate::cmd::test_support::inspect_document;

	#[test]
	fn prints_scalar_at_path() {
		let text = output(&inspect_document(), "State.Status", &PathOptions::default(), &RenderArgs::default()).expect("output renders");
		assert_eq!(text, "running");
	}

	#[test]
	fn prints_container_as_json() {
		let text = output(&inspect_document(), "Args", &PathOptions::default(), &RenderArgs::default()).expect("output renders");
		assert_eq!(text, "[\n    {\n        \"bool\": true\n    }\n]");
	}

	#[test]
	fn missing_path_prints_null() {
		let text = output(&inspect_document(), "State.Nope", &PathOptions::default(), &RenderArgs::default()).expect("output renders");
		assert_eq!(text, "null");
	}

	#[test]
	fn json_mode_wraps_value() {
		let render = RenderArgs {
			json: true,
			..RenderArgs::default()
		};
		let text = output(&inspect_document(), "State.Pid", &PathOptions::default(), &render).expect("output renders");
		let json: serde_json::Value = serde_json::from_str(&text).expect("output is json");

		assert_eq!(json["mode"], "get");
		assert_eq!(json["path"], "State.Pid");
		assert_eq!(json["value"], 4242);
	}
}
