use jsongear::gear::{PathOptions, Result, Value, list_keys};

use crate::cmd::render::{RenderArgs, render_json, render_keys};

#[derive(serde::Serialize)]
struct KeysJson<'a> {
	mode: &'static str,
	root: &'a str,
	keys: Option<Vec<String>>,
}

/// List keys under `root` and print them.
pub fn run(document: &Value, root: &str, options: &PathOptions, render: &RenderArgs) -> Result<()> {
	let text = output(document, root, options, render)?;
	if !text.is_empty() {
		println!("{text}");
	}
	Ok(())
}

fn output(document: &Value, root: &str, options: &PathOptions, render: &RenderArgs) -> Result<String> {
	let keys = list_keys(root, document, options);

	if render.json {
		render_json(&KeysJson { mode: "list", root, keys }, render)
	} else {
		Ok(render_keys(keys.as_deref()))
	}
}
