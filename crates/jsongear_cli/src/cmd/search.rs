use jsongear::gear::{PathOptions, Result, Value, search};

use crate::cmd::render::{RenderArgs, render_json, render_value};

#[derive(serde::Serialize)]
struct SearchJson<'a> {
	mode: &'static str,
	key: &'a str,
	depth: usize,
	value: Option<&'a Value>,
}

/// Search for `key` up to `depth` levels and print the first match.
pub fn run(document: &Value, key: &str, depth: usize, options: &PathOptions, render: &RenderArgs) -> Result<()> {
	println!("{}", output(document, key, depth, options, render)?);
	Ok(())
}

fn output(document: &Value, key: &str, depth: usize, options: &PathOptions, render: &RenderArgs) -> Result<String> {
	let value = search(key, document, depth, options);
	if value.is_none() {
		log::info!("no {key:?} within depth {depth}");
	}

	if render.json {
		render_json(
			&SearchJson {
				mode: "search",
				key,
				depth,
				value,
			},
			render,
		)
	} else {
		render_value(value, render)
	}
}
