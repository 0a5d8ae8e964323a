use jsongear::gear::{GearError, Result, Value};
use serde::Serialize;
use serde_json::{Number, Serializer};
use serde_json::ser::PrettyFormatter;

/// Output formatting flags shared by every mode.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
	/// Number of indent units per nesting level for container output.
	#[arg(long, default_value_t = 4)]
	pub indent: usize,
	/// Text repeated `--indent` times per nesting level.
	#[arg(long = "indent-str", visible_alias = "indentStr", default_value = " ")]
	pub indent_str: String,
	/// Emit one machine-readable JSON object instead of plain text.
	#[arg(long)]
	pub json: bool,
}

impl Default for RenderArgs {
	fn default() -> Self {
		Self {
			indent: 4,
			indent_str: " ".to_owned(),
			json: false,
		}
	}
}

impl RenderArgs {
	/// Indentation emitted for one nesting level.
	pub fn indent_unit(&self) -> String {
		self.indent_str.repeat(self.indent)
	}
}

/// Render a resolved value for plain-text output.
///
/// Scalars print literally (strings without quotes); absent values print as
/// `null`; containers print as indented JSON.
pub fn render_value(value: Option<&Value>, args: &RenderArgs) -> Result<String> {
	match value {
		None | Some(Value::Null) => Ok("null".to_owned()),
		Some(Value::Bool(flag)) => Ok(flag.to_string()),
		Some(Value::Number(number)) => Ok(render_number(number)),
		Some(Value::String(text)) => Ok(text.clone()),
		Some(container @ (Value::Array(_) | Value::Object(_))) => to_pretty(container, args),
	}
}

/// Floats print in shortest form, so `1.0` prints as `1`.
fn render_number(number: &Number) -> String {
	match number.as_f64() {
		Some(float) if number.is_f64() => float.to_string(),
		_ => number.to_string(),
	}
}

/// Render a key listing, one `- key` line per entry.
pub fn render_keys(keys: Option<&[String]>) -> String {
	match keys {
		None => "No keys".to_owned(),
		Some(keys) => keys.iter().map(|key| format!("- {key}")).collect::<Vec<_>>().join("\n"),
	}
}

/// Render a serializable payload as indented JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T, args: &RenderArgs) -> Result<String> {
	to_pretty(payload, args)
}

fn to_pretty<T: Serialize + ?Sized>(payload: &T, args: &RenderArgs) -> Result<String> {
	let indent = args.indent_unit();
	let mut out = Vec::new();
	let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
	payload.serialize(&mut serializer).map_err(GearError::Render)?;
	Ok(String::from_utf8_lossy(&out).into_owned())
}
