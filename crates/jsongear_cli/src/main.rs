#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use jsongear::gear::{GearError, Result, parse};
use log::LevelFilter;

mod cmd;

const NO_CONTENT: &str = "No file content could be read. Either pass a file name via the -f flag or through stdin";

#[derive(Parser)]
#[command(name = "jsongear", about = "Extract values from JSON documents by dotted path")]
struct Cli {
	/// Path to resolve, root to list under, or key to search for. Nest with `.`, index arrays with `[N]`.
	#[arg(short = 'k', long = "key", required_unless_present = "list")]
	key: Option<String>,
	/// JSON file to read; stdin is used when piped.
	#[arg(short = 'f', long)]
	file: Option<PathBuf>,
	/// List the keys under `-k` (or the document root).
	#[arg(short = 'l', long = "list", conflicts_with = "search")]
	list: bool,
	/// Search for `-k` instead of resolving it as a path.
	#[arg(short = 's', long)]
	search: bool,
	/// Maximum search depth.
	#[arg(short = 'd', long, default_value_t = 3)]
	depth: usize,
	#[command(flatten)]
	path: cmd::PathArgs,
	#[command(flatten)]
	render: cmd::render::RenderArgs,
	/// Raise log verbosity (repeatable).
	#[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
	verbose: u8,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let key = cli.key.unwrap_or_default();
	if key.is_empty() && !cli.list {
		return Err(GearError::MissingKey);
	}

	let options = cli.path.to_options()?;
	let content = cmd::input::read_content(cli.file.as_deref())?;
	if content.is_empty() {
		println!("{NO_CONTENT}");
		return Ok(());
	}

	let document = parse(&content)?;

	if cli.list {
		cmd::keys::run(&document, &key, &options, &cli.render)
	} else if cli.search {
		cmd::search::run(&document, &key, cli.depth, &options, &cli.render)
	} else {
		cmd::get::run(&document, &key, &options, &cli.render)
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	env_logger::Builder::new().filter_level(level).parse_default_env().init();
}
