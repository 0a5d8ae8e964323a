use std::io::{IsTerminal, Read};
use std::path::Path;

use jsongear::gear::Result;

/// Read the document from `file`, or from stdin when it is piped.
///
/// An interactive stdin yields an empty buffer rather than blocking.
pub fn read_content(file: Option<&Path>) -> Result<Vec<u8>> {
	if let Some(path) = file.filter(|path| !path.as_os_str().is_empty()) {
		let content = std::fs::read(path)?;
		log::debug!("read {} bytes from {}", content.len(), path.display());
		return Ok(content);
	}

	let stdin = std::io::stdin();
	if stdin.is_terminal() {
		log::debug!("stdin is a terminal, no document piped");
		return Ok(Vec::new());
	}

	let content = read_all(stdin.lock())?;
	log::debug!("read {} bytes from stdin", content.len());
	Ok(content)
}

fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
	let mut content = Vec::new();
	reader.read_to_end(&mut content)?;
	Ok(content)
}
