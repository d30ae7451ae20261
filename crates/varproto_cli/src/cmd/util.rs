use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::cmd::{CliError, Result};

/// Read a whole file, or stdin when `path` is `None`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
	match path {
		Some(path) => std::fs::read(path).map_err(|source| CliError::ReadFile {
			path: path.to_path_buf(),
			source,
		}),
		None => {
			let mut out = Vec::new();
			std::io::stdin().read_to_end(&mut out)?;
			Ok(out)
		}
	}
}

/// Read a JSON document from disk.
pub(crate) fn read_json(path: &Path) -> Result<serde_json::Value> {
	let bytes = read_input(Some(path))?;
	serde_json::from_slice(&bytes).map_err(|source| CliError::Json {
		path: PathBuf::from(path),
		source,
	})
}

/// Pretty-print a serializable payload on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(CliError::Render)?;
	println!("{text}");
	Ok(())
}

/// Write raw bytes to stdout.
pub(crate) fn emit_bytes(bytes: &[u8]) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	stdout.write_all(bytes)?;
	stdout.flush()?;
	Ok(())
}

/// Render bytes as lowercase hex pairs.
pub(crate) fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
