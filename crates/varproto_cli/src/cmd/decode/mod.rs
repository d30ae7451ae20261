use tracing::debug;
use varproto::proto::base64_decode;

use crate::cmd::Result;
use crate::cmd::util::{emit_bytes, hex, read_input};

/// Decode base 64 text from `text` (or stdin) and write the bytes to stdout.
///
/// Surrounding whitespace is ignored so piped input with a trailing newline
/// decodes cleanly.
pub fn run(text: Option<String>, as_hex: bool) -> Result<()> {
	let text = match text {
		Some(text) => text,
		None => String::from_utf8_lossy(&read_input(None)?).into_owned(),
	};
	let bytes = base64_decode(text.trim())?;
	debug!(len = bytes.len(), "decode");

	if as_hex {
		println!("{}", hex(&bytes));
		return Ok(());
	}
	emit_bytes(&bytes)
}
