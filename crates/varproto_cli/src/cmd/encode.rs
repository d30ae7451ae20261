use std::path::PathBuf;

use tracing::debug;
use varproto::proto::base64_encode;

use crate::cmd::Result;
use crate::cmd::util::read_input;

/// Encode a file (or stdin) as base 64 text on stdout.
pub fn run(input: Option<PathBuf>) -> Result<()> {
	let bytes = read_input(input.as_deref())?;
	debug!(len = bytes.len(), "encode");
	println!("{}", base64_encode(&bytes));
	Ok(())
}
