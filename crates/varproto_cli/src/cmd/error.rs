use std::path::PathBuf;

use thiserror::Error;
use varproto::proto::{DecodeError, ProtocolError};

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading an input file failed.
	#[error("cannot read {path}: {source}")]
	ReadFile {
		/// File that failed to open or read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// Standard stream I/O failed.
	#[error("stdio: {0}")]
	Stdio(#[from] std::io::Error),
	/// Input document is not valid JSON.
	#[error("invalid json in {path}: {source}")]
	Json {
		/// Document that failed to parse.
		path: PathBuf,
		/// Parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// Report could not be rendered as JSON.
	#[error("cannot render json: {0}")]
	Render(#[source] serde_json::Error),
	/// Input text is not valid base 64.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Protocol call failed.
	#[error("{} error: {source}", .source.kind().as_str())]
	Protocol {
		/// Failing protocol call.
		#[from]
		source: ProtocolError,
	},
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
