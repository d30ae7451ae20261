/// Base 64 text to bytes command.
pub mod decode;
/// Bytes to base 64 text command.
pub mod encode;
/// CLI error type.
pub mod error;
/// Top-level struct walk command.
pub mod inspect;
/// Shared input and output helpers.
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{CliError, Result};
