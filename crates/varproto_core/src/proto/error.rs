use thiserror::Error;

use crate::proto::{ContextKind, DecodeError, VarKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Coarse failure category carried by every [`ProtocolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolErrorKind {
	/// Caller contract violation or unexpected tree shape at the root.
	Unknown,
	/// Operation the value-tree mapping does not support.
	NotImplemented,
	/// Value tag or payload does not fit the requested read.
	InvalidData,
	/// Number or nesting outside the representable range.
	SizeLimit,
}

impl ProtocolErrorKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unknown => "unknown",
			Self::NotImplemented => "not_implemented",
			Self::InvalidData => "invalid_data",
			Self::SizeLimit => "size_limit",
		}
	}
}

/// Errors produced while writing into or reading from a value tree.
#[derive(Debug, Error)]
pub enum ProtocolError {
	/// Message framing has no mapping onto a single value tree.
	#[error("{op} is not implemented: the value protocol carries one struct, not framed messages")]
	MessageFramingUnsupported {
		/// Rejected protocol call.
		op: &'static str,
	},
	/// Map key was not a string.
	#[error("map keys must be strings, got {got}")]
	NonStringKey {
		/// Tag of the rejected key.
		got: VarKind,
	},
	/// Read attempted before a root value was supplied.
	#[error("trying to read but no root value has been set (use VarProtocol::from_var or set_var)")]
	RootNotSet,
	/// Top-level write was not a struct.
	#[error("root node must be a dictionary, got {got}")]
	RootNotDictionary {
		/// Tag of the rejected root value.
		got: VarKind,
	},
	/// Container other than a struct opened at the top level.
	#[error("{op} at the root: only a struct may be opened at top level, got a {got} context")]
	RootNotStruct {
		/// Rejected protocol call.
		op: &'static str,
		/// Kind of context the call would have opened.
		got: ContextKind,
	},
	/// Write issued with no open container.
	#[error("{op} requires an open write context")]
	NoWriteContext {
		/// Rejected protocol call.
		op: &'static str,
	},
	/// Read-side call that needs an open container found none.
	#[error("{op} requires an open read context")]
	NoReadContext {
		/// Rejected protocol call.
		op: &'static str,
	},
	/// Top context kind does not match the call.
	#[error("{op} expected a {expected} context, top of stack is {got}")]
	ContextMismatch {
		/// Rejected protocol call.
		op: &'static str,
		/// Context kind the call requires.
		expected: &'static str,
		/// Context kind found on top of the stack.
		got: ContextKind,
	},
	/// Struct field value written without a preceding field begin.
	#[error("struct value written without a pending field name")]
	MissingFieldName,
	/// Value tag did not match the requested read.
	#[error("expected {expected} value, got {got}")]
	TypeMismatch {
		/// Expected logical value kind.
		expected: &'static str,
		/// Actual value tag.
		got: VarKind,
	},
	/// Double with a fractional part read as an integer.
	#[error("expected integer value, got {value}")]
	NotIntegral {
		/// Offending double.
		value: f64,
	},
	/// Binary payload text was rejected by the codec.
	#[error("invalid base 64 string: {0}")]
	InvalidBinary(#[from] DecodeError),
	/// Container cursor already consumed every element.
	#[error("read past end of {kind} context (size={size})")]
	ContainerExhausted {
		/// Context kind being read.
		kind: ContextKind,
		/// Element count of the container.
		size: usize,
	},
	/// 64-bit write outside the double-exact range.
	#[error("int64 value {value} too large to be represented as a double")]
	Int64OutOfRange {
		/// Offending integer.
		value: i64,
	},
	/// Integral double outside the double-exact range.
	#[error("double value {value} too large for integer")]
	DoubleOutOfRange {
		/// Offending double.
		value: f64,
	},
	/// Integer does not fit the requested width.
	#[error("value {value} too large for {target}")]
	IntegerOverflow {
		/// Decoded integer.
		value: i64,
		/// Target integer type name.
		target: &'static str,
	},
	/// Container nesting exceeded the configured limit.
	#[error("context depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
}

impl ProtocolError {
	/// Category used by callers that only distinguish failure classes.
	pub fn kind(&self) -> ProtocolErrorKind {
		match self {
			Self::MessageFramingUnsupported { .. } | Self::NonStringKey { .. } | Self::RootNotSet => ProtocolErrorKind::NotImplemented,
			Self::RootNotDictionary { .. }
			| Self::RootNotStruct { .. }
			| Self::NoWriteContext { .. }
			| Self::NoReadContext { .. }
			| Self::ContextMismatch { .. }
			| Self::MissingFieldName => {
				ProtocolErrorKind::Unknown
			}
			Self::TypeMismatch { .. } | Self::NotIntegral { .. } | Self::InvalidBinary(_) | Self::ContainerExhausted { .. } => ProtocolErrorKind::InvalidData,
			Self::Int64OutOfRange { .. } | Self::DoubleOutOfRange { .. } | Self::IntegerOverflow { .. } | Self::DepthExceeded { .. } => ProtocolErrorKind::SizeLimit,
		}
	}
}
