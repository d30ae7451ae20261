mod base64;
mod context;
mod error;
mod protocol;
mod reader;
mod traits;
mod ttype;
mod var;
mod writer;

/// Binary-to-text codec used for opaque byte payloads.
pub use base64::{DecodeError, decode as base64_decode, encode as base64_encode};
/// Container context kinds shared by both traversal stacks.
pub use context::ContextKind;
/// Error and result aliases.
pub use error::{ProtocolError, ProtocolErrorKind, Result};
/// Protocol facade over the value tree and its options.
pub use protocol::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, ProtocolOptions, VarProtocol};
/// Protocol contract implemented by the facade and consumed by struct code.
pub use traits::{InputProtocol, OutputProtocol, Structured, from_var, to_var};
/// Wire type tags and call identifiers.
pub use ttype::{FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, SetIdentifier, StructIdentifier, TMessageType, TType};
/// Dynamic value tree types.
pub use var::{Var, VarArray, VarDictionary, VarKind};
