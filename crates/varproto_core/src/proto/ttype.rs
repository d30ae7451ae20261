/// Wire type tag used by struct code to describe fields and container elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TType {
	/// End-of-struct marker.
	Stop,
	/// No value.
	Void,
	/// Boolean.
	Bool,
	/// Signed 8-bit integer.
	I08,
	/// Double-precision float.
	Double,
	/// Signed 16-bit integer.
	I16,
	/// Signed 32-bit integer.
	I32,
	/// Signed 64-bit integer.
	I64,
	/// Text or binary.
	String,
	/// Nested struct.
	Struct,
	/// Key/value map.
	Map,
	/// Unordered set.
	Set,
	/// Ordered list.
	List,
	/// Type not recoverable from the source.
	Unknown,
}

/// Kind of a framed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TMessageType {
	/// Request expecting a reply.
	Call,
	/// Successful reply.
	Reply,
	/// Failed reply.
	Exception,
	/// Request without a reply.
	OneWay,
}

/// Message header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageIdentifier {
	/// Method name.
	pub name: String,
	/// Message kind.
	pub message_type: TMessageType,
	/// Sequence number.
	pub sequence_number: i32,
}

/// Struct header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructIdentifier {
	/// Struct name, when known.
	pub name: Option<String>,
}

impl StructIdentifier {
	/// Identifier for a named struct.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: Some(name.into()) }
	}
}

/// Field header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentifier {
	/// Field name. `None` only for the stop marker.
	pub name: Option<String>,
	/// Field type tag.
	pub field_type: TType,
	/// Numeric field id. Reads never recover ids from the tree and report `None`.
	pub id: Option<i16>,
}

impl FieldIdentifier {
	/// Identifier for a named, numbered field.
	pub fn new(name: impl Into<String>, field_type: TType, id: i16) -> Self {
		Self {
			name: Some(name.into()),
			field_type,
			id: Some(id),
		}
	}

	/// End-of-struct marker.
	pub fn stop() -> Self {
		Self {
			name: None,
			field_type: TType::Stop,
			id: None,
		}
	}

	/// Return `true` for the end-of-struct marker.
	pub fn is_stop(&self) -> bool {
		self.field_type == TType::Stop
	}
}

/// Map header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapIdentifier {
	/// Key type, when known.
	pub key_type: Option<TType>,
	/// Value type, when known.
	pub value_type: Option<TType>,
	/// Number of entries.
	pub size: u32,
}

impl MapIdentifier {
	/// Header for a typed map of `size` entries.
	pub fn new(key_type: TType, value_type: TType, size: u32) -> Self {
		Self {
			key_type: Some(key_type),
			value_type: Some(value_type),
			size,
		}
	}
}

/// List header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIdentifier {
	/// Element type.
	pub element_type: TType,
	/// Number of elements.
	pub size: u32,
}

impl ListIdentifier {
	/// Header for a typed list of `size` elements.
	pub fn new(element_type: TType, size: u32) -> Self {
		Self { element_type, size }
	}
}

/// Set header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetIdentifier {
	/// Element type.
	pub element_type: TType,
	/// Number of elements.
	pub size: u32,
}

impl SetIdentifier {
	/// Header for a typed set of `size` elements.
	pub fn new(element_type: TType, size: u32) -> Self {
		Self { element_type, size }
	}
}
