use crate::proto::{
	FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, ProtocolError, Result, SetIdentifier, StructIdentifier, TType, Var, VarKind,
	VarProtocol,
};

/// Write half of the begin/end-bracketed struct protocol.
///
/// Every `*_begin` must be paired with exactly one matching `*_end` in strict
/// LIFO order.
pub trait OutputProtocol {
	/// Open a framed message.
	fn write_message_begin(&mut self, identifier: &MessageIdentifier) -> Result<()>;
	/// Close a framed message.
	fn write_message_end(&mut self) -> Result<()>;
	/// Open a struct.
	fn write_struct_begin(&mut self, identifier: &StructIdentifier) -> Result<()>;
	/// Close the current struct.
	fn write_struct_end(&mut self) -> Result<()>;
	/// Announce the next struct field.
	fn write_field_begin(&mut self, identifier: &FieldIdentifier) -> Result<()>;
	/// Close the current field.
	fn write_field_end(&mut self) -> Result<()>;
	/// Mark the end of the struct's fields.
	fn write_field_stop(&mut self) -> Result<()>;
	/// Open a map.
	fn write_map_begin(&mut self, identifier: &MapIdentifier) -> Result<()>;
	/// Close the current map.
	fn write_map_end(&mut self) -> Result<()>;
	/// Open a list.
	fn write_list_begin(&mut self, identifier: &ListIdentifier) -> Result<()>;
	/// Close the current list.
	fn write_list_end(&mut self) -> Result<()>;
	/// Open a set.
	fn write_set_begin(&mut self, identifier: &SetIdentifier) -> Result<()>;
	/// Close the current set.
	fn write_set_end(&mut self) -> Result<()>;
	/// Write a boolean.
	fn write_bool(&mut self, value: bool) -> Result<()>;
	/// Write a signed 8-bit integer.
	fn write_i8(&mut self, value: i8) -> Result<()>;
	/// Write a signed 16-bit integer.
	fn write_i16(&mut self, value: i16) -> Result<()>;
	/// Write a signed 32-bit integer.
	fn write_i32(&mut self, value: i32) -> Result<()>;
	/// Write a signed 64-bit integer.
	fn write_i64(&mut self, value: i64) -> Result<()>;
	/// Write a double.
	fn write_double(&mut self, value: f64) -> Result<()>;
	/// Write text.
	fn write_string(&mut self, value: &str) -> Result<()>;
	/// Write opaque bytes.
	fn write_binary(&mut self, value: &[u8]) -> Result<()>;
}

/// Read half of the begin/end-bracketed struct protocol.
pub trait InputProtocol {
	/// Open a framed message.
	fn read_message_begin(&mut self) -> Result<MessageIdentifier>;
	/// Close a framed message.
	fn read_message_end(&mut self) -> Result<()>;
	/// Open a struct.
	fn read_struct_begin(&mut self) -> Result<StructIdentifier>;
	/// Close the current struct.
	fn read_struct_end(&mut self) -> Result<()>;
	/// Fetch the next field header, or the stop marker.
	fn read_field_begin(&mut self) -> Result<FieldIdentifier>;
	/// Close the current field.
	fn read_field_end(&mut self) -> Result<()>;
	/// Open a map.
	fn read_map_begin(&mut self) -> Result<MapIdentifier>;
	/// Close the current map.
	fn read_map_end(&mut self) -> Result<()>;
	/// Open a list.
	fn read_list_begin(&mut self) -> Result<ListIdentifier>;
	/// Close the current list.
	fn read_list_end(&mut self) -> Result<()>;
	/// Open a set.
	fn read_set_begin(&mut self) -> Result<SetIdentifier>;
	/// Close the current set.
	fn read_set_end(&mut self) -> Result<()>;
	/// Read a boolean.
	fn read_bool(&mut self) -> Result<bool>;
	/// Read a signed 8-bit integer.
	fn read_i8(&mut self) -> Result<i8>;
	/// Read a signed 16-bit integer.
	fn read_i16(&mut self) -> Result<i16>;
	/// Read a signed 32-bit integer.
	fn read_i32(&mut self) -> Result<i32>;
	/// Read a signed 64-bit integer.
	fn read_i64(&mut self) -> Result<i64>;
	/// Read a double.
	fn read_double(&mut self) -> Result<f64>;
	/// Read text.
	fn read_string(&mut self) -> Result<String>;
	/// Read opaque bytes.
	fn read_binary(&mut self) -> Result<Vec<u8>>;
	/// Discard the next value of type `field_type`.
	fn skip(&mut self, field_type: TType) -> Result<()>;
}

/// Struct that can serialize itself through the protocol traits.
///
/// This is the surface generated struct code provides.
pub trait Structured: Sized {
	/// Write `self` as one struct.
	fn write<O: OutputProtocol + ?Sized>(&self, out: &mut O) -> Result<()>;
	/// Read one struct.
	fn read<I: InputProtocol + ?Sized>(input: &mut I) -> Result<Self>;
}

/// Write one struct into a fresh value tree and return its root dictionary.
pub fn to_var<T: Structured>(value: &T) -> Result<Var> {
	let mut protocol = VarProtocol::new();
	value.write(&mut protocol)?;
	protocol.take_var().ok_or(ProtocolError::RootNotDictionary { got: VarKind::Null })
}

/// Read one struct from `var` through a fresh protocol instance.
pub fn from_var<T: Structured>(var: Var) -> Result<T> {
	let mut protocol = VarProtocol::from_var(var);
	T::read(&mut protocol)
}
