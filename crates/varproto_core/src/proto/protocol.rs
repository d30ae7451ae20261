use tracing::{debug, trace};

use crate::proto::base64;
use crate::proto::reader::ReaderContext;
use crate::proto::writer::WriterContext;
use crate::proto::{
	ContextKind, FieldIdentifier, InputProtocol, ListIdentifier, MapIdentifier, MessageIdentifier, OutputProtocol, ProtocolError, Result, SetIdentifier,
	StructIdentifier, TType, Var,
};

/// Largest integer such that every integer of smaller magnitude is exact as a double (2^53).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_992;
/// Negated [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

const MAX_SAFE_DOUBLE: f64 = 9_007_199_254_740_992.0;
const MIN_SAFE_DOUBLE: f64 = -MAX_SAFE_DOUBLE;

/// Runtime limits for one protocol instance.
#[derive(Debug, Clone)]
pub struct ProtocolOptions {
	/// Maximum number of simultaneously open contexts on either stack.
	pub max_depth: usize,
}

impl Default for ProtocolOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

impl ProtocolOptions {
	/// Preset without a nesting limit.
	pub fn unbounded() -> Self {
		Self { max_depth: usize::MAX }
	}
}

/// Struct protocol that writes into and reads from a [`Var`] tree instead of a byte stream.
///
/// Containers opened by a `*_begin` write are attached to their parent
/// immediately, so a partially written struct is already visible from the
/// root. Reads walk a root supplied with [`VarProtocol::from_var`] or
/// [`VarProtocol::set_var`].
///
/// One instance serves one struct encode or decode. After any error the
/// instance must be [`reset`](VarProtocol::reset) before reuse.
#[derive(Debug, Default)]
pub struct VarProtocol {
	writers: Vec<WriterContext>,
	readers: Vec<ReaderContext>,
	root: Option<Var>,
	options: ProtocolOptions,
}

impl VarProtocol {
	/// Create an instance with no root, ready for writing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an instance with explicit limits.
	pub fn with_options(options: ProtocolOptions) -> Self {
		Self { options, ..Self::default() }
	}

	/// Create an instance reading from `var`.
	pub fn from_var(var: Var) -> Self {
		Self {
			root: Some(var),
			..Self::default()
		}
	}

	/// Active limits.
	pub fn options(&self) -> &ProtocolOptions {
		&self.options
	}

	/// Pop every open context and clear the root.
	pub fn reset(&mut self) {
		while let Some(context) = self.writers.pop() {
			trace!(kind = %context.kind(), depth = self.writers.len(), "reset: pop write context");
		}
		while let Some(context) = self.readers.pop() {
			trace!(kind = %context.kind(), depth = self.readers.len(), "reset: pop read context");
		}
		self.root = None;
	}

	/// Reset, then supply `var` as the root for reading.
	pub fn set_var(&mut self, var: Var) {
		self.reset();
		self.root = Some(var);
	}

	/// Current root: the supplied read source, or the last struct written at top level.
	pub fn var(&self) -> Option<&Var> {
		self.root.as_ref()
	}

	/// Take the root out of the instance.
	pub fn take_var(&mut self) -> Option<Var> {
		self.root.take()
	}

	/// Number of open write contexts.
	pub fn write_depth(&self) -> usize {
		self.writers.len()
	}

	/// Number of open read contexts.
	pub fn read_depth(&self) -> usize {
		self.readers.len()
	}

	fn write_var(&mut self, var: Var) -> Result<()> {
		match self.writers.last_mut() {
			Some(context) => context.write_var(var),
			None => {
				if !var.is_dictionary() {
					return Err(ProtocolError::RootNotDictionary { got: var.kind() });
				}
				self.root = Some(var);
				Ok(())
			}
		}
	}

	fn push_writer(&mut self, op: &'static str, context: WriterContext) -> Result<()> {
		if self.writers.is_empty() && context.kind() != ContextKind::Dictionary {
			return Err(ProtocolError::RootNotStruct { op, got: context.kind() });
		}
		if self.writers.len() >= self.options.max_depth {
			return Err(ProtocolError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		self.write_var(context.var())?;
		self.writers.push(context);
		Ok(())
	}

	fn pop_writer(&mut self, op: &'static str, expected: &'static str, accepts: fn(ContextKind) -> bool) -> Result<()> {
		let Some(top) = self.writers.last() else {
			return Err(ProtocolError::NoWriteContext { op });
		};
		let got = top.kind();
		if !accepts(got) {
			return Err(ProtocolError::ContextMismatch { op, expected, got });
		}
		self.writers.pop();
		debug!(depth = self.writers.len(), "{op}");
		Ok(())
	}

	fn read_var(&mut self) -> Result<Var> {
		let depth = self.readers.len();
		match self.readers.last_mut() {
			Some(context) => {
				trace!(depth, index = context.index(), kind = %context.kind(), "read_var");
				let var = context.next_var()?;
				context.advance();
				Ok(var)
			}
			None => self.root.clone().ok_or(ProtocolError::RootNotSet),
		}
	}

	fn push_reader(&mut self, op: &'static str, kind: ContextKind, build: fn(Var) -> Result<ReaderContext>) -> Result<usize> {
		if self.readers.is_empty() && kind != ContextKind::Dictionary {
			return Err(ProtocolError::RootNotStruct { op, got: kind });
		}
		if self.readers.len() >= self.options.max_depth {
			return Err(ProtocolError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		let context = build(self.read_var()?)?;
		let size = context.size();
		self.readers.push(context);
		debug!(depth = self.readers.len(), size, "{op}");
		Ok(size)
	}

	fn pop_reader(&mut self, op: &'static str, expected: &'static str, accepts: fn(ContextKind) -> bool) -> Result<()> {
		let Some(top) = self.readers.last() else {
			return Err(ProtocolError::NoReadContext { op });
		};
		let got = top.kind();
		if !accepts(got) {
			return Err(ProtocolError::ContextMismatch { op, expected, got });
		}
		self.readers.pop();
		debug!(depth = self.readers.len(), "{op}");
		Ok(())
	}

	fn read_integer(&mut self) -> Result<i64> {
		match self.read_var()? {
			Var::Int(value) => Ok(i64::from(value)),
			Var::Double(value) => {
				if value % 1.0 != 0.0 {
					return Err(ProtocolError::NotIntegral { value });
				}
				if !(MIN_SAFE_DOUBLE..=MAX_SAFE_DOUBLE).contains(&value) {
					return Err(ProtocolError::DoubleOutOfRange { value });
				}
				Ok(value as i64)
			}
			other => Err(ProtocolError::TypeMismatch {
				expected: "integer",
				got: other.kind(),
			}),
		}
	}
}

fn narrow<T: TryFrom<i64>>(value: i64, target: &'static str) -> Result<T> {
	T::try_from(value).map_err(|_| ProtocolError::IntegerOverflow { value, target })
}

fn element_count(size: usize) -> Result<u32> {
	u32::try_from(size).map_err(|_| ProtocolError::IntegerOverflow {
		value: i64::try_from(size).unwrap_or(i64::MAX),
		target: "u32",
	})
}

impl OutputProtocol for VarProtocol {
	fn write_message_begin(&mut self, _identifier: &MessageIdentifier) -> Result<()> {
		Err(ProtocolError::MessageFramingUnsupported { op: "write_message_begin" })
	}

	fn write_message_end(&mut self) -> Result<()> {
		Err(ProtocolError::MessageFramingUnsupported { op: "write_message_end" })
	}

	fn write_struct_begin(&mut self, identifier: &StructIdentifier) -> Result<()> {
		debug!(name = identifier.name.as_deref().unwrap_or(""), depth = self.writers.len(), "write_struct_begin");
		self.push_writer("write_struct_begin", WriterContext::dictionary())
	}

	fn write_struct_end(&mut self) -> Result<()> {
		self.pop_writer("write_struct_end", "dictionary", |kind| kind == ContextKind::Dictionary)
	}

	fn write_field_begin(&mut self, identifier: &FieldIdentifier) -> Result<()> {
		let name = identifier.name.as_deref().unwrap_or("");
		trace!(name, "write_field_begin");
		let context = self.writers.last_mut().ok_or(ProtocolError::NoWriteContext { op: "write_field_begin" })?;
		context.set_field_name(name)
	}

	fn write_field_end(&mut self) -> Result<()> {
		Ok(())
	}

	fn write_field_stop(&mut self) -> Result<()> {
		Ok(())
	}

	fn write_map_begin(&mut self, identifier: &MapIdentifier) -> Result<()> {
		debug!(size = identifier.size, "write_map_begin");
		self.push_writer("write_map_begin", WriterContext::map())
	}

	fn write_map_end(&mut self) -> Result<()> {
		self.pop_writer("write_map_end", "map_key", |kind| kind == ContextKind::MapKey)
	}

	fn write_list_begin(&mut self, identifier: &ListIdentifier) -> Result<()> {
		debug!(size = identifier.size, "write_list_begin");
		self.push_writer("write_list_begin", WriterContext::list())
	}

	fn write_list_end(&mut self) -> Result<()> {
		self.pop_writer("write_list_end", "list", |kind| kind == ContextKind::List)
	}

	fn write_set_begin(&mut self, identifier: &SetIdentifier) -> Result<()> {
		debug!(size = identifier.size, "write_set_begin");
		self.push_writer("write_set_begin", WriterContext::list())
	}

	fn write_set_end(&mut self) -> Result<()> {
		self.pop_writer("write_set_end", "list", |kind| kind == ContextKind::List)
	}

	fn write_bool(&mut self, value: bool) -> Result<()> {
		self.write_var(Var::Bool(value))
	}

	fn write_i8(&mut self, value: i8) -> Result<()> {
		self.write_var(Var::Int(i32::from(value)))
	}

	fn write_i16(&mut self, value: i16) -> Result<()> {
		self.write_var(Var::Int(i32::from(value)))
	}

	fn write_i32(&mut self, value: i32) -> Result<()> {
		self.write_var(Var::Int(value))
	}

	fn write_i64(&mut self, value: i64) -> Result<()> {
		if !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
			return Err(ProtocolError::Int64OutOfRange { value });
		}
		self.write_var(Var::Double(value as f64))
	}

	fn write_double(&mut self, value: f64) -> Result<()> {
		self.write_var(Var::Double(value))
	}

	fn write_string(&mut self, value: &str) -> Result<()> {
		self.write_var(Var::String(value.to_owned()))
	}

	fn write_binary(&mut self, value: &[u8]) -> Result<()> {
		self.write_var(Var::String(base64::encode(value)))
	}
}

impl InputProtocol for VarProtocol {
	fn read_message_begin(&mut self) -> Result<MessageIdentifier> {
		Err(ProtocolError::MessageFramingUnsupported { op: "read_message_begin" })
	}

	fn read_message_end(&mut self) -> Result<()> {
		Err(ProtocolError::MessageFramingUnsupported { op: "read_message_end" })
	}

	fn read_struct_begin(&mut self) -> Result<StructIdentifier> {
		self.push_reader("read_struct_begin", ContextKind::Dictionary, ReaderContext::dictionary)?;
		Ok(StructIdentifier::default())
	}

	fn read_struct_end(&mut self) -> Result<()> {
		self.pop_reader("read_struct_end", "dictionary", |kind| kind == ContextKind::Dictionary)
	}

	fn read_field_begin(&mut self) -> Result<FieldIdentifier> {
		let op = "read_field_begin";
		let context = self.readers.last().ok_or(ProtocolError::NoReadContext { op })?;
		if context.kind() != ContextKind::Dictionary {
			return Err(ProtocolError::ContextMismatch {
				op,
				expected: "dictionary",
				got: context.kind(),
			});
		}
		if context.is_at_end() {
			trace!("read_field_begin: stop");
			return Ok(FieldIdentifier::stop());
		}

		let (key, value) = context.next_key_value()?;
		let name = if value.is_null() { String::new() } else { key };
		trace!(name = name.as_str(), "read_field_begin");

		Ok(FieldIdentifier {
			name: Some(name),
			field_type: TType::Unknown,
			id: None,
		})
	}

	fn read_field_end(&mut self) -> Result<()> {
		Ok(())
	}

	fn read_map_begin(&mut self) -> Result<MapIdentifier> {
		let size = self.push_reader("read_map_begin", ContextKind::MapKey, ReaderContext::map)?;
		Ok(MapIdentifier {
			key_type: None,
			value_type: None,
			size: element_count(size)?,
		})
	}

	fn read_map_end(&mut self) -> Result<()> {
		self.pop_reader("read_map_end", "map", ContextKind::is_map)
	}

	fn read_list_begin(&mut self) -> Result<ListIdentifier> {
		let size = self.push_reader("read_list_begin", ContextKind::List, ReaderContext::list)?;
		Ok(ListIdentifier::new(TType::Unknown, element_count(size)?))
	}

	fn read_list_end(&mut self) -> Result<()> {
		self.pop_reader("read_list_end", "list", |kind| kind == ContextKind::List)
	}

	fn read_set_begin(&mut self) -> Result<SetIdentifier> {
		let size = self.push_reader("read_set_begin", ContextKind::List, ReaderContext::list)?;
		Ok(SetIdentifier::new(TType::Unknown, element_count(size)?))
	}

	fn read_set_end(&mut self) -> Result<()> {
		self.pop_reader("read_set_end", "list", |kind| kind == ContextKind::List)
	}

	fn read_bool(&mut self) -> Result<bool> {
		match self.read_var()? {
			Var::Bool(value) => {
				trace!(value, "read_bool");
				Ok(value)
			}
			other => Err(ProtocolError::TypeMismatch {
				expected: "boolean",
				got: other.kind(),
			}),
		}
	}

	fn read_i8(&mut self) -> Result<i8> {
		let value = self.read_integer()?;
		trace!(value, "read_i8");
		narrow(value, "i8")
	}

	fn read_i16(&mut self) -> Result<i16> {
		let value = self.read_integer()?;
		trace!(value, "read_i16");
		narrow(value, "i16")
	}

	fn read_i32(&mut self) -> Result<i32> {
		let value = self.read_integer()?;
		trace!(value, "read_i32");
		narrow(value, "i32")
	}

	fn read_i64(&mut self) -> Result<i64> {
		let value = self.read_integer()?;
		trace!(value, "read_i64");
		Ok(value)
	}

	fn read_double(&mut self) -> Result<f64> {
		let value = match self.read_var()? {
			Var::Double(value) => value,
			Var::Int(value) => f64::from(value),
			other => {
				return Err(ProtocolError::TypeMismatch {
					expected: "double",
					got: other.kind(),
				});
			}
		};
		trace!(value, "read_double");
		Ok(value)
	}

	fn read_string(&mut self) -> Result<String> {
		match self.read_var()? {
			Var::String(value) => {
				trace!(value = value.as_str(), "read_string");
				Ok(value)
			}
			other => Err(ProtocolError::TypeMismatch {
				expected: "string",
				got: other.kind(),
			}),
		}
	}

	fn read_binary(&mut self) -> Result<Vec<u8>> {
		match self.read_var()? {
			Var::String(text) => {
				let bytes = base64::decode(&text)?;
				trace!(len = bytes.len(), "read_binary");
				Ok(bytes)
			}
			other => Err(ProtocolError::TypeMismatch {
				expected: "base 64 string",
				got: other.kind(),
			}),
		}
	}

	fn skip(&mut self, field_type: TType) -> Result<()> {
		trace!(?field_type, "skip");
		if let Some(context) = self.readers.last_mut() {
			context.advance();
		}
		Ok(())
	}
}
