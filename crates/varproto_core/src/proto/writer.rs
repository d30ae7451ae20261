use crate::proto::{ContextKind, ProtocolError, Result, Var, VarArray, VarDictionary};

/// One open container on the write stack.
///
/// Map contexts alternate strictly between the key and value phases over the
/// same dictionary.
#[derive(Debug)]
pub(crate) enum WriterContext {
	/// Struct fields.
	Dictionary {
		/// Backing dictionary.
		dict: VarDictionary,
		/// Name set by field begin and consumed by the next value write.
		field_name: Option<String>,
	},
	/// Map waiting for a key.
	MapKey {
		/// Backing dictionary.
		dict: VarDictionary,
	},
	/// Map holding a key and waiting for its value.
	MapValue {
		/// Backing dictionary.
		dict: VarDictionary,
		/// Key written in the previous phase.
		key: String,
	},
	/// List or set elements.
	List {
		/// Backing array.
		array: VarArray,
	},
}

impl WriterContext {
	/// Struct context over a fresh dictionary.
	pub(crate) fn dictionary() -> Self {
		Self::Dictionary {
			dict: VarDictionary::new(),
			field_name: None,
		}
	}

	/// Map context over a fresh dictionary.
	pub(crate) fn map() -> Self {
		Self::MapKey { dict: VarDictionary::new() }
	}

	/// List context over a fresh array.
	pub(crate) fn list() -> Self {
		Self::List { array: VarArray::new() }
	}

	pub(crate) fn kind(&self) -> ContextKind {
		match self {
			Self::Dictionary { .. } => ContextKind::Dictionary,
			Self::MapKey { .. } => ContextKind::MapKey,
			Self::MapValue { .. } => ContextKind::MapValue,
			Self::List { .. } => ContextKind::List,
		}
	}

	/// Handle to the container being built.
	pub(crate) fn var(&self) -> Var {
		match self {
			Self::Dictionary { dict, .. } | Self::MapKey { dict } | Self::MapValue { dict, .. } => Var::Dictionary(dict.clone()),
			Self::List { array } => Var::Array(array.clone()),
		}
	}

	/// Record the field name for the next struct value.
	pub(crate) fn set_field_name(&mut self, name: &str) -> Result<()> {
		match self {
			Self::Dictionary { field_name, .. } => {
				*field_name = Some(name.to_owned());
				Ok(())
			}
			other => Err(ProtocolError::ContextMismatch {
				op: "write_field_begin",
				expected: "dictionary",
				got: other.kind(),
			}),
		}
	}

	/// Insert one value according to the context kind.
	pub(crate) fn write_var(&mut self, var: Var) -> Result<()> {
		match self {
			Self::Dictionary { dict, field_name } => {
				let name = field_name.take().ok_or(ProtocolError::MissingFieldName)?;
				dict.set(name, var);
			}
			Self::List { array } => array.push(var),
			Self::MapKey { dict } => {
				let key = match var {
					Var::String(key) => key,
					other => return Err(ProtocolError::NonStringKey { got: other.kind() }),
				};
				*self = Self::MapValue { dict: dict.clone(), key };
			}
			Self::MapValue { dict, key } => {
				dict.set(std::mem::take(key), var);
				*self = Self::MapKey { dict: dict.clone() };
			}
		}
		Ok(())
	}
}
