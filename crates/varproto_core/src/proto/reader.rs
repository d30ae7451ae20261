use crate::proto::{ContextKind, ProtocolError, Result, Var, VarArray, VarDictionary};

/// One open container on the read stack.
///
/// Dictionary-backed contexts capture the key list once at creation. The
/// cursor never moves backwards and stops at the element count.
#[derive(Debug)]
pub(crate) enum ReaderContext {
	/// Struct fields.
	Dictionary {
		/// Source dictionary.
		dict: VarDictionary,
		/// Keys captured at creation.
		keys: Vec<String>,
		/// Next field position.
		index: usize,
	},
	/// Map entries, read as alternating key and value pulls.
	Map {
		/// Source dictionary.
		dict: VarDictionary,
		/// Keys captured at creation.
		keys: Vec<String>,
		/// Next entry position.
		index: usize,
		/// Whether the key of the current entry was already pulled.
		at_value: bool,
	},
	/// List or set elements.
	List {
		/// Source array.
		array: VarArray,
		/// Next element position.
		index: usize,
	},
}

impl ReaderContext {
	/// Struct context over a dictionary value.
	pub(crate) fn dictionary(var: Var) -> Result<Self> {
		match var {
			Var::Dictionary(dict) => Ok(Self::Dictionary {
				keys: dict.keys(),
				dict,
				index: 0,
			}),
			other => Err(ProtocolError::TypeMismatch {
				expected: "dictionary",
				got: other.kind(),
			}),
		}
	}

	/// Map context over a dictionary value.
	pub(crate) fn map(var: Var) -> Result<Self> {
		match var {
			Var::Dictionary(dict) => Ok(Self::Map {
				keys: dict.keys(),
				dict,
				index: 0,
				at_value: false,
			}),
			other => Err(ProtocolError::TypeMismatch {
				expected: "dictionary",
				got: other.kind(),
			}),
		}
	}

	/// List context over an array value.
	pub(crate) fn list(var: Var) -> Result<Self> {
		match var {
			Var::Array(array) => Ok(Self::List { array, index: 0 }),
			other => Err(ProtocolError::TypeMismatch {
				expected: "array",
				got: other.kind(),
			}),
		}
	}

	pub(crate) fn kind(&self) -> ContextKind {
		match self {
			Self::Dictionary { .. } => ContextKind::Dictionary,
			Self::Map { at_value: false, .. } => ContextKind::MapKey,
			Self::Map { at_value: true, .. } => ContextKind::MapValue,
			Self::List { .. } => ContextKind::List,
		}
	}

	pub(crate) fn index(&self) -> usize {
		match self {
			Self::Dictionary { index, .. } | Self::Map { index, .. } | Self::List { index, .. } => *index,
		}
	}

	/// Element count: keys for dictionary-backed contexts, length for lists.
	pub(crate) fn size(&self) -> usize {
		match self {
			Self::Dictionary { keys, .. } | Self::Map { keys, .. } => keys.len(),
			Self::List { array, .. } => array.len(),
		}
	}

	pub(crate) fn is_at_end(&self) -> bool {
		self.index() >= self.size()
	}

	/// Move past the current element. Map contexts take two calls per entry.
	pub(crate) fn advance(&mut self) {
		if self.is_at_end() {
			return;
		}

		match self {
			Self::Dictionary { index, .. } | Self::List { index, .. } => *index += 1,
			Self::Map { index, at_value, .. } => {
				if *at_value {
					*index += 1;
				}
				*at_value = !*at_value;
			}
		}
	}

	/// Key and value of the current struct field, without advancing.
	pub(crate) fn next_key_value(&self) -> Result<(String, Var)> {
		match self {
			Self::Dictionary { dict, keys, index } => {
				let key = self.key_at(keys, *index)?;
				let value = dict.get(key).unwrap_or(Var::Null);
				Ok((key.to_owned(), value))
			}
			other => Err(ProtocolError::ContextMismatch {
				op: "read_field_begin",
				expected: "dictionary",
				got: other.kind(),
			}),
		}
	}

	/// Value at the cursor, without advancing.
	///
	/// Map contexts yield the entry key in the key phase and its value in the
	/// value phase.
	pub(crate) fn next_var(&self) -> Result<Var> {
		match self {
			Self::Dictionary { dict, keys, index }
			| Self::Map {
				dict,
				keys,
				index,
				at_value: true,
			} => {
				let key = self.key_at(keys, *index)?;
				Ok(dict.get(key).unwrap_or(Var::Null))
			}
			Self::Map {
				keys, index, at_value: false, ..
			} => Ok(Var::String(self.key_at(keys, *index)?.to_owned())),
			Self::List { array, index } => array.get(*index).ok_or(ProtocolError::ContainerExhausted {
				kind: ContextKind::List,
				size: array.len(),
			}),
		}
	}

	fn key_at<'k>(&self, keys: &'k [String], index: usize) -> Result<&'k str> {
		keys.get(index).map(String::as_str).ok_or(ProtocolError::ContainerExhausted {
			kind: self.kind(),
			size: keys.len(),
		})
	}
}
