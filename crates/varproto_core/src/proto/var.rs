use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Tag of a [`Var`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
	/// Null or undefined.
	Null,
	/// Boolean.
	Bool,
	/// 32-bit integer.
	Int,
	/// Double-precision float.
	Double,
	/// UTF-8 text.
	String,
	/// Ordered sequence.
	Array,
	/// String-keyed dictionary.
	Dictionary,
}

impl VarKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Double => "double",
			Self::String => "string",
			Self::Array => "array",
			Self::Dictionary => "dictionary",
		}
	}
}

impl fmt::Display for VarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Dynamic, self-describing value exchanged with the host.
///
/// Containers are shared handles: cloning a `Var::Array` or `Var::Dictionary`
/// aliases the same storage, so a container attached to a parent keeps
/// receiving children written through another handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Var {
	/// Null or undefined.
	#[default]
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Native integer scalar.
	Int(i32),
	/// Double-precision scalar.
	Double(f64),
	/// Text scalar.
	String(String),
	/// Ordered sequence handle.
	Array(VarArray),
	/// Dictionary handle.
	Dictionary(VarDictionary),
}

impl Var {
	/// Create a fresh empty array value.
	pub fn new_array() -> Self {
		Self::Array(VarArray::new())
	}

	/// Create a fresh empty dictionary value.
	pub fn new_dictionary() -> Self {
		Self::Dictionary(VarDictionary::new())
	}

	/// Return the value tag.
	pub fn kind(&self) -> VarKind {
		match self {
			Self::Null => VarKind::Null,
			Self::Bool(_) => VarKind::Bool,
			Self::Int(_) => VarKind::Int,
			Self::Double(_) => VarKind::Double,
			Self::String(_) => VarKind::String,
			Self::Array(_) => VarKind::Array,
			Self::Dictionary(_) => VarKind::Dictionary,
		}
	}

	/// Return `true` for [`Var::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Return `true` for [`Var::Array`].
	pub fn is_array(&self) -> bool {
		matches!(self, Self::Array(_))
	}

	/// Return `true` for [`Var::Dictionary`].
	pub fn is_dictionary(&self) -> bool {
		matches!(self, Self::Dictionary(_))
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Integer payload.
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Double payload.
	pub fn as_double(&self) -> Option<f64> {
		match self {
			Self::Double(value) => Some(*value),
			_ => None,
		}
	}

	/// Text payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Array handle.
	pub fn as_array(&self) -> Option<&VarArray> {
		match self {
			Self::Array(value) => Some(value),
			_ => None,
		}
	}

	/// Dictionary handle.
	pub fn as_dictionary(&self) -> Option<&VarDictionary> {
		match self {
			Self::Dictionary(value) => Some(value),
			_ => None,
		}
	}

	/// Build an owned tree from a JSON document.
	///
	/// Integers that fit `i32` become [`Var::Int`]; every other number becomes [`Var::Double`].
	pub fn from_json(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(*value),
			serde_json::Value::Number(number) => match number.as_i64().and_then(|value| i32::try_from(value).ok()) {
				Some(value) => Self::Int(value),
				None => Self::Double(number.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(value) => Self::String(value.clone()),
			serde_json::Value::Array(items) => {
				let array = VarArray::new();
				for item in items {
					array.push(Self::from_json(item));
				}
				Self::Array(array)
			}
			serde_json::Value::Object(entries) => {
				let dict = VarDictionary::new();
				for (key, item) in entries {
					dict.set(key.clone(), Self::from_json(item));
				}
				Self::Dictionary(dict)
			}
		}
	}

	/// Render the tree as a JSON document. Non-finite doubles become `null`.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Bool(value) => serde_json::Value::Bool(*value),
			Self::Int(value) => serde_json::Value::from(*value),
			Self::Double(value) => serde_json::Number::from_f64(*value).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Self::String(value) => serde_json::Value::String(value.clone()),
			Self::Array(array) => serde_json::Value::Array(array.to_vec().iter().map(Self::to_json).collect()),
			Self::Dictionary(dict) => {
				let mut out = serde_json::Map::new();
				for (key, item) in dict.entries() {
					out.insert(key, item.to_json());
				}
				serde_json::Value::Object(out)
			}
		}
	}
}

impl From<bool> for Var {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Var {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Var {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<&str> for Var {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Var {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<VarArray> for Var {
	fn from(value: VarArray) -> Self {
		Self::Array(value)
	}
}

impl From<VarDictionary> for Var {
	fn from(value: VarDictionary) -> Self {
		Self::Dictionary(value)
	}
}

impl From<serde_json::Value> for Var {
	fn from(value: serde_json::Value) -> Self {
		Self::from_json(&value)
	}
}

/// Shared handle to an ordered sequence of values.
#[derive(Clone, Default)]
pub struct VarArray(Rc<RefCell<Vec<Var>>>);

impl VarArray {
	/// Create an empty array.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	/// Return `true` when the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	/// Element at `index`, sharing container payloads.
	pub fn get(&self, index: usize) -> Option<Var> {
		self.0.borrow().get(index).cloned()
	}

	/// Append one element.
	pub fn push(&self, value: Var) {
		self.0.borrow_mut().push(value);
	}

	/// Snapshot of the current elements.
	pub fn to_vec(&self) -> Vec<Var> {
		self.0.borrow().clone()
	}

	/// Return `true` when both handles alias the same storage.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl PartialEq for VarArray {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
	}
}

impl fmt::Debug for VarArray {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.0.borrow().iter()).finish()
	}
}

impl FromIterator<Var> for VarArray {
	fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
		Self(Rc::new(RefCell::new(iter.into_iter().collect())))
	}
}

/// Shared handle to a string-keyed dictionary.
///
/// Key enumeration is sorted, so it is stable for as long as the dictionary is
/// not mutated.
#[derive(Clone, Default)]
pub struct VarDictionary(Rc<RefCell<BTreeMap<String, Var>>>);

impl VarDictionary {
	/// Create an empty dictionary.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	/// Return `true` when the dictionary has no entries.
	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	/// Value stored under `key`, sharing container payloads.
	pub fn get(&self, key: &str) -> Option<Var> {
		self.0.borrow().get(key).cloned()
	}

	/// Return `true` when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.borrow().contains_key(key)
	}

	/// Insert or replace one entry, returning the previous value.
	pub fn set(&self, key: impl Into<String>, value: Var) -> Option<Var> {
		self.0.borrow_mut().insert(key.into(), value)
	}

	/// Snapshot of the current key set.
	pub fn keys(&self) -> Vec<String> {
		self.0.borrow().keys().cloned().collect()
	}

	/// Snapshot of the current entries.
	pub fn entries(&self) -> Vec<(String, Var)> {
		self.0.borrow().iter().map(|(key, value)| (key.clone(), value.clone())).collect()
	}

	/// Return `true` when both handles alias the same storage.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl PartialEq for VarDictionary {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
	}
}

impl fmt::Debug for VarDictionary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.0.borrow().iter()).finish()
	}
}

impl<K: Into<String>> FromIterator<(K, Var)> for VarDictionary {
	fn from_iter<I: IntoIterator<Item = (K, Var)>>(iter: I) -> Self {
		Self(Rc::new(RefCell::new(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())))
	}
}
