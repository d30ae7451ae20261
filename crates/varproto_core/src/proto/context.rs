use std::fmt;

/// Kind of container a write or read context is building or walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
	/// Struct fields keyed by field name.
	Dictionary,
	/// Map entry, expecting the key next.
	MapKey,
	/// Map entry, expecting the value next.
	MapValue,
	/// List or set elements.
	List,
}

impl ContextKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dictionary => "dictionary",
			Self::MapKey => "map_key",
			Self::MapValue => "map_value",
			Self::List => "list",
		}
	}

	/// Return `true` for either map phase.
	pub fn is_map(self) -> bool {
		matches!(self, Self::MapKey | Self::MapValue)
	}
}

impl fmt::Display for ContextKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
