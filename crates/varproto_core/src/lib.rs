//! Struct serialization protocol that builds and walks an in-memory dynamic value tree.

/// Value tree, protocol contexts, the protocol facade, and the binary text codec.
pub mod proto;
