//! Built-in node catalog.
//!
//! Nodes are declared with [`multiworld_store::node!`]; each declaration
//! yields a [`TypedNodeKey`](multiworld_store::TypedNodeKey) constant. Use
//! [`catalog`] to get a validated catalog of every built-in node.

mod blocks;
mod general;
mod monsters;

use multiworld_store::{CatalogError, NodeCatalog, NodeCatalogBuilder};

/// Typed handles for built-in nodes.
pub mod keys {
	pub use crate::blocks::*;
	pub use crate::general::*;
	pub use crate::monsters::*;
}

/// Registers every built-in node with `builder`.
pub fn register_builtins(builder: &mut NodeCatalogBuilder) {
	builder.register_all(general::GENERAL.iter().copied());
	builder.register_all(monsters::MONSTERS.iter().copied());
	builder.register_all(blocks::BLOCKS.iter().copied());
}

/// Builds a catalog holding exactly the built-in nodes.
pub fn catalog() -> Result<NodeCatalog, CatalogError> {
	let mut builder = NodeCatalog::builder();
	register_builtins(&mut builder);
	builder.build()
}
