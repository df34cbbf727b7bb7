//! Typed per-world configuration store.
//!
//! A server hosting many worlds configures each one independently. Every
//! configuration node declares a [`ValueKind`], a default value and a
//! disabled value; the store records values per (world, node) and lets any
//! world fall back to the [`ALL_WORLDS`] row when it has no override.
//!
//! This crate provides:
//! - Node definitions ([`NodeDef`], [`NodeDefault`], [`TypedNodeKey`]) and the
//!   registration macro ([`node!`])
//! - The validated [`NodeCatalog`]
//! - The concurrent [`ValueTable`] and [`FallbackResolver`]
//! - [`WorldConfigStore`], the validated write path and typed accessors
//! - Textual value parsing ([`parse`])

mod catalog;
mod def;
mod error;
mod macros;
pub mod parse;
mod resolver;
mod store;
mod table;
mod types;
mod value;
mod world;

#[cfg(test)]
mod test_nodes;

pub use catalog::{NodeCatalog, NodeCatalogBuilder};
pub use def::{NodeDef, NodeKey, NodeReg, TypedNodeKey};
pub use error::{CatalogError, StoreError};
pub use resolver::FallbackResolver;
pub use store::{StoreBuilder, StoreOptions, WorldConfigStore};
pub use table::ValueTable;
pub use types::{BlockRelationList, BlockType, BlockTypeList, EffectDescriptor};
pub use value::{FromNodeValue, NodeDefault, NodeValue, ValueKind};
pub use world::{ALL_WORLDS, WorldKey};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
	pub use paste;
}
