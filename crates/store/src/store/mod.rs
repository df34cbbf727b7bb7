//! The per-world configuration store.
//!
//! [`WorldConfigStore`] owns a [`ValueTable`] and a shared [`NodeCatalog`].
//! Writes are validated against the node's declared kind; reads go through
//! the [`FallbackResolver`] and are narrowed by the typed accessors.
//!
//! ```ignore
//! let store = WorldConfigStore::builder(catalog).enabled_for_all(false).build();
//! store.set("world_a", MAX_MOBS.untyped(), 80)?;
//! assert_eq!(store.get_int(MAX_MOBS.untyped(), "world_a")?, 80);
//! assert_eq!(store.get_int(MAX_MOBS.untyped(), "world_b")?, -1);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

use crate::catalog::NodeCatalog;
use crate::def::{NodeKey, TypedNodeKey};
use crate::error::StoreError;
use crate::parse;
use crate::resolver::FallbackResolver;
use crate::table::ValueTable;
use crate::types::{BlockRelationList, BlockType, BlockTypeList, EffectDescriptor};
use crate::value::{FromNodeValue, NodeValue, ValueKind};
use crate::world::WorldKey;

#[cfg(test)]
mod tests;

/// Store-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StoreOptions {
	/// Whether worlds without their own cell fall back to the
	/// [`ALL_WORLDS`](crate::ALL_WORLDS) row. Servers whose worlds are
	/// created at runtime rely on this, so it defaults to on.
	pub enabled_for_all: bool,
}

impl Default for StoreOptions {
	fn default() -> Self {
		Self { enabled_for_all: true }
	}
}

impl StoreOptions {
	/// Reads options from a TOML fragment; missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(source)
	}
}

/// Builder for [`WorldConfigStore`].
pub struct StoreBuilder {
	catalog: Arc<NodeCatalog>,
	options: StoreOptions,
}

impl StoreBuilder {
	/// Replaces all options at once.
	pub fn options(mut self, options: StoreOptions) -> Self {
		self.options = options;
		self
	}

	/// Overrides [`StoreOptions::enabled_for_all`].
	pub fn enabled_for_all(mut self, enabled: bool) -> Self {
		self.options.enabled_for_all = enabled;
		self
	}

	/// Creates an empty store over the catalog.
	pub fn build(self) -> WorldConfigStore {
		WorldConfigStore {
			catalog: self.catalog,
			table: ValueTable::new(),
			enabled_for_all: AtomicBool::new(self.options.enabled_for_all),
		}
	}
}

/// Typed multi-world configuration store.
///
/// All operations take `&self`; share the store across threads with an
/// [`Arc`].
#[derive(Debug)]
pub struct WorldConfigStore {
	catalog: Arc<NodeCatalog>,
	table: ValueTable,
	enabled_for_all: AtomicBool,
}

impl WorldConfigStore {
	/// Creates an empty store with default [`StoreOptions`].
	pub fn new(catalog: Arc<NodeCatalog>) -> Self {
		Self::builder(catalog).build()
	}

	pub fn builder(catalog: Arc<NodeCatalog>) -> StoreBuilder {
		StoreBuilder {
			catalog,
			options: StoreOptions::default(),
		}
	}

	pub fn catalog(&self) -> &NodeCatalog {
		&self.catalog
	}

	/// Sets the value of `node` for `world`.
	///
	/// The value must have the node's declared kind; a `Real` written to an
	/// `Integer` node is truncated toward zero. On any error the table is
	/// left untouched.
	///
	/// # Errors
	///
	/// - [`StoreError::EmptyWorld`] if `world` is empty
	/// - [`StoreError::UnknownNode`] if `node` is not in the catalog
	/// - [`StoreError::TypeMismatch`] if the value has another kind
	pub fn set(&self, world: &str, node: NodeKey, value: impl Into<NodeValue>) -> Result<(), StoreError> {
		if world.is_empty() {
			return Err(StoreError::EmptyWorld { node: node.path });
		}
		if !self.catalog.contains(node) {
			return Err(StoreError::UnknownNode {
				path: node.path.to_string(),
				suggestion: None,
			});
		}

		let value = value.into().coerce(node.kind()).map_err(|rejected| {
			tracing::warn!(
				domain = "store",
				node = node.path,
				world,
				expected = node.kind().name(),
				got = rejected.kind().name(),
				"rejected write with mismatched kind",
			);
			StoreError::TypeMismatch {
				node: node.path,
				expected: node.kind(),
				got: rejected.kind(),
			}
		})?;

		tracing::debug!(domain = "store", node = node.path, world, "set node value");
		self.table.put(world, node, value);
		Ok(())
	}

	/// Sets a node identified by its catalog path.
	pub fn set_by_path(&self, world: &str, path: &str, value: impl Into<NodeValue>) -> Result<(), StoreError> {
		let node = self.lookup(path)?;
		self.set(world, node, value)
	}

	/// Parses `text` according to the node's kind and sets it.
	///
	/// # Errors
	///
	/// Returns [`StoreError::InvalidValue`] if the text doesn't parse, in
	/// addition to the errors of [`WorldConfigStore::set`].
	pub fn set_from_str(&self, world: &str, path: &str, text: &str) -> Result<(), StoreError> {
		let node = self.lookup(path)?;
		let value = parse::parse_value_for_kind(text, node.kind()).map_err(|reason| StoreError::InvalidValue {
			node: node.path,
			reason,
		})?;
		self.set(world, node, value)
	}

	/// Writes the node's default value for `world`.
	pub fn reset(&self, world: &str, node: NodeKey) -> Result<(), StoreError> {
		self.set(world, node, node.default_value())
	}

	fn lookup(&self, path: &str) -> Result<NodeKey, StoreError> {
		self.catalog.find(path).ok_or_else(|| StoreError::UnknownNode {
			path: path.to_string(),
			suggestion: self.catalog.suggest(path),
		})
	}

	fn resolver(&self) -> FallbackResolver<'_> {
		FallbackResolver::new(&self.table).with_all_worlds(self.is_enabled_for_all())
	}

	fn check_kind(node: NodeKey, requested: ValueKind) -> Result<(), StoreError> {
		if node.kind() != requested {
			return Err(StoreError::WrongAccessor {
				node: node.path,
				declared: node.kind(),
				requested,
			});
		}
		Ok(())
	}

	/// Resolves `node` for `world` as `T`.
	///
	/// # Errors
	///
	/// Returns [`StoreError::WrongAccessor`] if `T` is not bound to the
	/// node's declared kind.
	pub fn get<T: FromNodeValue>(&self, node: NodeKey, world: &str) -> Result<T, StoreError> {
		Self::check_kind(node, T::KIND)?;
		let resolved = self.resolver().resolve(node, world);
		T::from_value(resolved)
			.or_else(|| T::from_value(node.disabled_value()))
			.ok_or(StoreError::WrongAccessor {
				node: node.path,
				declared: node.kind(),
				requested: T::KIND,
			})
	}

	/// Resolves `node` for `world` as an untyped value, for callers that
	/// only know the expected kind at runtime.
	pub fn get_value(&self, node: NodeKey, world: &str, expected: ValueKind) -> Result<NodeValue, StoreError> {
		Self::check_kind(node, expected)?;
		Ok(self.resolver().resolve(node, world))
	}

	/// Resolves a typed handle. The kind was checked when the handle was
	/// created, so this cannot fail.
	pub fn value<T: FromNodeValue>(&self, key: TypedNodeKey<T>, world: &str) -> T {
		let resolved = self.resolver().resolve(key.def(), world);
		T::from_value(resolved).unwrap_or_else(|| key.disabled())
	}

	/// Resolves a [`ValueKind::Integer`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_int(&self, node: NodeKey, world: &str) -> Result<i64, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::Real`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_real(&self, node: NodeKey, world: &str) -> Result<f64, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::Boolean`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_bool(&self, node: NodeKey, world: &str) -> Result<bool, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::Text`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_text(&self, node: NodeKey, world: &str) -> Result<String, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::TextList`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_text_list(&self, node: NodeKey, world: &str) -> Result<Vec<String>, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::Effect`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_effect(&self, node: NodeKey, world: &str) -> Result<EffectDescriptor, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::BlockType`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_block_type(&self, node: NodeKey, world: &str) -> Result<BlockType, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::BlockTypeList`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_block_type_list(&self, node: NodeKey, world: &str) -> Result<BlockTypeList, StoreError> {
		self.get(node, world)
	}

	/// Resolves a [`ValueKind::BlockRelationList`] node; [`StoreError::WrongAccessor`] for any other kind.
	pub fn get_block_relation_list(&self, node: NodeKey, world: &str) -> Result<BlockRelationList, StoreError> {
		self.get(node, world)
	}

	/// Worlds with at least one cell, in no particular order.
	pub fn enabled_worlds(&self) -> Vec<WorldKey> {
		self.table.rows()
	}

	pub fn is_enabled_in(&self, world: &str) -> bool {
		self.table.contains_row(world)
	}

	/// Whether worlds without their own cell fall back to the global row.
	pub fn is_enabled_for_all(&self) -> bool {
		self.enabled_for_all.load(Ordering::Relaxed)
	}

	pub fn set_enabled_for_all(&self, enabled: bool) {
		self.enabled_for_all.store(enabled, Ordering::Relaxed);
	}

	/// Returns true when no cell has been written since construction or the
	/// last [`clear`](Self::clear).
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Number of cells across all worlds.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	/// Removes every cell. Idempotent.
	pub fn clear(&self) {
		let cells = self.table.len();
		self.table.clear();
		tracing::info!(domain = "store", cells, "cleared world config store");
	}
}
