//! Two-dimensional (world, node) value table.
//!
//! Rows are world keys, columns are node paths. The table is a pure
//! associative structure: it never validates kinds and never falls back
//! between rows. Validation happens on the store's write path and fallback
//! in the [`FallbackResolver`](crate::FallbackResolver).
//!
//! Rows and cells live in sharded concurrent maps, so readers never block
//! each other and writes to cells of existing rows only lock one row shard.
//! [`ValueTable::clear`] is serialized against writers through a gate lock:
//! a write racing a clear lands either before it (and is removed) or after it.

use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::def::NodeKey;
use crate::value::NodeValue;
use crate::world::WorldKey;


type Row = DashMap<&'static str, NodeValue, FxBuildHasher>;

/// Cell storage keyed by world, then node path.
#[derive(Debug, Default)]
pub struct ValueTable {
	rows: DashMap<WorldKey, Row, FxBuildHasher>,
	gate: RwLock<()>,
}

impl ValueTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or overwrites the cell for `(world, node)`.
	pub fn put(&self, world: &str, node: NodeKey, value: NodeValue) {
		let _gate = self.gate.read();

		if let Some(row) = self.rows.get(world) {
			row.insert(node.path, value);
			return;
		}

		// Another writer may create the row between the miss above and here;
		// `entry` resolves that race under the shard lock.
		self.rows
			.entry(WorldKey::from(world))
			.or_default()
			.insert(node.path, value);
	}

	/// Returns true iff a cell exists for exactly `(world, node)`.
	pub fn contains(&self, world: &str, node: NodeKey) -> bool {
		self.rows
			.get(world)
			.is_some_and(|row| row.contains_key(node.path))
	}

	/// Returns a copy of the cell for `(world, node)`, if present.
	pub fn get_raw(&self, world: &str, node: NodeKey) -> Option<NodeValue> {
		let row = self.rows.get(world)?;
		let cell = row.get(node.path)?;
		Some(cell.value().clone())
	}

	/// World keys with at least one cell, in no particular order.
	pub fn rows(&self) -> Vec<WorldKey> {
		self.rows.iter().map(|row| row.key().clone()).collect()
	}

	pub fn contains_row(&self, world: &str) -> bool {
		self.rows.contains_key(world)
	}

	/// Number of cells across all rows.
	pub fn len(&self) -> usize {
		self.rows.iter().map(|row| row.value().len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Removes every cell. Idempotent.
	pub fn clear(&self) {
		let _gate = self.gate.write();
		self.rows.clear();
	}
}
