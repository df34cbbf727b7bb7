//! Two-level fallback resolution.
//!
//! # Resolution Order
//!
//! 1. The world's own cell
//! 2. The [`ALL_WORLDS`] cell, only when the store applies to all worlds
//! 3. The node's disabled value
//!
//! A recovered value whose kind differs from the node's kind is treated like
//! a miss. The write path never stores such a value, so this only triggers
//! when a table is populated directly.

use crate::def::NodeKey;
use crate::table::ValueTable;
use crate::value::NodeValue;
use crate::world::ALL_WORLDS;


/// Resolves node values against a [`ValueTable`].
///
/// The resolver is stateless and created per resolution; it borrows the
/// table and copies the `enabled_for_all` flag at creation.
pub struct FallbackResolver<'a> {
	table: &'a ValueTable,
	all_worlds: bool,
}

impl<'a> FallbackResolver<'a> {
	/// Creates a resolver that does not consult the [`ALL_WORLDS`] row.
	pub fn new(table: &'a ValueTable) -> Self {
		Self { table, all_worlds: false }
	}

	/// Enables or disables the [`ALL_WORLDS`] fallback.
	pub fn with_all_worlds(mut self, enabled: bool) -> Self {
		self.all_worlds = enabled;
		self
	}

	/// Resolves `node` for `world`. Never fails; an unresolvable read yields
	/// the node's disabled value.
	pub fn resolve(&self, node: NodeKey, world: &str) -> NodeValue {
		let found = self.table.get_raw(world, node).or_else(|| {
			if self.all_worlds {
				self.table.get_raw(ALL_WORLDS, node)
			} else {
				None
			}
		});

		match found {
			Some(value) if value.matches_kind(node.kind()) => value,
			Some(value) => {
				tracing::warn!(
					domain = "store",
					node = node.path,
					world,
					expected = node.kind().name(),
					got = value.kind().name(),
					"cell kind mismatch; falling back to disabled value",
				);
				node.disabled_value()
			}
			None => node.disabled_value(),
		}
	}
}
