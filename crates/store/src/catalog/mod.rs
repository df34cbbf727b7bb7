//! Immutable catalog of known nodes.
//!
//! The catalog is built once from static [`NodeDef`]s, either registered
//! explicitly through [`NodeCatalogBuilder`] or collected from every
//! [`node!`](crate::node) invocation linked into the binary. Building checks
//! the invariants the store relies on: unique paths and a disabled value of
//! the declared kind.

use rustc_hash::FxHashMap;

use crate::def::{NodeDef, NodeKey, NodeReg};
use crate::error::CatalogError;


/// Registry of node definitions indexed by path.
#[derive(Debug, Default)]
pub struct NodeCatalog {
	nodes: Vec<NodeKey>,
	by_path: FxHashMap<&'static str, usize>,
}

impl NodeCatalog {
	pub fn builder() -> NodeCatalogBuilder {
		NodeCatalogBuilder::default()
	}

	/// Builds a catalog from every node submitted through [`node!`](crate::node).
	pub fn collected() -> Result<Self, CatalogError> {
		let mut builder = Self::builder();
		for reg in inventory::iter::<NodeReg> {
			builder.register(reg.0);
		}
		builder.build()
	}

	/// Finds a node by its configuration path.
	pub fn find(&self, path: &str) -> Option<NodeKey> {
		self.by_path.get(path).map(|&idx| self.nodes[idx])
	}

	/// Returns true if this exact definition belongs to the catalog.
	pub fn contains(&self, node: &NodeDef) -> bool {
		self.find(node.path).is_some_and(|def| std::ptr::eq(def, node))
	}

	/// Nodes in registration order.
	pub fn iter(&self) -> impl Iterator<Item = NodeKey> + '_ {
		self.nodes.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Suggests a similar node path using fuzzy matching.
	pub fn suggest(&self, path: &str) -> Option<&'static str> {
		self.nodes
			.iter()
			.map(|def| def.path)
			.min_by_key(|candidate| strsim::levenshtein(path, candidate))
			.filter(|candidate| strsim::levenshtein(path, candidate) <= 3)
	}
}

/// Collects node definitions and validates them into a [`NodeCatalog`].
#[derive(Debug, Default)]
pub struct NodeCatalogBuilder {
	nodes: Vec<NodeKey>,
}

impl NodeCatalogBuilder {
	pub fn register(&mut self, def: NodeKey) -> &mut Self {
		self.nodes.push(def);
		self
	}

	pub fn register_all(&mut self, defs: impl IntoIterator<Item = NodeKey>) -> &mut Self {
		self.nodes.extend(defs);
		self
	}

	pub fn build(self) -> Result<NodeCatalog, CatalogError> {
		let mut by_path = FxHashMap::default();
		by_path.reserve(self.nodes.len());

		for (idx, def) in self.nodes.iter().enumerate() {
			validate_node_def(def)?;
			if by_path.insert(def.path, idx).is_some() {
				return Err(CatalogError::DuplicatePath(def.path));
			}
		}

		tracing::debug!(domain = "catalog", nodes = self.nodes.len(), "node catalog built");
		Ok(NodeCatalog {
			nodes: self.nodes,
			by_path,
		})
	}
}

fn validate_node_def(def: &NodeDef) -> Result<(), CatalogError> {
	if def.path.is_empty() {
		return Err(CatalogError::EmptyPath);
	}
	if def.disabled.kind() != def.kind() {
		return Err(CatalogError::DisabledKindMismatch {
			path: def.path,
			declared: def.kind(),
			disabled: def.disabled.kind(),
		});
	}
	Ok(())
}
