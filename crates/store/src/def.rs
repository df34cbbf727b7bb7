//! Node definitions and handles.

use std::marker::PhantomData;

use crate::value::{FromNodeValue, NodeDefault, NodeValue, ValueKind};

/// Definition of a configuration node (static metadata).
///
/// The kind of a node is the kind of its default factory; the catalog
/// rejects definitions whose disabled factory produces a different kind.
#[derive(Clone, Copy)]
pub struct NodeDef {
	/// Unique configuration path, e.g. `"Zombies.Reanimate Percent"`.
	pub path: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Value used when an administrator resets the node.
	pub default: NodeDefault,
	/// Value returned when no cell resolves for a lookup.
	pub disabled: NodeDefault,
}

impl NodeDef {
	/// Declared kind of this node.
	pub const fn kind(&self) -> ValueKind {
		self.default.kind()
	}

	/// Fresh value from the default factory.
	pub fn default_value(&self) -> NodeValue {
		self.default.to_value()
	}

	/// Fresh value from the disabled factory.
	pub fn disabled_value(&self) -> NodeValue {
		self.disabled.to_value()
	}
}

impl core::fmt::Debug for NodeDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("NodeDef")
			.field("path", &self.path)
			.field("kind", &self.kind())
			.finish()
	}
}

/// Handle to a node definition, used for store lookups.
pub type NodeKey = &'static NodeDef;

/// Inventory registration for nodes declared with [`node!`](crate::node).
pub struct NodeReg(pub &'static NodeDef);
inventory::collect!(NodeReg);

/// Typed handle to a node definition with compile-time kind information.
pub struct TypedNodeKey<T: FromNodeValue> {
	def: &'static NodeDef,
	_marker: PhantomData<fn() -> T>,
}

impl<T: FromNodeValue> Clone for TypedNodeKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: FromNodeValue> Copy for TypedNodeKey<T> {}

impl<T: FromNodeValue> TypedNodeKey<T> {
	/// Creates a typed handle.
	///
	/// # Panics
	///
	/// Panics if `def` does not declare `T`'s kind, or if its disabled
	/// factory produces another kind. In a `const` or `static` initializer
	/// this is a compile error.
	pub const fn new(def: &'static NodeDef) -> Self {
		assert!(
			def.kind() as u8 == T::KIND as u8,
			"TypedNodeKey kind does not match NodeDef kind"
		);
		assert!(
			def.disabled.kind() as u8 == T::KIND as u8,
			"TypedNodeKey kind does not match NodeDef disabled kind"
		);
		Self {
			def,
			_marker: PhantomData,
		}
	}

	/// Returns the underlying node definition.
	pub const fn def(&self) -> &'static NodeDef {
		self.def
	}

	pub const fn path(&self) -> &'static str {
		self.def.path
	}

	/// Returns the untyped key for use with the kind-specific accessors.
	pub const fn untyped(&self) -> NodeKey {
		self.def
	}

	/// The node's disabled value as `T`.
	pub fn disabled(&self) -> T {
		match T::from_value(self.def.disabled_value()) {
			Some(v) => v,
			None => unreachable!("disabled kind checked in TypedNodeKey::new"),
		}
	}
}

impl<T: FromNodeValue> core::fmt::Debug for TypedNodeKey<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("TypedNodeKey").field(&self.def.path).finish()
	}
}
