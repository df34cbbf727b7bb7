//! Node value kinds and the tagged value carried by every cell.

use crate::types::{BlockRelationList, BlockType, BlockTypeList, EffectDescriptor};

/// The closed set of kinds a node may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Signed integer.
	Integer,
	/// Floating point number.
	Real,
	/// Boolean flag.
	Boolean,
	/// Free-form text.
	Text,
	/// Ordered list of text entries.
	TextList,
	/// Status effect with duration and amplifier.
	Effect,
	/// A single block type.
	BlockType,
	/// Ordered list of block types.
	BlockTypeList,
	/// Ordered list of block-to-block relations.
	BlockRelationList,
}

impl ValueKind {
	/// Human-readable name used in diagnostics.
	pub const fn name(self) -> &'static str {
		match self {
			ValueKind::Integer => "integer",
			ValueKind::Real => "real",
			ValueKind::Boolean => "boolean",
			ValueKind::Text => "text",
			ValueKind::TextList => "text list",
			ValueKind::Effect => "effect",
			ValueKind::BlockType => "block type",
			ValueKind::BlockTypeList => "block type list",
			ValueKind::BlockRelationList => "block relation list",
		}
	}
}

impl core::fmt::Display for ValueKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// The value of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
	/// Integer value.
	Integer(i64),
	/// Real value.
	Real(f64),
	/// Boolean value.
	Boolean(bool),
	/// Text value.
	Text(String),
	/// Text list value.
	TextList(Vec<String>),
	/// Effect value.
	Effect(EffectDescriptor),
	/// Block type value.
	BlockType(BlockType),
	/// Block type list value.
	BlockTypeList(BlockTypeList),
	/// Block relation list value.
	BlockRelationList(BlockRelationList),
}

impl NodeValue {
	/// Returns the runtime kind of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			NodeValue::Integer(_) => ValueKind::Integer,
			NodeValue::Real(_) => ValueKind::Real,
			NodeValue::Boolean(_) => ValueKind::Boolean,
			NodeValue::Text(_) => ValueKind::Text,
			NodeValue::TextList(_) => ValueKind::TextList,
			NodeValue::Effect(_) => ValueKind::Effect,
			NodeValue::BlockType(_) => ValueKind::BlockType,
			NodeValue::BlockTypeList(_) => ValueKind::BlockTypeList,
			NodeValue::BlockRelationList(_) => ValueKind::BlockRelationList,
		}
	}

	/// Returns true if this value's runtime kind is `kind`.
	pub fn matches_kind(&self, kind: ValueKind) -> bool {
		self.kind() == kind
	}

	/// Converts this value for storage under a node of `kind`.
	///
	/// Values of the same kind pass through. A `Real` headed for an `Integer`
	/// node is truncated toward zero; this is the only coercion. Returns the
	/// value back unchanged as `Err` when no rule applies.
	pub fn coerce(self, kind: ValueKind) -> Result<NodeValue, NodeValue> {
		match (self, kind) {
			(NodeValue::Real(r), ValueKind::Integer) => Ok(NodeValue::Integer(r.trunc() as i64)),
			(value, kind) if value.kind() == kind => Ok(value),
			(value, _) => Err(value),
		}
	}

	/// Returns the integer if this is an `Integer` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			NodeValue::Integer(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the number if this is a `Real` variant.
	pub fn as_real(&self) -> Option<f64> {
		match self {
			NodeValue::Real(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the flag if this is a `Boolean` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			NodeValue::Boolean(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the text if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			NodeValue::Text(v) => Some(v),
			_ => None,
		}
	}
}

impl From<i64> for NodeValue {
	fn from(v: i64) -> Self {
		NodeValue::Integer(v)
	}
}

impl From<f64> for NodeValue {
	fn from(v: f64) -> Self {
		NodeValue::Real(v)
	}
}

impl From<bool> for NodeValue {
	fn from(v: bool) -> Self {
		NodeValue::Boolean(v)
	}
}

impl From<String> for NodeValue {
	fn from(v: String) -> Self {
		NodeValue::Text(v)
	}
}

impl From<&str> for NodeValue {
	fn from(v: &str) -> Self {
		NodeValue::Text(v.to_string())
	}
}

impl From<Vec<String>> for NodeValue {
	fn from(v: Vec<String>) -> Self {
		NodeValue::TextList(v)
	}
}

impl From<EffectDescriptor> for NodeValue {
	fn from(v: EffectDescriptor) -> Self {
		NodeValue::Effect(v)
	}
}

impl From<BlockType> for NodeValue {
	fn from(v: BlockType) -> Self {
		NodeValue::BlockType(v)
	}
}

impl From<BlockTypeList> for NodeValue {
	fn from(v: BlockTypeList) -> Self {
		NodeValue::BlockTypeList(v)
	}
}

impl From<BlockRelationList> for NodeValue {
	fn from(v: BlockRelationList) -> Self {
		NodeValue::BlockRelationList(v)
	}
}

/// Typed carrier for node default and disabled values.
///
/// Unlike [`NodeValue`], the variant fixes the Rust type of the factory, so a
/// definition's kind is known without invoking anything and a default can
/// never disagree with the kind it declares.
#[derive(Clone, Copy)]
pub enum NodeDefault {
	Integer(fn() -> i64),
	Real(fn() -> f64),
	Boolean(fn() -> bool),
	Text(fn() -> String),
	TextList(fn() -> Vec<String>),
	Effect(fn() -> EffectDescriptor),
	BlockType(fn() -> BlockType),
	BlockTypeList(fn() -> BlockTypeList),
	BlockRelationList(fn() -> BlockRelationList),
}

impl NodeDefault {
	/// Returns the [`ValueKind`] produced by this factory.
	pub const fn kind(self) -> ValueKind {
		match self {
			NodeDefault::Integer(_) => ValueKind::Integer,
			NodeDefault::Real(_) => ValueKind::Real,
			NodeDefault::Boolean(_) => ValueKind::Boolean,
			NodeDefault::Text(_) => ValueKind::Text,
			NodeDefault::TextList(_) => ValueKind::TextList,
			NodeDefault::Effect(_) => ValueKind::Effect,
			NodeDefault::BlockType(_) => ValueKind::BlockType,
			NodeDefault::BlockTypeList(_) => ValueKind::BlockTypeList,
			NodeDefault::BlockRelationList(_) => ValueKind::BlockRelationList,
		}
	}

	/// Invokes the factory and wraps the result in a [`NodeValue`].
	pub fn to_value(self) -> NodeValue {
		match self {
			NodeDefault::Integer(f) => NodeValue::Integer(f()),
			NodeDefault::Real(f) => NodeValue::Real(f()),
			NodeDefault::Boolean(f) => NodeValue::Boolean(f()),
			NodeDefault::Text(f) => NodeValue::Text(f()),
			NodeDefault::TextList(f) => NodeValue::TextList(f()),
			NodeDefault::Effect(f) => NodeValue::Effect(f()),
			NodeDefault::BlockType(f) => NodeValue::BlockType(f()),
			NodeDefault::BlockTypeList(f) => NodeValue::BlockTypeList(f()),
			NodeDefault::BlockRelationList(f) => NodeValue::BlockRelationList(f()),
		}
	}
}

impl core::fmt::Debug for NodeDefault {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "NodeDefault::{:?}(..)", self.kind())
	}
}

// Seal the FromNodeValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for i64 {}
	impl Sealed for f64 {}
	impl Sealed for bool {}
	impl Sealed for String {}
	impl Sealed for Vec<String> {}
	impl Sealed for super::EffectDescriptor {}
	impl Sealed for super::BlockType {}
	impl Sealed for super::BlockTypeList {}
	impl Sealed for super::BlockRelationList {}
}

/// Rust types that can be extracted from a [`NodeValue`].
pub trait FromNodeValue: sealed::Sealed + Sized {
	/// The kind this type binds to.
	const KIND: ValueKind;

	/// Extracts the payload, returning `None` if the kind doesn't match.
	fn from_value(value: NodeValue) -> Option<Self>;
}

macro_rules! impl_from_node_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl FromNodeValue for $ty {
				const KIND: ValueKind = ValueKind::$variant;

				fn from_value(value: NodeValue) -> Option<Self> {
					match value {
						NodeValue::$variant(v) => Some(v),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_from_node_value! {
	i64 => Integer,
	f64 => Real,
	bool => Boolean,
	String => Text,
	Vec<String> => TextList,
	EffectDescriptor => Effect,
	BlockType => BlockType,
	BlockTypeList => BlockTypeList,
	BlockRelationList => BlockRelationList,
}
