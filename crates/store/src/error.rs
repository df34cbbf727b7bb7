//! Error types for store and catalog operations.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors returned by [`WorldConfigStore`](crate::WorldConfigStore) operations.
///
/// `EmptyWorld`, `UnknownNode` and `WrongAccessor` are caller bugs (see
/// [`StoreError::is_invalid_argument`]). A read that finds no cell is not an
/// error; it resolves to the node's disabled value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// A write was attempted without a world key.
	#[error("supplied world was empty (node '{node}')")]
	EmptyWorld {
		/// Path of the node being written.
		node: &'static str,
	},

	/// The node is not part of the store's catalog.
	#[error("unknown node: {path}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownNode {
		/// The unrecognized path.
		path: String,
		/// A close catalog path, if any.
		suggestion: Option<&'static str>,
	},

	/// A read requested a kind the node does not declare.
	#[error("attempted to get '{node}' of kind {declared} as {requested}")]
	WrongAccessor {
		node: &'static str,
		declared: ValueKind,
		requested: ValueKind,
	},

	/// A written value's kind disagrees with the node's kind.
	#[error("'{node}' expects {expected} but got {got}")]
	TypeMismatch {
		node: &'static str,
		expected: ValueKind,
		got: ValueKind,
	},

	/// Text could not be parsed as the node's kind.
	#[error("invalid value for '{node}': {reason}")]
	InvalidValue { node: &'static str, reason: String },
}

impl StoreError {
	/// Returns true for argument errors: logic bugs in the caller that
	/// must not be retried.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(
			self,
			StoreError::EmptyWorld { .. } | StoreError::UnknownNode { .. } | StoreError::WrongAccessor { .. }
		)
	}
}

/// Errors raised while building a [`NodeCatalog`](crate::NodeCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	#[error("node path must not be empty")]
	EmptyPath,

	#[error("duplicate node path: {0}")]
	DuplicatePath(&'static str),

	/// The disabled factory produces a different kind than the default.
	#[error("node '{path}' declares {declared} but its disabled value is {disabled}")]
	DisabledKindMismatch {
		path: &'static str,
		declared: ValueKind,
		disabled: ValueKind,
	},
}
