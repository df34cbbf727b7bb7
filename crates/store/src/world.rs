use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Reserved world key for the global fallback row.
///
/// Real worlds must never be named this.
pub const ALL_WORLDS: &str = "@all";

/// Identifier of a world namespace.
///
/// Hashes and compares like the underlying `str`, so tables keyed by
/// `WorldKey` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldKey(Arc<str>);

impl WorldKey {
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self(name.into())
	}

	/// The global fallback key.
	pub fn all() -> Self {
		Self::new(ALL_WORLDS)
	}

	pub fn is_all(&self) -> bool {
		&*self.0 == ALL_WORLDS
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for WorldKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for WorldKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for WorldKey {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for WorldKey {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}

impl PartialEq<str> for WorldKey {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for WorldKey {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}

impl fmt::Display for WorldKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
