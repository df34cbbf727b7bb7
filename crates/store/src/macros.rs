//! Registration macros for nodes.

/// Maps a [`ValueKind`](crate::ValueKind) variant name to its Rust type.
#[doc(hidden)]
#[macro_export]
macro_rules! __node_type {
	(Integer) => { i64 };
	(Real) => { f64 };
	(Boolean) => { bool };
	(Text) => { ::std::string::String };
	(TextList) => { ::std::vec::Vec<::std::string::String> };
	(Effect) => { $crate::EffectDescriptor };
	(BlockType) => { $crate::BlockType };
	(BlockTypeList) => { $crate::BlockTypeList };
	(BlockRelationList) => { $crate::BlockRelationList };
}

/// Declares a configuration node and registers it for [`NodeCatalog::collected`](crate::NodeCatalog::collected).
///
/// This macro generates:
/// - A static [`NodeDef`](crate::NodeDef) submitted to the node inventory
/// - A public constant [`TypedNodeKey`](crate::TypedNodeKey) for type-safe reads
///
/// # Example
///
/// ```ignore
/// node!(MAX_MOBS, {
///     path: "General.Max Mobs",
///     kind: Integer,
///     default: 50,
///     disabled: -1,
///     description: "Upper bound on naturally spawned monsters",
/// });
///
/// let mobs: i64 = store.value(MAX_MOBS, "world");
/// ```
#[macro_export]
macro_rules! node {
	($name:ident, {
		path: $path:literal,
		kind: $kind:ident,
		default: $default:expr,
		disabled: $disabled:expr,
		description: $desc:expr
		$(,)?
	}) => {
		$crate::__private::paste::paste! {
			#[doc(hidden)]
			pub static [<NODE_ $name:upper>]: $crate::NodeDef = $crate::NodeDef {
				path: $path,
				description: $desc,
				default: $crate::NodeDefault::$kind(|| -> $crate::__node_type!($kind) {
					::core::convert::Into::into($default)
				}),
				disabled: $crate::NodeDefault::$kind(|| -> $crate::__node_type!($kind) {
					::core::convert::Into::into($disabled)
				}),
			};

			$crate::__private::inventory::submit! {
				$crate::NodeReg(&[<NODE_ $name:upper>])
			}

			#[doc = concat!("Typed handle for the `", $path, "` node.")]
			pub const $name: $crate::TypedNodeKey<$crate::__node_type!($kind)> =
				$crate::TypedNodeKey::new(&[<NODE_ $name:upper>]);
		}
	};
}
