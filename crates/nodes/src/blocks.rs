//! Block physics nodes.

use multiworld_store::{BlockRelationList, BlockType, BlockTypeList, NodeKey, node};

node!(FALLING_BLOCKS, {
	path: "Physics.Falling Blocks",
	kind: BlockTypeList,
	default: BlockTypeList::from_iter([BlockType::new("DIRT"), BlockType::new("GRASS"), BlockType::new("COBBLESTONE")]),
	disabled: BlockTypeList::new(),
	description: "Blocks that fall like sand when unsupported",
});

node!(TORCH_BASE_BLOCK, {
	path: "Physics.Torch Base Block",
	kind: BlockType,
	default: BlockType::new("STONE"),
	disabled: BlockType::new("AIR"),
	description: "Only block torches may be attached to",
});

node!(EXPLOSION_DECAY, {
	path: "Physics.Explosion Decay",
	kind: BlockRelationList,
	default: explosion_decay(),
	disabled: BlockRelationList::new(),
	description: "What blocks turn into when caught in an explosion",
});

fn explosion_decay() -> BlockRelationList {
	let mut list = BlockRelationList::new();
	list.add(BlockType::new("STONE"), BlockType::new("COBBLESTONE"));
	list.add(BlockType::new("GRASS"), BlockType::new("DIRT"));
	list
}

pub(crate) const BLOCKS: &[NodeKey] = &[
	FALLING_BLOCKS.untyped(),
	TORCH_BASE_BLOCK.untyped(),
	EXPLOSION_DECAY.untyped(),
];
