//! Fixture nodes shared by the unit tests, one per kind.

use crate::{BlockRelationList, BlockType, BlockTypeList, EffectDescriptor, NodeCatalog};

crate::node!(MAX_MOBS, {
	path: "test.max-mobs",
	kind: Integer,
	default: 50,
	disabled: -1,
	description: "Mob cap",
});

crate::node!(SPAWN_RATE, {
	path: "test.spawn-rate",
	kind: Real,
	default: 1.0,
	disabled: 0.0,
	description: "Spawn rate multiplier",
});

crate::node!(DAYLIGHT_CYCLE, {
	path: "test.daylight-cycle",
	kind: Boolean,
	default: true,
	disabled: false,
	description: "Whether time advances",
});

crate::node!(MOTD, {
	path: "test.motd",
	kind: Text,
	default: "Welcome",
	disabled: "",
	description: "Message of the day",
});

crate::node!(BANNED_COMMANDS, {
	path: "test.banned-commands",
	kind: TextList,
	default: vec!["op".to_string()],
	disabled: Vec::new(),
	description: "Commands players may not run",
});

crate::node!(HIT_EFFECT, {
	path: "test.hit-effect",
	kind: Effect,
	default: EffectDescriptor::new("SLOW", 200, 3),
	disabled: EffectDescriptor::new("NONE", 0, 0),
	description: "Effect applied on hit",
});

crate::node!(FALLING_BLOCK, {
	path: "test.falling-block",
	kind: BlockType,
	default: BlockType::new("SAND"),
	disabled: BlockType::new("AIR"),
	description: "Block affected by gravity",
});

crate::node!(BREAKABLE_BLOCKS, {
	path: "test.breakable-blocks",
	kind: BlockTypeList,
	default: BlockTypeList::from_iter([BlockType::new("DIRT")]),
	disabled: BlockTypeList::new(),
	description: "Blocks players may break",
});

crate::node!(BLOCK_DECAY, {
	path: "test.block-decay",
	kind: BlockRelationList,
	default: BlockRelationList::new(),
	disabled: BlockRelationList::new(),
	description: "What blocks turn into when damaged",
});

pub fn catalog() -> NodeCatalog {
	let mut builder = NodeCatalog::builder();
	builder.register_all([
		MAX_MOBS.untyped(),
		SPAWN_RATE.untyped(),
		DAYLIGHT_CYCLE.untyped(),
		MOTD.untyped(),
		BANNED_COMMANDS.untyped(),
		HIT_EFFECT.untyped(),
		FALLING_BLOCK.untyped(),
		BREAKABLE_BLOCKS.untyped(),
		BLOCK_DECAY.untyped(),
	]);
	match builder.build() {
		Ok(catalog) => catalog,
		Err(e) => panic!("fixture catalog is invalid: {e}"),
	}
}
