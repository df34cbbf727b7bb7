//! World-wide limits.

use multiworld_store::{NodeKey, node};

node!(MAX_MOBS, {
	path: "General.Max Mobs",
	kind: Integer,
	default: 50,
	disabled: -1,
	description: "Upper bound on naturally spawned monsters per world",
});

node!(WORLD_DIFFICULTY_LABEL, {
	path: "General.Difficulty Label",
	kind: Text,
	default: "hardcore",
	disabled: "",
	description: "Difficulty name shown to players entering the world",
});

node!(BLOCKED_COMMANDS, {
	path: "General.Blocked Commands",
	kind: TextList,
	default: vec!["home".to_string(), "spawn".to_string()],
	disabled: Vec::new(),
	description: "Commands players cannot use in the world",
});

pub(crate) const GENERAL: &[NodeKey] = &[
	MAX_MOBS.untyped(),
	WORLD_DIFFICULTY_LABEL.untyped(),
	BLOCKED_COMMANDS.untyped(),
];
