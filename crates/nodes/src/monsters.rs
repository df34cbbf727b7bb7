//! Monster behaviour nodes.
//!
//! Percentages are whole numbers in `0..=100`; a disabled value of `0`
//! switches the behaviour off.

use multiworld_store::{EffectDescriptor, NodeKey, node};

node!(ZOMBIES_REANIMATE_PERCENT, {
	path: "Zombies.Reanimate Percent",
	kind: Integer,
	default: 50,
	disabled: 0,
	description: "Chance a zombie that dies outside of fire rises again",
});

node!(ZOMBIES_DEBILITATE_PLAYERS, {
	path: "Zombies.Slow Players",
	kind: Boolean,
	default: true,
	disabled: false,
	description: "Whether zombie hits apply the debilitating effect",
});

node!(ZOMBIES_HIT_EFFECT, {
	path: "Zombies.Hit Effect",
	kind: Effect,
	// 10 seconds of slowness IV
	default: EffectDescriptor::new("SLOW", 200, 3),
	disabled: EffectDescriptor::new("NONE", 0, 0),
	description: "Effect applied to players hit by a zombie",
});

node!(SKELETONS_DEFLECT_ARROWS, {
	path: "Skeletons.Deflect Arrows Percent",
	kind: Integer,
	default: 100,
	disabled: 0,
	description: "Chance a skeleton deflects an arrow shot at it",
});

node!(SKELETONS_KNOCK_BACK_PERCENT, {
	path: "Skeletons.Knock Back Percent",
	kind: Integer,
	default: 30,
	disabled: 0,
	description: "Chance a skeleton arrow knocks its target back",
});

node!(SKELETONS_RELEASE_SILVERFISH, {
	path: "Skeletons.Release Silverfish Percent",
	kind: Integer,
	default: 30,
	disabled: 0,
	description: "Chance a skeleton shoots a silverfish instead of an arrow",
});

node!(SKELETONS_ARROW_SPEED, {
	path: "Skeletons.Arrow Speed Multiplier",
	kind: Real,
	default: 1.5,
	disabled: 1.0,
	description: "Velocity multiplier for arrows fired by skeletons",
});

pub(crate) const MONSTERS: &[NodeKey] = &[
	ZOMBIES_REANIMATE_PERCENT.untyped(),
	ZOMBIES_DEBILITATE_PLAYERS.untyped(),
	ZOMBIES_HIT_EFFECT.untyped(),
	SKELETONS_DEFLECT_ARROWS.untyped(),
	SKELETONS_KNOCK_BACK_PERCENT.untyped(),
	SKELETONS_RELEASE_SILVERFISH.untyped(),
	SKELETONS_ARROW_SPEED.untyped(),
];
