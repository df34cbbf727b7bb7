use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::test_nodes::{
	self, BANNED_COMMANDS, BLOCK_DECAY, BREAKABLE_BLOCKS, DAYLIGHT_CYCLE, FALLING_BLOCK, HIT_EFFECT, MAX_MOBS, MOTD,
	SPAWN_RATE,
};
use crate::world::ALL_WORLDS;
use crate::{NodeDef, NodeDefault};

fn store(enabled_for_all: bool) -> WorldConfigStore {
	WorldConfigStore::builder(Arc::new(test_nodes::catalog()))
		.enabled_for_all(enabled_for_all)
		.build()
}

#[test]
fn max_mobs_scenario() {
	let store = store(false);
	store.set("world_a", MAX_MOBS.untyped(), 80_i64).unwrap();

	assert_eq!(store.get_int(MAX_MOBS.untyped(), "world_a").unwrap(), 80);
	assert_eq!(store.get_int(MAX_MOBS.untyped(), "world_b").unwrap(), -1);
}

#[test]
fn round_trip_each_kind() {
	let store = store(false);
	let mut decay = BlockRelationList::new();
	decay.add(BlockType::new("STONE"), BlockType::new("COBBLESTONE"));
	let breakable = BlockTypeList::from_iter([BlockType::new("GLASS"), BlockType::new("LEAVES").with_state(2)]);

	store.set("w", MAX_MOBS.untyped(), 7_i64).unwrap();
	store.set("w", SPAWN_RATE.untyped(), 2.5).unwrap();
	store.set("w", DAYLIGHT_CYCLE.untyped(), false).unwrap();
	store.set("w", MOTD.untyped(), "hello").unwrap();
	store
		.set("w", BANNED_COMMANDS.untyped(), vec!["stop".to_string(), "reload".to_string()])
		.unwrap();
	store
		.set("w", HIT_EFFECT.untyped(), EffectDescriptor::new("POISON", 40, 1))
		.unwrap();
	store.set("w", FALLING_BLOCK.untyped(), BlockType::new("GRAVEL")).unwrap();
	store.set("w", BREAKABLE_BLOCKS.untyped(), breakable.clone()).unwrap();
	store.set("w", BLOCK_DECAY.untyped(), decay.clone()).unwrap();

	assert_eq!(store.get_int(MAX_MOBS.untyped(), "w").unwrap(), 7);
	assert_eq!(store.get_real(SPAWN_RATE.untyped(), "w").unwrap(), 2.5);
	assert!(!store.get_bool(DAYLIGHT_CYCLE.untyped(), "w").unwrap());
	assert_eq!(store.get_text(MOTD.untyped(), "w").unwrap(), "hello");
	assert_eq!(
		store.get_text_list(BANNED_COMMANDS.untyped(), "w").unwrap(),
		vec!["stop".to_string(), "reload".to_string()]
	);
	assert_eq!(
		store.get_effect(HIT_EFFECT.untyped(), "w").unwrap(),
		EffectDescriptor::new("POISON", 40, 1)
	);
	assert_eq!(
		store.get_block_type(FALLING_BLOCK.untyped(), "w").unwrap(),
		BlockType::new("GRAVEL")
	);
	assert_eq!(store.get_block_type_list(BREAKABLE_BLOCKS.untyped(), "w").unwrap(), breakable);
	assert_eq!(store.get_block_relation_list(BLOCK_DECAY.untyped(), "w").unwrap(), decay);
}

#[test]
fn fallback_to_all_worlds() {
	let store = store(true);
	store.set(ALL_WORLDS, MOTD.untyped(), "global motd").unwrap();

	assert_eq!(store.get_text(MOTD.untyped(), "nether").unwrap(), "global motd");
}

#[test]
fn disabled_value_when_nothing_resolves() {
	let store = store(true);

	assert_eq!(store.get_int(MAX_MOBS.untyped(), "w").unwrap(), -1);
	assert_eq!(store.get_real(SPAWN_RATE.untyped(), "w").unwrap(), 0.0);
	assert!(!store.get_bool(DAYLIGHT_CYCLE.untyped(), "w").unwrap());
	assert_eq!(store.get_text(MOTD.untyped(), "w").unwrap(), "");
	assert!(store.get_text_list(BANNED_COMMANDS.untyped(), "w").unwrap().is_empty());
	assert_eq!(
		store.get_effect(HIT_EFFECT.untyped(), "w").unwrap(),
		EffectDescriptor::new("NONE", 0, 0)
	);
	assert_eq!(store.get_block_type(FALLING_BLOCK.untyped(), "w").unwrap(), BlockType::new("AIR"));
	assert!(store.get_block_type_list(BREAKABLE_BLOCKS.untyped(), "w").unwrap().is_empty());
	assert!(store.get_block_relation_list(BLOCK_DECAY.untyped(), "w").unwrap().is_empty());
}

#[test]
fn row_isolation_without_fallback() {
	let store = store(false);
	store.set("world_a", DAYLIGHT_CYCLE.untyped(), true).unwrap();

	assert!(store.get_bool(DAYLIGHT_CYCLE.untyped(), "world_a").unwrap());
	assert!(!store.get_bool(DAYLIGHT_CYCLE.untyped(), "world_b").unwrap());
}

#[test]
fn real_is_truncated_for_integer_nodes() {
	let store = store(false);
	store.set("w", MAX_MOBS.untyped(), 3.9).unwrap();
	assert_eq!(store.get_int(MAX_MOBS.untyped(), "w").unwrap(), 3);

	store.set("w", MAX_MOBS.untyped(), -3.9).unwrap();
	assert_eq!(store.get_int(MAX_MOBS.untyped(), "w").unwrap(), -3);
}

#[test]
fn integer_is_not_widened_for_real_nodes() {
	let store = store(false);
	let err = store.set("w", SPAWN_RATE.untyped(), 2_i64).unwrap_err();

	assert_eq!(
		err,
		StoreError::TypeMismatch {
			node: "test.spawn-rate",
			expected: ValueKind::Real,
			got: ValueKind::Integer,
		}
	);
}

#[test]
fn type_mismatch_keeps_previous_value() {
	let store = store(false);
	store.set("w", MAX_MOBS.untyped(), 80_i64).unwrap();

	let err = store.set("w", MAX_MOBS.untyped(), "eighty").unwrap_err();

	assert!(matches!(err, StoreError::TypeMismatch { .. }));
	assert!(!err.is_invalid_argument());
	assert_eq!(err.to_string(), "'test.max-mobs' expects integer but got text");
	assert_eq!(store.get_int(MAX_MOBS.untyped(), "w").unwrap(), 80);
}

#[test]
fn type_mismatch_on_fresh_cell_writes_nothing() {
	let store = store(false);

	assert!(store.set("w", DAYLIGHT_CYCLE.untyped(), 1_i64).is_err());
	assert!(store.is_empty());
	assert!(!store.is_enabled_in("w"));
}

#[test]
fn empty_world_is_rejected() {
	let store = store(false);
	let err = store.set("", MAX_MOBS.untyped(), 1_i64).unwrap_err();

	assert_eq!(err, StoreError::EmptyWorld { node: "test.max-mobs" });
	assert!(err.is_invalid_argument());
}

static FOREIGN: NodeDef = NodeDef {
	path: "test.max-mobs",
	description: "Same path, different definition",
	default: NodeDefault::Integer(|| 1),
	disabled: NodeDefault::Integer(|| 0),
};

#[test]
fn node_outside_catalog_is_rejected() {
	let store = store(false);
	let err = store.set("w", &FOREIGN, 1_i64).unwrap_err();

	assert!(matches!(err, StoreError::UnknownNode { .. }));
	assert!(store.is_empty());
}

#[rstest]
#[case(ValueKind::Real)]
#[case(ValueKind::Boolean)]
#[case(ValueKind::Text)]
#[case(ValueKind::BlockTypeList)]
fn wrong_accessor_is_invalid_argument(#[case] requested: ValueKind) {
	let store = store(false);
	let err = store.get_value(MAX_MOBS.untyped(), "w", requested).unwrap_err();

	assert_eq!(
		err,
		StoreError::WrongAccessor {
			node: "test.max-mobs",
			declared: ValueKind::Integer,
			requested,
		}
	);
	assert!(err.is_invalid_argument());
}

#[test]
fn kind_specific_accessor_rejects_other_kinds() {
	let store = store(false);

	let err = store.get_bool(MAX_MOBS.untyped(), "w").unwrap_err();
	assert_eq!(err.to_string(), "attempted to get 'test.max-mobs' of kind integer as boolean");
	assert!(store.get_int(MOTD.untyped(), "w").is_err());
	assert!(store.get_block_type(BREAKABLE_BLOCKS.untyped(), "w").is_err());
}

#[test]
fn generic_accessors_follow_fallback() {
	let store = store(true);
	store.set(ALL_WORLDS, SPAWN_RATE.untyped(), 0.25).unwrap();

	assert_eq!(store.get::<f64>(SPAWN_RATE.untyped(), "w").unwrap(), 0.25);
	assert_eq!(
		store.get_value(SPAWN_RATE.untyped(), "w", ValueKind::Real).unwrap(),
		NodeValue::Real(0.25)
	);
	assert_eq!(store.value(SPAWN_RATE, "w"), 0.25);
	assert_eq!(store.value(MAX_MOBS, "w"), -1);
}

#[test]
fn set_from_str_parses_per_kind() {
	let store = store(false);
	store.set_from_str("w", "test.max-mobs", "12").unwrap();
	store.set_from_str("w", "test.hit-effect", "WITHER:100:2").unwrap();
	store.set_from_str("w", "test.breakable-blocks", "GLASS;ICE").unwrap();

	assert_eq!(store.value(MAX_MOBS, "w"), 12);
	assert_eq!(store.value(HIT_EFFECT, "w"), EffectDescriptor::new("WITHER", 100, 2));
	assert!(store.value(BREAKABLE_BLOCKS, "w").contains("ice", 0));
}

#[test]
fn set_from_str_reports_bad_text_and_unknown_paths() {
	let store = store(false);

	let err = store.set_from_str("w", "test.daylight-cycle", "sometimes").unwrap_err();
	assert!(matches!(err, StoreError::InvalidValue { node: "test.daylight-cycle", .. }));

	let err = store.set_from_str("w", "test.max-mob", "3").unwrap_err();
	assert_eq!(
		err,
		StoreError::UnknownNode {
			path: "test.max-mob".to_string(),
			suggestion: Some("test.max-mobs"),
		}
	);
	assert_eq!(err.to_string(), "unknown node: test.max-mob (did you mean 'test.max-mobs'?)");
}

#[test]
fn set_by_path_and_reset() {
	let store = store(false);
	store.set_by_path("w", "test.motd", "custom").unwrap();
	assert_eq!(store.value(MOTD, "w"), "custom");

	store.reset("w", MOTD.untyped()).unwrap();
	assert_eq!(store.value(MOTD, "w"), "Welcome");
}

#[test]
fn enabled_worlds_and_clear() {
	let store = store(true);
	assert!(store.is_empty());
	assert!(store.is_enabled_for_all());

	store.set("world_a", MAX_MOBS.untyped(), 1_i64).unwrap();
	store.set("world_a", MOTD.untyped(), "a").unwrap();
	store.set("world_b", MAX_MOBS.untyped(), 2_i64).unwrap();

	let mut worlds: Vec<String> = store.enabled_worlds().iter().map(ToString::to_string).collect();
	worlds.sort();
	assert_eq!(worlds, vec!["world_a".to_string(), "world_b".to_string()]);
	assert!(store.is_enabled_in("world_a"));
	assert!(!store.is_enabled_in("world_c"));
	assert_eq!(store.len(), 3);

	store.clear();
	store.clear();

	assert!(store.is_empty());
	assert!(store.enabled_worlds().is_empty());
	assert!(!store.is_enabled_in("world_a"));
	assert_eq!(store.get_int(MAX_MOBS.untyped(), "world_a").unwrap(), -1);
}

#[test]
fn toggling_enabled_for_all() {
	let store = store(false);
	store.set(ALL_WORLDS, MAX_MOBS.untyped(), 30_i64).unwrap();
	assert_eq!(store.value(MAX_MOBS, "w"), -1);

	store.set_enabled_for_all(true);
	assert_eq!(store.value(MAX_MOBS, "w"), 30);
}

#[test]
fn options_from_toml() {
	assert_eq!(StoreOptions::from_toml_str("").unwrap(), StoreOptions::default());
	assert_eq!(
		StoreOptions::from_toml_str("enabled-for-all = false").unwrap(),
		StoreOptions { enabled_for_all: false }
	);
	assert!(StoreOptions::from_toml_str("enabled-for-all = 3").is_err());

	let store = WorldConfigStore::builder(Arc::new(test_nodes::catalog()))
		.options(StoreOptions { enabled_for_all: false })
		.build();
	assert!(!store.is_enabled_for_all());
}

proptest! {
	#[test]
	fn prop_real_truncates_toward_zero(r in -1.0e12f64..1.0e12f64) {
		let store = store(false);
		store.set("w", MAX_MOBS.untyped(), r).unwrap();
		prop_assert_eq!(store.value(MAX_MOBS, "w"), r.trunc() as i64);
	}

	#[test]
	fn prop_rows_are_isolated(a in "[a-z]{1,8}", b in "[a-z]{1,8}", v in any::<i64>()) {
		prop_assume!(a != b);
		let store = store(false);
		store.set(&a, MAX_MOBS.untyped(), v).unwrap();
		prop_assert_eq!(store.value(MAX_MOBS, &a), v);
		prop_assert_eq!(store.value(MAX_MOBS, &b), -1);
	}
}
