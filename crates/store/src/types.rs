//! Structured payloads stored by effect and block nodes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A status effect applied to an entity.
///
/// Textual form: `NAME[:TICKS[:AMPLIFIER]]`, e.g. `SLOW:200:3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectDescriptor {
	pub effect: String,
	pub duration_ticks: u32,
	pub amplifier: u8,
}

impl EffectDescriptor {
	pub fn new(effect: impl Into<String>, duration_ticks: u32, amplifier: u8) -> Self {
		Self {
			effect: effect.into(),
			duration_ticks,
			amplifier,
		}
	}
}

impl fmt::Display for EffectDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.effect, self.duration_ticks, self.amplifier)
	}
}

impl FromStr for EffectDescriptor {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut parts = s.trim().split(':');
		let effect = parts
			.next()
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.ok_or_else(|| format!("invalid effect: '{s}' (missing effect name)"))?;
		let duration_ticks = match parts.next() {
			Some(ticks) => ticks
				.trim()
				.parse::<u32>()
				.map_err(|_| format!("invalid effect duration: '{ticks}'"))?,
			None => 0,
		};
		let amplifier = match parts.next() {
			Some(amp) => amp
				.trim()
				.parse::<u8>()
				.map_err(|_| format!("invalid effect amplifier: '{amp}'"))?,
			None => 0,
		};
		if parts.next().is_some() {
			return Err(format!("invalid effect: '{s}' (expected NAME[:TICKS[:AMPLIFIER]])"));
		}
		Ok(Self::new(effect, duration_ticks, amplifier))
	}
}

/// A block type, optionally narrowed to specific state values.
///
/// An empty state set matches every state of the named block. Names are
/// stored upper-cased, so equality and [`matches`](Self::matches) both ignore
/// case. Textual form: `NAME[@STATE,STATE...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockType {
	name: String,
	states: BTreeSet<u16>,
}

impl BlockType {
	pub fn new(name: impl Into<String>) -> Self {
		let mut name = name.into();
		name.make_ascii_uppercase();
		Self {
			name,
			states: BTreeSet::new(),
		}
	}

	/// Adds an accepted state value.
	pub fn with_state(mut self, state: u16) -> Self {
		self.states.insert(state);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn states(&self) -> impl Iterator<Item = u16> + '_ {
		self.states.iter().copied()
	}

	/// Returns true if a block named `name` in `state` is covered by this type.
	pub fn matches(&self, name: &str, state: u16) -> bool {
		self.name.eq_ignore_ascii_case(name) && (self.states.is_empty() || self.states.contains(&state))
	}
}

impl fmt::Display for BlockType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		let mut states = self.states.iter();
		if let Some(first) = states.next() {
			write!(f, "@{first}")?;
			for state in states {
				write!(f, ",{state}")?;
			}
		}
		Ok(())
	}
}

impl FromStr for BlockType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (name, states) = match s.trim().split_once('@') {
			Some((name, states)) => (name.trim(), Some(states)),
			None => (s.trim(), None),
		};
		if name.is_empty() {
			return Err(format!("invalid block type: '{s}' (missing block name)"));
		}
		let mut block = BlockType::new(name);
		for state in states.into_iter().flat_map(|states| states.split(',')) {
			let state = state
				.trim()
				.parse::<u16>()
				.map_err(|_| format!("invalid block state: '{state}' in '{s}'"))?;
			block.states.insert(state);
		}
		Ok(block)
	}
}

/// Ordered list of block types. Textual form separates entries with `;`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BlockTypeList(Vec<BlockType>);

impl BlockTypeList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, block: BlockType) {
		self.0.push(block);
	}

	/// Returns true if any entry matches the given block and state.
	pub fn contains(&self, name: &str, state: u16) -> bool {
		self.0.iter().any(|block| block.matches(name, state))
	}

	pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<BlockType> for BlockTypeList {
	fn from_iter<I: IntoIterator<Item = BlockType>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl fmt::Display for BlockTypeList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, block) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(";")?;
			}
			write!(f, "{block}")?;
		}
		Ok(())
	}
}

impl FromStr for BlockTypeList {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.split(';')
			.map(str::trim)
			.filter(|entry| !entry.is_empty())
			.map(BlockType::from_str)
			.collect()
	}
}

/// Ordered list of `from > to` block relations, e.g. stone turning into
/// cobblestone. Textual form: `FROM>TO;FROM>TO`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BlockRelationList(Vec<(BlockType, BlockType)>);

impl BlockRelationList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, from: BlockType, to: BlockType) {
		self.0.push((from, to));
	}

	/// Returns the target of the first relation whose source matches.
	pub fn related(&self, name: &str, state: u16) -> Option<&BlockType> {
		self.0
			.iter()
			.find(|(from, _)| from.matches(name, state))
			.map(|(_, to)| to)
	}

	pub fn contains(&self, name: &str, state: u16) -> bool {
		self.related(name, state).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&BlockType, &BlockType)> {
		self.0.iter().map(|(from, to)| (from, to))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for BlockRelationList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, (from, to)) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(";")?;
			}
			write!(f, "{from}>{to}")?;
		}
		Ok(())
	}
}

impl FromStr for BlockRelationList {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut list = BlockRelationList::new();
		for entry in s.split(';').map(str::trim).filter(|entry| !entry.is_empty()) {
			let (from, to) = entry
				.split_once('>')
				.ok_or_else(|| format!("invalid block relation: '{entry}' (expected FROM>TO)"))?;
			list.add(from.parse()?, to.parse()?);
		}
		Ok(list)
	}
}
