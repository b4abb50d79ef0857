use std::collections::HashSet;

use glide_config::{DensityThresholds, JumpConfig};
use glide_targets::ScoredCandidate;
use serde::Serialize;
use tracing::trace;

use crate::{Label, LabelAlphabet};

/// Label length policy chosen from the target count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display, strum_macros::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LabelStrategy {
	/// One key per target.
	Single,
	/// Home keys for the best targets, extended + home sequences for the rest.
	Mixed,
	/// Every target gets a two-key sequence.
	Progressive,
}

/// A target with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledTarget {
	pub target: ScoredCandidate,
	pub label: Label,
}

/// Result of [`LabelAssigner::assign`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
	/// `None` when there were no targets.
	pub strategy: Option<LabelStrategy>,
	/// Labeled targets, best first.
	pub labeled: Vec<LabeledTarget>,
	/// Targets that did not fit the label space, best first.
	pub overflow: Vec<ScoredCandidate>,
}

/// What a label keystroke selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
	/// The key completes exactly one label.
	Target(&'a LabeledTarget),
	/// The key starts several sequences; indices into [`Assignment::labeled`].
	Prefix(Vec<usize>),
	NoMatch,
}

impl Assignment {
	pub fn is_empty(&self) -> bool {
		self.labeled.is_empty()
	}

	pub fn len(&self) -> usize {
		self.labeled.len()
	}

	/// Labeled plus overflow targets.
	pub fn total(&self) -> usize {
		self.labeled.len() + self.overflow.len()
	}

	/// Indices of labeled targets whose label starts with `key`.
	pub fn starting_with(&self, key: char) -> Vec<usize> {
		self.labeled.iter().enumerate().filter(|(_, t)| t.label.first() == key).map(|(i, _)| i).collect()
	}

	/// Resolves a first keystroke.
	///
	/// A single-key label matching `key` wins outright. Otherwise one
	/// sequence starting with `key` selects its target, several form a
	/// prefix, and none is no match.
	pub fn resolve(&self, key: char) -> Resolution<'_> {
		if let Some(target) = self.labeled.iter().find(|t| t.label == Label::Single(key)) {
			return Resolution::Target(target);
		}
		let prefix = self.starting_with(key);
		match prefix.len() {
			0 => Resolution::NoMatch,
			1 => Resolution::Target(&self.labeled[prefix[0]]),
			_ => Resolution::Prefix(prefix),
		}
	}

	/// Resolves the second key of a sequence among `subset`.
	pub fn resolve_second(&self, subset: &[usize], first: char, second: char) -> Option<&LabeledTarget> {
		subset
			.iter()
			.filter_map(|&i| self.labeled.get(i))
			.find(|t| t.label == Label::Sequence(first, second))
	}
}

/// Density-adaptive label assigner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAssigner {
	alphabet: LabelAlphabet,
	low: usize,
	high: usize,
}

impl LabelAssigner {
	pub fn new(alphabet: LabelAlphabet, thresholds: DensityThresholds) -> Self {
		Self {
			alphabet,
			low: thresholds.low,
			high: thresholds.high,
		}
	}

	pub fn from_config(config: &JumpConfig) -> Self {
		Self::new(LabelAlphabet::from_config(config), config.density)
	}

	pub fn alphabet(&self) -> &LabelAlphabet {
		&self.alphabet
	}

	/// Same thresholds over a different alphabet.
	pub fn with_alphabet(&self, alphabet: LabelAlphabet) -> Self {
		Self {
			alphabet,
			low: self.low,
			high: self.high,
		}
	}

	/// Same thresholds without the keys that case-insensitively equal any of `keys`.
	pub fn without_keys(&self, keys: &HashSet<char>) -> Self {
		let folded: HashSet<char> = keys.iter().flat_map(|c| c.to_lowercase()).collect();
		self.with_alphabet(self.alphabet.without(|c| c.to_lowercase().any(|l| folded.contains(&l))))
	}

	pub fn strategy_for(&self, count: usize) -> LabelStrategy {
		if count <= self.low {
			LabelStrategy::Single
		} else if count <= self.high {
			LabelStrategy::Mixed
		} else {
			LabelStrategy::Progressive
		}
	}

	/// Targets that can be labeled when `count` targets are present.
	pub fn capacity(&self, count: usize) -> usize {
		let home = self.alphabet.home().len();
		match self.strategy_for(count) {
			LabelStrategy::Single => self.alphabet.len(),
			LabelStrategy::Mixed => home + self.alphabet.extended().len() * home,
			LabelStrategy::Progressive => self.alphabet.len() * home,
		}
	}

	/// Labels `targets` in order; the input is expected best first.
	pub fn assign(&self, targets: Vec<ScoredCandidate>) -> Assignment {
		if targets.is_empty() {
			return Assignment::default();
		}
		let strategy = self.strategy_for(targets.len());
		let labels = self.labels(strategy, targets.len());

		let mut labeled = Vec::with_capacity(labels.len());
		let mut overflow = Vec::new();
		let mut targets = targets.into_iter();
		for (label, target) in labels.into_iter().zip(targets.by_ref()) {
			labeled.push(LabeledTarget { target, label });
		}
		overflow.extend(targets);

		let mut assignment = Assignment {
			strategy: Some(strategy),
			labeled,
			overflow,
		};
		self.avoid_conflicts(&mut assignment);
		trace!(
			%strategy,
			labeled = assignment.labeled.len(),
			overflow = assignment.overflow.len(),
			"Assigned labels"
		);
		assignment
	}

	/// Up to `count` labels for `strategy`, in hand-out order.
	fn labels(&self, strategy: LabelStrategy, count: usize) -> Vec<Label> {
		let home = self.alphabet.home();
		let labels: Box<dyn Iterator<Item = Label> + '_> = match strategy {
			LabelStrategy::Single => Box::new(self.alphabet.all().iter().map(|&c| Label::Single(c))),
			LabelStrategy::Mixed => Box::new(
				home.iter()
					.map(|&c| Label::Single(c))
					.chain(sequences(self.alphabet.extended(), home)),
			),
			LabelStrategy::Progressive => Box::new(sequences(self.alphabet.all(), home)),
		};
		labels.take(count).collect()
	}

	/// Replaces single labels that look like the text right after their
	/// target with an alternate-case key.
	///
	/// A target with no usable replacement loses its label and moves to the
	/// front of the overflow.
	fn avoid_conflicts(&self, assignment: &mut Assignment) {
		let mut taken: HashSet<char> = assignment.labeled.iter().map(|t| t.label.first()).collect();
		let mut dropped = Vec::new();

		for (idx, target) in assignment.labeled.iter_mut().enumerate() {
			let Label::Single(key) = target.label else {
				continue;
			};
			let Some(next) = target.target.candidate.next_char else {
				continue;
			};
			if !same_key_ignoring_case(key, next) {
				continue;
			}
			match self.alternate_key(next, &taken) {
				Some(alt) => {
					trace!(from = %key, to = %alt, "Relabeled conflicting target");
					taken.insert(alt);
					target.label = Label::Single(alt);
				}
				None => dropped.push(idx),
			}
		}

		for idx in dropped.into_iter().rev() {
			let target = assignment.labeled.remove(idx);
			assignment.overflow.insert(0, target.target);
		}
	}

	fn alternate_key(&self, next: char, taken: &HashSet<char>) -> Option<char> {
		self.alphabet
			.all()
			.iter()
			.filter_map(|&c| swap_case(c))
			.find(|&alt| !same_key_ignoring_case(alt, next) && !taken.contains(&alt))
	}
}

/// Row-major cross product of `first` and `second`.
fn sequences<'a>(first: &'a [char], second: &'a [char]) -> impl Iterator<Item = Label> + 'a {
	first.iter().flat_map(move |&a| second.iter().map(move |&b| Label::Sequence(a, b)))
}

fn same_key_ignoring_case(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// The other-case form of `c`, if it has a distinct single-char one.
fn swap_case(c: char) -> Option<char> {
	let mut swapped: Box<dyn Iterator<Item = char>> = if c.is_lowercase() {
		Box::new(c.to_uppercase())
	} else if c.is_uppercase() {
		Box::new(c.to_lowercase())
	} else {
		return None;
	};
	let alt = swapped.next()?;
	(swapped.next().is_none() && alt != c).then_some(alt)
}

#[cfg(test)]
mod tests;
