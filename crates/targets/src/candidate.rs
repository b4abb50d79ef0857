use glide_primitives::{Position, TargetKind};
use serde::Serialize;

use crate::query::chars_match;

/// A discovered occurrence of the pattern.
///
/// Immutable once discovered; a pattern change produces a fresh set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
	/// Start of the match.
	pub position: Position,
	/// Match length in characters.
	pub len: usize,
	/// Matched text as it appears in the buffer.
	pub text: String,
	/// Semantic classification, when a token source supplied one.
	pub kind: Option<TargetKind>,
	/// Character right after the match on the same line.
	///
	/// Typing it would extend the pattern to a still-matching one, so labels
	/// must not be confused with it.
	pub next_char: Option<char>,
}

impl Candidate {
	/// Creates an unclassified candidate.
	pub fn new(position: Position, text: impl Into<String>, next_char: Option<char>) -> Self {
		let text = text.into();
		Self {
			position,
			len: text.chars().count(),
			text,
			kind: None,
			next_char,
		}
	}

	/// Sets the classification.
	pub fn with_kind(mut self, kind: TargetKind) -> Self {
		self.kind = Some(kind);
		self
	}

	/// Column one past the last matched character.
	pub fn end_col(&self) -> usize {
		self.position.col + self.len
	}

	/// Characters that would extend `pattern` to a still-matching one.
	///
	/// A candidate may be wider than the pattern, as with whole semantic
	/// tokens. Every occurrence of the pattern inside the text contributes
	/// the character that follows it, falling back to [`Self::next_char`]
	/// when the occurrence ends the text.
	pub fn continuations(&self, pattern: &str, case_sensitive: bool) -> Vec<char> {
		let pattern: Vec<char> = pattern.chars().collect();
		let text: Vec<char> = self.text.chars().collect();
		if pattern.is_empty() || pattern.len() > text.len() {
			return self.next_char.into_iter().collect();
		}
		let mut found = Vec::new();
		for start in 0..=text.len() - pattern.len() {
			let end = start + pattern.len();
			let matches = text[start..end].iter().zip(&pattern).all(|(&a, &b)| chars_match(a, b, case_sensitive));
			if !matches {
				continue;
			}
			match text.get(end) {
				Some(&c) => found.push(c),
				None => found.extend(self.next_char),
			}
		}
		found
	}
}
