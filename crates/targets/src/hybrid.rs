//! Literal matches classified by semantic tokens.

use crate::literal::{find_in_line, literal_regex};
use crate::semantic::token_at;
use crate::{Candidate, DecodedToken, Result, TargetProvider, TargetQuery};

/// Matches literal substrings and tags each match with the kind of the
/// token covering its first character.
///
/// Without tokens this behaves exactly like [`LiteralProvider`](crate::LiteralProvider).
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridProvider<'a> {
	tokens: Option<&'a [DecodedToken]>,
}

impl<'a> HybridProvider<'a> {
	pub fn new(tokens: Option<&'a [DecodedToken]>) -> Self {
		Self { tokens }
	}
}

impl TargetProvider for HybridProvider<'_> {
	fn find(&self, query: &TargetQuery<'_>) -> Result<Vec<Candidate>> {
		if query.pattern.is_empty() {
			return Ok(Vec::new());
		}
		let re = literal_regex(query.pattern, query.case_sensitive)?;
		let mut found = Vec::new();
		for line in query.visible_lines() {
			let text = query.line_text(line);
			for candidate in find_in_line(&re, &text, line) {
				let kind = self.tokens.and_then(|tokens| token_at(tokens, candidate.position)).map(|t| t.kind);
				found.push(match kind {
					Some(kind) => candidate.with_kind(kind),
					None => candidate,
				});
			}
		}
		Ok(found)
	}
}

#[cfg(test)]
mod tests {
	use glide_primitives::{LineRange, Position, Rope, TargetKind};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::LiteralProvider;

	fn token(line: usize, start_col: usize, len: usize, kind: TargetKind) -> DecodedToken {
		DecodedToken {
			line,
			start_col,
			len,
			kind,
			modifiers: 0,
		}
	}

	#[test]
	fn classifies_by_covering_token() {
		let rope = Rope::from("self.value = value();\n");
		let tokens = [token(0, 5, 5, TargetKind::Property), token(0, 13, 5, TargetKind::Function)];
		let visible = [LineRange::new(0, 1)];
		let query = TargetQuery {
			pattern: "val",
			cursor: Position::default(),
			visible: &visible,
			text: rope.slice(..),
			case_sensitive: true,
		};

		let kinds: Vec<_> = HybridProvider::new(Some(&tokens)).find(&query).unwrap().into_iter().map(|c| (c.position.col, c.kind)).collect();
		assert_eq!(kinds, vec![(5, Some(TargetKind::Property)), (13, Some(TargetKind::Function))]);
	}

	#[test]
	fn without_tokens_matches_literal_provider() {
		let rope = Rope::from("alpha beta\nalphabet\n");
		let visible = [LineRange::new(0, 2)];
		let query = TargetQuery {
			pattern: "alp",
			cursor: Position::default(),
			visible: &visible,
			text: rope.slice(..),
			case_sensitive: false,
		};
		assert_eq!(HybridProvider::new(None).find(&query).unwrap(), LiteralProvider.find(&query).unwrap());
	}
}
