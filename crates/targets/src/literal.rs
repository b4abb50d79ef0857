//! Literal substring provider.

use glide_primitives::Position;
use regex::{Regex, RegexBuilder};

use crate::query::byte_to_char_offset;
use crate::{Candidate, Result, TargetProvider, TargetQuery};

/// Finds exact (optionally case-folded) occurrences of the pattern on visible lines.
///
/// Matches on one line do not overlap; each records the character that
/// follows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralProvider;

impl TargetProvider for LiteralProvider {
	fn find(&self, query: &TargetQuery<'_>) -> Result<Vec<Candidate>> {
		if query.pattern.is_empty() {
			return Ok(Vec::new());
		}
		let re = literal_regex(query.pattern, query.case_sensitive)?;
		let mut found = Vec::new();
		for line in query.visible_lines() {
			let text = query.line_text(line);
			found.extend(find_in_line(&re, &text, line));
		}
		Ok(found)
	}
}

/// Compiles `pattern` as an escaped literal.
pub(crate) fn literal_regex(pattern: &str, case_sensitive: bool) -> std::result::Result<Regex, regex::Error> {
	RegexBuilder::new(&regex::escape(pattern)).case_insensitive(!case_sensitive).build()
}

/// Returns every match of `re` in one line as candidates.
pub(crate) fn find_in_line<'t>(re: &'t Regex, text: &'t str, line: usize) -> impl Iterator<Item = Candidate> + 't {
	re.find_iter(text).filter(|m| !m.is_empty()).map(move |m| {
		let col = byte_to_char_offset(text, m.start());
		let next_char = text[m.end()..].chars().next();
		Candidate::new(Position::new(line, col), m.as_str(), next_char)
	})
}

#[cfg(test)]
mod tests {
	use glide_primitives::{LineRange, Rope};
	use pretty_assertions::assert_eq;

	use super::*;

	fn query<'a>(rope: &'a Rope, pattern: &'a str, visible: &'a [LineRange], case_sensitive: bool) -> TargetQuery<'a> {
		TargetQuery {
			pattern,
			cursor: Position::default(),
			visible,
			text: rope.slice(..),
			case_sensitive,
		}
	}

	#[test]
	fn finds_occurrences_with_columns_and_next_char() {
		let rope = Rope::from("let foo = foobar;\nfoo\n");
		let visible = [LineRange::new(0, 3)];
		let found = LiteralProvider.find(&query(&rope, "foo", &visible, true)).unwrap();

		assert_eq!(
			found,
			vec![
				Candidate::new(Position::new(0, 4), "foo", Some(' ')),
				Candidate::new(Position::new(0, 10), "foo", Some('b')),
				Candidate::new(Position::new(1, 0), "foo", None),
			]
		);
	}

	#[test]
	fn case_folding_keeps_buffer_text() {
		let rope = Rope::from("Foo fOO foo");
		let visible = [LineRange::new(0, 1)];

		let folded = LiteralProvider.find(&query(&rope, "foo", &visible, false)).unwrap();
		let texts: Vec<_> = folded.iter().map(|c| c.text.as_str()).collect();
		assert_eq!(texts, vec!["Foo", "fOO", "foo"]);

		let exact = LiteralProvider.find(&query(&rope, "foo", &visible, true)).unwrap();
		assert_eq!(exact.len(), 1);
		assert_eq!(exact[0].position, Position::new(0, 8));
	}

	#[test]
	fn regex_metacharacters_are_literal() {
		let rope = Rope::from("a.b axb a.b");
		let visible = [LineRange::new(0, 1)];
		let found = LiteralProvider.find(&query(&rope, "a.b", &visible, true)).unwrap();
		assert_eq!(found.iter().map(|c| c.position.col).collect::<Vec<_>>(), vec![0, 8]);
	}

	#[test]
	fn columns_count_characters_not_bytes() {
		let rope = Rope::from("héllo wörld wörld");
		let visible = [LineRange::new(0, 1)];
		let found = LiteralProvider.find(&query(&rope, "wö", &visible, true)).unwrap();
		assert_eq!(found.iter().map(|c| c.position.col).collect::<Vec<_>>(), vec![6, 12]);
		assert_eq!(found[0].next_char, Some('r'));
	}

	#[test]
	fn only_visible_lines_are_searched() {
		let rope = Rope::from("foo\nfoo\nfoo\n");
		let visible = [LineRange::new(1, 2)];
		let found = LiteralProvider.find(&query(&rope, "foo", &visible, true)).unwrap();
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].position.line, 1);
	}

	#[test]
	fn empty_pattern_finds_nothing() {
		let rope = Rope::from("anything");
		let visible = [LineRange::new(0, 1)];
		assert!(LiteralProvider.find(&query(&rope, "", &visible, true)).unwrap().is_empty());
	}
}
