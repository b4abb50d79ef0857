use std::collections::BTreeSet;

use glide_primitives::{LineRange, Position, RopeSlice};

/// Inputs shared by every target provider.
#[derive(Debug, Clone, Copy)]
pub struct TargetQuery<'a> {
	pub pattern: &'a str,
	pub cursor: Position,
	/// Visible line ranges bounding discovery; may overlap.
	pub visible: &'a [LineRange],
	/// Whole-buffer text.
	pub text: RopeSlice<'a>,
	pub case_sensitive: bool,
}

impl TargetQuery<'_> {
	/// Distinct visible lines that exist in the buffer, ascending.
	pub fn visible_lines(&self) -> BTreeSet<usize> {
		let line_count = self.text.len_lines();
		self.visible.iter().flat_map(|range| range.clamp(line_count).lines()).collect()
	}

	/// Text of `line` without its line terminator.
	pub fn line_text(&self, line: usize) -> String {
		line_text(self.text, line)
	}

	/// Compares two characters under the query's case rule.
	pub fn chars_match(&self, a: char, b: char) -> bool {
		chars_match(a, b, self.case_sensitive)
	}
}

/// Text of `line` without its line terminator; empty past the end of the buffer.
pub fn line_text(text: RopeSlice, line: usize) -> String {
	if line >= text.len_lines() {
		return String::new();
	}
	let mut s: String = text.line(line).chars().collect();
	while s.ends_with(['\n', '\r']) {
		s.pop();
	}
	s
}

/// Compares two characters, folding case when `case_sensitive` is false.
pub fn chars_match(a: char, b: char, case_sensitive: bool) -> bool {
	if case_sensitive { a == b } else { a == b || a.to_lowercase().eq(b.to_lowercase()) }
}

/// Converts a byte offset to a character offset.
pub(crate) fn byte_to_char_offset(s: &str, byte_offset: usize) -> usize {
	s[..byte_offset].chars().count()
}
