//! Semantic-token decoding and the semantic target provider.
//!
//! Token sources speak the LSP relative-encoded 5-tuple format
//! `[deltaLine, deltaStartChar, length, tokenType, tokenModifiersBitset]`
//! plus a legend. [`decode_semantic_tokens`] turns that into absolute,
//! character-column [`DecodedToken`]s that providers can scan.

use std::str::FromStr;

use glide_primitives::{Position, RopeSlice, TargetKind};
use lsp_types::{SemanticToken, SemanticTokensLegend};

use crate::query::line_text;
use crate::{Candidate, Result, TargetProvider, TargetQuery};

mod fetch;

pub use fetch::{SemanticTokenSource, TokenRequest, TokenResponse, fetch_tokens};

/// Unit the token source counts `deltaStartChar` and `length` in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetEncoding {
	Utf8,
	/// LSP default.
	#[default]
	Utf16,
	Utf32,
}

/// Raw token payload as delivered by a token source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticTokens {
	pub legend: SemanticTokensLegend,
	pub data: Vec<SemanticToken>,
	pub encoding: OffsetEncoding,
}

/// A token with absolute line and character columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedToken {
	pub line: usize,
	pub start_col: usize,
	pub len: usize,
	pub kind: TargetKind,
	pub modifiers: u32,
}

impl DecodedToken {
	pub fn position(&self) -> Position {
		Position::new(self.line, self.start_col)
	}

	pub fn end_col(&self) -> usize {
		self.start_col + self.len
	}

	fn covers(&self, pos: Position) -> bool {
		self.line == pos.line && (self.start_col..self.end_col()).contains(&pos.col)
	}
}

/// Decodes relative-encoded tokens into absolute character spans.
///
/// Tokens past the end of the document, with types missing from the legend
/// or unknown to [`TargetKind`], or empty after clamping to the line end are
/// skipped. Output is in document order.
pub fn decode_semantic_tokens(tokens: &SemanticTokens, text: RopeSlice) -> Vec<DecodedToken> {
	let mut result = Vec::with_capacity(tokens.data.len());
	let mut line: usize = 0;
	let mut start: u32 = 0;
	let total_lines = text.len_lines();

	for token in &tokens.data {
		if token.delta_line > 0 {
			line = line.saturating_add(token.delta_line as usize);
			start = token.delta_start;
		} else {
			start = start.saturating_add(token.delta_start);
		}

		if line >= total_lines {
			continue;
		}

		let Some(type_name) = tokens.legend.token_types.get(token.token_type as usize) else {
			continue;
		};
		let Ok(kind) = TargetKind::from_str(type_name.as_str()) else {
			continue;
		};

		let line_slice = text.line(line);
		let line_len = content_len(line_slice);
		let Some(start_col) = offset_to_col(line_slice, start, tokens.encoding) else {
			continue;
		};
		if start_col >= line_len {
			continue;
		}
		// Clamp tokens that run past the end of the line.
		let end_col = offset_to_col(line_slice, start.saturating_add(token.length), tokens.encoding)
			.unwrap_or(line_len)
			.min(line_len);
		if end_col <= start_col {
			continue;
		}

		result.push(DecodedToken {
			line,
			start_col,
			len: end_col - start_col,
			kind,
			modifiers: token.token_modifiers_bitset,
		});
	}

	result
}

/// Characters on a line, excluding its terminator.
fn content_len(line: RopeSlice) -> usize {
	let mut len = line.len_chars();
	while len > 0 && matches!(line.char(len - 1), '\n' | '\r') {
		len -= 1;
	}
	len
}

/// Converts an encoded in-line offset to a character column.
fn offset_to_col(line: RopeSlice, offset: u32, encoding: OffsetEncoding) -> Option<usize> {
	let offset = offset as usize;
	match encoding {
		OffsetEncoding::Utf8 => (offset <= line.len_bytes()).then(|| line.byte_to_char(offset)),
		OffsetEncoding::Utf16 => (offset <= line.len_utf16_cu()).then(|| line.utf16_cu_to_char(offset)),
		OffsetEncoding::Utf32 => (offset <= line.len_chars()).then_some(offset),
	}
}

/// Returns the token covering `pos`, if any. `tokens` must be in document order.
pub fn token_at(tokens: &[DecodedToken], pos: Position) -> Option<&DecodedToken> {
	let idx = tokens.partition_point(|t| t.position() <= pos);
	let token = tokens.get(idx.checked_sub(1)?)?;
	token.covers(pos).then_some(token)
}

/// Matches the pattern against the text of each decoded token on a visible line.
///
/// A token matches when its text contains the pattern; the candidate spans
/// the whole token so the jump lands on the symbol start.
#[derive(Debug, Clone, Copy)]
pub struct SemanticProvider<'a> {
	tokens: &'a [DecodedToken],
}

impl<'a> SemanticProvider<'a> {
	pub fn new(tokens: &'a [DecodedToken]) -> Self {
		Self { tokens }
	}
}

impl TargetProvider for SemanticProvider<'_> {
	fn find(&self, query: &TargetQuery<'_>) -> Result<Vec<Candidate>> {
		if query.pattern.is_empty() {
			return Ok(Vec::new());
		}
		let needle = fold(query.pattern, query.case_sensitive);
		let lines = query.visible_lines();
		let mut found = Vec::new();
		let mut cached: Option<(usize, Vec<char>)> = None;

		for token in self.tokens.iter().filter(|t| lines.contains(&t.line)) {
			if cached.as_ref().is_none_or(|(line, _)| *line != token.line) {
				cached = Some((token.line, line_text(query.text, token.line).chars().collect()));
			}
			let Some((_, chars)) = cached.as_ref() else {
				continue;
			};
			let Some(span) = chars.get(token.start_col..token.end_col()) else {
				continue;
			};
			let text: String = span.iter().collect();
			if !fold(&text, query.case_sensitive).contains(&needle) {
				continue;
			}
			let next_char = chars.get(token.end_col()).copied();
			found.push(Candidate::new(token.position(), text, next_char).with_kind(token.kind));
		}
		Ok(found)
	}
}

fn fold(s: &str, case_sensitive: bool) -> String {
	if case_sensitive { s.to_string() } else { s.to_lowercase() }
}
