//! Semantic tokens read from a JSON file in LSP wire shape.

use std::path::Path;

use anyhow::{Context, Result, bail};
use glide_targets::{OffsetEncoding, SemanticTokens};
use lsp_types::{SemanticToken, SemanticTokensLegend};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TokenFile {
	legend: SemanticTokensLegend,
	data: Vec<u32>,
	#[serde(default)]
	encoding: Encoding,
}

#[derive(Debug, Default, Deserialize)]
enum Encoding {
	#[serde(rename = "utf-8")]
	Utf8,
	#[default]
	#[serde(rename = "utf-16")]
	Utf16,
	#[serde(rename = "utf-32")]
	Utf32,
}

impl From<Encoding> for OffsetEncoding {
	fn from(encoding: Encoding) -> Self {
		match encoding {
			Encoding::Utf8 => Self::Utf8,
			Encoding::Utf16 => Self::Utf16,
			Encoding::Utf32 => Self::Utf32,
		}
	}
}

pub fn load(path: &Path) -> Result<SemanticTokens> {
	let source = std::fs::read_to_string(path).with_context(|| format!("reading semantic tokens from {}", path.display()))?;
	parse(&source).with_context(|| format!("parsing semantic tokens from {}", path.display()))
}

pub fn parse(source: &str) -> Result<SemanticTokens> {
	let file: TokenFile = serde_json::from_str(source)?;
	if file.data.len() % 5 != 0 {
		bail!("token data holds {} integers, not a multiple of 5", file.data.len());
	}
	let data = file
		.data
		.chunks_exact(5)
		.map(|chunk| SemanticToken {
			delta_line: chunk[0],
			delta_start: chunk[1],
			length: chunk[2],
			token_type: chunk[3],
			token_modifiers_bitset: chunk[4],
		})
		.collect();
	Ok(SemanticTokens {
		legend: file.legend,
		data,
		encoding: file.encoding.into(),
	})
}
