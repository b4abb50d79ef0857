//! Command payloads accepted from the host's command layer.

use glide_targets::JumpMode;
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use thiserror::Error;

/// One entry point of the engine, tagged by `command`.
///
/// ```json
/// {"command": "start-jump", "mode": "hybrid"}
/// {"command": "type-char", "char": "f"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::VariantNames)]
#[serde(tag = "command", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JumpCommand {
	StartJump {
		mode: JumpMode,
	},
	Cancel,
	Backspace,
	Enter,
	NextMatch,
	PreviousMatch,
	TypeChar {
		#[serde(rename = "char")]
		ch: char,
	},
}

/// Rejected command payload.
#[derive(Debug, Error)]
pub enum CommandError {
	/// Not JSON, or fields missing or of the wrong type.
	#[error("malformed command: {0}")]
	Malformed(#[from] serde_json::Error),

	#[error("command payload has no \"command\" field")]
	MissingTag,

	#[error("unknown command '{0}'")]
	Unknown(String),
}

impl JumpCommand {
	/// Parses a JSON payload.
	pub fn parse(payload: &str) -> Result<Self, CommandError> {
		let value: serde_json::Value = serde_json::from_str(payload)?;
		let name = value.get("command").and_then(serde_json::Value::as_str).ok_or(CommandError::MissingTag)?;
		if !Self::VARIANTS.contains(&name) {
			return Err(CommandError::Unknown(name.to_string()));
		}
		Ok(serde_json::from_value(value)?)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(r#"{"command":"start-jump","mode":"hybrid"}"#, JumpCommand::StartJump { mode: JumpMode::Hybrid })]
	#[case(r#"{"command":"cancel"}"#, JumpCommand::Cancel)]
	#[case(r#"{"command":"previous-match"}"#, JumpCommand::PreviousMatch)]
	#[case(r#"{"command":"type-char","char":"k"}"#, JumpCommand::TypeChar { ch: 'k' })]
	fn parses_tagged_payloads(#[case] payload: &str, #[case] expected: JumpCommand) {
		assert_eq!(JumpCommand::parse(payload).unwrap(), expected);
	}

	#[test]
	fn start_jump_requires_mode() {
		assert!(matches!(JumpCommand::parse(r#"{"command":"start-jump"}"#), Err(CommandError::Malformed(_))));
	}

	#[test]
	fn rejects_unknown_and_untagged() {
		assert!(matches!(JumpCommand::parse(r#"{"command":"teleport"}"#), Err(CommandError::Unknown(name)) if name == "teleport"));
		assert!(matches!(JumpCommand::parse(r#"{"mode":"literal"}"#), Err(CommandError::MissingTag)));
		assert!(matches!(JumpCommand::parse("not json"), Err(CommandError::Malformed(_))));
	}

	#[test]
	fn bad_mode_is_malformed() {
		let err = JumpCommand::parse(r#"{"command":"start-jump","mode":"fuzzy"}"#).unwrap_err();
		assert!(err.to_string().starts_with("malformed command"));
	}

	#[test]
	fn variant_names_match_tags() {
		assert_eq!(
			JumpCommand::VARIANTS,
			&["start-jump", "cancel", "backspace", "enter", "next-match", "previous-match", "type-char"]
		);
	}
}
