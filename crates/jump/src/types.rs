use glide_primitives::{Position, ViewId};
use serde::Serialize;

/// Observable controller state for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JumpState {
	/// No session.
	Idle,
	/// Keys extend the pattern.
	PatternBuilding,
	/// Keys select labels.
	TargetSelection,
	/// The first key of several sequences was typed.
	AwaitingSecond,
}

/// How the host should scroll a jump target into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Reveal {
	/// Target is already visible; scroll as little as possible.
	Minimal,
	/// Target is off screen; center its line.
	Center,
}

/// A completed jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Jump {
	pub view: ViewId,
	pub position: Position,
	pub reveal: Reveal,
}

/// Why a session ended without a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CancelReason {
	/// Explicit cancel command or Escape.
	Escape,
	/// Backspace with an empty pattern.
	Backspace,
	/// The selection moved by other means than a jump.
	SelectionChanged,
	ViewChanged,
	FocusLost,
	/// A new session replaced this one.
	Restarted,
	/// A key the engine does not handle; the host still applies it.
	ForeignKey,
	/// The target provider or token source failed.
	ProviderFailed,
}

/// Result of feeding one key or command to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum KeyOutcome {
	/// No session took the key; the host applies its normal meaning.
	Unhandled,
	/// The session consumed the key.
	Consumed,
	Jumped(Jump),
	Cancelled { reason: CancelReason },
}

impl KeyOutcome {
	/// Returns true if the host must not apply the key itself.
	pub fn is_handled(&self) -> bool {
		match self {
			Self::Unhandled => false,
			Self::Cancelled { reason } => *reason != CancelReason::ForeignKey,
			Self::Consumed | Self::Jumped(_) => true,
		}
	}

	pub fn jump(&self) -> Option<Jump> {
		match self {
			Self::Jumped(jump) => Some(*jump),
			_ => None,
		}
	}
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
	Info,
	Warning,
}

/// Non-fatal message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
}

impl Notice {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Info,
			message: message.into(),
		}
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Warning,
			message: message.into(),
		}
	}
}
