//! Drives one jump session from a key script and records what happened.

use std::fmt;

use glide_jump::{JumpController, JumpMode, JumpState, KeyOutcome, LabelFrame, MemoryHost, Notice};
use glide_primitives::{Key, Position};
use serde::Serialize;
use tracing::debug;

/// One replayed key and its effect.
#[derive(Debug, Serialize)]
pub struct ReplayStep {
	pub key: String,
	pub outcome: KeyOutcome,
	/// Frame rendered in response, if any.
	pub frame: Option<LabelFrame>,
}

#[derive(Debug, Serialize)]
pub struct Report {
	pub mode: JumpMode,
	/// Frame rendered when the session started.
	pub start: Option<LabelFrame>,
	pub steps: Vec<ReplayStep>,
	pub outcome: KeyOutcome,
	pub cursor: Position,
	pub notices: Vec<Notice>,
	/// Keys left over after the session ended.
	pub unused_keys: usize,
}

/// Replays `keys` in a fresh session.
///
/// Token requests are served right after each step, as if the token
/// source answered between keystrokes.
pub fn replay(host: &mut MemoryHost, controller: &mut JumpController, mode: JumpMode, keys: &[Key]) -> Report {
	let started = controller.start_jump(host, mode) != JumpState::Idle;
	let mut outcome = if started { KeyOutcome::Consumed } else { KeyOutcome::Unhandled };
	let mut start = None;
	let mut steps = Vec::new();
	let mut unused_keys = keys.len();

	if started {
		if let Some(ended) = serve_tokens(host, controller) {
			outcome = ended;
		}
		start = host.last_frame();

		for (i, key) in keys.iter().enumerate() {
			if !controller.is_active() {
				break;
			}
			let before = host.frame_count();
			outcome = controller.handle_key(host, *key);
			if let Some(ended) = serve_tokens(host, controller) {
				outcome = ended;
			}
			let frame = if host.frame_count() > before { host.last_frame() } else { None };
			steps.push(ReplayStep {
				key: key.to_string(),
				outcome,
				frame,
			});
			unused_keys = keys.len() - i - 1;
		}
		debug!(steps = steps.len(), unused_keys, "Replay finished");
	}

	let ledger = host.ledger();
	Report {
		mode,
		start,
		steps,
		outcome,
		cursor: host.cursor_position(),
		notices: ledger.notices,
		unused_keys,
	}
}

/// Delivers queued token responses; returns the outcome if one ended the session.
fn serve_tokens(host: &mut MemoryHost, controller: &mut JumpController) -> Option<KeyOutcome> {
	let mut ended = None;
	for response in host.serve_token_requests() {
		let outcome = controller.deliver_tokens(host, response);
		if matches!(outcome, KeyOutcome::Jumped(_) | KeyOutcome::Cancelled { .. }) {
			ended = Some(outcome);
		}
	}
	ended
}

struct FrameLines<'a>(&'a LabelFrame);

impl fmt::Display for FrameLines<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let frame = self.0;
		write!(f, "[{}] {:?}: {} labeled", frame.state, frame.pattern, frame.items.len())?;
		if frame.overflow > 0 {
			write!(f, ", {} more (keep typing)", frame.overflow)?;
		}
		for item in &frame.items {
			let focus = if item.highlight == glide_jump::Highlight::Primary { '*' } else { ' ' };
			write!(f, "\n   {focus}{:>3}  {}", item.label, item.position)?;
		}
		Ok(())
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "mode: {}", self.mode)?;
		if let Some(frame) = &self.start {
			writeln!(f, "start {}", FrameLines(frame))?;
		}
		for step in &self.steps {
			match &step.frame {
				Some(frame) => writeln!(f, "{:<6}{}", step.key, FrameLines(frame))?,
				None => writeln!(f, "{:<6}(no redraw)", step.key)?,
			}
		}
		for notice in &self.notices {
			writeln!(f, "{:?}: {}", notice.level, notice.message)?;
		}
		match self.outcome {
			KeyOutcome::Jumped(jump) => write!(f, "jumped to {} ({})", jump.position, jump.reveal)?,
			KeyOutcome::Cancelled { reason } => write!(f, "cancelled: {reason}")?,
			KeyOutcome::Consumed => write!(f, "session still active, cursor at {}", self.cursor)?,
			KeyOutcome::Unhandled => write!(f, "no session started")?,
		}
		if self.unused_keys > 0 {
			write!(f, "\n{} key(s) not replayed", self.unused_keys)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use glide_jump::{CancelReason, TokenSupply};
	use pretty_assertions::assert_eq;

	use super::*;

	fn keys(script: &str) -> Vec<Key> {
		Key::parse_script(script).unwrap()
	}

	#[test]
	fn replays_until_jump() {
		let mut host = MemoryHost::new("let foo = 1;\nlet bar = foo;\n");
		let mut controller = JumpController::default();
		let report = replay(&mut host, &mut controller, JumpMode::Literal, &keys("foax"));

		assert_eq!(report.steps.len(), 3);
		assert_eq!(report.outcome.jump().map(|j| j.position), Some(Position::new(0, 4)));
		assert_eq!(report.cursor, Position::new(0, 4));
		assert_eq!(report.unused_keys, 1);
		assert!(report.to_string().ends_with("jumped to 1:5 (minimal)\n1 key(s) not replayed"));
	}

	#[test]
	fn reports_cancellation() {
		let mut host = MemoryHost::new("abc\n");
		let mut controller = JumpController::default();
		let report = replay(&mut host, &mut controller, JumpMode::Literal, &keys("a<esc>"));
		assert_eq!(report.outcome, KeyOutcome::Cancelled { reason: CancelReason::Escape });
		assert_eq!(report.steps[1].frame, None);
	}

	#[test]
	fn semantic_without_tokens_never_starts() {
		let mut host = MemoryHost::new("abc\n");
		let mut controller = JumpController::default();
		let report = replay(&mut host, &mut controller, JumpMode::Semantic, &keys("ab"));
		assert_eq!(report.outcome, KeyOutcome::Unhandled);
		assert!(report.steps.is_empty());
		assert_eq!(report.notices.len(), 1);
		assert_eq!(report.unused_keys, 2);
	}

	#[test]
	fn failing_token_source_ends_semantic_session() {
		let mut host = MemoryHost::new("abc\n").with_tokens(TokenSupply::Failing("offline".into()));
		let mut controller = JumpController::default();
		let report = replay(&mut host, &mut controller, JumpMode::Semantic, &keys("ab"));
		assert_eq!(report.outcome, KeyOutcome::Cancelled { reason: CancelReason::ProviderFailed });
		assert!(report.steps.is_empty());
	}

	#[test]
	fn json_report_is_tagged() {
		let mut host = MemoryHost::new("let foo = 1;\n");
		let mut controller = JumpController::default();
		let report = replay(&mut host, &mut controller, JumpMode::Literal, &keys("fo"));
		let value = serde_json::to_value(&report).unwrap();
		assert_eq!(value["outcome"]["outcome"], "jumped");
		assert_eq!(value["mode"], "literal");
	}
}
