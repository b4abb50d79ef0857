//! Session operations driven by keys and commands.

use glide_labels::Resolution;
use glide_targets::{JumpMode, chars_match};
use tracing::trace;

use super::{JumpController, Step, render};
use crate::host::JumpHost;
use crate::session::{Phase, SearchSession};
use crate::types::{CancelReason, KeyOutcome};

impl JumpController {
	/// Feeds a typed character to the active session.
	pub fn type_char(&mut self, host: &mut dyn JumpHost, c: char) -> KeyOutcome {
		let Some(session) = self.take_active(&*host) else {
			return KeyOutcome::Unhandled;
		};
		let step = self.type_char_step(host, session, c);
		self.finish(host, step)
	}

	/// Steps back one phase, or one pattern character while building.
	///
	/// Backspace on an empty pattern cancels the session.
	pub fn backspace(&mut self, host: &mut dyn JumpHost) -> KeyOutcome {
		let Some(session) = self.take_active(&*host) else {
			return KeyOutcome::Unhandled;
		};
		let step = self.backspace_step(host, session);
		self.finish(host, step)
	}

	/// Jumps to the focused target. A no-op without targets.
	pub fn enter(&mut self, host: &mut dyn JumpHost) -> KeyOutcome {
		let Some(session) = self.take_active(&*host) else {
			return KeyOutcome::Unhandled;
		};
		let focused = session.focused().map(|t| t.target.position());
		let step = match focused {
			Some(position) => Step::Jump(session, position),
			None => Step::Keep(session),
		};
		self.finish(host, step)
	}

	/// Moves the navigation focus to the next target in document order.
	pub fn next_match(&mut self, host: &mut dyn JumpHost) -> KeyOutcome {
		self.navigate(host, true)
	}

	/// Moves the navigation focus to the previous target in document order.
	pub fn previous_match(&mut self, host: &mut dyn JumpHost) -> KeyOutcome {
		self.navigate(host, false)
	}

	fn type_char_step(&self, host: &mut dyn JumpHost, mut session: SearchSession, c: char) -> Step {
		match session.phase.clone() {
			Phase::PatternBuilding => {
				let pattern = format!("{}{c}", session.pattern);
				match self.discover_ranked(&*host, &session, &pattern) {
					Ok(ranked) => self.apply_extension(host, session, pattern, ranked),
					Err(err) => self.provider_failed(host, session, &err),
				}
			}
			Phase::TargetSelection => {
				if session.mode == JumpMode::Hybrid && self.continues_pattern(&session, c) {
					let pattern = format!("{}{c}", session.pattern);
					match self.discover_ranked(&*host, &session, &pattern) {
						Ok(ranked) if !ranked.is_empty() => {
							trace!(view = %session.view, pattern = %pattern, "Key continues the pattern");
							return self.apply_extension(host, session, pattern, ranked);
						}
						Ok(_) => {}
						Err(err) => return self.provider_failed(host, session, &err),
					}
				}
				self.select_label(host, session, c)
			}
			Phase::AwaitingSecond { first, subset } => {
				let selected = session.assignment.resolve_second(&subset, first, c).map(|t| t.target.position());
				match selected {
					Some(position) => Step::Jump(session, position),
					None => {
						trace!(view = %session.view, first = %first, key = %c, "No such sequence, restoring targets");
						session.phase = Phase::TargetSelection;
						render(host, &mut session);
						Step::Keep(session)
					}
				}
			}
		}
	}

	fn select_label(&self, host: &mut dyn JumpHost, mut session: SearchSession, c: char) -> Step {
		let (position, subset) = match session.assignment.resolve(c) {
			Resolution::Target(t) => (Some(t.target.position()), None),
			Resolution::Prefix(subset) => (None, Some(subset)),
			Resolution::NoMatch => (None, None),
		};
		if let Some(position) = position {
			return Step::Jump(session, position);
		}
		match subset {
			Some(subset) => {
				trace!(view = %session.view, first = %c, candidates = subset.len(), "Awaiting second label key");
				session.phase = Phase::AwaitingSecond { first: c, subset };
				render(host, &mut session);
			}
			None => trace!(view = %session.view, key = %c, "Key matches no label, ignored"),
		}
		Step::Keep(session)
	}

	/// Returns true if `c` follows the pattern inside some live target.
	fn continues_pattern(&self, session: &SearchSession, c: char) -> bool {
		let assignment = &session.assignment;
		let case_sensitive = self.config.case_sensitive;
		assignment
			.labeled
			.iter()
			.map(|t| &t.target)
			.chain(&assignment.overflow)
			.flat_map(|t| t.candidate.continuations(&session.pattern, case_sensitive))
			.any(|next| chars_match(next, c, case_sensitive))
	}

	fn backspace_step(&self, host: &mut dyn JumpHost, mut session: SearchSession) -> Step {
		match session.phase {
			Phase::AwaitingSecond { .. } => {
				session.phase = Phase::TargetSelection;
				render(host, &mut session);
				Step::Keep(session)
			}
			Phase::TargetSelection => {
				session.phase = Phase::PatternBuilding;
				render(host, &mut session);
				Step::Keep(session)
			}
			Phase::PatternBuilding if session.pattern.is_empty() => Step::Cancel(session, CancelReason::Backspace),
			Phase::PatternBuilding => {
				session.pattern.pop();
				if !self.pattern_changed(host, &mut session) {
					return Step::Cancel(session, CancelReason::ProviderFailed);
				}
				self.refresh(host, session, false)
			}
		}
	}

	fn navigate(&mut self, host: &mut dyn JumpHost, forward: bool) -> KeyOutcome {
		let Some(mut session) = self.take_active(&*host) else {
			return KeyOutcome::Unhandled;
		};
		let cursor = host.cursor(session.view);
		let mut order = session.live();
		if !order.is_empty() {
			let labeled = &session.assignment.labeled;
			let position_of = |i: usize| labeled[i].target.position();
			order.sort_by_key(|&i| position_of(i));
			let last = order.len() - 1;
			let current = session.focus.and_then(|f| order.iter().position(|&i| i == f));
			let next = match current {
				Some(at) if forward => order[if at == last { 0 } else { at + 1 }],
				Some(at) => order[if at == 0 { last } else { at - 1 }],
				None if forward => order.iter().copied().find(|&i| position_of(i) > cursor).unwrap_or(order[0]),
				None => order.iter().rev().copied().find(|&i| position_of(i) < cursor).unwrap_or(order[last]),
			};
			trace!(view = %session.view, target = %position_of(next), "Navigation focus moved");
			session.focus = Some(next);
			render(host, &mut session);
		}
		self.finish(host, Step::Keep(session))
	}
}
