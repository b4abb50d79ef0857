//! Progressive input controller.
//!
//! Sessions are keyed by view. Every operation removes the session from the
//! map, runs one step on the owned value and either puts it back or tears
//! it down, so a session is never observable half-updated.

use glide_config::JumpConfig;
use glide_labels::LabelAssigner;
use glide_primitives::{Key, KeyCode, Position, ViewId, is_line_visible};
use glide_targets::{DiscoveryLimits, JumpMode, TargetScorer, TokenRequest, TokenResponse, decode_semantic_tokens};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::command::JumpCommand;
use crate::frame::{Highlight, LabelFrame, OverlayItem};
use crate::host::JumpHost;
use crate::session::{Phase, SearchSession, TokenState};
use crate::types::{CancelReason, Jump, JumpState, KeyOutcome, Reveal};

mod keys;
mod refresh;

/// Result of one step on an owned session.
enum Step {
	Keep(SearchSession),
	Jump(SearchSession, Position),
	Cancel(SearchSession, CancelReason),
}

/// Drives label-jump sessions from keys and commands.
pub struct JumpController {
	config: JumpConfig,
	limits: DiscoveryLimits,
	scorer: TargetScorer,
	assigner: LabelAssigner,
	sessions: FxHashMap<ViewId, SearchSession>,
}

impl Default for JumpController {
	fn default() -> Self {
		Self::new(JumpConfig::default())
	}
}

impl JumpController {
	/// Creates a controller; `config` is expected to be validated.
	pub fn new(config: JumpConfig) -> Self {
		Self {
			limits: DiscoveryLimits::from(&config),
			scorer: TargetScorer::from_config(&config),
			assigner: LabelAssigner::from_config(&config),
			config,
			sessions: FxHashMap::default(),
		}
	}

	pub fn config(&self) -> &JumpConfig {
		&self.config
	}

	pub fn session(&self, view: ViewId) -> Option<&SearchSession> {
		self.sessions.get(&view)
	}

	pub fn state(&self, view: ViewId) -> JumpState {
		self.sessions.get(&view).map_or(JumpState::Idle, SearchSession::state)
	}

	pub fn is_active(&self) -> bool {
		!self.sessions.is_empty()
	}

	/// Starts a session in the active view.
	///
	/// Any live session is torn down first; the key intercept is global.
	/// Returns [`JumpState::Idle`] when there is no active view or a
	/// semantic session cannot get tokens.
	pub fn start_jump(&mut self, host: &mut dyn JumpHost, mode: JumpMode) -> JumpState {
		let Some(view) = host.active_view() else {
			debug!(%mode, "No active view, ignoring jump");
			return JumpState::Idle;
		};
		self.cancel_all(CancelReason::Restarted);

		let capture = host.install_key_capture(view);
		let styles = host.create_styles(view);
		let mut session = SearchSession::new(view, mode, capture, styles);

		if mode.uses_tokens() {
			let request = TokenRequest {
				view,
				version: session.version,
				lines: host.visible_ranges(view),
			};
			match host.request_semantic_tokens(request) {
				Ok(()) => session.tokens = TokenState::Pending { version: session.version },
				Err(err) => {
					if !self.tokens_failed(host, &mut session, &err) {
						end(session, CancelReason::ProviderFailed);
						return JumpState::Idle;
					}
				}
			}
		}

		render(host, &mut session);
		debug!(view = %view, %mode, "Jump session started");
		self.sessions.insert(view, session);
		JumpState::PatternBuilding
	}

	/// Routes a raw key from the capture.
	///
	/// Without a session in the active view every key is unhandled. Keys
	/// the engine has no meaning for cancel the session and are reported as
	/// [`CancelReason::ForeignKey`] so the host still applies them.
	pub fn handle_key(&mut self, host: &mut dyn JumpHost, key: Key) -> KeyOutcome {
		if self.active_view(&*host).is_none() {
			return KeyOutcome::Unhandled;
		}
		let plain = !key.modifiers.ctrl && !key.modifiers.alt;
		match key.code {
			_ if key.is_escape() => self.cancel(host),
			_ if key.is_backspace() => self.backspace(host),
			_ if key.is_enter() => self.enter(host),
			KeyCode::Tab if plain => self.next_match(host),
			KeyCode::BackTab if plain => self.previous_match(host),
			_ => match key.typed_char() {
				Some(c) => self.type_char(host, c),
				None => {
					trace!(?key, "Foreign key ends jump session");
					self.cancel_with(host, CancelReason::ForeignKey)
				}
			},
		}
	}

	/// Applies a command from the host's command layer.
	pub fn dispatch(&mut self, host: &mut dyn JumpHost, command: JumpCommand) -> KeyOutcome {
		match command {
			JumpCommand::StartJump { mode } => match self.start_jump(host, mode) {
				JumpState::Idle => KeyOutcome::Unhandled,
				_ => KeyOutcome::Consumed,
			},
			JumpCommand::Cancel => self.cancel(host),
			JumpCommand::Backspace => self.backspace(host),
			JumpCommand::Enter => self.enter(host),
			JumpCommand::NextMatch => self.next_match(host),
			JumpCommand::PreviousMatch => self.previous_match(host),
			JumpCommand::TypeChar { ch } => self.type_char(host, ch),
		}
	}

	/// Cancels the active view's session. A no-op without one.
	pub fn cancel(&mut self, host: &mut dyn JumpHost) -> KeyOutcome {
		self.cancel_with(host, CancelReason::Escape)
	}

	fn cancel_with(&mut self, host: &mut dyn JumpHost, reason: CancelReason) -> KeyOutcome {
		match self.take_active(&*host) {
			Some(session) => self.finish(host, Step::Cancel(session, reason)),
			None => KeyOutcome::Unhandled,
		}
	}

	/// The selection of `view` moved by means other than a jump.
	pub fn on_selection_changed(&mut self, view: ViewId) -> bool {
		match self.sessions.remove(&view) {
			Some(session) => {
				end(session, CancelReason::SelectionChanged);
				true
			}
			None => false,
		}
	}

	pub fn on_active_view_changed(&mut self) -> usize {
		self.cancel_all(CancelReason::ViewChanged)
	}

	pub fn on_focus_lost(&mut self) -> usize {
		self.cancel_all(CancelReason::FocusLost)
	}

	/// Applies a semantic token response.
	///
	/// Responses for views without a session, for sessions not waiting on
	/// tokens, or tagged with an outdated pattern version are dropped.
	pub fn deliver_tokens(&mut self, host: &mut dyn JumpHost, response: TokenResponse) -> KeyOutcome {
		let Some(mut session) = self.sessions.remove(&response.view) else {
			debug!(view = %response.view, "Dropping semantic tokens for a view without a session");
			return KeyOutcome::Unhandled;
		};
		let TokenState::Pending { version } = session.tokens else {
			self.sessions.insert(response.view, session);
			return KeyOutcome::Unhandled;
		};
		if response.version != version {
			debug!(
				view = %response.view,
				version = response.version,
				current = version,
				"Discarding stale semantic tokens"
			);
			self.sessions.insert(response.view, session);
			return KeyOutcome::Consumed;
		}

		let step = match response.result {
			Ok(tokens) => {
				let decoded = host.text(session.view).map(|text| decode_semantic_tokens(&tokens, text)).unwrap_or_default();
				debug!(view = %session.view, count = decoded.len(), "Semantic tokens ready");
				session.tokens = TokenState::Ready(decoded);
				self.refresh(host, session, true)
			}
			Err(err) => {
				if self.tokens_failed(host, &mut session, &err) {
					Step::Keep(session)
				} else {
					Step::Cancel(session, CancelReason::ProviderFailed)
				}
			}
		};
		self.finish(host, step)
	}

	fn active_view(&self, host: &dyn JumpHost) -> Option<ViewId> {
		host.active_view().filter(|view| self.sessions.contains_key(view))
	}

	fn take_active(&mut self, host: &dyn JumpHost) -> Option<SearchSession> {
		let view = self.active_view(host)?;
		self.sessions.remove(&view)
	}

	fn cancel_all(&mut self, reason: CancelReason) -> usize {
		let count = self.sessions.len();
		for (_, session) in self.sessions.drain() {
			end(session, reason);
		}
		count
	}

	fn finish(&mut self, host: &mut dyn JumpHost, step: Step) -> KeyOutcome {
		match step {
			Step::Keep(session) => {
				self.sessions.insert(session.view, session);
				KeyOutcome::Consumed
			}
			Step::Jump(session, position) => KeyOutcome::Jumped(jump(host, session, position)),
			Step::Cancel(session, reason) => {
				end(session, reason);
				KeyOutcome::Cancelled { reason }
			}
		}
	}
}

/// Tears the session down, then moves the cursor.
fn jump(host: &mut dyn JumpHost, session: SearchSession, position: Position) -> Jump {
	let view = session.view;
	let reveal = if is_line_visible(&host.visible_ranges(view), position.line) {
		Reveal::Minimal
	} else {
		Reveal::Center
	};
	debug!(view = %view, pattern = %session.pattern, target = %position, %reveal, "Jumping");
	session.teardown();
	host.jump_to(view, position, reveal);
	Jump { view, position, reveal }
}

fn end(session: SearchSession, reason: CancelReason) {
	debug!(view = %session.view, pattern = %session.pattern, %reason, "Jump session cancelled");
	session.teardown();
}

/// Replaces the session's overlays with a frame of its current state.
fn render(host: &mut dyn JumpHost, session: &mut SearchSession) {
	drop(session.batch.take());
	let frame = frame(session);
	trace!(view = %frame.view, state = %frame.state, items = frame.items.len(), overflow = frame.overflow, "Rendering labels");
	session.batch = Some(host.render(&frame, &session.styles));
}

fn frame(session: &SearchSession) -> LabelFrame {
	let focused = session.focused().map(|t| t.target.position());
	let awaiting_second = matches!(session.phase, Phase::AwaitingSecond { .. });
	let items = session
		.live()
		.into_iter()
		.filter_map(|i| session.assignment.labeled.get(i))
		.map(|t| {
			let label = match t.label.second() {
				Some(second) if awaiting_second => second.to_string(),
				_ => t.label.to_string(),
			};
			OverlayItem {
				position: t.target.position(),
				len: t.target.candidate.len,
				label,
				highlight: if Some(t.target.position()) == focused {
					Highlight::Primary
				} else {
					Highlight::Secondary
				},
			}
		})
		.collect();

	LabelFrame {
		view: session.view,
		state: session.state(),
		pattern: session.pattern.clone(),
		items,
		overflow: session.assignment.overflow.len(),
	}
}
