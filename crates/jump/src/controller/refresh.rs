//! Discovery, ranking and the pattern-building to target-selection transition.

use std::collections::HashSet;

use glide_labels::LabelAssigner;
use glide_targets::{
	HybridProvider, JumpMode, LiteralProvider, ScoredCandidate, SemanticProvider, TargetError, TargetQuery, TokenRequest, discover,
};
use tracing::{debug, warn};

use super::{JumpController, Step, render};
use crate::host::JumpHost;
use crate::session::{Phase, SearchSession, TokenState};
use crate::types::{CancelReason, Notice};

impl JumpController {
	/// Finds and ranks targets for `pattern` in the session's view.
	pub(super) fn discover_ranked(&self, host: &dyn JumpHost, session: &SearchSession, pattern: &str) -> glide_targets::Result<Vec<ScoredCandidate>> {
		let Some(text) = host.text(session.view) else {
			return Ok(Vec::new());
		};
		let visible = host.visible_ranges(session.view);
		let cursor = host.cursor(session.view);
		let query = TargetQuery {
			pattern,
			cursor,
			visible: &visible,
			text,
			case_sensitive: self.config.case_sensitive,
		};
		let candidates = match (session.mode, &session.tokens) {
			(JumpMode::Literal, _) => discover(&LiteralProvider, &query, self.limits)?,
			(JumpMode::Semantic, TokenState::Ready(tokens)) => discover(&SemanticProvider::new(tokens), &query, self.limits)?,
			(JumpMode::Semantic, _) => Vec::new(),
			(JumpMode::Hybrid, tokens) => discover(&HybridProvider::new(tokens.ready()), &query, self.limits)?,
		};
		Ok(self.scorer.rank(candidates, cursor))
	}

	/// Rediscovers for the current pattern and re-renders.
	///
	/// With `transition` set the session may move to target selection or
	/// jump straight to a lone target.
	pub(super) fn refresh(&self, host: &mut dyn JumpHost, session: SearchSession, transition: bool) -> Step {
		match self.discover_ranked(&*host, &session, &session.pattern) {
			Ok(ranked) => self.settle(host, session, ranked, transition),
			Err(err) => self.provider_failed(host, session, &err),
		}
	}

	/// Appends to the pattern, using targets already discovered for it.
	pub(super) fn apply_extension(&self, host: &mut dyn JumpHost, mut session: SearchSession, pattern: String, ranked: Vec<ScoredCandidate>) -> Step {
		session.pattern = pattern;
		if !self.pattern_changed(host, &mut session) {
			return Step::Cancel(session, CancelReason::ProviderFailed);
		}
		self.settle(host, session, ranked, true)
	}

	/// Bumps the pattern version and re-issues an outstanding token request
	/// for it. Returns false if the session must end.
	pub(super) fn pattern_changed(&self, host: &mut dyn JumpHost, session: &mut SearchSession) -> bool {
		session.version += 1;
		if !session.awaiting_tokens() {
			return true;
		}
		let request = TokenRequest {
			view: session.view,
			version: session.version,
			lines: host.visible_ranges(session.view),
		};
		match host.request_semantic_tokens(request) {
			Ok(()) => {
				session.tokens = TokenState::Pending { version: session.version };
				true
			}
			Err(err) => self.tokens_failed(host, session, &err),
		}
	}

	/// Stores ranked targets in the session and renders them.
	fn settle(&self, host: &mut dyn JumpHost, mut session: SearchSession, ranked: Vec<ScoredCandidate>, transition: bool) -> Step {
		session.focus = None;
		let count = ranked.len();
		let selection = if transition { self.selection_assigner(&session.pattern, &ranked) } else { None };
		match selection {
			Some(_) if count == 1 && self.config.auto_jump_single => {
				let position = ranked[0].position();
				debug!(view = %session.view, pattern = %session.pattern, "Single target, jumping");
				return Step::Jump(session, position);
			}
			Some(assigner) => {
				session.assignment = assigner.assign(ranked);
				session.phase = Phase::TargetSelection;
			}
			None => {
				session.assignment = self.assigner.assign(ranked);
				session.phase = Phase::PatternBuilding;
			}
		}
		debug!(
			view = %session.view,
			pattern = %session.pattern,
			state = %session.state(),
			count,
			labeled = session.assignment.labeled.len(),
			"Targets refreshed"
		);
		render(host, &mut session);
		Step::Keep(session)
	}

	/// Label assigner for target selection, or `None` while the user should
	/// keep typing.
	///
	/// Selection needs a long enough pattern and a non-empty target count
	/// within the ceiling. The labels must also avoid every character that
	/// would extend the pattern to a still-matching one, and the keys left
	/// must be enough to label every target.
	pub(super) fn selection_assigner(&self, pattern: &str, ranked: &[ScoredCandidate]) -> Option<LabelAssigner> {
		let count = ranked.len();
		if pattern.chars().count() < self.config.min_pattern_length || count == 0 || count > self.config.auto_jump_ceiling {
			return None;
		}
		let continuations: HashSet<char> = ranked
			.iter()
			.flat_map(|t| t.candidate.continuations(pattern, self.config.case_sensitive))
			.collect();
		let assigner = self.assigner.without_keys(&continuations);
		if assigner.capacity(count) < count {
			debug!(pattern, count, blocked = continuations.len(), "Too few conflict-free labels, keep typing");
			return None;
		}
		Some(assigner)
	}

	/// Handles a token source failure. Returns false if the session must end.
	pub(super) fn tokens_failed(&self, host: &mut dyn JumpHost, session: &mut SearchSession, err: &TargetError) -> bool {
		if session.mode == JumpMode::Hybrid {
			debug!(view = %session.view, error = %err, "Semantic tokens unavailable, using literal matches");
			// A view without a token source is normal; a failing source is worth a mention.
			if matches!(err, TargetError::TokenRequest(_)) {
				host.notify(Notice::info(format!("Showing literal matches: {err}")));
			}
			session.tokens = TokenState::Unavailable;
			return true;
		}
		warn!(view = %session.view, error = %err, "Semantic tokens unavailable");
		host.notify(Notice::warning(format!("Jump cancelled: {err}")));
		false
	}

	pub(super) fn provider_failed(&self, host: &mut dyn JumpHost, session: SearchSession, err: &TargetError) -> Step {
		warn!(view = %session.view, pattern = %session.pattern, error = %err, "Target discovery failed");
		host.notify(Notice::warning(format!("Jump cancelled: {err}")));
		Step::Cancel(session, CancelReason::ProviderFailed)
	}
}
