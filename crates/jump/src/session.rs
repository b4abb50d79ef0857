use glide_labels::{Assignment, LabeledTarget};
use glide_primitives::ViewId;
use glide_targets::{DecodedToken, JumpMode};

use crate::resource::{KeyCapture, OverlayBatch, StyleSet};
use crate::types::JumpState;

/// Controller phase inside a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
	PatternBuilding,
	TargetSelection,
	/// `subset` indexes the labels starting with `first`.
	AwaitingSecond { first: char, subset: Vec<usize> },
}

/// Semantic token availability for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenState {
	/// The mode does not use tokens.
	NotNeeded,
	/// A request for `version` is in flight.
	Pending { version: u64 },
	Ready(Vec<DecodedToken>),
	/// The source failed; hybrid sessions continue with literal matches.
	Unavailable,
}

impl TokenState {
	pub(crate) fn ready(&self) -> Option<&[DecodedToken]> {
		match self {
			Self::Ready(tokens) => Some(tokens),
			_ => None,
		}
	}
}

/// State of one jump operation in one view.
///
/// Owns its targets and labels and the host resources (key capture, styles,
/// overlay batch) acquired for it; tearing the session down releases them.
#[derive(Debug)]
pub struct SearchSession {
	pub(crate) view: ViewId,
	pub(crate) mode: JumpMode,
	pub(crate) pattern: String,
	/// Bumped on every pattern change; tags token requests.
	pub(crate) version: u64,
	pub(crate) phase: Phase,
	pub(crate) assignment: Assignment,
	/// Index into `assignment.labeled` chosen by next/previous navigation.
	pub(crate) focus: Option<usize>,
	pub(crate) tokens: TokenState,
	pub(crate) batch: Option<OverlayBatch>,
	pub(crate) styles: StyleSet,
	pub(crate) capture: KeyCapture,
}

impl SearchSession {
	pub(crate) fn new(view: ViewId, mode: JumpMode, capture: KeyCapture, styles: StyleSet) -> Self {
		Self {
			view,
			mode,
			pattern: String::new(),
			version: 0,
			phase: Phase::PatternBuilding,
			assignment: Assignment::default(),
			focus: None,
			tokens: TokenState::NotNeeded,
			batch: None,
			styles,
			capture,
		}
	}

	pub fn view(&self) -> ViewId {
		self.view
	}

	pub fn mode(&self) -> JumpMode {
		self.mode
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	pub fn state(&self) -> JumpState {
		match self.phase {
			Phase::PatternBuilding => JumpState::PatternBuilding,
			Phase::TargetSelection => JumpState::TargetSelection,
			Phase::AwaitingSecond { .. } => JumpState::AwaitingSecond,
		}
	}

	pub fn assignment(&self) -> &Assignment {
		&self.assignment
	}

	/// True while a semantic token request is outstanding.
	pub fn awaiting_tokens(&self) -> bool {
		matches!(self.tokens, TokenState::Pending { .. })
	}

	/// Indices of the targets that can currently be selected.
	pub(crate) fn live(&self) -> Vec<usize> {
		match &self.phase {
			Phase::AwaitingSecond { subset, .. } => subset.clone(),
			_ => (0..self.assignment.labeled.len()).collect(),
		}
	}

	/// The target Enter would jump to: the navigation focus, else the best
	/// live target.
	pub fn focused(&self) -> Option<&LabeledTarget> {
		let live = self.live();
		let idx = self.focus.filter(|i| live.contains(i)).or_else(|| live.first().copied())?;
		self.assignment.labeled.get(idx)
	}

	/// Drops overlays, then styles, then the key capture.
	pub(crate) fn teardown(self) {
		let Self {
			batch, styles, capture, ..
		} = self;
		drop(batch);
		drop(styles);
		drop(capture);
	}
}
