//! In-memory [`JumpHost`] over a single rope.
//!
//! Records every frame, resource acquisition and jump so tests and the CLI
//! can inspect what a real editor would have seen.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use glide_primitives::{BoxFutureLocal, LineRange, Position, Rope, RopeSlice, ViewId, poll_once};
use glide_targets::{SemanticTokenSource, SemanticTokens, TargetError, TokenRequest, TokenResponse, fetch_tokens};
use serde::Serialize;

use crate::frame::LabelFrame;
use crate::host::{JumpHost, Presenter, ViewSource};
use crate::resource::{BatchId, KeyCapture, OverlayBatch, StyleCategory, StyleHandle, StyleId, StyleSet};
use crate::types::{Jump, Notice, Reveal};

/// Everything a [`MemoryHost`] observed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryLedger {
	/// Every rendered frame, oldest first.
	pub frames: Vec<LabelFrame>,
	/// Batches rendered and not yet cleared.
	pub live_batches: BTreeSet<BatchId>,
	/// Styles created and not yet disposed.
	pub live_styles: BTreeSet<StyleId>,
	pub styles_created: usize,
	/// Installed key captures not yet released.
	pub active_captures: usize,
	pub captures_installed: usize,
	pub notices: Vec<Notice>,
	pub jumps: Vec<Jump>,
}

/// Semantic token behavior of a [`MemoryHost`].
#[derive(Debug, Clone, Default)]
pub enum TokenSupply {
	/// Requests are refused.
	#[default]
	Unsupported,
	/// Requests succeed with this payload.
	Tokens(SemanticTokens),
	/// Requests are accepted but fail when served.
	Failing(String),
}

impl SemanticTokenSource for TokenSupply {
	fn semantic_tokens<'a>(&'a self, _view: ViewId, _lines: &'a [LineRange]) -> BoxFutureLocal<'a, glide_targets::Result<SemanticTokens>> {
		let result = match self {
			Self::Unsupported => Err(TargetError::TokensUnavailable),
			Self::Tokens(tokens) => Ok(tokens.clone()),
			Self::Failing(message) => Err(TargetError::TokenRequest(message.clone())),
		};
		Box::pin(async move { result })
	}
}

/// A host with one buffer, shown by every view.
#[derive(Debug)]
pub struct MemoryHost {
	text: Rope,
	active: Option<ViewId>,
	visible: Vec<LineRange>,
	cursor: Position,
	tokens: TokenSupply,
	pending: Vec<TokenRequest>,
	ledger: Rc<RefCell<MemoryLedger>>,
	next_id: u64,
}

impl MemoryHost {
	/// Active view `view#1`, every line visible, cursor at the start.
	pub fn new(text: &str) -> Self {
		let text = Rope::from(text);
		let visible = vec![LineRange::new(0, text.len_lines())];
		Self {
			text,
			active: Some(ViewId(1)),
			visible,
			cursor: Position::default(),
			tokens: TokenSupply::default(),
			pending: Vec::new(),
			ledger: Rc::default(),
			next_id: 0,
		}
	}

	pub fn with_cursor(mut self, cursor: Position) -> Self {
		self.cursor = cursor;
		self
	}

	pub fn with_visible(mut self, visible: Vec<LineRange>) -> Self {
		self.visible = visible;
		self
	}

	pub fn with_tokens(mut self, tokens: TokenSupply) -> Self {
		self.tokens = tokens;
		self
	}

	pub fn set_active_view(&mut self, view: Option<ViewId>) {
		self.active = view;
	}

	/// Scrolls the view without ending any session.
	pub fn set_visible(&mut self, visible: Vec<LineRange>) {
		self.visible = visible;
	}

	pub fn set_cursor(&mut self, cursor: Position) {
		self.cursor = cursor;
	}

	pub fn cursor_position(&self) -> Position {
		self.cursor
	}

	pub fn rope(&self) -> &Rope {
		&self.text
	}

	/// Snapshot of everything recorded so far.
	pub fn ledger(&self) -> MemoryLedger {
		self.ledger.borrow().clone()
	}

	/// Number of frames rendered so far.
	pub fn frame_count(&self) -> usize {
		self.ledger.borrow().frames.len()
	}

	pub fn last_frame(&self) -> Option<LabelFrame> {
		self.ledger.borrow().frames.last().cloned()
	}

	/// Overlays currently on screen.
	pub fn live_overlays(&self) -> usize {
		self.ledger.borrow().live_batches.len()
	}

	pub fn active_captures(&self) -> usize {
		self.ledger.borrow().active_captures
	}

	pub fn live_styles(&self) -> usize {
		self.ledger.borrow().live_styles.len()
	}

	/// Token requests queued since the last call.
	pub fn take_token_requests(&mut self) -> Vec<TokenRequest> {
		std::mem::take(&mut self.pending)
	}

	/// Serves every queued token request against the configured supply.
	pub fn serve_token_requests(&mut self) -> Vec<TokenResponse> {
		let requests = std::mem::take(&mut self.pending);
		requests
			.into_iter()
			.filter_map(|request| poll_once(Box::pin(fetch_tokens(&self.tokens, request))))
			.collect()
	}

	fn next_id(&mut self) -> u64 {
		self.next_id += 1;
		self.next_id
	}
}

impl ViewSource for MemoryHost {
	fn active_view(&self) -> Option<ViewId> {
		self.active
	}

	fn text(&self, _view: ViewId) -> Option<RopeSlice<'_>> {
		Some(self.text.slice(..))
	}

	fn visible_ranges(&self, _view: ViewId) -> Vec<LineRange> {
		self.visible.clone()
	}

	fn cursor(&self, _view: ViewId) -> Position {
		self.cursor
	}
}

impl Presenter for MemoryHost {
	fn create_style(&mut self, _view: ViewId, category: StyleCategory) -> StyleHandle {
		let id = StyleId(self.next_id());
		{
			let mut ledger = self.ledger.borrow_mut();
			ledger.live_styles.insert(id);
			ledger.styles_created += 1;
		}
		let ledger = Rc::clone(&self.ledger);
		StyleHandle::new(id, category, move || {
			ledger.borrow_mut().live_styles.remove(&id);
		})
	}

	fn render(&mut self, frame: &LabelFrame, _styles: &StyleSet) -> OverlayBatch {
		let id = BatchId(self.next_id());
		{
			let mut ledger = self.ledger.borrow_mut();
			ledger.frames.push(frame.clone());
			ledger.live_batches.insert(id);
		}
		let ledger = Rc::clone(&self.ledger);
		OverlayBatch::new(id, move || {
			ledger.borrow_mut().live_batches.remove(&id);
		})
	}
}

impl JumpHost for MemoryHost {
	fn install_key_capture(&mut self, view: ViewId) -> KeyCapture {
		{
			let mut ledger = self.ledger.borrow_mut();
			ledger.active_captures += 1;
			ledger.captures_installed += 1;
		}
		let ledger = Rc::clone(&self.ledger);
		KeyCapture::new(view, move || {
			let mut ledger = ledger.borrow_mut();
			ledger.active_captures = ledger.active_captures.saturating_sub(1);
		})
	}

	fn request_semantic_tokens(&mut self, request: TokenRequest) -> glide_targets::Result<()> {
		if matches!(self.tokens, TokenSupply::Unsupported) {
			return Err(TargetError::TokensUnavailable);
		}
		self.pending.push(request);
		Ok(())
	}

	fn jump_to(&mut self, view: ViewId, position: Position, reveal: Reveal) {
		self.cursor = position;
		self.ledger.borrow_mut().jumps.push(Jump { view, position, reveal });
	}

	fn notify(&mut self, notice: Notice) {
		self.ledger.borrow_mut().notices.push(notice);
	}
}
