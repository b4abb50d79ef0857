//! Overlay frames handed to the presenter.

use glide_primitives::{Position, ViewId};
use serde::Serialize;

use crate::types::JumpState;

/// Highlight applied to a target's matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
	/// The target Enter would jump to.
	Primary,
	Secondary,
}

/// One labeled target in a frame; the label is drawn before the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayItem {
	pub position: Position,
	/// Highlighted span in characters.
	pub len: usize,
	/// Keys still to type for this target.
	pub label: String,
	pub highlight: Highlight,
}

/// Complete overlay state for one render pass.
///
/// An empty `items` list clears the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelFrame {
	pub view: ViewId,
	pub state: JumpState,
	pub pattern: String,
	pub items: Vec<OverlayItem>,
	/// Matches left unlabeled; narrowing the pattern brings them in.
	pub overflow: usize,
}

impl LabelFrame {
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Label texts in render order.
	pub fn labels(&self) -> Vec<&str> {
		self.items.iter().map(|item| item.label.as_str()).collect()
	}

	/// The primary-highlighted item.
	pub fn focused(&self) -> Option<&OverlayItem> {
		self.items.iter().find(|item| item.highlight == Highlight::Primary)
	}
}
