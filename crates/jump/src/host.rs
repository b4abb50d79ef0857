//! Editor-side collaborators.

use glide_primitives::{LineRange, Position, RopeSlice, ViewId};
use glide_targets::TokenRequest;

use crate::frame::LabelFrame;
use crate::resource::{KeyCapture, OverlayBatch, StyleCategory, StyleHandle, StyleSet};
use crate::types::{Notice, Reveal};

/// Read access to the editor's views.
pub trait ViewSource {
	/// The focused view, if any.
	fn active_view(&self) -> Option<ViewId>;

	/// Whole-buffer text of `view`.
	fn text(&self, view: ViewId) -> Option<RopeSlice<'_>>;

	/// Line ranges currently rendered by `view`.
	fn visible_ranges(&self, view: ViewId) -> Vec<LineRange>;

	fn cursor(&self, view: ViewId) -> Position;
}

/// Transient overlay rendering.
pub trait Presenter {
	/// Creates a style that lives until the returned handle drops.
	fn create_style(&mut self, view: ViewId, category: StyleCategory) -> StyleHandle;

	/// Draws `frame`; the overlays stay until the returned batch drops.
	fn render(&mut self, frame: &LabelFrame, styles: &StyleSet) -> OverlayBatch;

	/// Creates one style per category.
	fn create_styles(&mut self, view: ViewId) -> StyleSet {
		StyleSet {
			primary: self.create_style(view, StyleCategory::Primary),
			secondary: self.create_style(view, StyleCategory::Secondary),
			label: self.create_style(view, StyleCategory::Label),
		}
	}
}

/// Everything the controller needs from the editor.
pub trait JumpHost: ViewSource + Presenter {
	/// Routes every key of `view` to the controller until the capture drops.
	fn install_key_capture(&mut self, view: ViewId) -> KeyCapture;

	/// Queues a semantic token fetch.
	///
	/// The host answers later through
	/// [`JumpController::deliver_tokens`](crate::JumpController::deliver_tokens).
	fn request_semantic_tokens(&mut self, request: TokenRequest) -> glide_targets::Result<()>;

	/// Moves the cursor of `view` to `position`.
	fn jump_to(&mut self, view: ViewId, position: Position, reveal: Reveal);

	fn notify(&mut self, notice: Notice);
}
