//! Scoped host resources.
//!
//! Each guard runs its release hook exactly once when dropped, so every exit
//! path of a session (jump, cancel, error, panic unwind) gives the key
//! intercept, styles and overlays back to the host.

use std::fmt;

use glide_primitives::ViewId;
use serde::Serialize;

type Release = Box<dyn FnOnce()>;

/// Runs the release hook on drop.
struct OnDrop(Option<Release>);

impl OnDrop {
	fn new(release: impl FnOnce() + 'static) -> Self {
		Self(Some(Box::new(release)))
	}
}

impl Drop for OnDrop {
	fn drop(&mut self) {
		if let Some(release) = self.0.take() {
			release();
		}
	}
}

/// Installed raw key intercept for one view.
///
/// While alive the host routes every key to the controller.
pub struct KeyCapture {
	view: ViewId,
	_release: OnDrop,
}

impl KeyCapture {
	pub fn new(view: ViewId, release: impl FnOnce() + 'static) -> Self {
		Self {
			view,
			_release: OnDrop::new(release),
		}
	}

	pub fn view(&self) -> ViewId {
		self.view
	}
}

impl fmt::Debug for KeyCapture {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeyCapture").field("view", &self.view).finish_non_exhaustive()
	}
}

/// Host-side identifier of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StyleId(pub u64);

/// Visual role of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display, strum_macros::EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StyleCategory {
	/// Focused target highlight.
	Primary,
	/// Other target highlights.
	Secondary,
	/// Label text.
	Label,
}

/// A style created once per session and disposed when dropped.
pub struct StyleHandle {
	id: StyleId,
	category: StyleCategory,
	_release: OnDrop,
}

impl StyleHandle {
	pub fn new(id: StyleId, category: StyleCategory, release: impl FnOnce() + 'static) -> Self {
		Self {
			id,
			category,
			_release: OnDrop::new(release),
		}
	}

	pub fn id(&self) -> StyleId {
		self.id
	}

	pub fn category(&self) -> StyleCategory {
		self.category
	}
}

impl fmt::Debug for StyleHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StyleHandle")
			.field("id", &self.id)
			.field("category", &self.category)
			.finish_non_exhaustive()
	}
}

/// One reusable style per category.
#[derive(Debug)]
pub struct StyleSet {
	pub primary: StyleHandle,
	pub secondary: StyleHandle,
	pub label: StyleHandle,
}

impl StyleSet {
	pub fn get(&self, category: StyleCategory) -> &StyleHandle {
		match category {
			StyleCategory::Primary => &self.primary,
			StyleCategory::Secondary => &self.secondary,
			StyleCategory::Label => &self.label,
		}
	}
}

/// Host-side identifier of a rendered overlay batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BatchId(pub u64);

/// A rendered overlay pass; dropping it clears the overlays.
pub struct OverlayBatch {
	id: BatchId,
	_release: OnDrop,
}

impl OverlayBatch {
	pub fn new(id: BatchId, release: impl FnOnce() + 'static) -> Self {
		Self {
			id,
			_release: OnDrop::new(release),
		}
	}

	pub fn id(&self) -> BatchId {
		self.id
	}
}

impl fmt::Debug for OverlayBatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OverlayBatch").field("id", &self.id).finish_non_exhaustive()
	}
}
