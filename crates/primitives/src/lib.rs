//! Core types for label jumps: buffer positions, visible ranges, keys, and target kinds.

/// Async future aliases.
pub mod future;
/// Identifier types for editor views.
pub mod ids;
/// Key event types.
pub mod key;
/// Semantic classification of jump targets.
pub mod kind;
/// Line/column positions and visible line ranges.
pub mod position;

pub use future::{BoxFutureLocal, poll_once};
pub use ids::ViewId;
pub use key::{Key, KeyCode, Modifiers};
pub use kind::TargetKind;
pub use position::{LineRange, Position, is_line_visible};
pub use ropey::{Rope, RopeSlice};
