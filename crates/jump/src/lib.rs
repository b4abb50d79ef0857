//! Keystroke-driven label jumps.
//!
//! [`JumpController`] owns at most one [`SearchSession`] per view and drives
//! it through pattern building, label selection and two-key disambiguation.
//! Everything the controller needs from the editor goes through
//! [`JumpHost`]; [`MemoryHost`] implements it over a plain rope.
//!
//! ```text
//! Idle -> PatternBuilding -> TargetSelection -> AwaitingSecond
//!              ^     |              |                 |
//!              +-----+--------------+-----------------+--> Jumped / Cancelled
//! ```

mod command;
mod controller;
mod frame;
mod host;
mod memory;
mod resource;
mod session;
mod types;

pub use command::{CommandError, JumpCommand};
pub use controller::JumpController;
pub use frame::{Highlight, LabelFrame, OverlayItem};
pub use glide_targets::JumpMode;
pub use host::{JumpHost, Presenter, ViewSource};
pub use memory::{MemoryHost, MemoryLedger, TokenSupply};
pub use resource::{BatchId, KeyCapture, OverlayBatch, StyleCategory, StyleHandle, StyleId, StyleSet};
pub use session::SearchSession;
pub use types::{CancelReason, Jump, JumpState, KeyOutcome, Notice, NoticeLevel, Reveal};
