//! Label assignment for jump targets.
//!
//! Given ranked targets, [`LabelAssigner`] picks a label length strategy from
//! the target count and hands out one- or two-key labels in rank order:
//!
//! * [`LabelStrategy::Single`]: one key per target.
//! * [`LabelStrategy::Mixed`]: home-row keys for the best targets, then
//!   extended-key + home-key sequences.
//! * [`LabelStrategy::Progressive`]: a two-key sequence for every target.
//!
//! Targets beyond the strategy's capacity are returned as overflow. The
//! assigner is pure; the same input always yields the same labels.

mod alphabet;
mod assign;
mod label;

pub use alphabet::LabelAlphabet;
pub use assign::{Assignment, LabelAssigner, LabelStrategy, LabeledTarget, Resolution};
pub use label::Label;
