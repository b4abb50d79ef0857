//! Target importance scoring.
//!
//! `score = priority - min(line_distance * 2, 50) + (line_distance <= 5 ? 20 : 0)`
//!
//! Ranked order decides which targets receive the scarcer single-key labels.

use glide_config::{JumpConfig, TypePriorities};
use glide_primitives::{Position, TargetKind};
use serde::Serialize;
use tracing::trace;

use crate::{Candidate, cluster};

const PENALTY_PER_LINE: i64 = 2;
const MAX_PENALTY: i64 = 50;
const PROXIMITY_LINES: usize = 5;
const PROXIMITY_BONUS: i64 = 20;

/// A candidate (or cluster representative) with its importance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
	pub candidate: Candidate,
	/// Higher is more important.
	pub score: i64,
	/// Members of the cluster this candidate represents; 1 for singletons.
	pub cluster_size: usize,
}

impl ScoredCandidate {
	pub fn position(&self) -> Position {
		self.candidate.position
	}
}

/// Clusters and scores candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetScorer {
	priorities: TypePriorities,
	unclassified: i64,
	gap: usize,
}

impl Default for TargetScorer {
	fn default() -> Self {
		Self::from_config(&JumpConfig::default())
	}
}

impl TargetScorer {
	pub fn from_config(config: &JumpConfig) -> Self {
		Self {
			priorities: config.type_priorities.clone(),
			unclassified: config.unclassified_priority,
			gap: config.cluster_gap,
		}
	}

	/// Static priority of a classification.
	pub fn priority(&self, kind: Option<TargetKind>) -> i64 {
		kind.map_or(self.unclassified, |kind| self.priorities.get(kind))
	}

	/// Scores one candidate against the cursor.
	pub fn score(&self, candidate: &Candidate, cursor: Position) -> i64 {
		let lines = candidate.position.line.abs_diff(cursor.line);
		let penalty = i64::try_from(lines).map_or(MAX_PENALTY, |l| l.saturating_mul(PENALTY_PER_LINE).min(MAX_PENALTY));
		let bonus = if lines <= PROXIMITY_LINES { PROXIMITY_BONUS } else { 0 };
		self.priority(candidate.kind) - penalty + bonus
	}

	/// Clusters `candidates`, scores each representative and returns them
	/// best-first.
	///
	/// Equal scores are ordered by cursor distance, then document order, so
	/// ranking is total and deterministic.
	pub fn rank(&self, candidates: Vec<Candidate>, cursor: Position) -> Vec<ScoredCandidate> {
		let clusters = cluster(candidates, self.gap, |kind| self.priority(kind));
		let mut scored: Vec<_> = clusters
			.into_iter()
			.map(|cluster| {
				let cluster_size = cluster.len();
				let candidate = cluster.into_representative();
				ScoredCandidate {
					score: self.score(&candidate, cursor),
					candidate,
					cluster_size,
				}
			})
			.collect();
		scored.sort_by(|a, b| {
			b.score
				.cmp(&a.score)
				.then_with(|| a.position().weighted_distance(cursor).cmp(&b.position().weighted_distance(cursor)))
				.then_with(|| a.position().cmp(&b.position()))
		});
		trace!(count = scored.len(), "Ranked targets");
		scored
	}
}
