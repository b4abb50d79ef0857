use glide_config::JumpConfig;
use glide_primitives::Position;
use tracing::trace;

use crate::{Candidate, Result, TargetProvider, TargetQuery};

/// Post-discovery filter bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryLimits {
	/// Matches shorter than this many characters are discarded.
	pub min_match_length: usize,
	/// Candidates kept after sorting; the closest ones survive.
	pub max_candidates: usize,
}

impl Default for DiscoveryLimits {
	fn default() -> Self {
		Self::from(&JumpConfig::default())
	}
}

impl From<&JumpConfig> for DiscoveryLimits {
	fn from(config: &JumpConfig) -> Self {
		Self {
			min_match_length: config.min_match_length,
			max_candidates: config.max_candidates,
		}
	}
}

/// Runs `provider` and returns its candidates closest-first, filtered by `limits`.
///
/// An empty pattern yields no candidates without consulting the provider.
pub fn discover(provider: &dyn TargetProvider, query: &TargetQuery<'_>, limits: DiscoveryLimits) -> Result<Vec<Candidate>> {
	if query.pattern.is_empty() {
		return Ok(Vec::new());
	}
	let mut candidates = provider.find(query)?;
	let found = candidates.len();
	sort_by_distance(&mut candidates, query.cursor);
	candidates.retain(|c| c.len >= limits.min_match_length);
	candidates.truncate(limits.max_candidates);
	trace!(pattern = query.pattern, found, kept = candidates.len(), "Discovered targets");
	Ok(candidates)
}

/// Sorts by weighted cursor distance, breaking ties in document order.
pub fn sort_by_distance(candidates: &mut [Candidate], cursor: Position) {
	candidates.sort_by_key(|c| (c.position.weighted_distance(cursor), c.position));
}
