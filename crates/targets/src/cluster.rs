//! Member-access chain clustering.
//!
//! A chain such as `config.paths.cache` yields one candidate per segment.
//! Labeling every segment would crowd the overlay, so adjacent chainable
//! candidates are grouped and only the most significant member competes.

use glide_primitives::TargetKind;

use crate::Candidate;

/// A run of adjacent chainable candidates on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
	members: Vec<Candidate>,
	representative: usize,
}

impl Cluster {
	fn start(candidate: Candidate) -> Self {
		Self {
			members: vec![candidate],
			representative: 0,
		}
	}

	/// Members in document order.
	pub fn members(&self) -> &[Candidate] {
		&self.members
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// The member that competes for a label.
	pub fn representative(&self) -> &Candidate {
		&self.members[self.representative]
	}

	pub fn into_representative(mut self) -> Candidate {
		self.members.swap_remove(self.representative)
	}

	fn last(&self) -> &Candidate {
		&self.members[self.members.len() - 1]
	}
}

fn is_chainable(candidate: &Candidate) -> bool {
	candidate.kind.is_some_and(TargetKind::is_chainable)
}

/// Returns true if `next` extends a chain ending in `prev`.
fn joins(prev: &Candidate, next: &Candidate, gap: usize) -> bool {
	prev.position.line == next.position.line
		&& is_chainable(prev)
		&& is_chainable(next)
		&& next.position.col.saturating_sub(prev.end_col()) <= gap
}

/// Groups candidates into clusters in document order.
///
/// A candidate joins the open cluster when it sits on the same line as the
/// cluster's last member, at most `gap` columns after it, and both are
/// chainable. The representative is the member with the highest `priority`;
/// ties go to the leftmost member.
pub fn cluster(mut candidates: Vec<Candidate>, gap: usize, priority: impl Fn(Option<TargetKind>) -> i64) -> Vec<Cluster> {
	candidates.sort_by_key(|c| c.position);
	let mut clusters: Vec<Cluster> = Vec::new();

	for candidate in candidates {
		match clusters.last_mut() {
			Some(open) if joins(open.last(), &candidate, gap) => {
				if priority(candidate.kind) > priority(open.representative().kind) {
					open.representative = open.members.len();
				}
				open.members.push(candidate);
			}
			_ => clusters.push(Cluster::start(candidate)),
		}
	}

	clusters
}
