//! Jump target discovery.
//!
//! A [`TargetProvider`] turns a pattern into raw [`Candidate`]s on the
//! visible lines of a buffer. [`discover`] orders and filters them by cursor
//! distance, and [`TargetScorer`] collapses member-access chains into
//! clusters and ranks what remains.

mod candidate;
pub mod cluster;
mod discover;
mod error;
mod hybrid;
mod literal;
mod query;
pub mod score;
pub mod semantic;

pub use candidate::Candidate;
pub use cluster::{Cluster, cluster};
pub use discover::{DiscoveryLimits, discover, sort_by_distance};
pub use error::{Result, TargetError};
pub use hybrid::HybridProvider;
pub use literal::LiteralProvider;
pub use query::{TargetQuery, chars_match, line_text};
pub use score::{ScoredCandidate, TargetScorer};
pub use semantic::{
	DecodedToken, OffsetEncoding, SemanticProvider, SemanticTokenSource, SemanticTokens, TokenRequest, TokenResponse, decode_semantic_tokens,
	fetch_tokens, token_at,
};
use serde::{Deserialize, Serialize};

/// Source of raw candidates for a pattern.
///
/// Implementations must be free of hidden mutable state: identical queries
/// yield the same candidates (order may differ).
pub trait TargetProvider {
	/// Returns every occurrence of `query.pattern` on the visible lines.
	fn find(&self, query: &TargetQuery<'_>) -> Result<Vec<Candidate>>;
}

/// Which provider a jump session uses.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum_macros::Display, strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JumpMode {
	/// Exact substring matches.
	#[default]
	Literal,
	/// Matches against semantic token text.
	Semantic,
	/// Substring matches classified by semantic tokens when available.
	Hybrid,
}

impl JumpMode {
	/// Returns true if the mode consumes semantic tokens.
	pub fn uses_tokens(self) -> bool {
		matches!(self, Self::Semantic | Self::Hybrid)
	}
}
