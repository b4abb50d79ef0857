//! Request/response pair for asynchronous token fetches.
//!
//! A request carries the pattern version that was current when it was
//! issued. The response echoes it back so the receiver can drop results that
//! arrive after the pattern moved on.

use glide_primitives::{BoxFutureLocal, LineRange, ViewId};
use tracing::trace;

use super::SemanticTokens;
use crate::Result;

/// A pending semantic-token fetch for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
	pub view: ViewId,
	/// Pattern version at issue time.
	pub version: u64,
	pub lines: Vec<LineRange>,
}

/// Outcome of a [`TokenRequest`].
#[derive(Debug, Clone)]
pub struct TokenResponse {
	pub view: ViewId,
	pub version: u64,
	pub result: Result<SemanticTokens>,
}

impl TokenRequest {
	/// Builds the response for this request.
	pub fn respond(&self, result: Result<SemanticTokens>) -> TokenResponse {
		TokenResponse {
			view: self.view,
			version: self.version,
			result,
		}
	}
}

/// External provider of semantic tokens (typically a language server).
pub trait SemanticTokenSource {
	/// Fetches tokens covering `lines` of `view`.
	fn semantic_tokens<'a>(&'a self, view: ViewId, lines: &'a [LineRange]) -> BoxFutureLocal<'a, Result<SemanticTokens>>;
}

/// Runs `request` against `source`, folding any failure into the response.
pub async fn fetch_tokens(source: &dyn SemanticTokenSource, request: TokenRequest) -> TokenResponse {
	trace!(view = %request.view, version = request.version, "Fetching semantic tokens");
	let result = source.semantic_tokens(request.view, &request.lines).await;
	if let Err(err) = &result {
		trace!(view = %request.view, version = request.version, error = %err, "Semantic token fetch failed");
	}
	request.respond(result)
}
