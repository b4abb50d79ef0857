use thiserror::Error;

/// Failures at the target provider boundary.
#[derive(Debug, Clone, Error)]
pub enum TargetError {
	/// The pattern could not be compiled into a matcher.
	#[error("invalid search pattern: {0}")]
	Pattern(#[from] regex::Error),

	/// The host exposes no semantic token source for this view.
	#[error("semantic tokens are unavailable for this view")]
	TokensUnavailable,

	/// The token source failed while serving a request.
	#[error("semantic token request failed: {0}")]
	TokenRequest(String),
}

/// Result type for target discovery.
pub type Result<T> = std::result::Result<T, TargetError>;
