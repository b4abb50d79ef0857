//! Error types for jump configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown/mistyped key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The jump alphabet has no keys.
	#[error("jump alphabet is empty")]
	EmptyAlphabet,

	/// The home row has no keys.
	#[error("home row is empty")]
	EmptyHomeRow,

	/// A key appears twice in an alphabet.
	#[error("duplicate key '{key}' in {field}")]
	DuplicateKey {
		/// Config key of the offending alphabet.
		field: &'static str,
		/// The repeated key.
		key: char,
	},

	/// A whitespace or control character cannot be typed as a label.
	#[error("unusable key {key:?} in {field}")]
	UnusableKey {
		/// Config key of the offending alphabet.
		field: &'static str,
		/// The rejected key.
		key: char,
	},

	/// A home-row key is missing from the alphabet.
	#[error("home-row key '{0}' is not part of the alphabet")]
	HomeRowOutsideAlphabet(char),

	/// The home row leaves no extended keys to prefix two-character labels.
	#[error("home row covers the whole alphabet; at least one extended key is required")]
	NoExtendedKeys,

	/// Density thresholds are inverted.
	#[error("density.low ({low}) must not exceed density.high ({high})")]
	InvertedThresholds {
		/// Low to medium boundary.
		low: usize,
		/// Medium to high boundary.
		high: usize,
	},

	/// The single-key tier would hold more targets than there are keys.
	#[error("density.low ({low}) exceeds the alphabet size ({size})")]
	LowThresholdExceedsAlphabet {
		/// Low to medium boundary.
		low: usize,
		/// Number of alphabet keys.
		size: usize,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning about a configuration that loads but behaves oddly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// Dense target sets can never reach label selection.
	CeilingBelowHighDensity {
		/// Configured auto-jump ceiling.
		ceiling: usize,
		/// Configured high density threshold.
		high: usize,
	},
	/// Labels become live before anything was typed.
	ZeroPatternLength,
	/// Truncation drops targets that could still be labeled.
	MaxCandidatesBelowCeiling {
		/// Configured candidate cap.
		max: usize,
		/// Configured auto-jump ceiling.
		ceiling: usize,
	},
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigWarning::CeilingBelowHighDensity { ceiling, high } => {
				write!(f, "auto-jump-ceiling ({ceiling}) is below density.high ({high}); progressive labels are never selectable")
			}
			ConfigWarning::ZeroPatternLength => f.write_str("min-pattern-length is 0; labels go live before any key is typed"),
			ConfigWarning::MaxCandidatesBelowCeiling { max, ceiling } => {
				write!(f, "max-candidates ({max}) is below auto-jump-ceiling ({ceiling})")
			}
		}
	}
}
