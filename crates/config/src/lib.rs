//! Configuration for the label jump engine.
//!
//! [`JumpConfig`] carries every tunable the engine consumes: the jump
//! alphabet and its home row, match rules, density thresholds, the
//! auto-jump rules, and the per-kind priority table. Values are read from
//! TOML with kebab-case keys; every key is optional.
//!
//! ```toml
//! alphabet = "asdfghjklqwertyuiopzxcvbnm"
//! home-row = "asdfghjkl"
//! min-pattern-length = 2
//!
//! [density]
//! low = 20
//! high = 80
//!
//! [type-priorities]
//! function = 120
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use glide_primitives::TargetKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod error;

pub use error::{ConfigError, ConfigWarning, Result};

/// Candidate-count boundaries that select the label strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DensityThresholds {
	/// At or below: one key per target.
	pub low: usize,
	/// At or below (and above `low`): single keys for the best targets, sequences for the rest.
	/// Above: every target gets a two-key sequence.
	pub high: usize,
}

impl Default for DensityThresholds {
	fn default() -> Self {
		Self { low: 20, high: 80 }
	}
}

/// Per-kind priority overrides on top of [`TargetKind::default_priority`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypePriorities(BTreeMap<TargetKind, i64>);

impl TypePriorities {
	/// Returns the priority for `kind`, preferring an override.
	pub fn get(&self, kind: TargetKind) -> i64 {
		self.0.get(&kind).copied().unwrap_or_else(|| kind.default_priority())
	}

	/// Overrides the priority of `kind`.
	pub fn set(&mut self, kind: TargetKind, priority: i64) {
		self.0.insert(kind, priority);
	}
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct JumpConfig {
	/// Label keys in preference order.
	pub alphabet: String,
	/// Comfortable subset of `alphabet`.
	pub home_row: String,
	pub case_sensitive: bool,
	/// Pattern length required before labels become selectable.
	pub min_pattern_length: usize,
	/// Targets kept after the distance sort.
	pub max_candidates: usize,
	/// Matches shorter than this many characters are discarded.
	pub min_match_length: usize,
	pub density: DensityThresholds,
	/// Largest target count that may enter label selection.
	pub auto_jump_ceiling: usize,
	/// Jump without a label keystroke when one target remains.
	pub auto_jump_single: bool,
	/// Largest column gap between members of one cluster.
	pub cluster_gap: usize,
	/// Priority of targets without a semantic classification.
	pub unclassified_priority: i64,
	pub type_priorities: TypePriorities,
}

impl Default for JumpConfig {
	fn default() -> Self {
		Self {
			alphabet: "asdfghjklqwertyuiopzxcvbnm".to_string(),
			home_row: "asdfghjkl".to_string(),
			case_sensitive: false,
			min_pattern_length: 2,
			max_candidates: 500,
			min_match_length: 1,
			density: DensityThresholds::default(),
			auto_jump_ceiling: 160,
			auto_jump_single: true,
			cluster_gap: 5,
			unclassified_priority: 50,
			type_priorities: TypePriorities::default(),
		}
	}
}

impl JumpConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: JumpConfig = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&source)?;
		debug!(path = %path.display(), alphabet = %config.alphabet, "Loaded jump config");
		Ok(config)
	}

	/// Checks alphabet and threshold invariants the label assigner relies on.
	pub fn validate(&self) -> Result<()> {
		let alphabet = unique_keys("alphabet", &self.alphabet)?;
		if alphabet.is_empty() {
			return Err(ConfigError::EmptyAlphabet);
		}
		let home = unique_keys("home-row", &self.home_row)?;
		if home.is_empty() {
			return Err(ConfigError::EmptyHomeRow);
		}
		if let Some(&key) = home.iter().find(|k| !alphabet.contains(k)) {
			return Err(ConfigError::HomeRowOutsideAlphabet(key));
		}
		if home.len() == alphabet.len() {
			return Err(ConfigError::NoExtendedKeys);
		}

		let DensityThresholds { low, high } = self.density;
		if low > high {
			return Err(ConfigError::InvertedThresholds { low, high });
		}
		if low > alphabet.len() {
			return Err(ConfigError::LowThresholdExceedsAlphabet { low, size: alphabet.len() });
		}
		Ok(())
	}

	/// Returns non-fatal problems with an otherwise valid configuration.
	pub fn warnings(&self) -> Vec<ConfigWarning> {
		let mut warnings = Vec::new();
		if self.auto_jump_ceiling < self.density.high {
			warnings.push(ConfigWarning::CeilingBelowHighDensity {
				ceiling: self.auto_jump_ceiling,
				high: self.density.high,
			});
		}
		if self.min_pattern_length == 0 {
			warnings.push(ConfigWarning::ZeroPatternLength);
		}
		if self.max_candidates < self.auto_jump_ceiling {
			warnings.push(ConfigWarning::MaxCandidatesBelowCeiling {
				max: self.max_candidates,
				ceiling: self.auto_jump_ceiling,
			});
		}
		warnings
	}
}

fn unique_keys(field: &'static str, keys: &str) -> Result<Vec<char>> {
	let mut seen = HashSet::new();
	let mut out = Vec::new();
	for key in keys.chars() {
		if key.is_whitespace() || key.is_control() {
			return Err(ConfigError::UnusableKey { field, key });
		}
		if !seen.insert(key) {
			return Err(ConfigError::DuplicateKey { field, key });
		}
		out.push(key);
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
