use glide_primitives::TargetKind;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn defaults_are_valid_and_quiet() {
	let config = JumpConfig::default();
	config.validate().unwrap();
	assert!(config.warnings().is_empty());
}

#[test]
fn empty_document_yields_defaults() {
	assert_eq!(JumpConfig::from_toml_str("").unwrap(), JumpConfig::default());
}

#[test]
fn parses_kebab_case_keys_and_tables() {
	let config = JumpConfig::from_toml_str(
		r#"
			alphabet = "jkl;asdf"
			home-row = "jkl;"
			case-sensitive = true
			min-pattern-length = 3
			auto-jump-single = false
			unclassified-priority = 10

			[density]
			low = 4
			high = 12

			[type-priorities]
			function = 7
			enumMember = 99
		"#,
	)
	.unwrap();

	assert_eq!(config.alphabet, "jkl;asdf");
	assert_eq!(config.home_row, "jkl;");
	assert!(config.case_sensitive);
	assert_eq!(config.min_pattern_length, 3);
	assert!(!config.auto_jump_single);
	assert_eq!(config.density, DensityThresholds { low: 4, high: 12 });
	assert_eq!(config.type_priorities.get(TargetKind::Function), 7);
	assert_eq!(config.type_priorities.get(TargetKind::EnumMember), 99);
	assert_eq!(config.type_priorities.get(TargetKind::Method), TargetKind::Method.default_priority());
	assert_eq!(config.unclassified_priority, 10);
}

#[test]
fn unknown_keys_are_rejected() {
	let err = JumpConfig::from_toml_str("alphabett = \"abc\"").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "got {err:?}");

	let err = JumpConfig::from_toml_str("[type-priorities]\nlifetime = 3").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "got {err:?}");
}

#[rstest]
#[case("alphabet = \"\"", "jump alphabet is empty")]
#[case("alphabet = \"aab\"", "duplicate key 'a' in alphabet")]
#[case("alphabet = \"a b\"\nhome-row = \"a\"", "unusable key ' ' in alphabet")]
#[case("home-row = \"\"", "home row is empty")]
#[case("home-row = \"as1\"", "home-row key '1' is not part of the alphabet")]
#[case("alphabet = \"asd\"\nhome-row = \"dsa\"\n[density]\nlow = 2\nhigh = 4", "home row covers the whole alphabet; at least one extended key is required")]
#[case("[density]\nlow = 30\nhigh = 10", "density.low (30) must not exceed density.high (10)")]
#[case("[density]\nlow = 27\nhigh = 90", "density.low (27) exceeds the alphabet size (26)")]
fn validation_errors(#[case] source: &str, #[case] message: &str) {
	let err = JumpConfig::from_toml_str(source).unwrap_err();
	assert_eq!(err.to_string(), message);
}

#[test]
fn warnings_flag_unreachable_selection() {
	let config = JumpConfig {
		min_pattern_length: 0,
		auto_jump_ceiling: 40,
		max_candidates: 30,
		..JumpConfig::default()
	};
	assert_eq!(
		config.warnings(),
		vec![
			ConfigWarning::CeilingBelowHighDensity { ceiling: 40, high: 80 },
			ConfigWarning::ZeroPatternLength,
			ConfigWarning::MaxCandidatesBelowCeiling { max: 30, ceiling: 40 },
		]
	);
}
