use glide_config::DensityThresholds;
use glide_primitives::Position;
use glide_targets::{Candidate, ScoredCandidate};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn target(line: usize, next_char: Option<char>) -> ScoredCandidate {
	ScoredCandidate {
		candidate: Candidate::new(Position::new(line, 0), "ab", next_char),
		score: -(line as i64),
		cluster_size: 1,
	}
}

fn targets(count: usize) -> Vec<ScoredCandidate> {
	(0..count).map(|line| target(line, None)).collect()
}

fn assigner(all: &str, home: &str, low: usize, high: usize) -> LabelAssigner {
	LabelAssigner::new(LabelAlphabet::new(all, home), DensityThresholds { low, high })
}

fn labels(assignment: &Assignment) -> Vec<String> {
	assignment.labeled.iter().map(|t| t.label.to_string()).collect()
}

#[rstest]
#[case::at_low(20, LabelStrategy::Single)]
#[case::above_low(21, LabelStrategy::Mixed)]
#[case::at_high(80, LabelStrategy::Mixed)]
#[case::above_high(81, LabelStrategy::Progressive)]
fn strategy_follows_density(#[case] count: usize, #[case] expected: LabelStrategy) {
	assert_eq!(LabelAssigner::from_config(&JumpConfig::default()).strategy_for(count), expected);
}

#[test]
fn low_threshold_boundary() {
	let assigner = LabelAssigner::from_config(&JumpConfig::default());

	let at_low = assigner.assign(targets(20));
	assert!(at_low.labeled.iter().all(|t| !t.label.is_sequence()));

	let above = assigner.assign(targets(21));
	assert!(above.labeled.iter().any(|t| t.label.is_sequence()));
}

#[test]
fn single_strategy_follows_alphabet_order() {
	let assignment = LabelAssigner::from_config(&JumpConfig::default()).assign(targets(4));
	assert_eq!(labels(&assignment), vec!["a", "s", "d", "f"]);
	assert_eq!(assignment.strategy, Some(LabelStrategy::Single));
}

#[test]
fn mixed_strategy_gives_home_keys_first() {
	let assignment = assigner("asdqw", "as", 1, 10).assign(targets(5));
	assert_eq!(labels(&assignment), vec!["a", "s", "da", "ds", "qa"]);
}

#[test]
fn progressive_strategy_overflows_past_capacity() {
	let assigner = assigner("ab", "a", 0, 0);
	assert_eq!(assigner.capacity(3), 2);

	let assignment = assigner.assign(targets(3));
	assert_eq!(labels(&assignment), vec!["aa", "ba"]);
	assert_eq!(assignment.overflow, vec![target(2, None)]);
	assert_eq!(assignment.total(), 3);
}

#[test]
fn default_capacities() {
	let assigner = LabelAssigner::from_config(&JumpConfig::default());
	assert_eq!(assigner.capacity(10), 26);
	assert_eq!(assigner.capacity(50), 9 + 17 * 9);
	assert_eq!(assigner.capacity(200), 26 * 9);
}

#[test]
fn conflicting_single_label_is_replaced() {
	let mut input = targets(8);
	input[7] = target(7, Some('k'));
	let assignment = LabelAssigner::from_config(&JumpConfig::default()).assign(input);

	let label = assignment.labeled[7].label;
	assert!(!label.is_sequence());
	assert!(!label.first().eq_ignore_ascii_case(&'k'));
	assert_eq!(label, Label::Single('A'));
	assert_eq!(labels(&assignment)[..7], ["a", "s", "d", "f", "g", "h", "j"]);
}

#[test]
fn conflict_check_ignores_case_of_next_char() {
	let assignment = LabelAssigner::from_config(&JumpConfig::default()).assign(vec![target(0, Some('A'))]);
	assert_eq!(assignment.labeled[0].label, Label::Single('S'));
}

#[test]
fn sequences_are_exempt_from_conflicts() {
	let assignment = assigner("fjk", "jk", 0, 0).assign(vec![target(0, Some('f')), target(1, Some('j'))]);
	assert_eq!(labels(&assignment), vec!["fj", "fk"]);
}

#[test]
fn uncaseable_conflict_moves_target_to_overflow() {
	let assignment = assigner(";,", ";", 2, 4).assign(vec![target(0, Some(';')), target(1, None)]);
	assert_eq!(labels(&assignment), vec![","]);
	assert_eq!(assignment.overflow, vec![target(0, Some(';'))]);
}

#[test]
fn resolves_single_keys_and_prefixes() {
	let assignment = assigner("fjk", "jk", 0, 0).assign(targets(2));

	assert_eq!(assignment.resolve('f'), Resolution::Prefix(vec![0, 1]));
	assert_eq!(assignment.resolve('x'), Resolution::NoMatch);
	assert_eq!(assignment.resolve_second(&[0, 1], 'f', 'k').map(|t| t.target.position()), Some(Position::new(1, 0)));
	assert_eq!(assignment.resolve_second(&[0, 1], 'f', 'x'), None);

	let single = LabelAssigner::from_config(&JumpConfig::default()).assign(targets(2));
	assert_eq!(single.resolve('s'), Resolution::Target(&single.labeled[1]));
}

#[test]
fn lone_sequence_prefix_selects_directly() {
	let assignment = assigner("fjk", "jk", 0, 0).assign(targets(3));
	assert_eq!(labels(&assignment), vec!["fj", "fk", "jj"]);
	assert_eq!(assignment.resolve('j'), Resolution::Target(&assignment.labeled[2]));
}

#[test]
fn removing_continuation_keys_shrinks_capacity() {
	let assigner = LabelAssigner::from_config(&JumpConfig::default());
	let blocked = ['S', 'q'].into_iter().collect();
	let restricted = assigner.without_keys(&blocked);
	assert_eq!(restricted.alphabet().len(), 24);
	assert_eq!(restricted.capacity(5), 24);
	assert!(!restricted.alphabet().all().contains(&'s'));
}

#[test]
fn empty_input_has_no_strategy() {
	let assignment = LabelAssigner::from_config(&JumpConfig::default()).assign(Vec::new());
	assert_eq!(assignment, Assignment::default());
}
