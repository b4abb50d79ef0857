use std::collections::HashSet;

use glide_config::DensityThresholds;
use glide_labels::{LabelAlphabet, LabelAssigner};
use glide_primitives::Position;
use glide_targets::{Candidate, ScoredCandidate};
use proptest::prelude::*;

fn scored_strategy() -> impl Strategy<Value = Vec<ScoredCandidate>> {
	prop::collection::vec((any::<i16>(), prop::option::of(prop::char::range('a', 'z'))), 0..300).prop_map(|specs| {
		specs
			.into_iter()
			.enumerate()
			.map(|(line, (score, next_char))| ScoredCandidate {
				candidate: Candidate::new(Position::new(line, 0), "ab", next_char),
				score: i64::from(score),
				cluster_size: 1,
			})
			.collect()
	})
}

fn assigner_strategy() -> impl Strategy<Value = LabelAssigner> {
	(1usize..10, 0usize..30, 0usize..120).prop_map(|(home, low, extra)| {
		let all = "asdfghjklqwertyuiopzxcvbnm";
		let home: String = all.chars().take(home).collect();
		LabelAssigner::new(LabelAlphabet::new(all, &home), DensityThresholds { low, high: low + extra })
	})
}

proptest! {
	#[test]
	fn assignment_is_deterministic_and_injective(targets in scored_strategy(), assigner in assigner_strategy()) {
		let first = assigner.assign(targets.clone());
		let second = assigner.assign(targets.clone());
		prop_assert_eq!(&first, &second);

		let unique: HashSet<String> = first.labeled.iter().map(|t| t.label.to_string()).collect();
		prop_assert_eq!(unique.len(), first.labeled.len());
		prop_assert_eq!(first.total(), targets.len());
	}

	#[test]
	fn single_keys_never_start_a_sequence(targets in scored_strategy(), assigner in assigner_strategy()) {
		let assignment = assigner.assign(targets);
		let singles: HashSet<char> = assignment.labeled.iter().filter(|t| !t.label.is_sequence()).map(|t| t.label.first()).collect();
		prop_assert!(assignment.labeled.iter().filter(|t| t.label.is_sequence()).all(|t| !singles.contains(&t.label.first())));
	}

	#[test]
	fn single_labels_never_echo_next_char(targets in scored_strategy(), assigner in assigner_strategy()) {
		let assignment = assigner.assign(targets);
		for t in assignment.labeled.iter().filter(|t| !t.label.is_sequence()) {
			if let Some(next) = t.target.candidate.next_char {
				prop_assert!(!t.label.first().eq_ignore_ascii_case(&next));
			}
		}
	}
}
