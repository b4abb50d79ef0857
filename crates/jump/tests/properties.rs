use glide_config::JumpConfig;
use glide_jump::{JumpController, JumpMode, JumpState, MemoryHost};
use glide_primitives::ViewId;
use proptest::prelude::*;

fn buffer_strategy() -> impl Strategy<Value = String> {
	prop::collection::vec("[ab ]{0,24}", 1..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
	#[test]
	fn short_patterns_never_select(text in buffer_strategy(), pattern in "[ab]{0,3}", min in 1usize..6) {
		let mut host = MemoryHost::new(&text);
		let mut controller = JumpController::new(JumpConfig { min_pattern_length: min, ..JumpConfig::default() });
		controller.start_jump(&mut host, JumpMode::Literal);

		for c in pattern.chars().take(min - 1) {
			controller.type_char(&mut host, c);
			prop_assert_eq!(controller.state(ViewId(1)), JumpState::PatternBuilding);
		}
	}

	#[test]
	fn labels_in_a_frame_are_unique(text in buffer_strategy(), pattern in "[ab]{1,3}") {
		let mut host = MemoryHost::new(&text);
		let mut controller = JumpController::default();
		controller.start_jump(&mut host, JumpMode::Literal);
		for c in pattern.chars() {
			controller.type_char(&mut host, c);
		}
		if let Some(frame) = host.last_frame() {
			let mut labels = frame.labels();
			let total = labels.len();
			labels.sort_unstable();
			labels.dedup();
			prop_assert_eq!(labels.len(), total);
		}
	}
}
