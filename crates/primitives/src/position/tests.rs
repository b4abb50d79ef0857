use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case(Position::new(4, 10), Position::new(4, 10), 0)]
#[case(Position::new(4, 2), Position::new(4, 10), 8)]
#[case(Position::new(5, 0), Position::new(4, 10), 100)]
#[case(Position::new(1, 80), Position::new(4, 0), 300)]
fn weighted_distance(#[case] target: Position, #[case] cursor: Position, #[case] expected: usize) {
	assert_eq!(target.weighted_distance(cursor), expected);
}

#[test]
fn ordering_is_document_order() {
	let mut positions = vec![Position::new(2, 0), Position::new(0, 9), Position::new(0, 3)];
	positions.sort();
	assert_eq!(positions, vec![Position::new(0, 3), Position::new(0, 9), Position::new(2, 0)]);
}

#[test]
fn line_range_clamps_to_buffer() {
	assert_eq!(LineRange::new(3, 50).clamp(10), LineRange::new(3, 10));
	assert!(LineRange::new(12, 50).clamp(10).is_empty());
	assert!(is_line_visible(&[LineRange::new(0, 2), LineRange::new(8, 9)], 8));
	assert!(!is_line_visible(&[LineRange::new(0, 2), LineRange::new(8, 9)], 2));
}

proptest! {
	/// Any target one line closer beats any same-distance column offset below 100.
	#[test]
	fn prop_line_distance_dominates(line in 1usize..500, col_a in 0usize..99, col_b in 0usize..99, cursor_col in 0usize..99) {
		let cursor = Position::new(line, cursor_col);
		let same_line = Position::new(line, col_a);
		let next_line = Position::new(line + 1, col_b);
		prop_assert!(same_line.weighted_distance(cursor) < next_line.weighted_distance(cursor));
	}
}
