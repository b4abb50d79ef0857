use std::fmt;

use serde::{Deserialize, Serialize};

/// A buffer position: zero-based line and character column within the line.
///
/// Ordering is document order (line first, then column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
	pub line: usize,
	pub col: usize,
}

impl Position {
	pub const fn new(line: usize, col: usize) -> Self {
		Self { line, col }
	}

	/// Weighted distance from `origin`.
	///
	/// Line distance dominates: each line counts 100, and column distance only
	/// contributes on the same line, so a vertically closer target always wins.
	pub fn weighted_distance(self, origin: Position) -> usize {
		let line_diff = self.line.abs_diff(origin.line);
		if line_diff == 0 {
			self.col.abs_diff(origin.col)
		} else {
			line_diff.saturating_mul(100)
		}
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line + 1, self.col + 1)
	}
}

/// A half-open range of buffer lines (`start..end`) rendered by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
	pub start: usize,
	pub end: usize,
}

impl LineRange {
	pub const fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	/// Returns true if `line` falls inside the range.
	pub fn contains(&self, line: usize) -> bool {
		(self.start..self.end).contains(&line)
	}

	/// Returns true if the range covers no lines.
	pub fn is_empty(&self) -> bool {
		self.end <= self.start
	}

	/// Clamps the range to a buffer with `line_count` lines.
	pub fn clamp(self, line_count: usize) -> Self {
		let end = self.end.min(line_count);
		Self {
			start: self.start.min(end),
			end,
		}
	}

	/// Iterates the lines of the range.
	pub fn lines(&self) -> std::ops::Range<usize> {
		self.start..self.end
	}
}

/// Returns true if `line` is inside any of `ranges`.
pub fn is_line_visible(ranges: &[LineRange], line: usize) -> bool {
	ranges.iter().any(|r| r.contains(line))
}

#[cfg(test)]
mod tests;
