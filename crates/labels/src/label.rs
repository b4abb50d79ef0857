use std::fmt;

use serde::Serialize;

/// Keys that select one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum Label {
	Single(char),
	Sequence(char, char),
}

impl Label {
	pub fn is_sequence(&self) -> bool {
		matches!(self, Self::Sequence(..))
	}

	/// The key that starts this label.
	pub fn first(&self) -> char {
		match *self {
			Self::Single(c) | Self::Sequence(c, _) => c,
		}
	}

	/// The second key of a sequence.
	pub fn second(&self) -> Option<char> {
		match *self {
			Self::Single(_) => None,
			Self::Sequence(_, c) => Some(c),
		}
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Single(c) => write!(f, "{c}"),
			Self::Sequence(a, b) => write!(f, "{a}{b}"),
		}
	}
}

impl From<Label> for String {
	fn from(label: Label) -> Self {
		label.to_string()
	}
}
