use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a host editor view.
///
/// At most one search session exists per view; the controller keys its
/// session table on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view#{}", self.0)
	}
}
