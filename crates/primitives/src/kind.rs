//! Semantic classification of jump targets.
//!
//! Names follow the LSP semantic token type vocabulary so a token legend can
//! be parsed directly into [`TargetKind`].

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Classification of a candidate, as reported by a semantic token source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TargetKind {
	Namespace,
	Type,
	Class,
	Enum,
	Interface,
	Struct,
	TypeParameter,
	Parameter,
	Variable,
	Property,
	EnumMember,
	Event,
	Function,
	Method,
	Macro,
	Keyword,
	Modifier,
	Comment,
	String,
	Number,
	Regexp,
	Operator,
	Decorator,
	Label,
}

impl TargetKind {
	/// Built-in type priority.
	///
	/// Callable and definable symbols rank above structural ones, which rank
	/// above leaves such as labels and macros.
	pub const fn default_priority(self) -> i64 {
		match self {
			Self::Function => 100,
			Self::Method => 95,
			Self::Class => 90,
			Self::Struct | Self::Interface => 85,
			Self::Enum => 80,
			Self::Type => 75,
			Self::Namespace => 70,
			Self::Property => 60,
			Self::Parameter => 55,
			Self::Variable | Self::EnumMember => 50,
			Self::TypeParameter | Self::Event => 45,
			Self::Decorator => 40,
			Self::Label | Self::Macro => 30,
			Self::Keyword | Self::Modifier => 20,
			Self::Operator | Self::String | Self::Number | Self::Regexp => 10,
			Self::Comment => 5,
		}
	}

	/// Whether adjacent targets of this kind can form a member-access chain (`a.b.c`).
	pub const fn is_chainable(self) -> bool {
		matches!(self, Self::Property | Self::Variable | Self::Method | Self::Namespace)
	}
}
