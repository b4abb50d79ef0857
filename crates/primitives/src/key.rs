//! Key representation for the jump key-capture intercept.
//!
//! The host delivers one key per event: a character, or a named key such as
//! Enter, Escape or Backspace, with optional modifiers.

use std::fmt;

/// Named and character key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Escape,
	Backspace,
	Tab,
	BackTab,
	Delete,
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
}

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// A plain character key.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// A named key without modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// `Ctrl` chord on a character.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// `Alt` chord on a character.
	pub const fn alt(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::ALT,
		}
	}

	/// Returns the typed character when no Ctrl/Alt chord is held.
	///
	/// Shift is ignored: the host already delivers the shifted codepoint.
	pub fn typed_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
			_ => None,
		}
	}

	/// Unmodified Escape.
	pub fn is_escape(&self) -> bool {
		matches!(self.code, KeyCode::Escape) && self.modifiers.is_empty()
	}

	/// Unmodified Backspace.
	pub fn is_backspace(&self) -> bool {
		matches!(self.code, KeyCode::Backspace) && self.modifiers.is_empty()
	}

	/// Unmodified Enter.
	pub fn is_enter(&self) -> bool {
		matches!(self.code, KeyCode::Enter) && self.modifiers.is_empty()
	}

	/// Parses a key script such as `fo<bs>x<cr>` into keys.
	///
	/// Recognized names inside angle brackets: `cr`/`enter`, `esc`, `bs`,
	/// `tab`, `s-tab`, `lt`, plus `c-x` and `a-x` chords. An unterminated or
	/// unknown `<...>` sequence is returned as `Err` with the offending text.
	pub fn parse_script(script: &str) -> Result<Vec<Key>, String> {
		let mut keys = Vec::new();
		let mut chars = script.chars();
		while let Some(c) = chars.next() {
			if c != '<' {
				keys.push(Key::char(c));
				continue;
			}
			let mut name = String::new();
			let mut closed = false;
			for n in chars.by_ref() {
				if n == '>' {
					closed = true;
					break;
				}
				name.push(n);
			}
			if !closed {
				return Err(format!("<{name}"));
			}
			keys.push(Self::from_name(&name).ok_or_else(|| format!("<{name}>"))?);
		}
		Ok(keys)
	}

	fn from_name(name: &str) -> Option<Key> {
		let lower = name.to_ascii_lowercase();
		let key = match lower.as_str() {
			"cr" | "enter" | "ret" => Key::new(KeyCode::Enter),
			"esc" | "escape" => Key::new(KeyCode::Escape),
			"bs" | "backspace" => Key::new(KeyCode::Backspace),
			"tab" => Key::new(KeyCode::Tab),
			"s-tab" | "backtab" => Key::new(KeyCode::BackTab),
			"del" => Key::new(KeyCode::Delete),
			"up" => Key::new(KeyCode::Up),
			"down" => Key::new(KeyCode::Down),
			"left" => Key::new(KeyCode::Left),
			"right" => Key::new(KeyCode::Right),
			"lt" => Key::char('<'),
			"space" => Key::char(' '),
			_ => {
				let mut parts = name.splitn(2, '-');
				let (Some(prefix), Some(rest)) = (parts.next(), parts.next()) else {
					return None;
				};
				let mut rest_chars = rest.chars();
				let (Some(c), None) = (rest_chars.next(), rest_chars.next()) else {
					return None;
				};
				match prefix.to_ascii_lowercase().as_str() {
					"c" => Key::ctrl(c),
					"a" => Key::alt(c),
					_ => return None,
				}
			}
		};
		Some(key)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.ctrl {
			f.write_str("C-")?;
		}
		if self.modifiers.alt {
			f.write_str("A-")?;
		}
		match self.code {
			KeyCode::Char(c) => write!(f, "{c}"),
			KeyCode::Enter => f.write_str("<cr>"),
			KeyCode::Escape => f.write_str("<esc>"),
			KeyCode::Backspace => f.write_str("<bs>"),
			KeyCode::Tab => f.write_str("<tab>"),
			KeyCode::BackTab => f.write_str("<s-tab>"),
			other => write!(f, "<{other:?}>"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn typed_char_ignores_shift_but_not_chords() {
		let mut shifted = Key::char('K');
		shifted.modifiers.shift = true;
		assert_eq!(shifted.typed_char(), Some('K'));
		assert_eq!(Key::ctrl('k').typed_char(), None);
		assert_eq!(Key::alt('k').typed_char(), None);
		assert_eq!(Key::new(KeyCode::Enter).typed_char(), None);
	}

	#[test]
	fn parse_script_named_keys() {
		let keys = Key::parse_script("fo<bs>x<CR><esc><lt><c-w>").unwrap();
		assert_eq!(
			keys,
			vec![
				Key::char('f'),
				Key::char('o'),
				Key::new(KeyCode::Backspace),
				Key::char('x'),
				Key::new(KeyCode::Enter),
				Key::new(KeyCode::Escape),
				Key::char('<'),
				Key::ctrl('w'),
			]
		);
	}

	#[test]
	fn parse_script_rejects_unknown_and_unterminated() {
		assert_eq!(Key::parse_script("a<nope>"), Err("<nope>".to_string()));
		assert_eq!(Key::parse_script("a<cr"), Err("<cr".to_string()));
	}
}
