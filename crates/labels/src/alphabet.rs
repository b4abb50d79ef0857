use glide_config::JumpConfig;

/// Label keys split into the home row and the remaining extended keys.
///
/// Key order is preference order; earlier keys go to better targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAlphabet {
	all: Vec<char>,
	home: Vec<char>,
	extended: Vec<char>,
}

impl LabelAlphabet {
	/// Builds an alphabet from `all` and its `home` subset.
	///
	/// Duplicate keys and home keys missing from `all` are ignored.
	pub fn new(all: &str, home: &str) -> Self {
		let mut keys: Vec<char> = Vec::new();
		for c in all.chars() {
			if !keys.contains(&c) {
				keys.push(c);
			}
		}
		let mut home_keys: Vec<char> = Vec::new();
		for c in home.chars() {
			if keys.contains(&c) && !home_keys.contains(&c) {
				home_keys.push(c);
			}
		}
		let extended = keys.iter().copied().filter(|c| !home_keys.contains(c)).collect();
		Self {
			all: keys,
			home: home_keys,
			extended,
		}
	}

	pub fn from_config(config: &JumpConfig) -> Self {
		Self::new(&config.alphabet, &config.home_row)
	}

	/// Every key, in preference order.
	pub fn all(&self) -> &[char] {
		&self.all
	}

	pub fn home(&self) -> &[char] {
		&self.home
	}

	/// Keys outside the home row.
	pub fn extended(&self) -> &[char] {
		&self.extended
	}

	pub fn len(&self) -> usize {
		self.all.len()
	}

	pub fn is_empty(&self) -> bool {
		self.all.is_empty()
	}

	/// Returns a copy without the keys for which `blocked` returns true.
	pub fn without(&self, blocked: impl Fn(char) -> bool) -> Self {
		let keep = |keys: &[char]| keys.iter().copied().filter(|&c| !blocked(c)).collect::<Vec<_>>();
		Self {
			all: keep(&self.all),
			home: keep(&self.home),
			extended: keep(&self.extended),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn extended_keys_preserve_alphabet_order() {
		let alphabet = LabelAlphabet::new("asdfqwer", "df");
		assert_eq!(alphabet.home(), &['d', 'f']);
		assert_eq!(alphabet.extended(), &['a', 's', 'q', 'w', 'e', 'r']);
	}

	#[test]
	fn foreign_and_duplicate_home_keys_are_dropped() {
		let alphabet = LabelAlphabet::new("abca", "bzb");
		assert_eq!(alphabet.all(), &['a', 'b', 'c']);
		assert_eq!(alphabet.home(), &['b']);
	}

	#[test]
	fn without_filters_every_row() {
		let alphabet = LabelAlphabet::new("asdfqw", "asd").without(|c| c == 's' || c == 'q');
		assert_eq!(alphabet.all(), &['a', 'd', 'f', 'w']);
		assert_eq!(alphabet.home(), &['a', 'd']);
		assert_eq!(alphabet.extended(), &['f', 'w']);
	}
}
