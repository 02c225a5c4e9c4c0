use std::borrow::Borrow;
use std::fmt;

/// An ordered window of `n - 1` words used as a table key.
///
/// Two keys are equal iff their words are equal element-wise, in order.
/// The key borrows as `[String]`, so the generator can look up the trailing
/// window of its output without building a new key at every step.
///
/// For `n == 1` the single key of a table is the empty window.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NGramKey(Vec<String>);

impl NGramKey {
	pub fn new(words: Vec<String>) -> Self {
		Self(words)
	}

	/// Number of words in the window (`n - 1`).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	pub fn into_words(self) -> Vec<String> {
		self.0
	}
}

// `Vec<String>` and `[String]` hash identically, which keeps `Borrow` sound.
impl Borrow<[String]> for NGramKey {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

impl From<Vec<String>> for NGramKey {
	fn from(words: Vec<String>) -> Self {
		Self(words)
	}
}

impl From<&[&str]> for NGramKey {
	fn from(words: &[&str]) -> Self {
		Self(words.iter().map(|w| (*w).to_owned()).collect())
	}
}

impl fmt::Display for NGramKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn test_slice_lookup_matches_owned_key() {
		let mut map: HashMap<NGramKey, u32> = HashMap::new();
		map.insert(NGramKey::from(&["the", "cat"][..]), 7);

		let window = vec!["on".to_owned(), "the".to_owned(), "cat".to_owned()];
		assert_eq!(map.get(&window[1..]), Some(&7));
		assert_eq!(map.get(&window[..2]), None);
	}

	#[test]
	fn test_order_matters() {
		let a = NGramKey::from(&["a", "b"][..]);
		let b = NGramKey::from(&["b", "a"][..]);
		assert_ne!(a, b);
	}

	#[test]
	fn test_display_joins_with_spaces() {
		assert_eq!(NGramKey::from(&["to", "be"][..]).to_string(), "to be");
		assert_eq!(NGramKey::default().to_string(), "");
	}
}
