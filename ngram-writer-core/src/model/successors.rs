use super::random::RandomSource;

/// Words observed to follow one n-gram key.
///
/// This is a multiset kept as an ordered list: every observation is stored,
/// in the order it was encountered, and never deduplicated. A word that
/// followed the key three times is therefore three times as likely to be
/// picked as a word that followed it once.
///
/// ## Invariants
/// - A list stored in a built table is never empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Successors {
	words: Vec<String>,
}

impl Successors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one more observation of `word` following the key.
	pub fn push(&mut self, word: String) {
		self.words.push(word);
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.words
	}

	/// Number of times `word` was observed after the key.
	pub fn count(&self, word: &str) -> usize {
		self.words.iter().filter(|w| *w == word).count()
	}

	/// Picks one successor uniformly over the stored observations.
	///
	/// Performs a single draw in `[0, len - 1]`.
	/// Returns `None` if no successor was recorded.
	pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.words.is_empty() {
			return None;
		}
		let index = rng.random_integer(0, self.words.len() - 1);
		self.words.get(index).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::random::ScriptedSource;

	fn successors(words: &[&str]) -> Successors {
		let mut s = Successors::new();
		for w in words {
			s.push((*w).to_owned());
		}
		s
	}

	#[test]
	fn test_repeats_are_kept_in_order() {
		let s = successors(&["cat", "mat", "cat"]);
		assert_eq!(s.len(), 3);
		assert_eq!(s.count("cat"), 2);
		assert_eq!(s.iter().collect::<Vec<_>>(), vec!["cat", "mat", "cat"]);
	}

	#[test]
	fn test_pick_uses_drawn_index() {
		let s = successors(&["a", "b", "c"]);
		let mut rng = ScriptedSource::new(vec![2, 0, 1]);
		assert_eq!(s.pick(&mut rng), Some("c"));
		assert_eq!(s.pick(&mut rng), Some("a"));
		assert_eq!(s.pick(&mut rng), Some("b"));
	}

	#[test]
	fn test_pick_on_empty_draws_nothing() {
		let s = Successors::new();
		let mut rng = ScriptedSource::new(vec![0]);
		assert_eq!(s.pick(&mut rng), None);
		assert!(rng.served().is_empty());
	}
}
