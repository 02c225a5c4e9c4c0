use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::ngram_key::NGramKey;
use super::successors::Successors;
use crate::error::{NGramError, Result};

/// Word-level n-gram table built from a whole document.
///
/// Maps every window of `n - 1` consecutive words to the words observed
/// right after it. The document is read as circular: windows near the end
/// wrap around to the start, so every position of the document contributes
/// exactly one (key, successor) observation and every key, including the
/// ones formed from the last words, has a successor.
///
/// # Invariants
/// - `order >= 1`
/// - Every key holds exactly `order - 1` words
/// - Every successor list is non-empty
/// - The sum of all successor list sizes equals the number of document words
/// - `keys` lists each distinct key once, in first-seen order
///
/// The table is never mutated after `build` returns.
#[derive(Clone, Debug)]
pub struct NGramTable {
	/// The order of the model (key width + 1)
	order: usize,

	/// Mapping from a key (length n-1) to its successor list
	entries: HashMap<NGramKey, Successors>,

	/// Indexable copy of the key set, for uniform start selection
	keys: Vec<NGramKey>,

	/// Total number of recorded observations
	observations: usize,
}

/// Summary figures of a built table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TableStats {
	pub order: usize,
	pub keys: usize,
	pub observations: usize,
	pub largest_successor_list: usize,
}

/// An empty table of order 1, holding no key at all.
impl Default for NGramTable {
	fn default() -> Self {
		Self { order: 1, entries: HashMap::new(), keys: Vec::new(), observations: 0 }
	}
}

impl NGramTable {
	/// Builds the table of order `n` from a token sequence.
	///
	/// For every index `i` of `tokens`, the key is the `n - 1` tokens
	/// starting at `i` and the successor is the token at `i + n - 1`, all
	/// indices taken modulo `tokens.len()`.
	///
	/// # Errors
	/// - `EmptyCorpus` if `tokens` is empty (whatever `n` is)
	/// - `InvalidOrder` if `n == 0`
	///
	/// # Notes
	/// - `n == 1` yields a single empty key whose successors are the whole
	///   document, in order.
	/// - `n` larger than the document is accepted: windows wrap more than once.
	pub fn build(tokens: &[String], n: usize) -> Result<Self> {
		if tokens.is_empty() {
			return Err(NGramError::EmptyCorpus);
		}
		if n == 0 {
			return Err(NGramError::InvalidOrder(n));
		}

		let len = tokens.len();
		let width = n - 1;
		let mut entries: HashMap<NGramKey, Successors> = HashMap::new();
		let mut keys: Vec<NGramKey> = Vec::new();

		for i in 0..len {
			// Borrow the window straight from the document unless it wraps
			let wrapped: Vec<String>;
			let window: &[String] = if i + width <= len {
				&tokens[i..i + width]
			} else {
				wrapped = (0..width).map(|offset| tokens[(i + offset) % len].clone()).collect();
				&wrapped
			};
			let next_word = tokens[(i + width) % len].clone();

			match entries.get_mut(window) {
				Some(successors) => successors.push(next_word),
				None => {
					let key = NGramKey::new(window.to_vec());
					let mut successors = Successors::new();
					successors.push(next_word);
					keys.push(key.clone());
					entries.insert(key, successors);
				}
			}
		}

		let table = Self { order: n, entries, keys, observations: len };
		debug!(
			"Built {}-gram table: {} keys, {} observations",
			table.order,
			table.len(),
			table.observations
		);
		Ok(table)
	}

	/// The order `n` the table was built with.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Total number of observations, equal to the document length.
	pub fn observations(&self) -> usize {
		self.observations
	}

	/// Returns the successor list of a window, if the window was observed.
	pub fn successors(&self, window: &[String]) -> Option<&Successors> {
		self.entries.get(window)
	}

	pub fn contains_key(&self, window: &[String]) -> bool {
		self.entries.contains_key(window)
	}

	/// Returns the key at `index` in first-seen order.
	pub fn key_at(&self, index: usize) -> Option<&NGramKey> {
		self.keys.get(index)
	}

	/// Iterates over the keys in first-seen order.
	pub fn keys(&self) -> impl Iterator<Item = &NGramKey> {
		self.keys.iter()
	}

	/// Iterates over `(key, successors)` pairs in first-seen key order.
	pub fn iter(&self) -> impl Iterator<Item = (&NGramKey, &Successors)> {
		self.keys
			.iter()
			.filter_map(|key| self.entries.get(key).map(|successors| (key, successors)))
	}

	pub fn stats(&self) -> TableStats {
		TableStats {
			order: self.order,
			keys: self.len(),
			observations: self.observations,
			largest_successor_list: self.entries.values().map(Successors::len).max().unwrap_or(0),
		}
	}
}
