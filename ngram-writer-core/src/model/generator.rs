use std::path::Path;

use log::{debug, trace};

use super::ngram_key::NGramKey;
use super::ngram_table::NGramTable;
use super::random::RandomSource;
use crate::error::{NGramError, Result};
use crate::io;

/// Upper bound on the words reserved up front; longer walks grow on demand.
const RESERVE_LIMIT: usize = 4096;

/// Picks a starting key uniformly at random.
///
/// Draws one index in `[0, len - 1]` and returns a copy of the key found at
/// that rank in the table's first-seen key order.
///
/// # Errors
/// Returns `EmptyTable` if the table has no entries.
pub fn choose_start<R: RandomSource + ?Sized>(table: &NGramTable, rng: &mut R) -> Result<NGramKey> {
	if table.is_empty() {
		return Err(NGramError::EmptyTable);
	}
	let index = rng.random_integer(0, table.len() - 1);
	table.key_at(index).cloned().ok_or(NGramError::EmptyTable)
}

/// Extends `start` by random walk until it holds `target_length` words.
///
/// # Parameters
/// - `start`: seed window, exactly `n - 1` words
/// - `n`: order used to derive lookup windows (`n - 1` trailing words)
/// - `target_length`: requested output length
///
/// # Behavior
/// - If `target_length <= n - 1`, returns `start` unchanged without any lookup.
/// - Otherwise performs exactly `target_length - (n - 1)` steps: look up the
///   trailing `n - 1` words, then append one successor drawn uniformly over
///   the recorded observations.
///
/// # Errors
/// - `InvalidOrder` if `n == 0`
/// - `KeyLength` if `start` does not hold `n - 1` words
/// - `DeadEnd` if a lookup window is absent from the table
pub fn generate<R: RandomSource + ?Sized>(
	table: &NGramTable,
	start: &[String],
	n: usize,
	target_length: usize,
	rng: &mut R,
) -> Result<Vec<String>> {
	if n == 0 {
		return Err(NGramError::InvalidOrder(n));
	}
	let width = n - 1;
	if start.len() != width {
		return Err(NGramError::KeyLength { expected: width, actual: start.len() });
	}

	let mut output: Vec<String> = start.to_vec();
	if target_length <= width {
		return Ok(output);
	}
	output.reserve((target_length - width).min(RESERVE_LIMIT));

	while output.len() < target_length {
		let window = &output[output.len() - width..];
		let successors = table.successors(window).ok_or_else(|| NGramError::DeadEnd {
			key: window.join(" "),
		})?;
		let next_word = successors.pick(rng).ok_or_else(|| NGramError::DeadEnd {
			key: window.join(" "),
		})?;
		trace!("[{}] -> {}", window.join(" "), next_word);
		let next_word = next_word.to_owned();
		output.push(next_word);
	}

	Ok(output)
}

/// High-level random writer owning one table.
///
/// # Responsibilities
/// - Build the table from a corpus (tokens or a text file)
/// - Keep the corpus name for display
/// - Chain start selection and random walk for one sentence
///
/// The table is read-only: one `Writer` can serve any number of
/// independent generation calls.
#[derive(Debug, Clone)]
pub struct Writer {
	name: String,
	table: NGramTable,
}

impl Writer {
	/// Builds a writer of order `n` from already tokenized words.
	///
	/// # Errors
	/// Propagates the builder errors (`EmptyCorpus`, `InvalidOrder`).
	pub fn from_tokens(name: &str, tokens: &[String], n: usize) -> Result<Self> {
		let table = NGramTable::build(tokens, n)?;
		Ok(Self { name: name.to_owned(), table })
	}

	/// Reads and tokenizes a text file, then builds a writer of order `n`.
	///
	/// The writer is named after the file stem (`data/hamlet.txt` → `hamlet`).
	///
	/// # Errors
	/// Returns `Io` if the file cannot be read, then the builder errors.
	pub fn from_file<P: AsRef<Path>>(filepath: P, n: usize) -> Result<Self> {
		let name = io::get_filename(&filepath)?;
		let tokens = io::read_words(&filepath)?;
		debug!("Read {} words from {}", tokens.len(), filepath.as_ref().display());
		Self::from_tokens(&name, &tokens, n)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn table(&self) -> &NGramTable {
		&self.table
	}

	/// Generates one sentence of `length` words.
	///
	/// Returns `Ok(None)` when `length == 0`: no generation was requested.
	/// When `length` is below the key width, the start key is returned whole.
	pub fn write<R: RandomSource + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Option<Vec<String>>> {
		if length == 0 {
			return Ok(None);
		}
		let start = choose_start(&self.table, rng)?;
		let sentence = generate(&self.table, start.as_slice(), self.table.order(), length, rng)?;
		Ok(Some(sentence))
	}
}
