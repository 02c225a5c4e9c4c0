use thiserror::Error;

/// Errors reported by the table builder and the generator.
///
/// Every variant is recoverable by the caller: front ends print the message
/// and re-prompt (CLI) or map it to an HTTP status (server).
#[derive(Error, Debug)]
pub enum NGramError {
	/// The token sequence handed to the builder was empty.
	#[error("Empty corpus: no words to build a table from")]
	EmptyCorpus,

	/// A starting key was requested from a table with no entries.
	#[error("Empty table: no key to start from")]
	EmptyTable,

	/// The generator derived a lookup key that the table never observed.
	#[error("Dead end: no successor recorded for [{key}]")]
	DeadEnd { key: String },

	/// The n-gram order must be at least 1.
	#[error("Invalid order: N must be 1 or greater, got {0}")]
	InvalidOrder(usize),

	/// The starting key does not hold exactly `n - 1` words.
	#[error("Key length mismatch: expected {expected} words, got {actual}")]
	KeyLength { expected: usize, actual: usize },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NGramError>;
