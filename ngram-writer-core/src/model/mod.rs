//! Top-level module for the n-gram random writer.
//!
//! This module provides:
//! - Value-equal n-gram keys (`NGramKey`)
//! - Frequency-preserving successor lists (`Successors`)
//! - The circular table builder (`NGramTable`)
//! - Injectable randomness (`RandomSource`)
//! - Start selection, random walk and the high-level `Writer`
//! - Generation settings (`GenerationInput`)

/// High-level generation interface: start selection, random walk, `Writer`.
pub mod generator;

/// Word table mapping every (n-1)-word window to the words that followed it.
///
/// Built once from a whole document, read-only afterwards.
pub mod ngram_table;

/// Composite key made of exactly `n - 1` words.
pub mod ngram_key;

/// Successor multiset of a single key.
///
/// Stores every observation, so sampling is frequency-weighted.
pub mod successors;

/// Randomness capability injected into every random draw.
pub mod random;

/// Caller-side generation settings (order and requested length).
pub mod generation_input;
