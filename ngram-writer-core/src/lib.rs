//! Word-level n-gram "random writer" library.
//!
//! This crate provides the whole n-gram text model:
//! - Construction of the key -> successors table from a word stream,
//!   wrapping around the end of the document
//! - Uniform selection of a starting key
//! - Successor-sampling random walk to a requested length
//! - An injectable randomness capability so generation can be replayed
//!
//! Corpus tokenization and sentence rendering live in [`io`].

/// Error taxonomy shared by every operation of the crate.
pub mod error;

/// N-gram table, randomness sources and generation logic.
///
/// This module exposes the table builder, the random walk and the
/// high-level `Writer` wrapper used by the front ends.
pub mod model;

/// I/O utilities (corpus tokenization, file helpers, rendering).
pub mod io;

pub use error::{NGramError, Result};
