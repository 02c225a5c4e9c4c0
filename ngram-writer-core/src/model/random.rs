use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform random integers.
///
/// Every random draw of the crate goes through this capability, so tests
/// can substitute a fixed or recorded sequence of draws instead of relying
/// on ambient global state.
pub trait RandomSource {
	/// Returns an integer uniformly distributed in `[low, high]` (inclusive).
	///
	/// Callers guarantee `low <= high`.
	fn random_integer(&mut self, low: usize, high: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn random_integer(&mut self, low: usize, high: usize) -> usize {
		(**self).random_integer(low, high)
	}
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<ThreadRng> {
	/// Thread-local generator, seeded from the operating system.
	pub fn thread() -> Self {
		Self(rand::rng())
	}
}

impl RngSource<StdRng> {
	/// Reproducible generator: the same seed yields the same draws.
	pub fn seeded(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn random_integer(&mut self, low: usize, high: usize) -> usize {
		self.0.random_range(low..=high)
	}
}

/// Deterministic source replaying a fixed script of draws.
///
/// - Each scripted value is taken as an offset from `low` and reduced
///   modulo the width of the requested range, so a script never produces
///   an out-of-range value
/// - A single-value range (`high <= low`) yields `low` without consuming
///   a scripted value, so one-successor steps leave the script untouched
/// - The script cycles once exhausted; an empty script always yields `low`
/// - Every value actually served is recorded in `served()`
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
	script: Vec<usize>,
	position: usize,
	served: Vec<usize>,
}

impl ScriptedSource {
	pub fn new(script: Vec<usize>) -> Self {
		Self { script, position: 0, served: Vec::new() }
	}

	/// Values returned so far, in order.
	pub fn served(&self) -> &[usize] {
		&self.served
	}
}

impl RandomSource for ScriptedSource {
	fn random_integer(&mut self, low: usize, high: usize) -> usize {
		let value = if self.script.is_empty() || high <= low {
			low
		} else {
			let width = (high - low).saturating_add(1);
			let draw = self.script[self.position % self.script.len()];
			self.position += 1;
			low + draw % width
		};
		self.served.push(value);
		value
	}
}
