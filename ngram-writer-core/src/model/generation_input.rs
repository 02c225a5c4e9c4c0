use crate::error::{NGramError, Result};

/// Caller-side generation settings.
///
/// `GenerationInput` holds the values a front end collects before calling
/// the generator, and enforces the validation that belongs to the caller:
///
/// # Invariants
/// - `order >= 1`
/// - `length == 0` means "no generation requested"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationInput {
	/// The n-gram order `N` (key width + 1).
	order: usize,

	/// Requested number of words in the output.
	pub length: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { order: 2, length: 0 }
	}
}

impl GenerationInput {
	/// Creates settings for order `order` and requested `length`.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `order == 0`.
	pub fn new(order: usize, length: usize) -> Result<Self> {
		let mut input = Self { length, ..Self::default() };
		input.set_order(order)?;
		Ok(input)
	}

	/// Returns the n-gram order.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Sets the n-gram order.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `order == 0`.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		if order == 0 {
			return Err(NGramError::InvalidOrder(order));
		}
		self.order = order;
		Ok(())
	}

	/// Whether the caller asked for any output at all.
	pub fn wants_output(&self) -> bool {
		self.length > 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero_order_rejected() {
		assert!(matches!(GenerationInput::new(0, 10), Err(NGramError::InvalidOrder(0))));

		let mut input = GenerationInput::default();
		assert!(input.set_order(0).is_err());
		assert_eq!(input.order(), 2);
	}

	#[test]
	fn test_zero_length_requests_nothing() {
		let input = GenerationInput::new(3, 0).unwrap();
		assert!(!input.wants_output());
		assert!(GenerationInput::new(3, 1).unwrap().wants_output());
	}
}
