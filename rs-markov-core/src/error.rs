use std::io;

/// Result type for rs-markov-core operations
pub type Result<T> = std::result::Result<T, MarkovError>;

/// Errors raised while building chains or generating excerpts.
///
/// `CorpusTooShort`, `NoValidStartKey` and `GenerationExhausted` are local to
/// one chain order: the explorer records them and moves on to the next order.
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	#[error("corpus has {tokens} tokens, an order-{order} chain needs at least {}", .order + 1)]
	CorpusTooShort { tokens: usize, order: usize },

	#[error("no key of the order-{order} chain starts with a capitalized word")]
	NoValidStartKey { order: usize },

	#[error("no original excerpt found for order {order} after {attempts} attempts")]
	GenerationExhausted { order: usize, attempts: usize },

	#[error("chain order must be >= 1, got {0}")]
	InvalidOrder(usize),

	#[error("invalid settings: {0}")]
	InvalidSettings(String),

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl MarkovError {
	/// Returns `true` for failures that only concern one chain order.
	pub fn is_order_local(&self) -> bool {
		matches!(
			self,
			MarkovError::CorpusTooShort { .. }
				| MarkovError::NoValidStartKey { .. }
				| MarkovError::GenerationExhausted { .. }
		)
	}
}
