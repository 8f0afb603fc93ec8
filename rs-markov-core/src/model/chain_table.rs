use std::collections::HashMap;

use super::corpus::Corpus;
use super::state::State;
use crate::error::{MarkovError, Result};

/// Sentinel token never accepted at the start of an excerpt.
pub const SENTINEL: &str = "--";

/// Represents an order-N word chain.
///
/// The `ChainTable` stores one state per distinct N-token window of the
/// corpus and allows random walks over it.
///
/// # Responsibilities
/// - Build the table from a token sequence
/// - Keep successors with their corpus multiplicity
/// - Index the keys an excerpt may start with
///
/// # Invariants
/// - Every key has exactly `order` tokens and at least one successor
/// - The last N-token window of the corpus is a key only if it also occurs earlier
/// - `states` are stored in order of first occurrence in the corpus
/// - The table is read-only once built
#[derive(Clone, Debug)]
pub struct ChainTable {
	/// The order of the chain (number of tokens in a key).
	order: usize,

	/// States, in order of first occurrence.
	states: Vec<State>,

	/// Mapping from a key to its position in `states`.
	index: HashMap<Vec<String>, usize>,

	/// Positions of the states whose key may start an excerpt.
	start_keys: Vec<usize>,
}

impl ChainTable {
	/// Builds a chain of order `order` from `tokens`.
	///
	/// For every window `tokens[i..i + order]` followed by a token, the
	/// following token is appended to the window's successors.
	///
	/// Returns an empty table when `order == 0` or `tokens.len() <= order`;
	/// use `from_corpus` to get these cases reported as errors.
	pub fn build<S: AsRef<str>>(tokens: &[S], order: usize) -> Self {
		let mut table = Self { order, states: Vec::new(), index: HashMap::new(), start_keys: Vec::new() };
		if order == 0 || tokens.len() <= order {
			return table;
		}

		let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_owned()).collect();
		for window in tokens.windows(order + 1) {
			let (key, successor) = window.split_at(order);
			let position = match table.index.get(key) {
				Some(&position) => position,
				None => {
					let position = table.states.len();
					let state = State::new(key);
					if state.first_token().is_some_and(is_start_token) {
						table.start_keys.push(position);
					}
					table.states.push(state);
					table.index.insert(key.to_vec(), position);
					position
				}
			};
			table.states[position].add_successor(&successor[0]);
		}

		log::debug!(
			"built order-{} chain: {} keys, {} start keys",
			order,
			table.states.len(),
			table.start_keys.len()
		);
		table
	}

	/// Builds the chain for a corpus, rejecting degenerate inputs.
	///
	/// # Errors
	/// - `InvalidOrder` if `order == 0`
	/// - `CorpusTooShort` if the corpus has `order` tokens or fewer
	pub fn from_corpus(corpus: &Corpus, order: usize) -> Result<Self> {
		if order == 0 {
			return Err(MarkovError::InvalidOrder(order));
		}
		if corpus.len() <= order {
			return Err(MarkovError::CorpusTooShort { tokens: corpus.len(), order });
		}
		Ok(Self::build(corpus.tokens(), order))
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub fn contains_key<S: AsRef<str>>(&self, key: &[S]) -> bool {
		self.state(key).is_some()
	}

	/// Successors recorded for `key`, in corpus order.
	pub fn successors<S: AsRef<str>>(&self, key: &[S]) -> Option<&[String]> {
		self.state(key).map(State::successors)
	}

	/// Returns the state stored for `key`.
	pub fn state<S: AsRef<str>>(&self, key: &[S]) -> Option<&State> {
		if key.len() != self.order {
			return None;
		}
		let key: Vec<String> = key.iter().map(|t| t.as_ref().to_owned()).collect();
		self.index.get(&key).map(|&position| &self.states[position])
	}

	/// Keys in order of first occurrence.
	pub fn keys(&self) -> impl Iterator<Item = &[String]> {
		self.states.iter().map(State::key)
	}

	/// States whose key may start an excerpt.
	pub fn start_keys(&self) -> impl Iterator<Item = &State> {
		self.start_keys.iter().map(|&position| &self.states[position])
	}

	pub(crate) fn start_key_count(&self) -> usize {
		self.start_keys.len()
	}

	pub(crate) fn start_key(&self, nth: usize) -> Option<&State> {
		self.start_keys.get(nth).map(|&position| &self.states[position])
	}
}

/// Returns `true` if `token` may open an excerpt.
///
/// The first letter of the token must be upper-case, leading non-letters
/// are skipped (`"Hi"`, `"NASA"`, `"\"Well,"` qualify, `"hi"` and `"(the"`
/// do not). Tokens without letters (`"42"`) qualify, the `"--"` sentinel
/// never does.
pub fn is_start_token(token: &str) -> bool {
	if token.is_empty() || token == SENTINEL {
		return false;
	}
	match token.chars().find(|c| c.is_alphabetic()) {
		Some(first) => first.to_uppercase().eq(std::iter::once(first)),
		None => true,
	}
}
