use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state in a word chain.
///
/// A `State` corresponds to a fixed N-token window (`key`) and stores every
/// token observed right after it, in corpus order.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges are
/// weighted by their number of observations. The weights are implicit: a
/// successor seen K times is stored K times, and sampling is uniform.
///
/// ## Invariants
/// - `successors` is never empty once the state is part of a table
/// - `successors` is not deduplicated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// The N-token window.
	key: Vec<String>,
	/// Tokens observed after `key`, duplicates kept.
	/// Example: ["Mary.", "Juanita.", "Mary."]
	successors: Vec<String>,
}

impl State {
	/// Creates a new empty state for the given window.
	pub fn new(key: &[String]) -> Self {
		Self { key: key.to_vec(), successors: Vec::new() }
	}

	/// Records one more occurrence of `successor` after this window.
	pub fn add_successor(&mut self, successor: &str) {
		self.successors.push(successor.to_owned());
	}

	pub fn key(&self) -> &[String] {
		&self.key
	}

	pub fn successors(&self) -> &[String] {
		&self.successors
	}

	/// First token of the window.
	pub fn first_token(&self) -> Option<&str> {
		self.key.first().map(String::as_str)
	}

	/// Picks a successor uniformly, hence proportionally to its frequency.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		self.successors.choose(rng).map(String::as_str)
	}
}
