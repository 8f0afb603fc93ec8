use rand::Rng;

use super::chain_table::ChainTable;
use crate::error::{MarkovError, Result};

/// Performs random walks over a read-only chain table.
///
/// A walk starts at a key whose first token looks like the beginning of a
/// sentence, then keeps appending successors while the current key is known
/// and the text is not longer than `max_length` characters.
#[derive(Clone, Copy, Debug)]
pub struct Walker<'a> {
	table: &'a ChainTable,
	max_length: usize,
}

impl<'a> Walker<'a> {
	pub fn new(table: &'a ChainTable, max_length: usize) -> Self {
		Self { table, max_length }
	}

	pub fn table(&self) -> &'a ChainTable {
		self.table
	}

	/// Generates one candidate text.
	///
	/// # Behavior
	/// - Picks a start key uniformly among the keys whose first token is
	///   capitalized and not the `"--"` sentinel.
	/// - Appends a successor of the last `order` tokens until that window is
	///   not a key, or the text exceeds `max_length` characters.
	/// - The last appended token may push the text past `max_length`.
	///
	/// # Errors
	/// - `NoValidStartKey` if no key may start an excerpt.
	pub fn walk<R: Rng>(&self, rng: &mut R) -> Result<String> {
		let order = self.table.order();
		let count = self.table.start_key_count();
		if count == 0 {
			return Err(MarkovError::NoValidStartKey { order });
		}
		let start = self
			.table
			.start_key(rng.random_range(0..count))
			.ok_or(MarkovError::NoValidStartKey { order })?;

		let mut words: Vec<String> = start.key().to_vec();
		let mut current_length = joined_length(&words);
		let mut current = Some(start);

		while let Some(state) = current {
			if current_length > self.max_length {
				break;
			}
			let Some(next) = state.predict(rng) else { break };
			current_length += 1 + next.chars().count();
			words.push(next.to_owned());
			current = self.table.state(&words[words.len() - order..]);
		}

		Ok(words.join(" "))
	}
}

/// Character length of `words` joined by single spaces.
fn joined_length(words: &[String]) -> usize {
	let chars: usize = words.iter().map(|w| w.chars().count()).sum();
	chars + words.len().saturating_sub(1)
}
