use rand::Rng;

use super::chain_table::ChainTable;
use super::corpus::Corpus;
use super::punctuation::Punctuation;
use super::walker::Walker;
use crate::error::{MarkovError, Result};

/// Default number of walks tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Generates excerpts that are short, punctuation-terminated and original.
///
/// # Responsibilities
/// - Draw candidates from a `Walker`
/// - Truncate each candidate at the rightmost terminal punctuation within
///   the length budget
/// - Reject truncations found verbatim in the corpus, trying earlier
///   punctuation before drawing a new candidate
#[derive(Clone, Copy, Debug)]
pub struct ExcerptGenerator<'a> {
	walker: Walker<'a>,
	corpus: &'a Corpus,
	max_length: usize,
	punctuation: Punctuation,
	max_attempts: usize,
}

impl<'a> ExcerptGenerator<'a> {
	pub fn new(table: &'a ChainTable, corpus: &'a Corpus, max_length: usize, punctuation: Punctuation) -> Self {
		Self {
			walker: Walker::new(table, max_length),
			corpus,
			max_length,
			punctuation,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}

	/// Sets how many candidates are drawn before `GenerationExhausted`.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self
	}

	/// Generates one accepted excerpt.
	///
	/// # Returns
	/// - `Ok(String)`: ends with the terminal punctuation, is at most
	///   `max_length` characters long and does not appear verbatim in the
	///   newline-normalized corpus.
	///
	/// # Errors
	/// - `NoValidStartKey` if the table has no key to start from.
	/// - `GenerationExhausted` if `max_attempts` candidates were all rejected.
	pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<String> {
		let order = self.walker.table().order();
		for attempt in 1..=self.max_attempts {
			let candidate = self.walker.walk(rng)?;
			if let Some(excerpt) = self.accept(&candidate) {
				log::debug!("order {}: accepted excerpt after {} attempt(s)", order, attempt);
				return Ok(excerpt);
			}
			log::trace!("order {}: rejected candidate {:?}", order, candidate);
		}
		Err(MarkovError::GenerationExhausted { order, attempts: self.max_attempts })
	}

	/// Returns the longest original prefix of `candidate` ending with the
	/// terminal punctuation within the length budget.
	pub fn accept(&self, candidate: &str) -> Option<String> {
		let punct = self.punctuation.as_char();
		let chars: Vec<char> = candidate.chars().collect();
		let upper = chars.len().min(self.max_length);

		(0..upper)
			.rev()
			.filter(|&index| chars[index] == punct)
			.map(|index| chars[..=index].iter().collect::<String>())
			.find(|proposed| self.corpus.is_original(proposed))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const HI_THERE: &str = "Hi there Mary. Hi there Juanita. Hi there Sam.";

	fn setup(text: &str, order: usize) -> (Corpus, ChainTable) {
		let corpus = Corpus::from_text(text);
		let table = ChainTable::from_corpus(&corpus, order).unwrap();
		(corpus, table)
	}

	#[test]
	fn accept_prefers_rightmost_original_punctuation() {
		let (corpus, table) = setup(HI_THERE, 2);
		let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Period);
		assert_eq!(
			generator.accept("Hi there Sam. Hi there Mary. Hi there").as_deref(),
			Some("Hi there Sam. Hi there Mary.")
		);
	}

	#[test]
	fn accept_cuts_at_last_punctuation_and_rejects_verbatim() {
		let (corpus, table) = setup("The cat sat. The dog ran. The cat ran.", 1);
		let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Period);
		assert_eq!(generator.accept("The cat sat. The dog ran."), None);
		assert_eq!(
			generator.accept("The dog sat. The cat ran.").as_deref(),
			Some("The dog sat. The cat ran.")
		);
		assert_eq!(generator.accept("The dog sat. The cat").as_deref(), Some("The dog sat."));
		assert_eq!(generator.accept("The dog sat"), None);
	}

	#[test]
	fn accept_ignores_punctuation_past_the_budget() {
		let (corpus, table) = setup(HI_THERE, 2);
		// The period of "Hi there Bob." sits at index 12.
		let generator = ExcerptGenerator::new(&table, &corpus, 12, Punctuation::Period);
		assert_eq!(generator.accept("Hi there Bob. Mary."), None);
		let generator = ExcerptGenerator::new(&table, &corpus, 13, Punctuation::Period);
		assert_eq!(generator.accept("Hi there Bob. Mary.").as_deref(), Some("Hi there Bob."));
	}

	#[test]
	fn accept_matches_requested_punctuation_only() {
		let (corpus, table) = setup("Is it Mary? It is Mary. Is it Sam? It is Sam.", 2);
		let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Question);
		assert_eq!(generator.accept("Is it Mary? It is Sam."), None);
		assert_eq!(
			generator.accept("It is Mary? It is Sam.").as_deref(),
			Some("It is Mary?")
		);
	}

	#[test]
	fn generated_excerpts_satisfy_all_constraints() {
		let text = "The cat sat on the mat. The dog sat on the log.\nThe cat ran to the log. \
			The dog ran to the mat. A bird sat on the dog. The bird ran.";
		let (corpus, table) = setup(text, 2);
		let generator = ExcerptGenerator::new(&table, &corpus, 60, Punctuation::Period);
		let mut rng = StdRng::seed_from_u64(2024);
		for _ in 0..25 {
			let excerpt = generator.generate(&mut rng).unwrap();
			assert!(excerpt.chars().count() <= 60, "{excerpt:?}");
			assert!(excerpt.ends_with('.'), "{excerpt:?}");
			assert!(corpus.is_original(&excerpt), "{excerpt:?}");
			let first = excerpt.split(' ').next().unwrap();
			assert!(crate::model::chain_table::is_start_token(first), "{excerpt:?}");
		}
	}

	#[test]
	fn verbatim_only_corpus_exhausts() {
		let (corpus, table) = setup("Hello world.", 1);
		let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Period).with_max_attempts(10);
		assert!(matches!(
			generator.generate(&mut StdRng::seed_from_u64(1)),
			Err(MarkovError::GenerationExhausted { order: 1, attempts: 10 })
		));
	}

	#[test]
	fn missing_punctuation_exhausts() {
		let (corpus, table) = setup(HI_THERE, 2);
		let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Question).with_max_attempts(5);
		assert!(matches!(
			generator.generate(&mut StdRng::seed_from_u64(1)),
			Err(MarkovError::GenerationExhausted { order: 2, attempts: 5 })
		));
	}
}
