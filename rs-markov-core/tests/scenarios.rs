use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::{ChainTable, Corpus, ExcerptGenerator, Explorer, MarkovError, Punctuation, Settings};

const HI_THERE: &str = "Hi there Mary. Hi there Juanita. Hi there Sam.";

#[test]
fn hi_there_chain() {
	let corpus = Corpus::from_text(HI_THERE);
	let table = ChainTable::from_corpus(&corpus, 2).unwrap();

	assert_eq!(table.successors(&["Hi", "there"]).unwrap(), ["Mary.", "Juanita.", "Sam."]);
	assert_eq!(table.len(), 5);
	assert!(!table.contains_key(&["there", "Sam."]));
}

#[test]
fn hi_there_excerpts_are_never_verbatim() {
	let corpus = Corpus::from_text(HI_THERE);
	let table = ChainTable::from_corpus(&corpus, 2).unwrap();
	let generator = ExcerptGenerator::new(&table, &corpus, 30, Punctuation::Period);
	let mut rng = StdRng::seed_from_u64(6);

	for _ in 0..20 {
		let excerpt = generator.generate(&mut rng).unwrap();
		assert!(excerpt.ends_with('.'));
		assert!(excerpt.chars().count() <= 30);
		assert!(!corpus.normalized_text().contains(&excerpt), "{excerpt:?} is verbatim");
	}
}

#[test]
fn too_short_corpus_is_reported_before_walking() {
	let corpus = Corpus::from_text("Hi there");
	assert!(matches!(
		ChainTable::from_corpus(&corpus, 2),
		Err(MarkovError::CorpusTooShort { tokens: 2, order: 2 })
	));
}

#[test]
fn lowercase_corpus_has_no_start_key() {
	let corpus = Corpus::from_text("hi there mary. hi there sam.");
	let table = ChainTable::from_corpus(&corpus, 2).unwrap();
	let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Period);
	assert!(matches!(
		generator.generate(&mut StdRng::seed_from_u64(0)),
		Err(MarkovError::NoValidStartKey { order: 2 })
	));
}

#[test]
fn exploration_over_loaded_files() {
	let dir = tempfile::tempdir().unwrap();
	let first = dir.path().join("one.txt");
	let second = dir.path().join("two.txt");
	std::fs::write(&first, "The cat sat on the mat. The dog sat on the log.\n").unwrap();
	std::fs::write(&second, "The cat ran to the log. The dog ran to the mat.\n").unwrap();

	let corpus = Corpus::load(&[first, second]).unwrap();
	let mut settings = Settings::default();
	settings.set_orders(2, 4).unwrap();
	settings.set_max_length(132).unwrap();
	settings.seed = Some(9);
	let exploration = Explorer::new(&corpus, settings).unwrap().explore();

	assert_eq!(exploration.excerpts.len() + exploration.failures.len(), 3);
	for excerpt in exploration.excerpts.values() {
		assert!(excerpt.chars().count() <= 132);
		assert!(excerpt.ends_with('.'));
		assert!(corpus.is_original(excerpt));
	}
}

#[test]
fn quoted_lowercase_openers_are_not_sentence_starts() {
	let corpus = Corpus::from_text("\"well, it is. \"well, it was. \"well, it is not.");
	let table = ChainTable::from_corpus(&corpus, 2).unwrap();
	let generator = ExcerptGenerator::new(&table, &corpus, 140, Punctuation::Period);
	assert!(matches!(
		generator.generate(&mut StdRng::seed_from_u64(0)),
		Err(MarkovError::NoValidStartKey { order: 2 })
	));
}
