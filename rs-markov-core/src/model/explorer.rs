use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::chain_table::ChainTable;
use super::corpus::Corpus;
use super::generator::ExcerptGenerator;
use super::settings::Settings;
use crate::error::{MarkovError, Result};

/// One excerpt per explored order, plus the orders that failed.
#[derive(Debug, Default)]
pub struct Exploration {
	/// Accepted excerpt for each successful order.
	pub excerpts: BTreeMap<usize, String>,

	/// Failure for each order that produced no excerpt.
	pub failures: BTreeMap<usize, MarkovError>,
}

impl Exploration {
	/// Excerpt generated for `order`, if any.
	pub fn get(&self, order: usize) -> Option<&str> {
		self.excerpts.get(&order).map(String::as_str)
	}

	/// Orders with an excerpt, ascending.
	pub fn orders(&self) -> impl Iterator<Item = usize> {
		self.excerpts.keys().copied()
	}

	/// Returns `true` if no order produced an excerpt.
	pub fn is_empty(&self) -> bool {
		self.excerpts.is_empty()
	}

	fn record(&mut self, order: usize, outcome: Result<String>) {
		match outcome {
			Ok(excerpt) => {
				self.excerpts.insert(order, excerpt);
			}
			Err(e) => {
				if e.is_order_local() {
					log::warn!("order {}: {}", order, e);
				} else {
					log::error!("order {}: {}", order, e);
				}
				self.failures.insert(order, e);
			}
		}
	}
}

/// Generates one excerpt for every order of `Settings::orders`.
///
/// Each order gets a freshly built chain table and its own random
/// generator; the corpus is the only shared (read-only) state.
#[derive(Debug)]
pub struct Explorer<'a> {
	corpus: &'a Corpus,
	settings: Settings,
}

impl<'a> Explorer<'a> {
	/// Creates an explorer after validating `settings`.
	pub fn new(corpus: &'a Corpus, settings: Settings) -> Result<Self> {
		settings.validate()?;
		Ok(Self { corpus, settings })
	}

	/// Runs every order, sequentially or on worker threads.
	///
	/// Failures are recorded per order and never stop the other orders.
	pub fn explore(&self) -> Exploration {
		if self.settings.parallel {
			self.explore_parallel()
		} else {
			let mut exploration = Exploration::default();
			for order in self.settings.orders() {
				exploration.record(order, self.explore_order(order));
			}
			exploration
		}
	}

	/// Builds the order-`order` chain and generates one excerpt from it.
	pub fn explore_order(&self, order: usize) -> Result<String> {
		let table = ChainTable::from_corpus(self.corpus, order)?;
		let mut rng = self.rng_for(order);
		ExcerptGenerator::new(&table, self.corpus, self.settings.max_length, self.settings.punctuation)
			.with_max_attempts(self.settings.max_attempts)
			.generate(&mut rng)
	}

	/// Spreads orders over at most one thread per CPU.
	///
	/// # Notes
	/// - Orders are dealt round-robin to the workers.
	/// - Results are collected through an MPSC channel.
	/// - Seeded runs give the same excerpts as the sequential path.
	fn explore_parallel(&self) -> Exploration {
		let orders: Vec<usize> = self.settings.orders().collect();
		let workers = num_cpus::get().clamp(1, orders.len().max(1));
		log::debug!("exploring {} orders on {} threads", orders.len(), workers);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for worker in 0..workers {
				let tx = tx.clone();
				let assigned: Vec<usize> = orders.iter().copied().skip(worker).step_by(workers).collect();
				scope.spawn(move || {
					for order in assigned {
						// The receiver outlives the scope
						let _ = tx.send((order, self.explore_order(order)));
					}
				});
			}
		});
		drop(tx);

		let mut exploration = Exploration::default();
		for (order, outcome) in rx.iter() {
			exploration.record(order, outcome);
		}
		exploration
	}

	fn rng_for(&self, order: usize) -> StdRng {
		match self.settings.seed {
			Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(order as u64)),
			None => StdRng::from_rng(&mut rand::rng()),
		}
	}
}
