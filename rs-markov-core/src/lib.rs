//! Word-level Markov chain excerpt generation library.
//!
//! This crate provides an order-N Markov text generator including:
//! - Word-level chain tables built from a whitespace-tokenized corpus
//! - Random walks starting at a plausible sentence boundary
//! - Constrained generation (length budget, terminal punctuation, originality)
//! - Multi-order exploration producing one excerpt per chain order
//! - Small I/O collaborators (corpus loading, append-only output)

/// Chain tables, walks and constrained generation.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O collaborators (corpus loading, excerpt persistence).
pub mod io;

pub use error::{MarkovError, Result};
pub use model::chain_table::ChainTable;
pub use model::corpus::Corpus;
pub use model::explorer::{Exploration, Explorer};
pub use model::generator::ExcerptGenerator;
pub use model::punctuation::Punctuation;
pub use model::settings::Settings;
pub use model::walker::Walker;
