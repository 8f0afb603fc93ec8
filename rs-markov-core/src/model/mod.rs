//! Top-level module for the Markov excerpt generation system.
//!
//! This module provides a word-level Markov text generator, including:
//! - The tokenized source text (`Corpus`)
//! - Fixed-order chain tables (`ChainTable`) and their states (`State`)
//! - Single random walks (`Walker`)
//! - Accept/reject generation of original excerpts (`ExcerptGenerator`)
//! - One excerpt per chain order (`Explorer`)
//! - Generation configuration (`Settings`, `Punctuation`)

/// Tokenized source text plus its newline-normalized form.
pub mod corpus;

/// Terminal punctuation accepted at the end of an excerpt.
pub mod punctuation;

/// A single chain key and the successors observed after it.
///
/// Duplicated successors are kept, so uniform sampling follows
/// corpus frequencies.
pub mod state;

/// Fixed-order word chain (`order >= 1`).
///
/// Maps every N-token window of the corpus to its successors.
pub mod chain_table;

/// One random walk over a chain table.
pub mod walker;

/// Walk, truncate at punctuation and reject verbatim corpus text.
pub mod generator;

/// Runs the generator once per chain order.
///
/// Supports sequential and multithreaded exploration.
pub mod explorer;

/// Generation parameters (orders, length budget, retry cap, seed).
pub mod settings;
