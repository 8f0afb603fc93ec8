use std::path::Path;

use crate::error::Result;
use crate::io::read_files;

/// The source text a chain is learned from.
///
/// Holds the whitespace-split tokens used to build chain tables and the
/// text used by the originality check, normalized once (newlines replaced
/// by spaces, trailing whitespace trimmed).
#[derive(Clone, Debug)]
pub struct Corpus {
	tokens: Vec<String>,
	normalized: String,
}

impl Corpus {
	/// Tokenizes `text` on whitespace and keeps it for originality checks.
	pub fn from_text(text: &str) -> Self {
		let tokens = text.split_whitespace().map(str::to_owned).collect();
		let normalized = text.replace('\n', " ").trim_end().to_owned();
		Self { tokens, normalized }
	}

	/// Reads and concatenates every file, then builds the corpus.
	pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
		let text = read_files(paths)?;
		Ok(Self::from_text(&text))
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	pub fn normalized_text(&self) -> &str {
		&self.normalized
	}

	/// Number of tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns `true` if `proposed` (trailing whitespace trimmed) does not
	/// appear verbatim in the normalized corpus text.
	pub fn is_original(&self, proposed: &str) -> bool {
		!self.normalized.contains(proposed.trim_end())
	}
}
