use std::fmt;

use serde::{Deserialize, Serialize};

/// Character an excerpt must end with.
///
/// Only `.` and `?` are accepted; any other request falls back to `.`,
/// including values read from configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Punctuation {
	#[default]
	#[serde(rename = ".")]
	Period,
	#[serde(rename = "?")]
	Question,
}

impl Punctuation {
	/// Parses a user answer, defaulting to `Period` for anything unknown.
	pub fn from_input(input: &str) -> Self {
		match input.trim() {
			"." => Punctuation::Period,
			"?" => Punctuation::Question,
			other => {
				log::warn!("unsupported punctuation {:?}, looking for something that ends with '.'", other);
				Punctuation::Period
			}
		}
	}

	pub fn as_char(self) -> char {
		match self {
			Punctuation::Period => '.',
			Punctuation::Question => '?',
		}
	}
}

impl From<String> for Punctuation {
	fn from(input: String) -> Self {
		Self::from_input(&input)
	}
}

impl fmt::Display for Punctuation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}
