use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::generator::DEFAULT_MAX_ATTEMPTS;
use super::punctuation::Punctuation;
use crate::error::{MarkovError, Result};

/// Input parameters for exploring several chain orders.
///
/// # Responsibilities
/// - Track the explored order range and the excerpt constraints
/// - Bound the retry loop (`max_attempts`)
/// - Control randomness (`seed`) and threading (`parallel`)
///
/// # Invariants (checked by `validate` and the setters)
/// - `1 <= min_order <= max_order`
/// - `max_length >= 1`, `max_attempts >= 1`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	/// Smallest chain order explored.
	pub min_order: usize,

	/// Largest chain order explored (included).
	pub max_order: usize,

	/// Maximum number of characters of an excerpt.
	pub max_length: usize,

	/// Character every excerpt must end with.
	pub punctuation: Punctuation,

	/// Number of walks tried per order before giving up.
	pub max_attempts: usize,

	/// Seed for reproducible generation; fresh entropy when `None`.
	pub seed: Option<u64>,

	/// Whether orders are explored on several threads.
	pub parallel: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			min_order: 2,
			max_order: 10,
			max_length: 140,
			punctuation: Punctuation::Period,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
			seed: None,
			parallel: false,
		}
	}
}

impl Settings {
	/// Explored orders, both ends included.
	pub fn orders(&self) -> RangeInclusive<usize> {
		self.min_order..=self.max_order
	}

	/// Sets the explored order range.
	///
	/// # Errors
	/// Returns an error if `min_order` is 0 or greater than `max_order`.
	pub fn set_orders(&mut self, min_order: usize, max_order: usize) -> Result<()> {
		check_orders(min_order, max_order)?;
		self.min_order = min_order;
		self.max_order = max_order;
		Ok(())
	}

	/// Sets the length budget (in characters).
	///
	/// # Errors
	/// Returns an error if `max_length` is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		if max_length == 0 {
			return Err(MarkovError::InvalidSettings("max_length must be >= 1".to_owned()));
		}
		self.max_length = max_length;
		Ok(())
	}

	/// Sets the number of walks tried per order.
	///
	/// # Errors
	/// Returns an error if `max_attempts` is 0.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<()> {
		if max_attempts == 0 {
			return Err(MarkovError::InvalidSettings("max_attempts must be >= 1".to_owned()));
		}
		self.max_attempts = max_attempts;
		Ok(())
	}

	/// Checks every invariant, useful after deserialization.
	pub fn validate(&self) -> Result<()> {
		check_orders(self.min_order, self.max_order)?;
		if self.max_length == 0 {
			return Err(MarkovError::InvalidSettings("max_length must be >= 1".to_owned()));
		}
		if self.max_attempts == 0 {
			return Err(MarkovError::InvalidSettings("max_attempts must be >= 1".to_owned()));
		}
		Ok(())
	}
}

fn check_orders(min_order: usize, max_order: usize) -> Result<()> {
	if min_order == 0 {
		return Err(MarkovError::InvalidOrder(min_order));
	}
	if min_order > max_order {
		return Err(MarkovError::InvalidSettings(format!(
			"min_order ({}) must not exceed max_order ({})",
			min_order, max_order
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_explore_two_to_ten() {
		let settings = Settings::default();
		assert_eq!(settings.orders(), 2..=10);
		assert_eq!(settings.max_length, 140);
		assert_eq!(settings.punctuation, Punctuation::Period);
		assert!(settings.validate().is_ok());
	}

	#[test]
	fn setters_reject_invalid_values() {
		let mut settings = Settings::default();
		assert!(matches!(settings.set_orders(0, 3), Err(MarkovError::InvalidOrder(0))));
		assert!(matches!(settings.set_orders(5, 3), Err(MarkovError::InvalidSettings(_))));
		assert!(settings.set_max_length(0).is_err());
		assert!(settings.set_max_attempts(0).is_err());
		assert_eq!(settings, Settings::default());

		settings.set_orders(3, 3).unwrap();
		settings.set_max_length(132).unwrap();
		assert_eq!(settings.orders(), 3..=3);
		assert_eq!(settings.max_length, 132);
	}

	#[test]
	fn partial_toml_keeps_defaults() {
		let settings: Settings = toml::from_str("max_length = 132\npunctuation = \"?\"\nseed = 7\n").unwrap();
		assert_eq!(settings.max_length, 132);
		assert_eq!(settings.punctuation, Punctuation::Question);
		assert_eq!(settings.seed, Some(7));
		assert_eq!(settings.orders(), 2..=10);
	}

	#[test]
	fn validate_catches_bad_files() {
		let settings: Settings = toml::from_str("min_order = 4\nmax_order = 2\n").unwrap();
		assert!(settings.validate().is_err());
		assert!(toml::from_str::<Settings>("unknown = 1\n").is_err());
		let settings: Settings = toml::from_str("punctuation = \"!\"\n").unwrap();
		assert_eq!(settings.punctuation, Punctuation::Period);
	}
}
