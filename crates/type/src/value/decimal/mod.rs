// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

mod parse;

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

pub use parse::parse_decimal;

/// An arbitrary-precision decimal, distinct from binary floating point.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
	inner: BigDecimal,
}

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Self {
			inner,
		}
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.inner
	}

	pub fn is_zero(&self) -> bool {
		self.inner.is_zero()
	}

	pub fn is_integer(&self) -> bool {
		self.inner.is_integer()
	}

	pub fn to_f32(&self) -> Option<f32> {
		self.inner.to_f32().filter(|f| f.is_finite())
	}

	pub fn to_f64(&self) -> Option<f64> {
		self.inner.to_f64().filter(|f| f.is_finite())
	}

	/// The textual form used when a decimal meets a string in a comparison:
	/// trailing zeros after the decimal point and a trailing decimal point
	/// are trimmed, so `"3.00"` renders as `"3"`.
	pub fn canonical_string(&self) -> String {
		let mut s = self.inner.to_string();
		if s.contains('.') {
			while s.ends_with('0') {
				s.pop();
			}
			if s.ends_with('.') {
				s.pop();
			}
		}
		if s == "-0" {
			s = "0".to_string();
		}
		s
	}
}

impl Default for Decimal {
	fn default() -> Self {
		Self {
			inner: BigDecimal::zero(),
		}
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.inner, f)
	}
}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		self.inner.cmp(&other.inner)
	}
}

impl From<BigDecimal> for Decimal {
	fn from(inner: BigDecimal) -> Self {
		Self::new(inner)
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	#[test]
	fn test_canonical_string_trims_trailing_zeros() {
		let decimal = Decimal::from_str("3.00").unwrap();
		assert_eq!(decimal.canonical_string(), "3");

		let decimal = Decimal::from_str("3.10").unwrap();
		assert_eq!(decimal.canonical_string(), "3.1");
	}

	#[test]
	fn test_canonical_string_keeps_integer_zeros() {
		let decimal = Decimal::from_str("300").unwrap();
		assert_eq!(decimal.canonical_string(), "300");
	}

	#[test]
	fn test_canonical_string_negative_zero() {
		let decimal = Decimal::from_str("-0.00").unwrap();
		assert_eq!(decimal.canonical_string(), "0");
	}

	#[test]
	fn test_scale_insensitive_equality() {
		let a = Decimal::from_str("1.50").unwrap();
		let b = Decimal::from_str("1.5").unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn test_is_integer() {
		assert!(Decimal::from_str("42").unwrap().is_integer());
		assert!(Decimal::from_str("42.00").unwrap().is_integer());
		assert!(!Decimal::from_str("42.5").unwrap().is_integer());
	}
}
