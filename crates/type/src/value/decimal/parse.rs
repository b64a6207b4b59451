// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal;

use crate::{
	error::{TypeError, number::invalid_number_literal},
	value::{decimal::Decimal, r#type::Category},
};

/// Parse a decimal literal. Underscore separators and surrounding whitespace
/// are tolerated the way numeric literals are elsewhere in the toolkit.
pub fn parse_decimal(text: &str) -> Result<Decimal, TypeError> {
	let trimmed = text.trim();
	let value: Cow<str> = if trimmed.as_bytes().contains(&b'_') {
		Cow::Owned(trimmed.replace('_', ""))
	} else {
		Cow::Borrowed(trimmed)
	};

	if value.is_empty() {
		return Err(invalid_number_literal(Category::Decimal, text));
	}

	BigDecimal::from_str(&value)
		.map(Decimal::new)
		.map_err(|_| invalid_number_literal(Category::Decimal, text))
}

impl FromStr for Decimal {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_decimal(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_decimal_integer() {
		let decimal = parse_decimal("123").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_decimal_with_fractional() {
		let decimal = parse_decimal("123.45").unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_decimal_with_underscores() {
		let decimal = parse_decimal("1_234.56").unwrap();
		assert_eq!(decimal.to_string(), "1234.56");
	}

	#[test]
	fn test_parse_decimal_negative() {
		let decimal = parse_decimal("-123.45").unwrap();
		assert_eq!(decimal.to_string(), "-123.45");
	}

	#[test]
	fn test_parse_decimal_empty() {
		assert!(parse_decimal("").is_err());
	}

	#[test]
	fn test_parse_decimal_invalid() {
		let err = parse_decimal("not_a_number").unwrap_err();
		assert!(err.is_invalid_literal());
	}
}
