// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use sqlbridge_type::{Type, Value};

/// The textual form of a value for a string-vs-anything comparison. A
/// decimal side is canonicalized first so `"3"` and `"3.00"` compare equal.
fn stringify(value: &Value) -> String {
	match value.ty() {
		Type::Decimal => value.as_decimal().canonical_string(),
		_ => value.to_string(),
	}
}

/// Ordinal comparison of both operands' textual forms.
pub(crate) fn compare(left: &Value, right: &Value) -> Ordering {
	stringify(left).cmp(&stringify(right))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decimal_side_is_canonicalized() {
		let left = Value::utf8("3");
		let right = Value::decimal("3.00".parse::<sqlbridge_type::Decimal>().unwrap());
		assert_eq!(compare(&left, &right), Ordering::Equal);
	}

	#[test]
	fn test_number_side_is_stringified() {
		let left = Value::utf8("42");
		let right = Value::int4(42);
		assert_eq!(compare(&left, &right), Ordering::Equal);
	}

	#[test]
	fn test_ordinal_not_numeric() {
		// "10" sorts before "9" textually
		let left = Value::utf8("10");
		let right = Value::utf8("9");
		assert_eq!(compare(&left, &right), Ordering::Less);
	}
}
