// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Bit cells. Equality treats "both zero or both nonzero" as equal; the
//! ordering cells compare the two sides' truthiness as 0/1, not the other
//! side's numeric magnitude.

use sqlbridge_type::{Type, Value};

/// Non-zero numerics are boolean `true`.
pub(crate) fn truthy(value: &Value) -> bool {
	match value.ty() {
		Type::Bool => value.as_bool(),
		Type::Float4 => value.as_f32() != 0.0,
		Type::Float8 => value.as_f64() != 0.0,
		Type::Int1 => value.as_i8() != 0,
		Type::Int2 => value.as_i16() != 0,
		Type::Int4 => value.as_i32() != 0,
		Type::Int8 => value.as_i64() != 0,
		Type::Uint1 => value.as_u8() != 0,
		Type::Uint2 => value.as_u16() != 0,
		Type::Uint4 => value.as_u32() != 0,
		Type::Uint8 => value.as_u64() != 0,
		Type::Decimal => !value.as_decimal().is_zero(),
		other => unreachable!("truthiness of a {} value", other),
	}
}

pub(crate) fn is_equal(left: &Value, right: &Value) -> bool {
	truthy(left) == truthy(right)
}

pub(crate) fn is_less_than(left: &Value, right: &Value) -> bool {
	(truthy(left) as u8) < (truthy(right) as u8)
}

pub(crate) fn is_less_than_equal(left: &Value, right: &Value) -> bool {
	(truthy(left) as u8) <= (truthy(right) as u8)
}

pub(crate) fn is_greater_than(left: &Value, right: &Value) -> bool {
	(truthy(left) as u8) > (truthy(right) as u8)
}

pub(crate) fn is_greater_than_equal(left: &Value, right: &Value) -> bool {
	(truthy(left) as u8) >= (truthy(right) as u8)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nonzero_is_true() {
		assert!(truthy(&Value::int4(5)));
		assert!(truthy(&Value::int4(-5)));
		assert!(!truthy(&Value::int4(0)));
		assert!(truthy(&Value::float8(0.5)));
	}

	#[test]
	fn test_equality_by_truthiness() {
		// 5 and true are "equal" through the bit cell
		assert!(is_equal(&Value::bool(true), &Value::int4(5)));
		assert!(is_equal(&Value::bool(false), &Value::int4(0)));
		assert!(!is_equal(&Value::bool(true), &Value::int4(0)));
	}

	#[test]
	fn test_ordering_ignores_magnitude() {
		// true is not greater than 5: both sides are truthy
		assert!(!is_greater_than(&Value::bool(true), &Value::int4(5)));
		assert!(is_greater_than(&Value::bool(true), &Value::int4(0)));
		assert!(is_greater_than_equal(&Value::bool(true), &Value::int4(5)));
	}
}
