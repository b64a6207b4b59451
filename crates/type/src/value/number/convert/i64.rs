// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(i64 => i8, i16, i32, u8, u16, u32, u64);

impl_safe_convert_signed_to_float!(24; i64 => f32);
impl_safe_convert_signed_to_float!(53; i64 => f64);

impl_safe_convert_to_decimal_from_int!(i64);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i64 = -2147483648;
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, Some(i32::MIN));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i64 = 5000000000;
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u64 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i64 = i64::MAX;
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, Some(9223372036854775807u64));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i64 = -1;
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f64 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i64 = 1 << 53;
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, Some(9007199254740992.0f64));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			// Beyond the contiguous integer range of f64
			let x: i64 = (1 << 53) + 1;
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, None);
		}

		#[test]
		fn test_checked_convert_negative_boundary() {
			let x: i64 = -(1 << 53);
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, Some(-9007199254740992.0f64));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: i64 = i64::MIN;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "-9223372036854775808");
		}
	}
}
