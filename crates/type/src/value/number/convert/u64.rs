// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(u64 => i8, i16, i32, i64, u8, u16, u32);

impl_safe_convert_unsigned_to_float!(24; u64 => f32);
impl_safe_convert_unsigned_to_float!(53; u64 => f64);

impl_safe_convert_to_decimal_from_int!(u64);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i8 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u64 = 42;
			let y: Option<i8> = x.checked_convert();
			assert_eq!(y, Some(42i8));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u64 = 500;
			let y: Option<i8> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod i64 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u64 = 9223372036854775807;
			let y: Option<i64> = x.checked_convert();
			assert_eq!(y, Some(i64::MAX));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u64 = 9223372036854775808;
			let y: Option<i64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u64 = 4294967295;
			let y: Option<u32> = x.checked_convert();
			assert_eq!(y, Some(u32::MAX));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u64 = 4294967296;
			let y: Option<u32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u64 = 1 << 24;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(16777216.0f32));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u64 = u64::MAX;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f64 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u64 = 1 << 53;
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, Some(9007199254740992.0f64));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u64 = u64::MAX;
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: u64 = u64::MAX;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "18446744073709551615");
		}
	}
}
