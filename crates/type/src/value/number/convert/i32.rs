// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(i32 => i8, i16, i64, u8, u16, u32, u64);

impl_safe_convert_signed_to_float!(24; i32 => f32);
impl_safe_convert_signed_to_float!(53; i32 => f64);

impl_safe_convert_to_decimal_from_int!(i32);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i16 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i32 = -32768;
			let y: Option<i16> = x.checked_convert();
			assert_eq!(y, Some(-32768i16));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i32 = 100000;
			let y: Option<i16> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i32 = i32::MAX;
			let y: Option<u32> = x.checked_convert();
			assert_eq!(y, Some(2147483647u32));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i32 = -1;
			let y: Option<u32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i32 = 1 << 24;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(16777216.0f32));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			// Beyond the contiguous integer range of f32
			let x: i32 = (1 << 24) + 1;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f64 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: i32 = i32::MIN;
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, Some(-2147483648.0f64));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: i32 = i32::MIN;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "-2147483648");
		}
	}
}
