// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(i8 => i16, i32, i64, u8, u16, u32, u64);

impl_safe_convert_signed_to_float!(24; i8 => f32);
impl_safe_convert_signed_to_float!(53; i8 => f64);

impl_safe_convert_to_decimal_from_int!(i8);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i16 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i8 = -128;
			let y: Option<i16> = x.checked_convert();
			assert_eq!(y, Some(-128i16));
		}
	}

	mod u8 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i8 = 127;
			let y: Option<u8> = x.checked_convert();
			assert_eq!(y, Some(127u8));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i8 = -1;
			let y: Option<u8> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u64 {
		use super::*;

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i8 = -128;
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: i8 = -42;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(-42.0f32));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: i8 = -42;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "-42");
		}
	}
}
