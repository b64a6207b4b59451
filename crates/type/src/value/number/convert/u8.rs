// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(u8 => i8, i16, i32, i64, u16, u32, u64);

impl_safe_convert_unsigned_to_float!(24; u8 => f32);
impl_safe_convert_unsigned_to_float!(53; u8 => f64);

impl_safe_convert_to_decimal_from_int!(u8);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i8 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u8 = 127;
			let y: Option<i8> = x.checked_convert();
			assert_eq!(y, Some(127i8));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u8 = 128;
			let y: Option<i8> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u64 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: u8 = 255;
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, Some(255u64));
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: u8 = 255;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(255.0f32));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: u8 = 255;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "255");
		}
	}
}
