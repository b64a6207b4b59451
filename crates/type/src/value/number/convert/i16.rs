// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(i16 => i8, i32, i64, u8, u16, u32, u64);

impl_safe_convert_signed_to_float!(24; i16 => f32);
impl_safe_convert_signed_to_float!(53; i16 => f64);

impl_safe_convert_to_decimal_from_int!(i16);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i8 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i16 = 42;
			let y: Option<i8> = x.checked_convert();
			assert_eq!(y, Some(42i8));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i16 = 500;
			let y: Option<i8> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u16 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: i16 = 32767;
			let y: Option<u16> = x.checked_convert();
			assert_eq!(y, Some(32767u16));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: i16 = -1;
			let y: Option<u16> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: i16 = -32768;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(-32768.0f32));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: i16 = 1000;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "1000");
		}
	}
}
