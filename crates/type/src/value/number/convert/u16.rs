// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(u16 => i8, i16, i32, i64, u8, u32, u64);

impl_safe_convert_unsigned_to_float!(24; u16 => f32);
impl_safe_convert_unsigned_to_float!(53; u16 => f64);

impl_safe_convert_to_decimal_from_int!(u16);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i16 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u16 = 32767;
			let y: Option<i16> = x.checked_convert();
			assert_eq!(y, Some(32767i16));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u16 = 32768;
			let y: Option<i16> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u8 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u16 = 255;
			let y: Option<u8> = x.checked_convert();
			assert_eq!(y, Some(255u8));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u16 = 256;
			let y: Option<u8> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: u16 = 65535;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(65535.0f32));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: u16 = 65535;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "65535");
		}
	}
}
