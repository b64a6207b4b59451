// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

impl_safe_convert!(u32 => i8, i16, i32, i64, u8, u16, u64);

impl_safe_convert_unsigned_to_float!(24; u32 => f32);
impl_safe_convert_unsigned_to_float!(53; u32 => f64);

impl_safe_convert_to_decimal_from_int!(u32);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod i32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: u32 = 2147483647;
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, Some(i32::MAX));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u32 = 2147483648;
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod i64 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: u32 = u32::MAX;
			let y: Option<i64> = x.checked_convert();
			assert_eq!(y, Some(4294967295i64));
		}
	}

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert_unhappy() {
			let x: u32 = u32::MAX;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f64 {
		use super::*;

		#[test]
		fn test_checked_convert() {
			let x: u32 = u32::MAX;
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, Some(4294967295.0f64));
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: u32 = u32::MAX;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "4294967295");
		}
	}
}
