// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

// Narrowing to f32 must round-trip exactly
impl SafeConvert<f32> for f64 {
	fn checked_convert(self) -> Option<f32> {
		let narrowed = self as f32;
		if self.is_finite() && narrowed as f64 == self {
			Some(narrowed)
		} else {
			None
		}
	}
}

impl_safe_convert_float_to_signed!(f64 => i8, i16, i32, i64);
impl_safe_convert_float_to_unsigned!(f64 => u8, u16, u32, u64);

impl_safe_convert_to_decimal_from_float!(f64);

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	mod f32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: f64 = 1.5;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, Some(1.5f32));
		}

		#[test]
		fn test_checked_convert_inexact() {
			let x: f64 = 0.1;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, None);
		}

		#[test]
		fn test_checked_convert_overflow() {
			let x: f64 = 1e40;
			let y: Option<f32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod i64 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: f64 = -9007199254740992.0;
			let y: Option<i64> = x.checked_convert();
			assert_eq!(y, Some(-9007199254740992i64));
		}

		#[test]
		fn test_checked_convert_boundary() {
			// 2^63 is exactly representable in f64, i64::MAX is not; the
			// exclusive bound rejects it cleanly
			let x: f64 = 9223372036854775808.0;
			let y: Option<i64> = x.checked_convert();
			assert_eq!(y, None);
		}

		#[test]
		fn test_checked_convert_fractional() {
			let x: f64 = 1.5;
			let y: Option<i64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u8 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x: f64 = 255.0;
			let y: Option<u8> = x.checked_convert();
			assert_eq!(y, Some(255u8));
		}

		#[test]
		fn test_checked_convert_unhappy() {
			let x: f64 = 256.0;
			let y: Option<u8> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u64 {
		use super::*;

		#[test]
		fn test_checked_convert_negative() {
			let x: f64 = -0.5;
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, None);
		}

		#[test]
		fn test_checked_convert_infinite() {
			let x: f64 = f64::NEG_INFINITY;
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod decimal {
		use super::*;
		use crate::Decimal;

		#[test]
		fn test_checked_convert() {
			let x: f64 = 0.5;
			let y: Option<Decimal> = x.checked_convert();
			assert_eq!(y.unwrap().to_string(), "0.5");
		}

		#[test]
		fn test_checked_convert_infinite() {
			let x: f64 = f64::INFINITY;
			let y: Option<Decimal> = x.checked_convert();
			assert!(y.is_none());
		}
	}
}
