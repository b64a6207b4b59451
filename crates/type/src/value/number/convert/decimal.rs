// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use num_bigint::ToBigInt;

use super::*;

macro_rules! impl_safe_convert_decimal_to_int {
    ($($dst:ty),*) => {
        $(
            impl SafeConvert<$dst> for Decimal {
                fn checked_convert(self) -> Option<$dst> {
                    if !self.is_integer() {
                        return None;
                    }
                    self.inner().to_bigint().and_then(|int| <$dst>::try_from(int).ok())
                }
            }
        )*
    };
}

impl_safe_convert_decimal_to_int!(i8, i16, i32, i64, u8, u16, u32, u64);

// Decimal to float is the one deliberately lossy edge of the grid: the
// nearest representable float is accepted as long as it is finite.
impl SafeConvert<f32> for Decimal {
	fn checked_convert(self) -> Option<f32> {
		self.to_f32()
	}
}

impl SafeConvert<f64> for Decimal {
	fn checked_convert(self) -> Option<f64> {
		self.to_f64()
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::SafeConvert;
	use crate::Decimal;

	mod i32 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x = Decimal::from_str("42").unwrap();
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, Some(42i32));
		}

		#[test]
		fn test_checked_convert_trailing_zero_scale() {
			let x = Decimal::from_str("42.00").unwrap();
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, Some(42i32));
		}

		#[test]
		fn test_checked_convert_fractional() {
			let x = Decimal::from_str("42.5").unwrap();
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, None);
		}

		#[test]
		fn test_checked_convert_overflow() {
			let x = Decimal::from_str("5000000000").unwrap();
			let y: Option<i32> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod u64 {
		use super::*;

		#[test]
		fn test_checked_convert_happy() {
			let x = Decimal::from_str("18446744073709551615").unwrap();
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, Some(u64::MAX));
		}

		#[test]
		fn test_checked_convert_negative() {
			let x = Decimal::from_str("-1").unwrap();
			let y: Option<u64> = x.checked_convert();
			assert_eq!(y, None);
		}
	}

	mod f64 {
		use super::*;

		#[test]
		fn test_checked_convert_exact() {
			let x = Decimal::from_str("0.5").unwrap();
			let y: Option<f64> = x.checked_convert();
			assert_eq!(y, Some(0.5f64));
		}

		#[test]
		fn test_checked_convert_lossy() {
			// More precision than f64 carries; nearest float is accepted
			let x = Decimal::from_str("0.123456789012345678901234567890").unwrap();
			let y: Option<f64> = x.checked_convert();
			assert!(y.is_some());
		}
	}
}
