// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::*;

// Widening to f64 is always exact
impl SafeConvert<f64> for f32 {
	fn checked_convert(self) -> Option<f64> {
		Some(self as f64)
	}
}

impl_safe_convert_float_to_signed!(f32 => i8, i16, i32, i64);
impl_safe_convert_float_to_unsigned!(f32 => u8, u16, u32, u64);

impl_safe_convert_to_decimal_from_float!(f32);
