// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Checked narrowing and widening between numeric representations.
//!
//! Every conversion is reject-or-exact: the source value must lie within the
//! exact representable range of the target or the conversion yields `None`.
//! Nothing here wraps, saturates or rounds. Integer-to-float conversions are
//! bounded by the float's contiguous-integer range (2^24 for f32, 2^53 for
//! f64); float-to-integer conversions additionally require an integral value
//! and use exclusive power-of-two bounds, which both float widths represent
//! exactly, so the range check is not itself subject to float rounding.

pub(crate) use bigdecimal::BigDecimal;

pub(crate) use crate::value::decimal::Decimal;

pub trait SafeConvert<T>: Sized {
	fn checked_convert(self) -> Option<T>;
}

macro_rules! impl_safe_convert {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl SafeConvert<$dst> for $src {
                fn checked_convert(self) -> Option<$dst> {
                    <$dst>::try_from(self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_safe_convert_signed_to_float {
    ($bits:expr; $src:ty => $dst:ty) => {
        impl SafeConvert<$dst> for $src {
            fn checked_convert(self) -> Option<$dst> {
                if (self as i128).unsigned_abs() <= (1u128 << $bits) {
                    Some(self as $dst)
                } else {
                    None
                }
            }
        }
    };
}

macro_rules! impl_safe_convert_unsigned_to_float {
    ($bits:expr; $src:ty => $dst:ty) => {
        impl SafeConvert<$dst> for $src {
            fn checked_convert(self) -> Option<$dst> {
                if (self as u128) <= (1u128 << $bits) {
                    Some(self as $dst)
                } else {
                    None
                }
            }
        }
    };
}

macro_rules! impl_safe_convert_float_to_signed {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl SafeConvert<$dst> for $src {
                fn checked_convert(self) -> Option<$dst> {
                    let bound = (2.0 as $src).powi(<$dst>::BITS as i32 - 1);
                    if self.is_finite() && self.trunc() == self && self >= -bound && self < bound {
                        Some(self as $dst)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

macro_rules! impl_safe_convert_float_to_unsigned {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl SafeConvert<$dst> for $src {
                fn checked_convert(self) -> Option<$dst> {
                    let bound = (2.0 as $src).powi(<$dst>::BITS as i32);
                    if self.is_finite() && self.trunc() == self && self >= 0.0 && self < bound {
                        Some(self as $dst)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

macro_rules! impl_safe_convert_to_decimal_from_int {
    ($($src:ty),*) => {
        $(
            impl SafeConvert<Decimal> for $src {
                fn checked_convert(self) -> Option<Decimal> {
                    Some(Decimal::new(BigDecimal::from(self)))
                }
            }
        )*
    };
}

macro_rules! impl_safe_convert_to_decimal_from_float {
    ($($src:ty),*) => {
        $(
            impl SafeConvert<Decimal> for $src {
                fn checked_convert(self) -> Option<Decimal> {
                    BigDecimal::try_from(self).ok().map(Decimal::new)
                }
            }
        )*
    };
}

mod decimal;
mod f32;
mod f64;
mod i8;
mod i16;
mod i32;
mod i64;
mod u8;
mod u16;
mod u32;
mod u64;
