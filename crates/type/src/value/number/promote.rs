// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(rustfmt, rustfmt_skip)]

//! Pairwise normalization for mixed numeric comparison.
//!
//! Each (left, right) pair has a fixed coercion direction; this is NOT a
//! generic promotion to the wider type. Integer-integer pairs normalize the
//! right operand onto the left operand's representation, so comparing an
//! unsigned left against a negative signed right fails with an out-of-range
//! error instead of comparing bit patterns. Pairs involving a float
//! normalize the integer side onto the float side; mixed float widths widen
//! the f32 side exactly to f64.

use crate::{
    error::{TypeError, number::value_out_of_range},
    value::{is::IsNumber, number::convert::SafeConvert, r#type::GetCategory},
};

pub trait Promote<R> where Self: IsNumber, R: IsNumber {
    type Output: IsNumber;
    fn checked_promote(self, r: R) -> Result<(Self::Output, Self::Output), TypeError>;
}

macro_rules! impl_promote_identity {
    ($($t:ty),*) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                fn checked_promote(self, r: $t) -> Result<(Self::Output, Self::Output), TypeError> {
                    Ok((self, r))
                }
            }
        )*
    };
}

macro_rules! impl_promote_int_int {
    ($l:ty => $($r:ty),*) => {
        $(
            impl Promote<$r> for $l {
                type Output = $l;

                fn checked_promote(self, r: $r) -> Result<(Self::Output, Self::Output), TypeError> {
                    let r: $l = r.checked_convert().ok_or_else(|| value_out_of_range(
                        <$r as GetCategory>::category(),
                        <$l as GetCategory>::category(),
                    ))?;
                    Ok((self, r))
                }
            }
        )*
    };
}

macro_rules! impl_promote_int_float {
    ($l:ty => $($r:ty),*) => {
        $(
            impl Promote<$r> for $l {
                type Output = $r;

                fn checked_promote(self, r: $r) -> Result<(Self::Output, Self::Output), TypeError> {
                    let l: $r = self.checked_convert().ok_or_else(|| value_out_of_range(
                        <$l as GetCategory>::category(),
                        <$r as GetCategory>::category(),
                    ))?;
                    Ok((l, r))
                }
            }
        )*
    };
}

macro_rules! impl_promote_float_int {
    ($l:ty => $($r:ty),*) => {
        $(
            impl Promote<$r> for $l {
                type Output = $l;

                fn checked_promote(self, r: $r) -> Result<(Self::Output, Self::Output), TypeError> {
                    let r: $l = r.checked_convert().ok_or_else(|| value_out_of_range(
                        <$r as GetCategory>::category(),
                        <$l as GetCategory>::category(),
                    ))?;
                    Ok((self, r))
                }
            }
        )*
    };
}

impl Promote<f64> for f32 {
    type Output = f64;

    fn checked_promote(self, r: f64) -> Result<(Self::Output, Self::Output), TypeError> {
        Ok((self as f64, r))
    }
}

impl Promote<f32> for f64 {
    type Output = f64;

    fn checked_promote(self, r: f32) -> Result<(Self::Output, Self::Output), TypeError> {
        Ok((self, r as f64))
    }
}

impl_promote_identity!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl_promote_int_int!(i8 => i16, i32, i64, u8, u16, u32, u64);
impl_promote_int_int!(i16 => i8, i32, i64, u8, u16, u32, u64);
impl_promote_int_int!(i32 => i8, i16, i64, u8, u16, u32, u64);
impl_promote_int_int!(i64 => i8, i16, i32, u8, u16, u32, u64);
impl_promote_int_int!(u8 => i8, i16, i32, i64, u16, u32, u64);
impl_promote_int_int!(u16 => i8, i16, i32, i64, u8, u32, u64);
impl_promote_int_int!(u32 => i8, i16, i32, i64, u8, u16, u64);
impl_promote_int_int!(u64 => i8, i16, i32, i64, u8, u16, u32);

impl_promote_int_float!(i8 => f32, f64);
impl_promote_int_float!(i16 => f32, f64);
impl_promote_int_float!(i32 => f32, f64);
impl_promote_int_float!(i64 => f32, f64);
impl_promote_int_float!(u8 => f32, f64);
impl_promote_int_float!(u16 => f32, f64);
impl_promote_int_float!(u32 => f32, f64);
impl_promote_int_float!(u64 => f32, f64);

impl_promote_float_int!(f32 => i8, i16, i32, i64, u8, u16, u32, u64);
impl_promote_float_int!(f64 => i8, i16, i32, i64, u8, u16, u32, u64);
