// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Decimal cells. Against an integer the integer side converts exactly into
//! decimal; against a float the decimal side converts to the float's
//! representation, which loses precision by design.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::Sign;
use sqlbridge_type::Decimal;

pub(crate) fn compare(left: &Decimal, right: &Decimal) -> Ordering {
	left.inner().cmp(right.inner())
}

pub(crate) fn compare_int<T>(dec: &Decimal, v: T) -> Ordering
where
	BigDecimal: From<T>,
{
	dec.inner().cmp(&BigDecimal::from(v))
}

pub(crate) fn compare_f32(dec: &Decimal, v: f32) -> Ordering {
	match dec.to_f32() {
		Some(d) => d.partial_cmp(&v).unwrap_or(Ordering::Equal),
		// Beyond f32's finite range the sign alone decides
		None => {
			if dec.inner().sign() == Sign::Minus {
				Ordering::Less
			} else {
				Ordering::Greater
			}
		}
	}
}

pub(crate) fn compare_f64(dec: &Decimal, v: f64) -> Ordering {
	match dec.to_f64() {
		Some(d) => d.partial_cmp(&v).unwrap_or(Ordering::Equal),
		None => {
			if dec.inner().sign() == Sign::Minus {
				Ordering::Less
			} else {
				Ordering::Greater
			}
		}
	}
}
