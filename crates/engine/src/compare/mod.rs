// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! The six relational operator entry points.
//!
//! Each operator runs the same sequence: the shared NULL guard, then
//! classification of both operands, then a cell lookup in its dispatch
//! table. A pair with no cell is a [`TypeError::IncompatibleComparison`]
//! naming the operator and both categories.

mod cell;
mod equal;
mod greater_than;
mod greater_than_equal;
mod less_than;
mod less_than_equal;
mod not_equal;

use sqlbridge_type::{
	Category, Value,
	error::operator::{
		equal_cannot_be_applied_to_incompatible_types,
		greater_than_cannot_be_applied_to_incompatible_types,
		greater_than_equal_cannot_be_applied_to_incompatible_types,
		less_than_cannot_be_applied_to_incompatible_types,
		less_than_equal_cannot_be_applied_to_incompatible_types,
	},
};

pub use not_equal::not_equal;

/// The simplified NULL policy, in one place: a comparison touching a NULL
/// operand is `false` for every operator, `not_equal` included. This is not
/// three-valued SQL NULL semantics and deliberately so.
#[inline]
pub(crate) fn null_guard(left: &Value, right: &Value) -> bool {
	left.is_null() || right.is_null()
}

/// Classify both operands. A side that does not classify is treated as "not
/// comparable", the same outcome shape as a missing cell.
#[inline]
pub(crate) fn classify(left: &Value, right: &Value) -> Option<(Category, Category)> {
	let lc = left.category();
	let rc = right.category();
	if lc.is_comparable() && rc.is_comparable() {
		Some((lc, rc))
	} else {
		None
	}
}

pub fn equal(left: &Value, right: &Value) -> crate::Result<bool> {
	if null_guard(left, right) {
		return Ok(false);
	}
	let Some((lc, rc)) = classify(left, right) else {
		return Ok(false);
	};
	equal::compare(lc, rc, left, right, equal_cannot_be_applied_to_incompatible_types)
}

pub fn less_than(left: &Value, right: &Value) -> crate::Result<bool> {
	if null_guard(left, right) {
		return Ok(false);
	}
	let Some((lc, rc)) = classify(left, right) else {
		return Ok(false);
	};
	less_than::compare(lc, rc, left, right, less_than_cannot_be_applied_to_incompatible_types)
}

pub fn less_than_equal(left: &Value, right: &Value) -> crate::Result<bool> {
	if null_guard(left, right) {
		return Ok(false);
	}
	let Some((lc, rc)) = classify(left, right) else {
		return Ok(false);
	};
	less_than_equal::compare(lc, rc, left, right, less_than_equal_cannot_be_applied_to_incompatible_types)
}

pub fn greater_than(left: &Value, right: &Value) -> crate::Result<bool> {
	if null_guard(left, right) {
		return Ok(false);
	}
	let Some((lc, rc)) = classify(left, right) else {
		return Ok(false);
	};
	greater_than::compare(lc, rc, left, right, greater_than_cannot_be_applied_to_incompatible_types)
}

pub fn greater_than_equal(left: &Value, right: &Value) -> crate::Result<bool> {
	if null_guard(left, right) {
		return Ok(false);
	}
	let Some((lc, rc)) = classify(left, right) else {
		return Ok(false);
	};
	greater_than_equal::compare(
		lc,
		rc,
		left,
		right,
		greater_than_equal_cannot_be_applied_to_incompatible_types,
	)
}
