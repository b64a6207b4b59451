// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use sqlbridge_type::{Value, error::operator::not_equal_cannot_be_applied_to_incompatible_types};

use super::{classify, equal, null_guard};

/// `not_equal` is the negation of the equality table, negated here at the
/// entry point; there is no separately authored table. The NULL guard still
/// yields `false` (not `true`), and a missing cell still surfaces as an
/// error carrying this operator's name.
pub fn not_equal(left: &Value, right: &Value) -> crate::Result<bool> {
	if null_guard(left, right) {
		return Ok(false);
	}
	let Some((lc, rc)) = classify(left, right) else {
		return Ok(false);
	};
	equal::compare(lc, rc, left, right, not_equal_cannot_be_applied_to_incompatible_types)
		.map(|equal| !equal)
}
