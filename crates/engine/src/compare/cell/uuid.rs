// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use sqlbridge_type::{Guid, value::uuid::strip_braces};

/// GUID against GUID is an exact fixed-width byte-sequence compare; no
/// byte-order normalization.
pub(crate) fn compare_bytes(left: &Guid, right: &Guid) -> Ordering {
	left.as_bytes().cmp(right.as_bytes())
}

/// GUID against text: braces are stripped from the text operand and the
/// compare is ASCII-case-insensitive, since GUIDs render as lowercase hex
/// while drivers hand back uppercase literals.
pub(crate) fn compare_text(guid: &Guid, text: &str) -> Ordering {
	let lhs = guid.to_string();
	let rhs = strip_braces(text).to_ascii_lowercase();
	lhs.as_str().cmp(rhs.as_str())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compare_bytes_exact() {
		let a = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		let b = Guid::parse("550e8400-e29b-41d4-a716-446655440001").unwrap();
		assert_eq!(compare_bytes(&a, &a), Ordering::Equal);
		assert_eq!(compare_bytes(&a, &b), Ordering::Less);
	}

	#[test]
	fn test_compare_text_brace_insensitive() {
		let guid = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		assert_eq!(compare_text(&guid, "{550e8400-e29b-41d4-a716-446655440000}"), Ordering::Equal);
	}

	#[test]
	fn test_compare_text_case_insensitive() {
		let guid = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		assert_eq!(compare_text(&guid, "550E8400-E29B-41D4-A716-446655440000"), Ordering::Equal);
	}

	#[test]
	fn test_compare_text_mismatch() {
		let guid = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		assert_ne!(compare_text(&guid, "650e8400-e29b-41d4-a716-446655440000"), Ordering::Equal);
	}
}
