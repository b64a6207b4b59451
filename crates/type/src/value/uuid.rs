// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
	error::TypeError,
	value::r#type::Category,
};

/// A globally unique identifier.
///
/// Stored as the 16 raw bytes; comparison against another GUID is an exact
/// byte-sequence compare with no byte-order normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
	pub fn new(uuid: Uuid) -> Self {
		Self(uuid)
	}

	pub fn nil() -> Self {
		Self(Uuid::nil())
	}

	pub fn from_bytes(bytes: [u8; 16]) -> Self {
		Self(Uuid::from_bytes(bytes))
	}

	pub fn as_bytes(&self) -> &[u8; 16] {
		self.0.as_bytes()
	}

	pub fn inner(&self) -> &Uuid {
		&self.0
	}

	/// Parse a GUID literal. Surrounding braces are accepted and ignored,
	/// matching the textual forms drivers hand back.
	pub fn parse(text: &str) -> Result<Self, TypeError> {
		Uuid::parse_str(strip_braces(text)).map(Self).map_err(|_| TypeError::InvalidLiteral {
			target: Category::Uuid,
			text: text.to_string(),
		})
	}
}

/// Strip one surrounding `{`/`}` pair, if present.
pub fn strip_braces(text: &str) -> &str {
	let text = text.strip_prefix('{').unwrap_or(text);
	text.strip_suffix('}').unwrap_or(text)
}

impl Display for Guid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<Uuid> for Guid {
	fn from(uuid: Uuid) -> Self {
		Self(uuid)
	}
}

impl FromStr for Guid {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_plain() {
		let guid = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		assert_eq!(guid.to_string(), "550e8400-e29b-41d4-a716-446655440000");
	}

	#[test]
	fn test_parse_braced() {
		let braced = Guid::parse("{550e8400-e29b-41d4-a716-446655440000}").unwrap();
		let plain = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		assert_eq!(braced, plain);
	}

	#[test]
	fn test_parse_uppercase() {
		let upper = Guid::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
		let lower = Guid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		assert_eq!(upper, lower);
	}

	#[test]
	fn test_parse_invalid() {
		let err = Guid::parse("not-a-guid").unwrap_err();
		assert!(err.is_invalid_literal());
	}

	#[test]
	fn test_strip_braces() {
		assert_eq!(strip_braces("{abc}"), "abc");
		assert_eq!(strip_braces("abc"), "abc");
		assert_eq!(strip_braces("{abc"), "abc");
	}

	#[test]
	fn test_displays_lowercase() {
		let guid = Guid::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
		assert_eq!(guid.to_string(), "550e8400-e29b-41d4-a716-446655440000");
	}
}
