// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::str::FromStr;

use crate::{
	error::TypeError,
	value::{r#type::Category, temporal::Date},
};

fn invalid(text: &str) -> TypeError {
	TypeError::InvalidLiteral {
		target: Category::Date,
		text: text.to_string(),
	}
}

/// Parse a date literal in the form `YYYY-MM-DD`. Years before the common
/// era carry a leading minus.
pub fn parse_date(text: &str) -> Result<Date, TypeError> {
	let (negative_year, body) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text),
	};

	let parts: Vec<&str> = body.split('-').collect();
	if parts.len() != 3 {
		return Err(invalid(text));
	}

	if parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
		return Err(invalid(text));
	}

	let year: i32 = parts[0].parse().map_err(|_| invalid(text))?;
	let month: u32 = parts[1].parse().map_err(|_| invalid(text))?;
	let day: u32 = parts[2].parse().map_err(|_| invalid(text))?;

	let year = if negative_year {
		-year
	} else {
		year
	};

	Date::new(year, month, day).ok_or_else(|| invalid(text))
}

impl FromStr for Date {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_date(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_date() {
		let date = parse_date("2025-08-06").unwrap();
		assert_eq!(date, Date::new(2025, 8, 6).unwrap());
	}

	#[test]
	fn test_parse_date_negative_year() {
		let date = parse_date("-0044-03-15").unwrap();
		assert_eq!(date.year(), -44);
	}

	#[test]
	fn test_parse_date_wrong_shape() {
		assert!(parse_date("2025/08/06").is_err());
		assert!(parse_date("2025-8-6").is_err());
		assert!(parse_date("2025-08").is_err());
		assert!(parse_date("").is_err());
	}

	#[test]
	fn test_parse_date_out_of_range() {
		assert!(parse_date("2025-13-01").is_err());
		assert!(parse_date("2025-02-30").is_err());
	}
}
