// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::str::FromStr;

use super::{date::parse_date, time::parse_time};
use crate::{
	error::TypeError,
	value::{r#type::Category, temporal::DateTime},
};

fn invalid(text: &str) -> TypeError {
	TypeError::InvalidLiteral {
		target: Category::DateTime,
		text: text.to_string(),
	}
}

/// Parse a timestamp literal: a date and a time joined by `T` or a single
/// space, optionally suffixed with `Z`.
pub fn parse_datetime(text: &str) -> Result<DateTime, TypeError> {
	let (date_text, time_text) = text
		.split_once('T')
		.or_else(|| text.split_once(' '))
		.ok_or_else(|| invalid(text))?;

	let date = parse_date(date_text).map_err(|_| invalid(text))?;
	let time = parse_time(time_text).map_err(|_| invalid(text))?;

	Ok(DateTime::new(date, time))
}

impl FromStr for DateTime {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_datetime(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_datetime() {
		let datetime = parse_datetime("2025-08-06T13:37:42Z").unwrap();
		assert_eq!(datetime, DateTime::from_ymd_hms(2025, 8, 6, 13, 37, 42).unwrap());
	}

	#[test]
	fn test_parse_datetime_space_separator() {
		let datetime = parse_datetime("2025-08-06 13:37:42").unwrap();
		assert_eq!(datetime, DateTime::from_ymd_hms(2025, 8, 6, 13, 37, 42).unwrap());
	}

	#[test]
	fn test_parse_datetime_wrong_shape() {
		assert!(parse_datetime("2025-08-06").is_err());
		assert!(parse_datetime("13:37:42").is_err());
		assert!(parse_datetime("2025-08-06X13:37:42").is_err());
	}
}
