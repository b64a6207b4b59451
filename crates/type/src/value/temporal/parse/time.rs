// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::str::FromStr;

use crate::{
	error::TypeError,
	value::{r#type::Category, temporal::Time},
};

fn invalid(text: &str) -> TypeError {
	TypeError::InvalidLiteral {
		target: Category::Time,
		text: text.to_string(),
	}
}

/// Parse a time literal in the form `HH:MM:SS[.fraction][Z]`, with up to
/// nine fractional digits.
pub fn parse_time(text: &str) -> Result<Time, TypeError> {
	let body = text.strip_suffix('Z').unwrap_or(text);

	let parts: Vec<&str> = body.split(':').collect();
	if parts.len() != 3 {
		return Err(invalid(text));
	}

	if parts[0].len() != 2 || parts[1].len() != 2 {
		return Err(invalid(text));
	}

	let hour: u32 = parts[0].parse().map_err(|_| invalid(text))?;
	let minute: u32 = parts[1].parse().map_err(|_| invalid(text))?;

	let (second_text, nano) = match parts[2].split_once('.') {
		Some((whole, fraction)) => {
			if fraction.is_empty() || fraction.len() > 9 {
				return Err(invalid(text));
			}
			let digits: u32 = fraction.parse().map_err(|_| invalid(text))?;
			// Scale to nanoseconds: ".5" is 500ms, not 5ns
			(whole, digits * 10u32.pow(9 - fraction.len() as u32))
		}
		None => (parts[2], 0),
	};

	if second_text.len() != 2 {
		return Err(invalid(text));
	}
	let second: u32 = second_text.parse().map_err(|_| invalid(text))?;

	Time::new(hour, minute, second, nano).ok_or_else(|| invalid(text))
}

impl FromStr for Time {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_time(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_time() {
		let time = parse_time("13:37:42").unwrap();
		assert_eq!(time, Time::new(13, 37, 42, 0).unwrap());
	}

	#[test]
	fn test_parse_time_with_fraction() {
		let time = parse_time("13:37:42.5").unwrap();
		assert_eq!(time.nanosecond(), 500_000_000);

		let time = parse_time("13:37:42.000000001").unwrap();
		assert_eq!(time.nanosecond(), 1);
	}

	#[test]
	fn test_parse_time_with_zulu() {
		let time = parse_time("13:37:42Z").unwrap();
		assert_eq!(time, Time::new(13, 37, 42, 0).unwrap());
	}

	#[test]
	fn test_parse_time_wrong_shape() {
		assert!(parse_time("13:37").is_err());
		assert!(parse_time("1:37:42").is_err());
		assert!(parse_time("13:37:42.").is_err());
		assert!(parse_time("13:37:42.0000000001").is_err());
	}

	#[test]
	fn test_parse_time_out_of_range() {
		assert!(parse_time("24:00:00").is_err());
		assert!(parse_time("13:60:00").is_err());
	}
}
