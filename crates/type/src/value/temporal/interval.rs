// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A year-month interval, carried as a total month count.
///
/// Year-month and day-second intervals have no common scalar and never
/// compare with each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntervalYearMonth {
	months: i32,
}

impl IntervalYearMonth {
	pub fn from_months(months: i32) -> Self {
		Self {
			months,
		}
	}

	pub fn from_years_months(years: i32, months: i32) -> Self {
		Self {
			months: years * 12 + months,
		}
	}

	/// The derived scalar this interval kind compares by.
	pub fn total_months(&self) -> i32 {
		self.months
	}
}

impl Display for IntervalYearMonth {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.months < 0 {
			f.write_str("-")?;
		}
		let total = self.months.unsigned_abs();
		let years = total / 12;
		let months = total % 12;
		if years != 0 {
			write!(f, "{}y {}m", years, months)
		} else {
			write!(f, "{}m", months)
		}
	}
}

/// A day-second interval: seconds plus a nanosecond component in `[0, 1e9)`.
/// Negative durations have negative seconds with nanoseconds still counting
/// forward, so the derived (seconds, nanos) pair orders lexicographically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntervalDaySecond {
	secs: i64,
	nanos: u32,
}

impl IntervalDaySecond {
	pub fn new(secs: i64, nanos: u32) -> Option<Self> {
		if nanos >= 1_000_000_000 {
			return None;
		}
		Some(Self {
			secs,
			nanos,
		})
	}

	pub fn from_seconds(secs: i64) -> Self {
		Self {
			secs,
			nanos: 0,
		}
	}

	pub fn from_minutes(minutes: i64) -> Self {
		Self::from_seconds(minutes * 60)
	}

	pub fn from_hours(hours: i64) -> Self {
		Self::from_seconds(hours * 3600)
	}

	pub fn from_days(days: i64) -> Self {
		Self::from_seconds(days * 86_400)
	}

	pub fn from_milliseconds(millis: i64) -> Self {
		let secs = millis.div_euclid(1000);
		let nanos = millis.rem_euclid(1000) as u32 * 1_000_000;
		Self {
			secs,
			nanos,
		}
	}

	/// The derived scalar this interval kind compares by.
	pub fn total_seconds(&self) -> i64 {
		self.secs
	}

	pub fn subsec_nanos(&self) -> u32 {
		self.nanos
	}
}

impl Display for IntervalDaySecond {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let total_nanos = self.secs as i128 * 1_000_000_000 + self.nanos as i128;
		if total_nanos < 0 {
			f.write_str("-")?;
		}
		let total_nanos = total_nanos.unsigned_abs();
		let total_seconds = (total_nanos / 1_000_000_000) as u64;
		let nanos = (total_nanos % 1_000_000_000) as u32;

		let days = total_seconds / 86_400;
		let hours = (total_seconds % 86_400) / 3600;
		let minutes = (total_seconds % 3600) / 60;
		let seconds = total_seconds % 60;

		if days != 0 {
			write!(f, "{}d {}h {}m {}.{:09}s", days, hours, minutes, seconds, nanos)
		} else if hours != 0 {
			write!(f, "{}h {}m {}.{:09}s", hours, minutes, seconds, nanos)
		} else if minutes != 0 {
			write!(f, "{}m {}.{:09}s", minutes, seconds, nanos)
		} else {
			write!(f, "{}.{:09}s", seconds, nanos)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod year_month {
		use super::*;

		#[test]
		fn test_total_months() {
			let interval = IntervalYearMonth::from_years_months(2, 3);
			assert_eq!(interval.total_months(), 27);
		}

		#[test]
		fn test_ordering() {
			let short = IntervalYearMonth::from_months(11);
			let long = IntervalYearMonth::from_years_months(1, 0);
			assert!(short < long);
		}

		#[test]
		fn test_display() {
			assert_eq!(IntervalYearMonth::from_years_months(1, 2).to_string(), "1y 2m");
			assert_eq!(IntervalYearMonth::from_months(5).to_string(), "5m");
			assert_eq!(IntervalYearMonth::from_months(-14).to_string(), "-1y 2m");
		}
	}

	mod day_second {
		use super::*;

		#[test]
		fn test_rejects_invalid_nanos() {
			assert!(IntervalDaySecond::new(0, 1_000_000_000).is_none());
		}

		#[test]
		fn test_ordering() {
			let short = IntervalDaySecond::from_seconds(59);
			let long = IntervalDaySecond::from_minutes(1);
			assert!(short < long);

			let a = IntervalDaySecond::new(10, 0).unwrap();
			let b = IntervalDaySecond::new(10, 1).unwrap();
			assert!(a < b);
		}

		#[test]
		fn test_negative_orders_below_zero() {
			let negative = IntervalDaySecond::from_seconds(-1);
			let zero = IntervalDaySecond::from_seconds(0);
			assert!(negative < zero);
		}

		#[test]
		fn test_from_milliseconds() {
			let interval = IntervalDaySecond::from_milliseconds(-500);
			assert_eq!(interval.total_seconds(), -1);
			assert_eq!(interval.subsec_nanos(), 500_000_000);
		}

		#[test]
		fn test_display() {
			assert_eq!(IntervalDaySecond::from_days(1).to_string(), "1d 0h 0m 0.000000000s");
			assert_eq!(IntervalDaySecond::from_seconds(90).to_string(), "1m 30.000000000s");
			assert_eq!(IntervalDaySecond::from_seconds(-90).to_string(), "-1m 30.000000000s");
		}
	}
}
