// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Date, Time, time::NANOS_PER_DAY};

const SECONDS_PER_DAY: i64 = 86_400;

/// A date and time with nanosecond precision in UTC.
///
/// Stored as seconds since Unix epoch plus a nanosecond component in
/// `[0, 1e9)`; instants before 1970 have negative seconds with the
/// nanosecond part still counting forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateTime {
	secs: i64,
	nanos: u32,
}

impl DateTime {
	pub fn new(date: Date, time: Time) -> Self {
		let day_secs = date.to_days() as i64 * SECONDS_PER_DAY;
		let nanos_of_day = time.to_nanos_of_day();
		Self {
			secs: day_secs + (nanos_of_day / 1_000_000_000) as i64,
			nanos: (nanos_of_day % 1_000_000_000) as u32,
		}
	}

	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		let date = Date::new(year, month, day)?;
		let time = Time::new(hour, minute, second, 0)?;
		Some(Self::new(date, time))
	}

	pub fn from_timestamp(secs: i64, nanos: u32) -> Option<Self> {
		if nanos >= 1_000_000_000 {
			return None;
		}
		Some(Self {
			secs,
			nanos,
		})
	}

	pub fn timestamp_seconds(&self) -> i64 {
		self.secs
	}

	pub fn timestamp_subsec_nanos(&self) -> u32 {
		self.nanos
	}

	/// The calendar date this instant falls on.
	pub fn date(&self) -> Date {
		Date::from_days(self.secs.div_euclid(SECONDS_PER_DAY) as i32)
	}

	/// The time of day of this instant.
	pub fn time(&self) -> Time {
		let secs_of_day = self.secs.rem_euclid(SECONDS_PER_DAY) as u64;
		let nanos_of_day = secs_of_day * 1_000_000_000 + self.nanos as u64;
		debug_assert!(nanos_of_day < NANOS_PER_DAY);
		Time::from_nanos_of_day(nanos_of_day).unwrap_or_else(Time::midnight)
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}T{}Z", self.date(), self.time())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		let datetime = DateTime::from_ymd_hms(1970, 1, 1, 0, 0, 0).unwrap();
		assert_eq!(datetime.timestamp_seconds(), 0);
		assert_eq!(datetime.to_string(), "1970-01-01T00:00:00Z");
	}

	#[test]
	fn test_date_and_time_parts() {
		let datetime = DateTime::from_ymd_hms(2025, 8, 6, 13, 37, 42).unwrap();
		assert_eq!(datetime.date(), Date::new(2025, 8, 6).unwrap());
		assert_eq!(datetime.time(), Time::new(13, 37, 42, 0).unwrap());
	}

	#[test]
	fn test_parts_before_epoch() {
		// 1969-12-31 23:59:59.5 → secs = -1, nanos = 5e8
		let datetime = DateTime::from_timestamp(-1, 500_000_000).unwrap();
		assert_eq!(datetime.date(), Date::new(1969, 12, 31).unwrap());
		assert_eq!(datetime.time(), Time::new(23, 59, 59, 500_000_000).unwrap());
	}

	#[test]
	fn test_ordering() {
		let earlier = DateTime::from_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap();
		let later = DateTime::from_ymd_hms(2024, 1, 1, 0, 0, 1).unwrap();
		assert!(earlier < later);

		let a = DateTime::from_timestamp(10, 0).unwrap();
		let b = DateTime::from_timestamp(10, 1).unwrap();
		assert!(a < b);
	}

	#[test]
	fn test_rejects_invalid_nanos() {
		assert!(DateTime::from_timestamp(0, 1_000_000_000).is_none());
	}
}
