// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Typed accessors over [`Value`].
//!
//! Each accessor is total for a value of the matching kind and performs no
//! narrowing; checked conversion belongs to `number::convert`. The dispatch
//! tables only ever invoke the accessor matching the classified kind, so a
//! kind mismatch here is a programming error and panics.

use super::{
	Blob, Date, DateTime, Decimal, Guid, IntervalDaySecond, IntervalYearMonth, Time, Value, ValueData,
};

impl Value {
	pub fn as_str(&self) -> &str {
		match self.data() {
			ValueData::Utf8(v) => v,
			_ => unreachable!("as_str on a {} value", self.ty()),
		}
	}

	pub fn as_bool(&self) -> bool {
		match self.data() {
			ValueData::Bool(v) => *v,
			_ => unreachable!("as_bool on a {} value", self.ty()),
		}
	}

	pub fn as_f32(&self) -> f32 {
		match self.data() {
			ValueData::Float4(v) => v.value(),
			_ => unreachable!("as_f32 on a {} value", self.ty()),
		}
	}

	pub fn as_f64(&self) -> f64 {
		match self.data() {
			ValueData::Float8(v) => v.value(),
			_ => unreachable!("as_f64 on a {} value", self.ty()),
		}
	}

	pub fn as_i8(&self) -> i8 {
		match self.data() {
			ValueData::Int1(v) => *v,
			_ => unreachable!("as_i8 on a {} value", self.ty()),
		}
	}

	pub fn as_i16(&self) -> i16 {
		match self.data() {
			ValueData::Int2(v) => *v,
			_ => unreachable!("as_i16 on a {} value", self.ty()),
		}
	}

	pub fn as_i32(&self) -> i32 {
		match self.data() {
			ValueData::Int4(v) => *v,
			_ => unreachable!("as_i32 on a {} value", self.ty()),
		}
	}

	pub fn as_i64(&self) -> i64 {
		match self.data() {
			ValueData::Int8(v) => *v,
			_ => unreachable!("as_i64 on a {} value", self.ty()),
		}
	}

	pub fn as_u8(&self) -> u8 {
		match self.data() {
			ValueData::Uint1(v) => *v,
			_ => unreachable!("as_u8 on a {} value", self.ty()),
		}
	}

	pub fn as_u16(&self) -> u16 {
		match self.data() {
			ValueData::Uint2(v) => *v,
			_ => unreachable!("as_u16 on a {} value", self.ty()),
		}
	}

	pub fn as_u32(&self) -> u32 {
		match self.data() {
			ValueData::Uint4(v) => *v,
			_ => unreachable!("as_u32 on a {} value", self.ty()),
		}
	}

	pub fn as_u64(&self) -> u64 {
		match self.data() {
			ValueData::Uint8(v) => *v,
			_ => unreachable!("as_u64 on a {} value", self.ty()),
		}
	}

	pub fn as_decimal(&self) -> &Decimal {
		match self.data() {
			ValueData::Decimal(v) => v,
			_ => unreachable!("as_decimal on a {} value", self.ty()),
		}
	}

	pub fn as_guid(&self) -> &Guid {
		match self.data() {
			ValueData::Uuid(v) => v,
			_ => unreachable!("as_guid on a {} value", self.ty()),
		}
	}

	pub fn as_blob(&self) -> &Blob {
		match self.data() {
			ValueData::Blob(v) => v,
			_ => unreachable!("as_blob on a {} value", self.ty()),
		}
	}

	pub fn as_date(&self) -> Date {
		match self.data() {
			ValueData::Date(v) => *v,
			_ => unreachable!("as_date on a {} value", self.ty()),
		}
	}

	pub fn as_time(&self) -> Time {
		match self.data() {
			ValueData::Time(v) => *v,
			_ => unreachable!("as_time on a {} value", self.ty()),
		}
	}

	pub fn as_datetime(&self) -> DateTime {
		match self.data() {
			ValueData::DateTime(v) => *v,
			_ => unreachable!("as_datetime on a {} value", self.ty()),
		}
	}

	pub fn as_interval_year_month(&self) -> IntervalYearMonth {
		match self.data() {
			ValueData::IntervalYearMonth(v) => *v,
			_ => unreachable!("as_interval_year_month on a {} value", self.ty()),
		}
	}

	pub fn as_interval_day_second(&self) -> IntervalDaySecond {
		match self.data() {
			ValueData::IntervalDaySecond(v) => *v,
			_ => unreachable!("as_interval_day_second on a {} value", self.ty()),
		}
	}

	pub fn is_decimal(&self) -> bool {
		self.ty().is_decimal()
	}
}

#[cfg(test)]
mod tests {
	use super::super::{Type, Value};

	#[test]
	fn test_accessors_return_payload() {
		assert_eq!(Value::int4(-7).as_i32(), -7);
		assert_eq!(Value::uint8(7u64).as_u64(), 7);
		assert_eq!(Value::utf8("abc").as_str(), "abc");
		assert!(Value::bool(true).as_bool());
	}

	#[test]
	fn test_accessors_are_total_for_null() {
		// A NULL still has a kind; its accessor returns the default payload
		assert_eq!(Value::null(Type::Int4).as_i32(), 0);
		assert_eq!(Value::null(Type::Utf8).as_str(), "");
	}

	#[test]
	#[should_panic]
	fn test_kind_confusion_panics() {
		let _ = Value::int4(1).as_u64();
	}
}
