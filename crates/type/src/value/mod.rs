// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod access;
pub mod blob;
pub mod decimal;
pub mod is;
pub mod number;
pub mod ordered;
pub mod temporal;
pub mod r#type;
pub mod uuid;

pub use blob::Blob;
pub use decimal::{Decimal, parse_decimal};
pub use ordered::{OrderedF32, OrderedF64};
pub use temporal::{
	Date, DateTime, IntervalDaySecond, IntervalYearMonth, Time,
	parse::{parse_date, parse_datetime, parse_time},
};
pub use r#type::{Category, GetCategory, Type};
pub use uuid::Guid;

/// A SQL value, represented as a native Rust type.
///
/// The payload discriminant is the value's kind; the null flag is orthogonal
/// to it, so a NULL of any kind still reports that kind. The comparison
/// engine never mutates a value and never allocates new ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value {
	data: ValueData,
	null: bool,
}

/// The active payload of a [`Value`]. Exactly one payload is meaningful at
/// any time; the discriminant is authoritative.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueData {
	/// A UTF-8 encoded text
	Utf8(String),
	/// A boolean bit: true or false
	Bool(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
	/// A globally unique identifier
	Uuid(Guid),
	/// A binary large object
	Blob(Blob),
	/// A date value (year, month, day)
	Date(Date),
	/// A time value (hour, minute, second, nanosecond)
	Time(Time),
	/// A date and time value with nanosecond precision in UTC
	DateTime(DateTime),
	/// A year-month interval
	IntervalYearMonth(IntervalYearMonth),
	/// A day-second interval
	IntervalDaySecond(IntervalDaySecond),
}

impl Value {
	/// A NULL of the given kind. The kind survives: `Value::null(Type::Int4)`
	/// still classifies as Int4.
	pub fn null(ty: Type) -> Self {
		Self {
			data: ValueData::default_for(ty),
			null: true,
		}
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Self::of(ValueData::Utf8(v.into()))
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Self::of(ValueData::Bool(v.into()))
	}

	/// NaN has no place in the value model; a NaN float binds as NULL.
	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into())
			.map(|v| Self::of(ValueData::Float4(v)))
			.unwrap_or_else(|_| Self::null(Type::Float4))
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into())
			.map(|v| Self::of(ValueData::Float8(v)))
			.unwrap_or_else(|_| Self::null(Type::Float8))
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Self::of(ValueData::Int1(v.into()))
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Self::of(ValueData::Int2(v.into()))
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Self::of(ValueData::Int4(v.into()))
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Self::of(ValueData::Int8(v.into()))
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Self::of(ValueData::Uint1(v.into()))
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Self::of(ValueData::Uint2(v.into()))
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Self::of(ValueData::Uint4(v.into()))
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Self::of(ValueData::Uint8(v.into()))
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Self::of(ValueData::Decimal(v.into()))
	}

	pub fn guid(v: impl Into<Guid>) -> Self {
		Self::of(ValueData::Uuid(v.into()))
	}

	pub fn blob(v: impl Into<Blob>) -> Self {
		Self::of(ValueData::Blob(v.into()))
	}

	pub fn date(v: impl Into<Date>) -> Self {
		Self::of(ValueData::Date(v.into()))
	}

	pub fn time(v: impl Into<Time>) -> Self {
		Self::of(ValueData::Time(v.into()))
	}

	pub fn datetime(v: impl Into<DateTime>) -> Self {
		Self::of(ValueData::DateTime(v.into()))
	}

	pub fn interval_year_month(v: impl Into<IntervalYearMonth>) -> Self {
		Self::of(ValueData::IntervalYearMonth(v.into()))
	}

	pub fn interval_day_second(v: impl Into<IntervalDaySecond>) -> Self {
		Self::of(ValueData::IntervalDaySecond(v.into()))
	}

	fn of(data: ValueData) -> Self {
		Self {
			data,
			null: false,
		}
	}
}

impl Value {
	pub fn is_null(&self) -> bool {
		self.null
	}

	pub fn ty(&self) -> Type {
		self.data.ty()
	}

	/// The comparison category of this value, through the one shared
	/// classifier.
	pub fn category(&self) -> Category {
		Category::of(self.ty())
	}

	pub(crate) fn data(&self) -> &ValueData {
		&self.data
	}
}

impl ValueData {
	pub fn ty(&self) -> Type {
		match self {
			ValueData::Utf8(_) => Type::Utf8,
			ValueData::Bool(_) => Type::Bool,
			ValueData::Float4(_) => Type::Float4,
			ValueData::Float8(_) => Type::Float8,
			ValueData::Int1(_) => Type::Int1,
			ValueData::Int2(_) => Type::Int2,
			ValueData::Int4(_) => Type::Int4,
			ValueData::Int8(_) => Type::Int8,
			ValueData::Uint1(_) => Type::Uint1,
			ValueData::Uint2(_) => Type::Uint2,
			ValueData::Uint4(_) => Type::Uint4,
			ValueData::Uint8(_) => Type::Uint8,
			ValueData::Decimal(_) => Type::Decimal,
			ValueData::Uuid(_) => Type::Uuid,
			ValueData::Blob(_) => Type::Blob,
			ValueData::Date(_) => Type::Date,
			ValueData::Time(_) => Type::Time,
			ValueData::DateTime(_) => Type::DateTime,
			ValueData::IntervalYearMonth(_) => Type::IntervalYearMonth,
			ValueData::IntervalDaySecond(_) => Type::IntervalDaySecond,
		}
	}

	fn default_for(ty: Type) -> Self {
		match ty {
			Type::Utf8 => ValueData::Utf8(String::new()),
			Type::Bool => ValueData::Bool(false),
			Type::Float4 => ValueData::Float4(OrderedF32::zero()),
			Type::Float8 => ValueData::Float8(OrderedF64::zero()),
			Type::Int1 => ValueData::Int1(0),
			Type::Int2 => ValueData::Int2(0),
			Type::Int4 => ValueData::Int4(0),
			Type::Int8 => ValueData::Int8(0),
			Type::Uint1 => ValueData::Uint1(0),
			Type::Uint2 => ValueData::Uint2(0),
			Type::Uint4 => ValueData::Uint4(0),
			Type::Uint8 => ValueData::Uint8(0),
			Type::Decimal => ValueData::Decimal(Decimal::default()),
			Type::Uuid => ValueData::Uuid(Guid::nil()),
			Type::Blob => ValueData::Blob(Blob::empty()),
			Type::Date => ValueData::Date(Date::default()),
			Type::Time => ValueData::Time(Time::default()),
			Type::DateTime => ValueData::DateTime(DateTime::default()),
			Type::IntervalYearMonth => ValueData::IntervalYearMonth(IntervalYearMonth::default()),
			Type::IntervalDaySecond => ValueData::IntervalDaySecond(IntervalDaySecond::default()),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.null {
			return f.write_str("null");
		}
		match &self.data {
			ValueData::Utf8(value) => Display::fmt(value, f),
			ValueData::Bool(true) => f.write_str("true"),
			ValueData::Bool(false) => f.write_str("false"),
			ValueData::Float4(value) => Display::fmt(value, f),
			ValueData::Float8(value) => Display::fmt(value, f),
			ValueData::Int1(value) => Display::fmt(value, f),
			ValueData::Int2(value) => Display::fmt(value, f),
			ValueData::Int4(value) => Display::fmt(value, f),
			ValueData::Int8(value) => Display::fmt(value, f),
			ValueData::Uint1(value) => Display::fmt(value, f),
			ValueData::Uint2(value) => Display::fmt(value, f),
			ValueData::Uint4(value) => Display::fmt(value, f),
			ValueData::Uint8(value) => Display::fmt(value, f),
			ValueData::Decimal(value) => Display::fmt(value, f),
			ValueData::Uuid(value) => Display::fmt(value, f),
			ValueData::Blob(value) => Display::fmt(value, f),
			ValueData::Date(value) => Display::fmt(value, f),
			ValueData::Time(value) => Display::fmt(value, f),
			ValueData::DateTime(value) => Display::fmt(value, f),
			ValueData::IntervalYearMonth(value) => Display::fmt(value, f),
			ValueData::IntervalDaySecond(value) => Display::fmt(value, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_null_keeps_its_kind() {
		let value = Value::null(Type::Int4);
		assert!(value.is_null());
		assert_eq!(value.ty(), Type::Int4);
		assert_eq!(value.category(), Category::Int4);
	}

	#[test]
	fn test_constructed_values_are_not_null() {
		assert!(!Value::int4(42).is_null());
		assert!(!Value::utf8("hello").is_null());
	}

	#[test]
	fn test_nan_binds_as_null() {
		let value = Value::float8(f64::NAN);
		assert!(value.is_null());
		assert_eq!(value.ty(), Type::Float8);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::int4(42).to_string(), "42");
		assert_eq!(Value::bool(true).to_string(), "true");
		assert_eq!(Value::utf8("abc").to_string(), "abc");
		assert_eq!(Value::null(Type::Utf8).to_string(), "null");
	}

	#[test]
	fn test_category_matches_kind() {
		assert_eq!(Value::uint8(1u64).category(), Category::Uint8);
		assert_eq!(Value::blob(b"ab").category(), Category::Blob);
	}
}
