// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod category;
mod get;
pub mod native;

pub use category::Category;
pub use get::GetCategory;

/// All data kinds a [`Value`](crate::Value) can carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A UTF-8 encoded text
	Utf8,
	/// A boolean bit: true or false
	Bool,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// An arbitrary-precision decimal
	Decimal,
	/// A globally unique identifier (16 bytes)
	Uuid,
	/// A binary large object
	Blob,
	/// A date value (year, month, day)
	Date,
	/// A time value (hour, minute, second, nanosecond)
	Time,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
	/// A year-month interval, carried as a month count
	IntervalYearMonth,
	/// A day-second interval, carried as seconds and nanoseconds
	IntervalDaySecond,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Type::Float4
				| Type::Float8 | Type::Int1
				| Type::Int2 | Type::Int4
				| Type::Int8 | Type::Uint1
				| Type::Uint2 | Type::Uint4
				| Type::Uint8
		)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Bool)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_decimal(&self) -> bool {
		matches!(self, Type::Decimal)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(
			self,
			Type::Date | Type::Time | Type::DateTime | Type::IntervalYearMonth | Type::IntervalDaySecond
		)
	}

	pub fn is_interval(&self) -> bool {
		matches!(self, Type::IntervalYearMonth | Type::IntervalDaySecond)
	}

	pub fn is_uuid(&self) -> bool {
		matches!(self, Type::Uuid)
	}

	pub fn is_blob(&self) -> bool {
		matches!(self, Type::Blob)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Utf8 => f.write_str("Utf8"),
			Type::Bool => f.write_str("Bool"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Decimal => f.write_str("Decimal"),
			Type::Uuid => f.write_str("Uuid"),
			Type::Blob => f.write_str("Blob"),
			Type::Date => f.write_str("Date"),
			Type::Time => f.write_str("Time"),
			Type::DateTime => f.write_str("DateTime"),
			Type::IntervalYearMonth => f.write_str("IntervalYearMonth"),
			Type::IntervalDaySecond => f.write_str("IntervalDaySecond"),
		}
	}
}
