// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use super::Category;
use crate::value::{
	blob::Blob,
	decimal::Decimal,
	temporal::{Date, DateTime, IntervalDaySecond, IntervalYearMonth, Time},
	uuid::Guid,
};

/// The comparison category a payload representation belongs to. Lets generic
/// conversion code name both categories when reporting a failed narrowing.
pub trait GetCategory {
	fn category() -> Category;
}

impl GetCategory for bool {
	fn category() -> Category {
		Category::Bool
	}
}

impl GetCategory for f32 {
	fn category() -> Category {
		Category::Float4
	}
}

impl GetCategory for f64 {
	fn category() -> Category {
		Category::Float8
	}
}

impl GetCategory for i8 {
	fn category() -> Category {
		Category::Int1
	}
}

impl GetCategory for i16 {
	fn category() -> Category {
		Category::Int2
	}
}

impl GetCategory for i32 {
	fn category() -> Category {
		Category::Int4
	}
}

impl GetCategory for i64 {
	fn category() -> Category {
		Category::Int8
	}
}

impl GetCategory for u8 {
	fn category() -> Category {
		Category::Uint1
	}
}

impl GetCategory for u16 {
	fn category() -> Category {
		Category::Uint2
	}
}

impl GetCategory for u32 {
	fn category() -> Category {
		Category::Uint4
	}
}

impl GetCategory for u64 {
	fn category() -> Category {
		Category::Uint8
	}
}

impl GetCategory for String {
	fn category() -> Category {
		Category::Utf8
	}
}

impl GetCategory for Decimal {
	fn category() -> Category {
		Category::Decimal
	}
}

impl GetCategory for Guid {
	fn category() -> Category {
		Category::Uuid
	}
}

impl GetCategory for Blob {
	fn category() -> Category {
		Category::Blob
	}
}

impl GetCategory for Date {
	fn category() -> Category {
		Category::Date
	}
}

impl GetCategory for Time {
	fn category() -> Category {
		Category::Time
	}
}

impl GetCategory for DateTime {
	fn category() -> Category {
		Category::DateTime
	}
}

impl GetCategory for IntervalYearMonth {
	fn category() -> Category {
		Category::IntervalYearMonth
	}
}

impl GetCategory for IntervalDaySecond {
	fn category() -> Category {
		Category::IntervalDaySecond
	}
}
