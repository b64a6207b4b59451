// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! The `>=` dispatch table, authored on its own rather than derived
//! from `>` and `=`.

use sqlbridge_type::{Category, TypeError, Value, value::number::compare as number};

use super::cell::{blob, boolean, decimal, temporal, text, uuid};

#[rustfmt::skip]
pub(crate) fn compare(
	lc: Category,
	rc: Category,
	left: &Value,
	right: &Value,
	diagnostic: fn(Category, Category) -> TypeError,
) -> Result<bool, TypeError> {
	use Category::*;

	match (lc, rc) {
		// Float4
		(Float4, Float4) => number::is_greater_than_equal(left.as_f32(), right.as_f32()),
		(Float4, Float8) => number::is_greater_than_equal(left.as_f32(), right.as_f64()),
		(Float4, Int1) => number::is_greater_than_equal(left.as_f32(), right.as_i8()),
		(Float4, Int2) => number::is_greater_than_equal(left.as_f32(), right.as_i16()),
		(Float4, Int4) => number::is_greater_than_equal(left.as_f32(), right.as_i32()),
		(Float4, Int8) => number::is_greater_than_equal(left.as_f32(), right.as_i64()),
		(Float4, Uint1) => number::is_greater_than_equal(left.as_f32(), right.as_u8()),
		(Float4, Uint2) => number::is_greater_than_equal(left.as_f32(), right.as_u16()),
		(Float4, Uint4) => number::is_greater_than_equal(left.as_f32(), right.as_u32()),
		(Float4, Uint8) => number::is_greater_than_equal(left.as_f32(), right.as_u64()),
		// Float8
		(Float8, Float4) => number::is_greater_than_equal(left.as_f64(), right.as_f32()),
		(Float8, Float8) => number::is_greater_than_equal(left.as_f64(), right.as_f64()),
		(Float8, Int1) => number::is_greater_than_equal(left.as_f64(), right.as_i8()),
		(Float8, Int2) => number::is_greater_than_equal(left.as_f64(), right.as_i16()),
		(Float8, Int4) => number::is_greater_than_equal(left.as_f64(), right.as_i32()),
		(Float8, Int8) => number::is_greater_than_equal(left.as_f64(), right.as_i64()),
		(Float8, Uint1) => number::is_greater_than_equal(left.as_f64(), right.as_u8()),
		(Float8, Uint2) => number::is_greater_than_equal(left.as_f64(), right.as_u16()),
		(Float8, Uint4) => number::is_greater_than_equal(left.as_f64(), right.as_u32()),
		(Float8, Uint8) => number::is_greater_than_equal(left.as_f64(), right.as_u64()),
		// Int1
		(Int1, Float4) => number::is_greater_than_equal(left.as_i8(), right.as_f32()),
		(Int1, Float8) => number::is_greater_than_equal(left.as_i8(), right.as_f64()),
		(Int1, Int1) => number::is_greater_than_equal(left.as_i8(), right.as_i8()),
		(Int1, Int2) => number::is_greater_than_equal(left.as_i8(), right.as_i16()),
		(Int1, Int4) => number::is_greater_than_equal(left.as_i8(), right.as_i32()),
		(Int1, Int8) => number::is_greater_than_equal(left.as_i8(), right.as_i64()),
		(Int1, Uint1) => number::is_greater_than_equal(left.as_i8(), right.as_u8()),
		(Int1, Uint2) => number::is_greater_than_equal(left.as_i8(), right.as_u16()),
		(Int1, Uint4) => number::is_greater_than_equal(left.as_i8(), right.as_u32()),
		(Int1, Uint8) => number::is_greater_than_equal(left.as_i8(), right.as_u64()),
		// Int2
		(Int2, Float4) => number::is_greater_than_equal(left.as_i16(), right.as_f32()),
		(Int2, Float8) => number::is_greater_than_equal(left.as_i16(), right.as_f64()),
		(Int2, Int1) => number::is_greater_than_equal(left.as_i16(), right.as_i8()),
		(Int2, Int2) => number::is_greater_than_equal(left.as_i16(), right.as_i16()),
		(Int2, Int4) => number::is_greater_than_equal(left.as_i16(), right.as_i32()),
		(Int2, Int8) => number::is_greater_than_equal(left.as_i16(), right.as_i64()),
		(Int2, Uint1) => number::is_greater_than_equal(left.as_i16(), right.as_u8()),
		(Int2, Uint2) => number::is_greater_than_equal(left.as_i16(), right.as_u16()),
		(Int2, Uint4) => number::is_greater_than_equal(left.as_i16(), right.as_u32()),
		(Int2, Uint8) => number::is_greater_than_equal(left.as_i16(), right.as_u64()),
		// Int4
		(Int4, Float4) => number::is_greater_than_equal(left.as_i32(), right.as_f32()),
		(Int4, Float8) => number::is_greater_than_equal(left.as_i32(), right.as_f64()),
		(Int4, Int1) => number::is_greater_than_equal(left.as_i32(), right.as_i8()),
		(Int4, Int2) => number::is_greater_than_equal(left.as_i32(), right.as_i16()),
		(Int4, Int4) => number::is_greater_than_equal(left.as_i32(), right.as_i32()),
		(Int4, Int8) => number::is_greater_than_equal(left.as_i32(), right.as_i64()),
		(Int4, Uint1) => number::is_greater_than_equal(left.as_i32(), right.as_u8()),
		(Int4, Uint2) => number::is_greater_than_equal(left.as_i32(), right.as_u16()),
		(Int4, Uint4) => number::is_greater_than_equal(left.as_i32(), right.as_u32()),
		(Int4, Uint8) => number::is_greater_than_equal(left.as_i32(), right.as_u64()),
		// Int8
		(Int8, Float4) => number::is_greater_than_equal(left.as_i64(), right.as_f32()),
		(Int8, Float8) => number::is_greater_than_equal(left.as_i64(), right.as_f64()),
		(Int8, Int1) => number::is_greater_than_equal(left.as_i64(), right.as_i8()),
		(Int8, Int2) => number::is_greater_than_equal(left.as_i64(), right.as_i16()),
		(Int8, Int4) => number::is_greater_than_equal(left.as_i64(), right.as_i32()),
		(Int8, Int8) => number::is_greater_than_equal(left.as_i64(), right.as_i64()),
		(Int8, Uint1) => number::is_greater_than_equal(left.as_i64(), right.as_u8()),
		(Int8, Uint2) => number::is_greater_than_equal(left.as_i64(), right.as_u16()),
		(Int8, Uint4) => number::is_greater_than_equal(left.as_i64(), right.as_u32()),
		(Int8, Uint8) => number::is_greater_than_equal(left.as_i64(), right.as_u64()),
		// Uint1
		(Uint1, Float4) => number::is_greater_than_equal(left.as_u8(), right.as_f32()),
		(Uint1, Float8) => number::is_greater_than_equal(left.as_u8(), right.as_f64()),
		(Uint1, Int1) => number::is_greater_than_equal(left.as_u8(), right.as_i8()),
		(Uint1, Int2) => number::is_greater_than_equal(left.as_u8(), right.as_i16()),
		(Uint1, Int4) => number::is_greater_than_equal(left.as_u8(), right.as_i32()),
		(Uint1, Int8) => number::is_greater_than_equal(left.as_u8(), right.as_i64()),
		(Uint1, Uint1) => number::is_greater_than_equal(left.as_u8(), right.as_u8()),
		(Uint1, Uint2) => number::is_greater_than_equal(left.as_u8(), right.as_u16()),
		(Uint1, Uint4) => number::is_greater_than_equal(left.as_u8(), right.as_u32()),
		(Uint1, Uint8) => number::is_greater_than_equal(left.as_u8(), right.as_u64()),
		// Uint2
		(Uint2, Float4) => number::is_greater_than_equal(left.as_u16(), right.as_f32()),
		(Uint2, Float8) => number::is_greater_than_equal(left.as_u16(), right.as_f64()),
		(Uint2, Int1) => number::is_greater_than_equal(left.as_u16(), right.as_i8()),
		(Uint2, Int2) => number::is_greater_than_equal(left.as_u16(), right.as_i16()),
		(Uint2, Int4) => number::is_greater_than_equal(left.as_u16(), right.as_i32()),
		(Uint2, Int8) => number::is_greater_than_equal(left.as_u16(), right.as_i64()),
		(Uint2, Uint1) => number::is_greater_than_equal(left.as_u16(), right.as_u8()),
		(Uint2, Uint2) => number::is_greater_than_equal(left.as_u16(), right.as_u16()),
		(Uint2, Uint4) => number::is_greater_than_equal(left.as_u16(), right.as_u32()),
		(Uint2, Uint8) => number::is_greater_than_equal(left.as_u16(), right.as_u64()),
		// Uint4
		(Uint4, Float4) => number::is_greater_than_equal(left.as_u32(), right.as_f32()),
		(Uint4, Float8) => number::is_greater_than_equal(left.as_u32(), right.as_f64()),
		(Uint4, Int1) => number::is_greater_than_equal(left.as_u32(), right.as_i8()),
		(Uint4, Int2) => number::is_greater_than_equal(left.as_u32(), right.as_i16()),
		(Uint4, Int4) => number::is_greater_than_equal(left.as_u32(), right.as_i32()),
		(Uint4, Int8) => number::is_greater_than_equal(left.as_u32(), right.as_i64()),
		(Uint4, Uint1) => number::is_greater_than_equal(left.as_u32(), right.as_u8()),
		(Uint4, Uint2) => number::is_greater_than_equal(left.as_u32(), right.as_u16()),
		(Uint4, Uint4) => number::is_greater_than_equal(left.as_u32(), right.as_u32()),
		(Uint4, Uint8) => number::is_greater_than_equal(left.as_u32(), right.as_u64()),
		// Uint8
		(Uint8, Float4) => number::is_greater_than_equal(left.as_u64(), right.as_f32()),
		(Uint8, Float8) => number::is_greater_than_equal(left.as_u64(), right.as_f64()),
		(Uint8, Int1) => number::is_greater_than_equal(left.as_u64(), right.as_i8()),
		(Uint8, Int2) => number::is_greater_than_equal(left.as_u64(), right.as_i16()),
		(Uint8, Int4) => number::is_greater_than_equal(left.as_u64(), right.as_i32()),
		(Uint8, Int8) => number::is_greater_than_equal(left.as_u64(), right.as_i64()),
		(Uint8, Uint1) => number::is_greater_than_equal(left.as_u64(), right.as_u8()),
		(Uint8, Uint2) => number::is_greater_than_equal(left.as_u64(), right.as_u16()),
		(Uint8, Uint4) => number::is_greater_than_equal(left.as_u64(), right.as_u32()),
		(Uint8, Uint8) => number::is_greater_than_equal(left.as_u64(), right.as_u64()),

		// Bool
		(Bool, Bool) => Ok(boolean::is_greater_than_equal(left, right)),
		(Bool, Float4) | (Bool, Float8) | (Bool, Int1)
		| (Bool, Int2) | (Bool, Int4) | (Bool, Int8)
		| (Bool, Uint1) | (Bool, Uint2) | (Bool, Uint4)
		| (Bool, Uint8) | (Bool, Decimal)
			=> Ok(boolean::is_greater_than_equal(left, right)),
		(Float4, Bool) | (Float8, Bool) | (Int1, Bool)
		| (Int2, Bool) | (Int4, Bool) | (Int8, Bool)
		| (Uint1, Bool) | (Uint2, Bool) | (Uint4, Bool)
		| (Uint8, Bool) | (Decimal, Bool)
			=> Ok(boolean::is_greater_than_equal(left, right)),

		// Decimal
		(Decimal, Decimal) => Ok(decimal::compare(left.as_decimal(), right.as_decimal()).is_ge()),
		(Decimal, Float4) => Ok(decimal::compare_f32(left.as_decimal(), right.as_f32()).is_ge()),
		(Decimal, Float8) => Ok(decimal::compare_f64(left.as_decimal(), right.as_f64()).is_ge()),
		(Decimal, Int1) => Ok(decimal::compare_int(left.as_decimal(), right.as_i8()).is_ge()),
		(Decimal, Int2) => Ok(decimal::compare_int(left.as_decimal(), right.as_i16()).is_ge()),
		(Decimal, Int4) => Ok(decimal::compare_int(left.as_decimal(), right.as_i32()).is_ge()),
		(Decimal, Int8) => Ok(decimal::compare_int(left.as_decimal(), right.as_i64()).is_ge()),
		(Decimal, Uint1) => Ok(decimal::compare_int(left.as_decimal(), right.as_u8()).is_ge()),
		(Decimal, Uint2) => Ok(decimal::compare_int(left.as_decimal(), right.as_u16()).is_ge()),
		(Decimal, Uint4) => Ok(decimal::compare_int(left.as_decimal(), right.as_u32()).is_ge()),
		(Decimal, Uint8) => Ok(decimal::compare_int(left.as_decimal(), right.as_u64()).is_ge()),
		(Float4, Decimal) => Ok(decimal::compare_f32(right.as_decimal(), left.as_f32()).reverse().is_ge()),
		(Float8, Decimal) => Ok(decimal::compare_f64(right.as_decimal(), left.as_f64()).reverse().is_ge()),
		(Int1, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_i8()).reverse().is_ge()),
		(Int2, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_i16()).reverse().is_ge()),
		(Int4, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_i32()).reverse().is_ge()),
		(Int8, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_i64()).reverse().is_ge()),
		(Uint1, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_u8()).reverse().is_ge()),
		(Uint2, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_u16()).reverse().is_ge()),
		(Uint4, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_u32()).reverse().is_ge()),
		(Uint8, Decimal) => Ok(decimal::compare_int(right.as_decimal(), left.as_u64()).reverse().is_ge()),

		// Utf8
		(Utf8, Utf8) => Ok(text::compare(left, right).is_ge()),
		(Utf8, Bool) | (Utf8, Float4) | (Utf8, Float8)
		| (Utf8, Int1) | (Utf8, Int2) | (Utf8, Int4)
		| (Utf8, Int8) | (Utf8, Uint1) | (Utf8, Uint2)
		| (Utf8, Uint4) | (Utf8, Uint8) | (Utf8, Decimal)
		| (Utf8, Blob) | (Utf8, Date) | (Utf8, Time)
		| (Utf8, DateTime) | (Utf8, IntervalYearMonth) | (Utf8, IntervalDaySecond)
			=> Ok(text::compare(left, right).is_ge()),
		(Bool, Utf8) | (Float4, Utf8) | (Float8, Utf8)
		| (Int1, Utf8) | (Int2, Utf8) | (Int4, Utf8)
		| (Int8, Utf8) | (Uint1, Utf8) | (Uint2, Utf8)
		| (Uint4, Utf8) | (Uint8, Utf8) | (Decimal, Utf8)
		| (Blob, Utf8) | (Date, Utf8) | (Time, Utf8)
		| (DateTime, Utf8) | (IntervalYearMonth, Utf8) | (IntervalDaySecond, Utf8)
			=> Ok(text::compare(left, right).is_ge()),

		// Uuid
		(Uuid, Uuid) => Ok(uuid::compare_bytes(left.as_guid(), right.as_guid()).is_ge()),
		(Uuid, Utf8) => Ok(uuid::compare_text(left.as_guid(), right.as_str()).is_ge()),
		(Utf8, Uuid) => Ok(uuid::compare_text(right.as_guid(), left.as_str()).reverse().is_ge()),

		// Blob
		(Blob, Blob) => Ok(blob::compare(left.as_blob(), right.as_blob()).is_ge()),

		// Temporal
		(Date, Date) => Ok(temporal::is_greater_than_equal(left.as_date(), right.as_date())),
		(Time, Time) => Ok(temporal::is_greater_than_equal(left.as_time(), right.as_time())),
		(DateTime, DateTime) => Ok(temporal::is_greater_than_equal(left.as_datetime(), right.as_datetime())),
		(DateTime, Date) => Ok(temporal::is_greater_than_equal(left.as_datetime().date(), right.as_date())),
		(Date, DateTime) => Ok(temporal::is_greater_than_equal(left.as_date(), right.as_datetime().date())),
		(DateTime, Time) => Ok(temporal::is_greater_than_equal(left.as_datetime().time(), right.as_time())),
		(Time, DateTime) => Ok(temporal::is_greater_than_equal(left.as_time(), right.as_datetime().time())),
		(IntervalYearMonth, IntervalYearMonth) => Ok(temporal::is_greater_than_equal(left.as_interval_year_month(), right.as_interval_year_month())),
		(IntervalDaySecond, IntervalDaySecond) => Ok(temporal::is_greater_than_equal(left.as_interval_day_second(), right.as_interval_day_second())),

		_ => Err(diagnostic(lc, rc)),
	}
}
