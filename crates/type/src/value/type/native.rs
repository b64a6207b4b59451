// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Classification of native ODBC type codes.
//!
//! Result columns and bound parameters arrive from the connectivity layer
//! tagged with an ODBC SQL data type (or, for the unsigned widths, a C data
//! type). Several native codes collapse onto one comparison category; codes
//! the bridge does not know classify as [`Category::Incomparable`].

use super::Category;

pub const SQL_CHAR: i16 = 1;
pub const SQL_NUMERIC: i16 = 2;
pub const SQL_DECIMAL: i16 = 3;
pub const SQL_INTEGER: i16 = 4;
pub const SQL_SMALLINT: i16 = 5;
pub const SQL_FLOAT: i16 = 6;
pub const SQL_REAL: i16 = 7;
pub const SQL_DOUBLE: i16 = 8;
pub const SQL_VARCHAR: i16 = 12;

pub const SQL_TYPE_DATE: i16 = 91;
pub const SQL_TYPE_TIME: i16 = 92;
pub const SQL_TYPE_TIMESTAMP: i16 = 93;

pub const SQL_INTERVAL_YEAR: i16 = 101;
pub const SQL_INTERVAL_MONTH: i16 = 102;
pub const SQL_INTERVAL_DAY: i16 = 103;
pub const SQL_INTERVAL_HOUR: i16 = 104;
pub const SQL_INTERVAL_MINUTE: i16 = 105;
pub const SQL_INTERVAL_SECOND: i16 = 106;
pub const SQL_INTERVAL_YEAR_TO_MONTH: i16 = 107;
pub const SQL_INTERVAL_DAY_TO_HOUR: i16 = 108;
pub const SQL_INTERVAL_DAY_TO_MINUTE: i16 = 109;
pub const SQL_INTERVAL_DAY_TO_SECOND: i16 = 110;
pub const SQL_INTERVAL_HOUR_TO_MINUTE: i16 = 111;
pub const SQL_INTERVAL_HOUR_TO_SECOND: i16 = 112;
pub const SQL_INTERVAL_MINUTE_TO_SECOND: i16 = 113;

pub const SQL_LONGVARCHAR: i16 = -1;
pub const SQL_BINARY: i16 = -2;
pub const SQL_VARBINARY: i16 = -3;
pub const SQL_LONGVARBINARY: i16 = -4;
pub const SQL_BIGINT: i16 = -5;
pub const SQL_TINYINT: i16 = -6;
pub const SQL_BIT: i16 = -7;
pub const SQL_WCHAR: i16 = -8;
pub const SQL_WVARCHAR: i16 = -9;
pub const SQL_WLONGVARCHAR: i16 = -10;
pub const SQL_GUID: i16 = -11;

// C data types, used by drivers to surface unsigned column widths.
pub const SQL_C_USHORT: i16 = -17;
pub const SQL_C_ULONG: i16 = -18;
pub const SQL_C_UBIGINT: i16 = -27;
pub const SQL_C_UTINYINT: i16 = -28;

/// Classify a native type code into a comparison category.
pub fn classify(code: i16) -> Category {
	match code {
		SQL_CHAR | SQL_VARCHAR | SQL_LONGVARCHAR | SQL_WCHAR | SQL_WVARCHAR | SQL_WLONGVARCHAR => {
			Category::Utf8
		}
		SQL_NUMERIC | SQL_DECIMAL => Category::Decimal,
		SQL_INTEGER => Category::Int4,
		SQL_SMALLINT => Category::Int2,
		SQL_TINYINT => Category::Int1,
		SQL_BIGINT => Category::Int8,
		SQL_C_UTINYINT => Category::Uint1,
		SQL_C_USHORT => Category::Uint2,
		SQL_C_ULONG => Category::Uint4,
		SQL_C_UBIGINT => Category::Uint8,
		SQL_REAL => Category::Float4,
		SQL_FLOAT | SQL_DOUBLE => Category::Float8,
		SQL_BIT => Category::Bool,
		SQL_GUID => Category::Uuid,
		SQL_BINARY | SQL_VARBINARY | SQL_LONGVARBINARY => Category::Blob,
		SQL_TYPE_DATE => Category::Date,
		SQL_TYPE_TIME => Category::Time,
		SQL_TYPE_TIMESTAMP => Category::DateTime,
		SQL_INTERVAL_YEAR | SQL_INTERVAL_MONTH | SQL_INTERVAL_YEAR_TO_MONTH => Category::IntervalYearMonth,
		SQL_INTERVAL_DAY
		| SQL_INTERVAL_HOUR
		| SQL_INTERVAL_MINUTE
		| SQL_INTERVAL_SECOND
		| SQL_INTERVAL_DAY_TO_HOUR
		| SQL_INTERVAL_DAY_TO_MINUTE
		| SQL_INTERVAL_DAY_TO_SECOND
		| SQL_INTERVAL_HOUR_TO_MINUTE
		| SQL_INTERVAL_HOUR_TO_SECOND
		| SQL_INTERVAL_MINUTE_TO_SECOND => Category::IntervalDaySecond,
		_ => Category::Incomparable,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_codes_collapse() {
		assert_eq!(classify(SQL_CHAR), Category::Utf8);
		assert_eq!(classify(SQL_VARCHAR), Category::Utf8);
		assert_eq!(classify(SQL_WLONGVARCHAR), Category::Utf8);
	}

	#[test]
	fn test_numeric_and_decimal_collapse() {
		assert_eq!(classify(SQL_NUMERIC), Category::Decimal);
		assert_eq!(classify(SQL_DECIMAL), Category::Decimal);
		assert_eq!(classify(SQL_FLOAT), Category::Float8);
		assert_eq!(classify(SQL_DOUBLE), Category::Float8);
	}

	#[test]
	fn test_unsigned_c_codes() {
		assert_eq!(classify(SQL_C_UTINYINT), Category::Uint1);
		assert_eq!(classify(SQL_C_UBIGINT), Category::Uint8);
	}

	#[test]
	fn test_interval_codes_split_by_class() {
		assert_eq!(classify(SQL_INTERVAL_YEAR_TO_MONTH), Category::IntervalYearMonth);
		assert_eq!(classify(SQL_INTERVAL_DAY_TO_SECOND), Category::IntervalDaySecond);
		assert_eq!(classify(SQL_INTERVAL_MINUTE), Category::IntervalDaySecond);
	}

	#[test]
	fn test_unknown_code_is_incomparable() {
		assert_eq!(classify(0), Category::Incomparable);
		assert_eq!(classify(9999), Category::Incomparable);
		assert!(!classify(-999).is_comparable());
	}
}
