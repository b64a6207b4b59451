// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Value model of the sqlbridge toolkit.
//!
//! Every query result cell, bound parameter and filter literal travels
//! through the system as a [`Value`]: one of twenty SQL data kinds plus an
//! orthogonal null flag. This crate carries the value type itself, the
//! classification of kinds into comparison categories, the checked numeric
//! conversion grid ([`SafeConvert`]) and the pairwise normalization used by
//! the comparison engine ([`Promote`]).

pub mod error;
pub mod value;

pub use error::{Result, TypeError};
pub use value::{
	Blob, Category, Date, DateTime, Decimal, GetCategory, Guid, IntervalDaySecond, IntervalYearMonth,
	OrderedF32, OrderedF64, Time, Type, Value,
	is::{IsFloat, IsInt, IsNumber, IsTemporal, IsUint},
	number::{Promote, SafeConvert},
};
