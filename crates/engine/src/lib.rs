// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Cross-type relational comparison over [`sqlbridge_type::Value`].
//!
//! Six operators dispatch on the classified categories of both operands.
//! Any comparison with a NULL operand is `false` (for every operator,
//! including `not_equal`); a pair of categories with no defined relation is
//! an error naming both.

pub mod compare;

pub use compare::{equal, greater_than, greater_than_equal, less_than, less_than_equal, not_equal};

pub type Result<T> = std::result::Result<T, sqlbridge_type::TypeError>;
