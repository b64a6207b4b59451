// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

pub mod number;
pub mod operator;

use thiserror::Error;

use crate::value::r#type::Category;

pub type Result<T> = std::result::Result<T, TypeError>;

/// Errors produced by the value layer and the comparison engine.
///
/// All of these are programming or data errors: there is no retry and no
/// fallback value, the caller decides whether to recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
	/// A checked narrowing conversion was asked to produce a value outside
	/// the target representation's exact range.
	#[error("value of type {from} cannot be represented as {to} without loss")]
	OutOfRange { from: Category, to: Category },

	/// A relational operator was applied to a pair of categories with no
	/// defined comparison.
	#[error("{operator} cannot be applied to {left} and {right}")]
	IncompatibleComparison {
		operator: &'static str,
		left: Category,
		right: Category,
	},

	/// A literal could not be parsed as the requested kind.
	#[error("invalid {target} literal '{text}'")]
	InvalidLiteral { target: Category, text: String },
}

impl TypeError {
	pub fn is_out_of_range(&self) -> bool {
		matches!(self, TypeError::OutOfRange { .. })
	}

	pub fn is_incompatible_comparison(&self) -> bool {
		matches!(self, TypeError::IncompatibleComparison { .. })
	}

	pub fn is_invalid_literal(&self) -> bool {
		matches!(self, TypeError::InvalidLiteral { .. })
	}
}
