// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

//! Diagnostic constructors for the six relational operators. Each names the
//! operator it belongs to so that a missing dispatch cell reports the
//! operator the caller actually used.

use crate::{error::TypeError, value::r#type::Category};

pub fn equal_cannot_be_applied_to_incompatible_types(left: Category, right: Category) -> TypeError {
	TypeError::IncompatibleComparison {
		operator: "=",
		left,
		right,
	}
}

pub fn not_equal_cannot_be_applied_to_incompatible_types(left: Category, right: Category) -> TypeError {
	TypeError::IncompatibleComparison {
		operator: "!=",
		left,
		right,
	}
}

pub fn less_than_cannot_be_applied_to_incompatible_types(left: Category, right: Category) -> TypeError {
	TypeError::IncompatibleComparison {
		operator: "<",
		left,
		right,
	}
}

pub fn less_than_equal_cannot_be_applied_to_incompatible_types(
	left: Category,
	right: Category,
) -> TypeError {
	TypeError::IncompatibleComparison {
		operator: "<=",
		left,
		right,
	}
}

pub fn greater_than_cannot_be_applied_to_incompatible_types(left: Category, right: Category) -> TypeError {
	TypeError::IncompatibleComparison {
		operator: ">",
		left,
		right,
	}
}

pub fn greater_than_equal_cannot_be_applied_to_incompatible_types(
	left: Category,
	right: Category,
) -> TypeError {
	TypeError::IncompatibleComparison {
		operator: ">=",
		left,
		right,
	}
}
