// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::{error::TypeError, value::r#type::Category};

pub fn value_out_of_range(from: Category, to: Category) -> TypeError {
	TypeError::OutOfRange {
		from,
		to,
	}
}

pub fn invalid_number_literal(target: Category, text: impl Into<String>) -> TypeError {
	TypeError::InvalidLiteral {
		target,
		text: text.into(),
	}
}
