// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use sqlbridge_type::IsTemporal;

#[inline]
pub(crate) fn is_equal<T: IsTemporal>(l: T, r: T) -> bool {
	l.partial_cmp(&r).is_some_and(|o| o == Ordering::Equal)
}

#[inline]
pub(crate) fn is_less_than<T: IsTemporal>(l: T, r: T) -> bool {
	l.partial_cmp(&r).is_some_and(|o| o == Ordering::Less)
}

#[inline]
pub(crate) fn is_less_than_equal<T: IsTemporal>(l: T, r: T) -> bool {
	l.partial_cmp(&r).is_some_and(|o| o != Ordering::Greater)
}

#[inline]
pub(crate) fn is_greater_than<T: IsTemporal>(l: T, r: T) -> bool {
	l.partial_cmp(&r).is_some_and(|o| o == Ordering::Greater)
}

#[inline]
pub(crate) fn is_greater_than_equal<T: IsTemporal>(l: T, r: T) -> bool {
	l.partial_cmp(&r).is_some_and(|o| o != Ordering::Less)
}

#[cfg(test)]
mod tests {
	use sqlbridge_type::{Date, IntervalYearMonth};

	use super::*;

	#[test]
	fn test_dates_delegate_to_their_order() {
		let earlier = Date::new(2024, 1, 1).unwrap();
		let later = Date::new(2024, 6, 1).unwrap();
		assert!(is_less_than(earlier, later));
		assert!(is_equal(earlier, earlier));
		assert!(is_greater_than_equal(later, earlier));
	}

	#[test]
	fn test_intervals_compare_by_scalar() {
		let one_year = IntervalYearMonth::from_years_months(1, 0);
		let fourteen_months = IntervalYearMonth::from_months(14);
		assert!(is_less_than(one_year, fourteen_months));
	}
}
