// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use crate::{
	error::TypeError,
	value::{is::IsNumber, number::Promote},
};

#[inline]
pub fn partial_cmp<L, R>(l: L, r: R) -> Result<Option<Ordering>, TypeError>
where
	L: Promote<R>,
	R: IsNumber,
	<L as Promote<R>>::Output: IsNumber,
{
	let (lp, rp) = l.checked_promote(r)?;
	Ok(lp.partial_cmp(&rp))
}

#[inline]
pub fn is_equal<L, R>(l: L, r: R) -> Result<bool, TypeError>
where
	L: Promote<R>,
	R: IsNumber,
	<L as Promote<R>>::Output: IsNumber,
{
	Ok(partial_cmp(l, r)?.is_some_and(|o| o == Ordering::Equal))
}

#[inline]
pub fn is_less_than<L, R>(l: L, r: R) -> Result<bool, TypeError>
where
	L: Promote<R>,
	R: IsNumber,
	<L as Promote<R>>::Output: IsNumber,
{
	Ok(partial_cmp(l, r)?.is_some_and(|o| o == Ordering::Less))
}

#[inline]
pub fn is_less_than_equal<L, R>(l: L, r: R) -> Result<bool, TypeError>
where
	L: Promote<R>,
	R: IsNumber,
	<L as Promote<R>>::Output: IsNumber,
{
	Ok(partial_cmp(l, r)?.is_some_and(|o| o != Ordering::Greater))
}

#[inline]
pub fn is_greater_than<L, R>(l: L, r: R) -> Result<bool, TypeError>
where
	L: Promote<R>,
	R: IsNumber,
	<L as Promote<R>>::Output: IsNumber,
{
	Ok(partial_cmp(l, r)?.is_some_and(|o| o == Ordering::Greater))
}

#[inline]
pub fn is_greater_than_equal<L, R>(l: L, r: R) -> Result<bool, TypeError>
where
	L: Promote<R>,
	R: IsNumber,
	<L as Promote<R>>::Output: IsNumber,
{
	Ok(partial_cmp(l, r)?.is_some_and(|o| o != Ordering::Less))
}
