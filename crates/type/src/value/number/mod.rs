// Copyright (c) sqlbridge.dev 2025
// This file is licensed under the MIT, see license.md file

pub mod compare;
mod convert;
mod promote;

pub use convert::SafeConvert;
pub use promote::Promote;
