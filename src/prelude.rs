//! Prelude module for multi_calendar crate.
//!
//! Re-exports the derive_more Display macro and the types every component module touches.

pub use derive_more::Display;

#[allow(unused_imports)]
pub use crate::{CalendarDate, InvalidDateError, types::CalendarType};
