//! Core day model for weekplan.
//!
//! Day identifiers are plain strings at every storage boundary; this crate
//! defines the seven canonical weekday names, the "Today" placeholder, and
//! the clock abstraction screens use to resolve the current weekday.

#![warn(missing_docs)]

mod clock;
mod day;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{weekday_name, TODAY_PLACEHOLDER, WEEK};
