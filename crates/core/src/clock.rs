//! Clock abstraction for resolving the current weekday.

use chrono::{Datelike, Local};

use crate::day::weekday_name;

/// Source of the current weekday name.
///
/// The today view takes its clock as an injected dependency so tests can
/// pin the day instead of depending on when they run.
pub trait Clock: Send + Sync {
    /// Full English weekday name for "now".
    fn today(&self) -> &'static str;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> &'static str {
        weekday_name(Local::now().weekday())
    }
}

/// Clock pinned to a fixed day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    day: &'static str,
}

impl FixedClock {
    /// Create a clock that always reports `day`.
    pub fn new(day: &'static str) -> Self {
        Self { day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> &'static str {
        self.day
    }
}
