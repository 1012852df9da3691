//! Screen controllers for weekplan.
//!
//! Each screen owns one interaction contract: what it loads when it gains
//! focus, and how user actions mutate the task store. After a mutation the
//! screen reloads from the store instead of patching local state, so the
//! store stays the single source of truth. Rendering belongs to callers.

#![warn(missing_docs)]

pub mod add_task;
pub mod today;
pub mod weekly;

pub use add_task::{AddTaskScreen, SubmitOutcome};
pub use today::TodayScreen;
pub use weekly::{DayCard, WeeklyScreen};
