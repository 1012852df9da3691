//! Add-task screen: append one trimmed task to a target day.

use std::sync::Arc;

use weekplan_core::TODAY_PLACEHOLDER;
use weekplan_storage::{KeyValueStore, Result, TaskStore};

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed task was appended and saved; the input was cleared and
    /// the caller should return to the previous screen.
    Saved,
    /// The input was empty after trimming; nothing was stored.
    EmptyInput,
}

/// Controller for the add-task form.
///
/// The target day arrives as a navigation parameter. When none is given
/// the screen falls back to the literal "Today" placeholder, which is a
/// storage key of its own and is never listed by the weekly view; both
/// shipped entry points always pass an explicit day.
pub struct AddTaskScreen<K: KeyValueStore> {
    store: Arc<TaskStore<K>>,
    day: String,
    input: String,
}

impl<K: KeyValueStore> AddTaskScreen<K> {
    /// Create the form for `day`, defaulting to the "Today" placeholder.
    pub fn new(store: Arc<TaskStore<K>>, day: Option<String>) -> Self {
        Self {
            store,
            day: day.unwrap_or_else(|| TODAY_PLACEHOLDER.to_string()),
            input: String::new(),
        }
    }

    /// The day a submitted task will be stored under.
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the contents of the input field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether submit is enabled: the input must be non-empty once trimmed.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Submit the form.
    ///
    /// The input is trimmed first; an empty result performs no store
    /// mutation at all. Otherwise the task is appended to the target
    /// day's current list as a strict read-append-save sequence and the
    /// input field is cleared.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let cleaned = self.input.trim();
        if cleaned.is_empty() {
            return Ok(SubmitOutcome::EmptyInput);
        }

        let mut tasks = self.store.tasks(&self.day).await?;
        tasks.push(cleaned.to_string());
        self.store.save(&self.day, &tasks).await?;

        self.input.clear();
        Ok(SubmitOutcome::Saved)
    }
}
