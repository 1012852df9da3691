//! Day-keyed task lists over the key-value primitive.
//!
//! One record per day identifier, holding that day's tasks as a JSON
//! array of strings. An absent record and a record holding the empty
//! list are indistinguishable to readers.

use tracing::warn;

use super::trait_::{KeyValueStore, Result};

/// Durable, per-day ordered task lists.
///
/// The store is a string-keyed map by contract: day identifiers are not
/// validated, so callers use the seven canonical weekday names where the
/// weekly view is expected to see the data.
pub struct TaskStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> TaskStore<K> {
    /// Create a task store over a key-value backend.
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Load the task list for `day`.
    ///
    /// An absent record reads as the empty list. A record that does not
    /// decode as a JSON array of strings also reads as empty: the failure
    /// is logged and never propagated, so a corrupt record cannot take a
    /// screen down. The returned vector is a fresh copy; mutating it
    /// changes nothing until an explicit [`save`](Self::save).
    pub async fn tasks(&self, day: &str) -> Result<Vec<String>> {
        let Some(raw) = self.kv.get(day).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!("Failed to decode tasks for {}: {} (reading as empty)", day, e);
                Ok(Vec::new())
            }
        }
    }

    /// Serialize `tasks` and overwrite the record for `day`.
    ///
    /// Full replace, last write wins: two callers that both read and then
    /// save will keep only the second write.
    pub async fn save(&self, day: &str, tasks: &[String]) -> Result<()> {
        let encoded = serde_json::to_string(tasks)?;
        self.kv.set(day, &encoded).await
    }

    /// Remove the task at `index` for `day`, then save the result.
    ///
    /// An out-of-range index is a no-op that still writes the unchanged
    /// list back; it is never an error.
    pub async fn delete_at(&self, day: &str, index: usize) -> Result<()> {
        let mut tasks = self.tasks(day).await?;
        if index < tasks.len() {
            tasks.remove(index);
        }
        self.save(day, &tasks).await
    }
}
