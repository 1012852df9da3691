//! Today screen: the current weekday's task list.

use std::sync::Arc;

use weekplan_core::Clock;
use weekplan_storage::{KeyValueStore, Result, TaskStore};

/// Controller for the today view.
///
/// The day is re-derived from the injected clock on every focus, and every
/// focus reloads the list from the store, so the view never shows a stale
/// list after returning from another screen.
pub struct TodayScreen<K: KeyValueStore, C: Clock> {
    store: Arc<TaskStore<K>>,
    clock: C,
    day: &'static str,
    tasks: Vec<String>,
}

impl<K: KeyValueStore, C: Clock> TodayScreen<K, C> {
    /// Create the screen. The day and list stay empty until the first
    /// [`focus`](Self::focus); the clock is not consulted before then.
    pub fn new(store: Arc<TaskStore<K>>, clock: C) -> Self {
        Self {
            store,
            clock,
            day: "",
            tasks: Vec::new(),
        }
    }

    /// Load (or reload) today's list from the store.
    pub async fn focus(&mut self) -> Result<()> {
        self.day = self.clock.today();
        self.tasks = self.store.tasks(self.day).await?;
        Ok(())
    }

    /// The weekday this screen is focused on; empty before the first focus.
    pub fn day(&self) -> &'static str {
        self.day
    }

    /// Tasks as of the last focus.
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Number of tasks as of the last focus.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Delete the task at `index`, then reload from the store.
    ///
    /// The reload, not a local splice, decides what the screen shows next.
    /// The day stays the one captured at the last focus.
    pub async fn remove_task(&mut self, index: usize) -> Result<()> {
        self.store.delete_at(self.day, index).await?;
        self.tasks = self.store.tasks(self.day).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use weekplan_core::FixedClock;
    use weekplan_storage::MemoryStore;

    /// Clock that reports a different day on each call.
    struct SequenceClock {
        days: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl Clock for SequenceClock {
        fn today(&self) -> &'static str {
            let call = self.calls.fetch_add(1, Ordering::Relaxed);
            self.days[call.min(self.days.len() - 1)]
        }
    }

    /// Clock that fails the test if it is ever consulted.
    struct PanickyClock;

    impl Clock for PanickyClock {
        fn today(&self) -> &'static str {
            panic!("clock consulted before focus");
        }
    }

    fn shared_store() -> Arc<TaskStore<MemoryStore>> {
        Arc::new(TaskStore::new(MemoryStore::new()))
    }

    #[test]
    fn new_does_not_consult_the_clock() {
        let screen = TodayScreen::new(shared_store(), PanickyClock);
        assert_eq!(screen.day(), "");
        assert!(screen.tasks().is_empty());
    }

    #[tokio::test]
    async fn focus_loads_the_clock_day() {
        let store = shared_store();
        store
            .save("Wednesday", &["water plants".to_string()])
            .await
            .unwrap();

        let mut screen = TodayScreen::new(store, FixedClock::new("Wednesday"));
        screen.focus().await.unwrap();

        assert_eq!(screen.day(), "Wednesday");
        assert_eq!(screen.tasks(), ["water plants"]);
        assert_eq!(screen.task_count(), 1);
    }

    #[tokio::test]
    async fn focus_with_no_record_shows_an_empty_list() {
        let mut screen = TodayScreen::new(shared_store(), FixedClock::new("Monday"));
        screen.focus().await.unwrap();
        assert!(screen.tasks().is_empty());
    }

    #[tokio::test]
    async fn refocus_picks_up_external_changes() {
        let store = shared_store();
        let mut screen = TodayScreen::new(store.clone(), FixedClock::new("Friday"));
        screen.focus().await.unwrap();
        assert!(screen.tasks().is_empty());

        store.save("Friday", &["new task".to_string()]).await.unwrap();
        screen.focus().await.unwrap();
        assert_eq!(screen.tasks(), ["new task"]);
    }

    #[tokio::test]
    async fn focus_re_derives_the_day_each_time() {
        let store = shared_store();
        store.save("Monday", &["mon".to_string()]).await.unwrap();
        store.save("Tuesday", &["tue".to_string()]).await.unwrap();

        let clock = SequenceClock {
            days: vec!["Monday", "Tuesday"],
            calls: AtomicUsize::new(0),
        };
        let mut screen = TodayScreen::new(store, clock);

        screen.focus().await.unwrap();
        assert_eq!(screen.day(), "Monday");
        assert_eq!(screen.tasks(), ["mon"]);

        screen.focus().await.unwrap();
        assert_eq!(screen.day(), "Tuesday");
        assert_eq!(screen.tasks(), ["tue"]);
    }

    #[tokio::test]
    async fn remove_task_deletes_and_reloads() {
        let store = shared_store();
        let tasks: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        store.save("Saturday", &tasks).await.unwrap();

        let mut screen = TodayScreen::new(store.clone(), FixedClock::new("Saturday"));
        screen.focus().await.unwrap();
        screen.remove_task(1).await.unwrap();

        assert_eq!(screen.tasks(), ["a", "c"]);
        assert_eq!(store.tasks("Saturday").await.unwrap(), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn remove_task_out_of_range_changes_nothing() {
        let store = shared_store();
        store.save("Sunday", &["only".to_string()]).await.unwrap();

        let mut screen = TodayScreen::new(store, FixedClock::new("Sunday"));
        screen.focus().await.unwrap();
        screen.remove_task(9).await.unwrap();

        assert_eq!(screen.tasks(), ["only"]);
    }
}
