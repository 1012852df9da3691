//! Weekly screen: one card per canonical weekday.

use std::sync::Arc;

use weekplan_core::WEEK;
use weekplan_storage::{KeyValueStore, Result, TaskStore};

/// One day's card in the weekly view.
#[derive(Debug, Clone)]
pub struct DayCard {
    /// Canonical weekday name.
    pub day: &'static str,
    /// Tasks for that day as of the last focus.
    pub tasks: Vec<String>,
}

/// Controller for the weekly view.
///
/// Focus loads all seven canonical weekdays in fixed Monday-through-Sunday
/// order, independent of the clock. Each load is awaited before the next;
/// the cards are replaced only once every day has loaded.
pub struct WeeklyScreen<K: KeyValueStore> {
    store: Arc<TaskStore<K>>,
    cards: Vec<DayCard>,
}

impl<K: KeyValueStore> WeeklyScreen<K> {
    /// Create the screen. Call [`focus`](Self::focus) to load it.
    pub fn new(store: Arc<TaskStore<K>>) -> Self {
        Self {
            store,
            cards: Vec::new(),
        }
    }

    /// Load (or reload) every weekday's list, one day at a time.
    pub async fn focus(&mut self) -> Result<()> {
        let mut cards = Vec::with_capacity(WEEK.len());
        for day in WEEK {
            cards.push(DayCard {
                day,
                tasks: self.store.tasks(day).await?,
            });
        }
        self.cards = cards;
        Ok(())
    }

    /// The seven day cards in Monday-through-Sunday order.
    pub fn cards(&self) -> &[DayCard] {
        &self.cards
    }

    /// The card for `day`, when `day` is one of the canonical weekdays.
    pub fn card(&self, day: &str) -> Option<&DayCard> {
        self.cards.iter().find(|card| card.day == day)
    }

    /// Delete the task at `index` under `day`, then reload all cards.
    ///
    /// `day` is expected to be one of this screen's cards; the store
    /// itself accepts any day identifier.
    pub async fn remove_task(&mut self, day: &str, index: usize) -> Result<()> {
        self.store.delete_at(day, index).await?;
        self.focus().await
    }
}
