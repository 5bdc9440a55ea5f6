//! Event history, most recent first, unique by `(year, title)`

use serde::Serialize;

use crate::components::HistoricalEvent;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventHistory {
    events: Vec<HistoricalEvent>,
}

impl EventHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event at the front. Returns false if it was already seen.
    pub fn record(&mut self, event: &HistoricalEvent) -> bool {
        if self.contains(event) {
            return false;
        }
        self.events.insert(0, event.clone());
        true
    }

    pub fn contains(&self, event: &HistoricalEvent) -> bool {
        self.events.iter().any(|e| e.key() == event.key())
    }

    pub fn get(&self, index: usize) -> Option<&HistoricalEvent> {
        self.events.get(index)
    }

    pub fn find(&self, year: i32, title: &str) -> Option<&HistoricalEvent> {
        self.events.iter().find(|e| e.key() == (year, title))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoricalEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
