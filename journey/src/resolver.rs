//! Event Resolver
//!
//! Places catalog entries on a lifetime. Events are loaded through an
//! [`EventSource`] so a remote provider can stand in for the local table;
//! whatever the source does, a failed fetch falls back to the catalog.

use std::future::Future;

use tracing::{debug, warn};

use crate::catalog::CATALOG;
use crate::components::{CatalogEntry, HistoricalEvent};
use crate::error::SourceError;

/// Keep entries with `birth_year <= year <= birth_year + max_age`, in
/// catalog order, annotated with the subject's age.
pub fn resolve(catalog: &[CatalogEntry], birth_year: i32, max_age: u32) -> Vec<HistoricalEvent> {
    let last_year = birth_year.saturating_add(i32::try_from(max_age).unwrap_or(i32::MAX));
    catalog
        .iter()
        .filter(|e| e.year >= birth_year && e.year <= last_year)
        .map(|e| HistoricalEvent::from_entry(e, birth_year))
        .collect()
}

/// All resolved events that fall in `year`, in catalog order
pub fn events_in_year(events: &[HistoricalEvent], year: i32) -> impl Iterator<Item = &HistoricalEvent> {
    events.iter().filter(move |e| e.year == year)
}

/// Provider of lifetime events
pub trait EventSource {
    fn fetch(
        &self,
        birth_year: i32,
        max_age: u32,
    ) -> impl Future<Output = Result<Vec<HistoricalEvent>, SourceError>> + Send;
}

/// Serves events straight from the built-in table. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSource {
    catalog: &'static [CatalogEntry],
}

impl CatalogSource {
    pub fn new() -> Self {
        Self { catalog: CATALOG }
    }

    pub fn with_catalog(catalog: &'static [CatalogEntry]) -> Self {
        Self { catalog }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CatalogSource {
    async fn fetch(&self, birth_year: i32, max_age: u32) -> Result<Vec<HistoricalEvent>, SourceError> {
        Ok(resolve(self.catalog, birth_year, max_age))
    }
}

/// Fetch events for a lifetime, falling back to the local catalog when the
/// source fails. The caller never sees the failure.
pub async fn load_events<S: EventSource>(source: &S, birth_year: i32, max_age: u32) -> Vec<HistoricalEvent> {
    match source.fetch(birth_year, max_age).await {
        Ok(events) => {
            debug!("Loaded {} events for birth year {}", events.len(), birth_year);
            events
        }
        Err(e) => {
            warn!("Event source failed ({}), using local catalog", e);
            resolve(CATALOG, birth_year, max_age)
        }
    }
}
