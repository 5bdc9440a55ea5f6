//! Journey - state of one run of the experience
//!
//! Owns the age clock, the resolved events, the active event and the
//! history. Everything changes through [`Journey::tick`] or one of the
//! input handlers; a restart throws the whole value away.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::audio::AudioSettings;
use crate::clock::{AgeClock, ToggleOutcome};
use crate::components::HistoricalEvent;
use crate::config::JourneyConfig;
use crate::history::EventHistory;
use crate::input::BirthYear;
use crate::resolver::events_in_year;

/// Event panel currently on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub event: HistoricalEvent,
    /// Running time the panel has been visible
    pub shown_secs: f64,
    /// Picked from the history list; stays until replaced or dismissed
    pub pinned: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickResult {
    pub age_gained: f64,
    /// Event adopted as active this tick
    pub activated: Option<HistoricalEvent>,
    /// New history entries this tick
    pub recorded: u32,
    /// Active event dropped because the new year has none
    pub cleared: bool,
    /// Terminal age reached this tick
    pub ended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneySummary {
    pub birth_year: i32,
    pub final_year: i32,
    pub events_witnessed: usize,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Journey {
    birth_year: BirthYear,
    clock: AgeClock,
    events: Vec<HistoricalEvent>,
    active_event: Option<HistoricalEvent>,
    history: EventHistory,
    panel: Option<Panel>,
    audio: AudioSettings,
    /// Whole-year age last looked up
    checked_age: Option<u32>,
    panel_auto_dismiss_secs: f64,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl Journey {
    pub fn new(birth_year: BirthYear, events: Vec<HistoricalEvent>, config: &JourneyConfig) -> Self {
        info!(
            "Journey created for birth year {} ({} events in lifetime)",
            birth_year.get(),
            events.len()
        );
        Self {
            birth_year,
            clock: AgeClock::new(config),
            events,
            active_event: None,
            history: EventHistory::new(),
            panel: None,
            audio: AudioSettings::new(config.audio.default_volume),
            checked_age: None,
            panel_auto_dismiss_secs: config.panel_auto_dismiss_secs,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Run one frame
    pub fn tick(&mut self, elapsed_secs: f64) -> TickResult {
        let was_advancing = self.clock.is_advancing();
        let was_finished = self.clock.is_finished();

        let mut result = TickResult {
            age_gained: self.clock.tick(elapsed_secs),
            ..TickResult::default()
        };

        if was_advancing && elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.age_panel(elapsed_secs);
        }

        if self.clock.is_running() {
            let age = self.clock.whole_years();
            if self.checked_age != Some(age) {
                // a long frame can cross several years; none of them is skipped
                let from = self.checked_age.map_or(0, |checked| checked + 1);
                self.checked_age = Some(age);
                for crossed in from..age {
                    self.record_year(crossed, &mut result);
                }
                self.lookup(age, &mut result);
            }
        }

        if !was_finished && self.clock.is_finished() {
            self.ended_at = Some(Utc::now());
            result.ended = true;
            info!(
                "Journey ended at {} with {} events witnessed",
                self.current_year(),
                self.history.len()
            );
        }

        result
    }

    fn age_panel(&mut self, elapsed_secs: f64) {
        let limit = self.panel_auto_dismiss_secs;
        let expired = match self.panel.as_mut() {
            Some(panel) if !panel.pinned => {
                panel.shown_secs += elapsed_secs;
                panel.shown_secs >= limit
            }
            _ => false,
        };
        if expired {
            debug!("Event panel timed out");
            self.panel = None;
        }
    }

    /// Add every event of the year at `age` to the history.
    /// Returns the first one in catalog order.
    fn record_year(&mut self, age: u32, result: &mut TickResult) -> Option<HistoricalEvent> {
        let year = self.birth_year.get() + age as i32;
        let matches: Vec<HistoricalEvent> = events_in_year(&self.events, year).cloned().collect();

        // record in reverse so the first match ends up at the front
        for event in matches.iter().rev() {
            if self.history.record(event) {
                result.recorded += 1;
            }
        }
        matches.into_iter().next()
    }

    /// Event-at-age lookup for the current calendar year
    fn lookup(&mut self, age: u32, result: &mut TickResult) {
        let Some(first) = self.record_year(age, result) else {
            if !self.clock.is_paused() && self.active_event.take().is_some() {
                result.cleared = true;
            }
            return;
        };

        info!("Age {}: {} ({})", first.age, first.title, first.year);
        self.panel = Some(Panel {
            event: first.clone(),
            shown_secs: 0.0,
            pinned: false,
        });
        self.active_event = Some(first.clone());
        result.activated = Some(first);
    }

    // ------------------------------------------------------------------
    // Input handlers
    // ------------------------------------------------------------------

    pub fn request_toggle(&mut self) -> ToggleOutcome {
        self.clock.request_toggle()
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.clock.is_running() {
            self.clock.set_paused(paused);
        }
    }

    pub fn cycle_speed(&mut self) -> u32 {
        self.clock.cycle_speed()
    }

    /// Show a history entry in the panel
    pub fn select_history(&mut self, index: usize) -> Option<&HistoricalEvent> {
        let event = self.history.get(index)?.clone();
        self.pin_panel(event);
        self.panel.as_ref().map(|p| &p.event)
    }

    pub fn select_event(&mut self, year: i32, title: &str) -> Option<&HistoricalEvent> {
        let event = self.history.find(year, title)?.clone();
        self.pin_panel(event);
        self.panel.as_ref().map(|p| &p.event)
    }

    fn pin_panel(&mut self, event: HistoricalEvent) {
        debug!("Selected {} ({}) from history", event.title, event.year);
        self.panel = Some(Panel {
            event,
            shown_secs: 0.0,
            pinned: true,
        });
    }

    pub fn dismiss_panel(&mut self) -> bool {
        self.panel.take().is_some()
    }

    pub fn audio_mut(&mut self) -> &mut AudioSettings {
        &mut self.audio
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn birth_year(&self) -> i32 {
        self.birth_year.get()
    }

    pub fn age(&self) -> f64 {
        self.clock.age()
    }

    pub fn current_year(&self) -> i32 {
        self.birth_year.get() + self.clock.whole_years() as i32
    }

    pub fn clock(&self) -> &AgeClock {
        &self.clock
    }

    pub fn is_started(&self) -> bool {
        self.clock.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn is_ended(&self) -> bool {
        self.clock.is_finished()
    }

    pub fn events(&self) -> &[HistoricalEvent] {
        &self.events
    }

    pub fn active_event(&self) -> Option<&HistoricalEvent> {
        self.active_event.as_ref()
    }

    pub fn history(&self) -> &EventHistory {
        &self.history
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn audio(&self) -> &AudioSettings {
        &self.audio
    }

    pub fn summary(&self) -> Option<JourneySummary> {
        let ended_at = self.ended_at?;
        Some(JourneySummary {
            birth_year: self.birth_year.get(),
            final_year: self.current_year(),
            events_witnessed: self.history.len(),
            started_at: self.started_at,
            ended_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::resolver::resolve;

    fn journey(year: i32) -> Journey {
        let config = JourneyConfig::default();
        let birth = BirthYear::new(year, &config).unwrap();
        Journey::new(birth, resolve(CATALOG, year, config.max_age), &config)
    }

    fn started(year: i32) -> Journey {
        let mut j = journey(year);
        assert_eq!(j.request_toggle(), ToggleOutcome::Started);
        j
    }

    #[test]
    fn test_no_lookup_before_start() {
        let mut j = journey(1990);
        let r = j.tick(0.016);
        assert!(r.activated.is_none());
        assert!(j.active_event().is_none());
        assert!(j.history().is_empty());
    }

    #[test]
    fn test_start_activates_birth_year_event() {
        let mut j = started(1990);
        let r = j.tick(0.016);
        let event = r.activated.unwrap();
        assert_eq!(event.year, 1990);
        assert_eq!(event.age, 0);
        assert_eq!(j.active_event(), Some(&event));
        assert_eq!(j.history().len(), 1);
        assert_eq!(j.panel().map(|p| p.event.year), Some(1990));
    }

    #[test]
    fn test_active_event_tracks_year() {
        let mut j = started(1990);
        j.tick(0.0);
        // 30s at 1x is ten years
        for _ in 0..10 {
            j.tick(3.0);
            let year = j.current_year();
            if let Some(active) = j.active_event() {
                assert_eq!(active.year, year);
            }
        }
        assert_eq!(j.current_year(), 2000);
        assert_eq!(j.active_event().map(|e| e.age), Some(10));
    }

    #[test]
    fn test_cleared_when_year_has_no_event() {
        let mut j = started(2020);
        j.tick(0.0);
        // 2020..=2030 all have events, 2031 does not
        for _ in 0..11 {
            j.tick(3.0);
        }
        assert_eq!(j.current_year(), 2031);
        assert!(j.active_event().is_none());
    }

    #[test]
    fn test_pause_preserves_state() {
        let mut j = started(1990);
        j.tick(0.0);
        j.tick(4.5);
        j.request_toggle();
        assert!(j.is_paused());

        let age = j.age();
        let active = j.active_event().cloned();
        let panel = j.panel().cloned();
        for _ in 0..500 {
            let r = j.tick(0.016);
            assert_eq!(r, TickResult::default());
        }
        assert_eq!(j.age(), age);
        assert_eq!(j.active_event().cloned(), active);
        assert_eq!(j.panel().cloned(), panel);
    }

    #[test]
    fn test_shared_year_records_all() {
        let mut j = started(2000);
        j.tick(0.0);
        // run to 2020 (age 20)
        for _ in 0..20 {
            j.tick(3.0);
        }
        assert_eq!(j.current_year(), 2020);
        let titles: Vec<&str> = j
            .history()
            .iter()
            .filter(|e| e.year == 2020)
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles.len(), 2);
        // adopted event is the first catalog entry and sits at the front
        let active = j.active_event().unwrap();
        assert_eq!(j.history().get(0).unwrap().key(), active.key());
    }

    #[test]
    fn test_history_deduplicates_same_title() {
        // 2019 lists "First Image of a Black Hole" twice
        let mut j = started(2000);
        j.tick(0.0);
        for _ in 0..19 {
            j.tick(3.0);
        }
        assert_eq!(j.current_year(), 2019);
        let count = j.history().iter().filter(|e| e.year == 2019).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_panel_auto_dismiss() {
        let mut j = started(1990);
        j.tick(0.0);
        assert!(j.panel().is_some());
        // stay inside the first year
        for _ in 0..7 {
            j.tick(0.25);
        }
        assert!(j.panel().is_some());
        j.request_toggle(); // pause: timer stops
        j.tick(100.0);
        assert!(j.panel().is_some());
    }

    #[test]
    fn test_panel_times_out_after_running() {
        let mut config = JourneyConfig::default();
        config.panel_auto_dismiss_secs = 1.0;
        let birth = BirthYear::new(1990, &config).unwrap();
        let mut j = Journey::new(birth, resolve(CATALOG, 1990, 90), &config);
        j.request_toggle();
        j.tick(0.0);
        j.tick(0.6);
        assert!(j.panel().is_some());
        j.tick(0.6);
        assert!(j.panel().is_none());
        // active event is separate from the panel
        assert!(j.active_event().is_some());
    }

    #[test]
    fn test_pinned_history_selection() {
        let mut j = started(1990);
        j.tick(0.0);
        j.tick(3.0);
        j.tick(3.0);
        let oldest = j.history().len() - 1;
        let picked = j.select_history(oldest).cloned().unwrap();
        assert_eq!(picked.year, 1990);
        assert!(j.panel().unwrap().pinned);
        assert!(j.select_history(99).is_none());
        assert!(j.dismiss_panel());
        assert!(j.panel().is_none());
        assert!(j.select_event(1990, &picked.title).is_some());
    }

    #[test]
    fn test_reaching_ninety_ends_journey() {
        let mut j = started(1990);
        j.tick(0.0);
        let mut ended = 0;
        for _ in 0..400 {
            if j.tick(1.0).ended {
                ended += 1;
            }
        }
        assert_eq!(ended, 1);
        assert!(j.is_ended());
        assert_eq!(j.age(), 90.0);
        assert_eq!(j.current_year(), 2080);
        // final-year lookup ran: 2080 has an event
        assert_eq!(j.active_event().map(|e| e.year), Some(2080));

        let summary = j.summary().unwrap();
        assert_eq!(summary.events_witnessed, j.history().len());
        assert_eq!(summary.final_year, 2080);
        assert!(summary.ended_at >= summary.started_at);

        j.tick(5.0);
        assert_eq!(j.age(), 90.0);
    }

    #[test]
    fn test_long_frames_do_not_skip_years() {
        fn run(step: f64) -> Journey {
            let mut j = started(1990);
            for _ in 0..4 {
                j.cycle_speed(); // 50x
            }
            while !j.tick(step).ended {}
            j
        }

        let smooth = run(1.0 / 60.0);
        let coarse = run(0.25);
        assert_eq!(smooth.history().len(), coarse.history().len());

        let distinct: std::collections::HashSet<(i32, &str)> =
            smooth.events().iter().map(|e| e.key()).collect();
        assert_eq!(coarse.history().len(), distinct.len());
        assert!(coarse.history().iter().zip(coarse.history().iter().skip(1)).all(|(a, b)| a.year >= b.year));
        assert_eq!(coarse.active_event().map(|e| e.year), Some(2080));
    }

    #[test]
    fn test_jump_records_crossed_years_but_activates_last() {
        let mut j = started(1990);
        j.tick(0.0);
        let r = j.tick(31.0); // age 0 -> 10 in one frame
        assert_eq!(r.activated.map(|e| e.year), Some(2000));
        assert!(j.history().iter().any(|e| e.year == 1995));
        assert_eq!(j.history().get(0).map(|e| e.year), Some(2000));
        assert_eq!(j.panel().map(|p| p.event.year), Some(2000));
    }

    #[test]
    fn test_summary_absent_while_running() {
        let mut j = started(1990);
        j.tick(3.0);
        assert!(j.summary().is_none());
    }
}
