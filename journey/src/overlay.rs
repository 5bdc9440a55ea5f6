//! Overlay Presenter
//!
//! Builds the 2D layer drawn over the scene: HUD, event panel, history
//! sidebar, pause banner, start prompt and the end-of-journey summary.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::components::HistoricalEvent;
use crate::error::ConfigError;
use crate::journey::{Journey, JourneySummary};

// ============================================================================
// Age context text
// ============================================================================

/// One row of the age-context table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeContextRow {
    /// Exclusive upper bound; `None` matches every remaining age
    pub below: Option<u32>,
    pub template: String,
}

/// Framing text chosen by the subject's age at an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeContextTable {
    rows: Vec<AgeContextRow>,
}

static DEFAULT_AGE_CONTEXT: Lazy<AgeContextTable> = Lazy::new(|| {
    let rows = [
        (Some(5), "Too young to understand, but this moment shapes the world you'll grow up in."),
        (Some(10), "Through your innocent eyes, you witness history unfold."),
        (Some(15), "As you begin to understand the world, this moment leaves a lasting impression."),
        (Some(20), "In your formative years, this event helps shape your worldview."),
        (Some(30), "Young and full of dreams, you see how this changes everything."),
        (Some(40), "With growing wisdom, you deeply understand the significance."),
        (Some(50), "Your life experience gives you unique perspective on this moment."),
        (Some(60), "You've seen enough to recognize how this will change the future."),
        (None, "Your wisdom allows you to see the deeper meaning in this moment."),
    ];
    AgeContextTable {
        rows: rows
            .into_iter()
            .map(|(below, template)| AgeContextRow {
                below,
                template: template.to_string(),
            })
            .collect(),
    }
});

impl Default for AgeContextTable {
    fn default() -> Self {
        DEFAULT_AGE_CONTEXT.clone()
    }
}

impl AgeContextTable {
    pub fn new(rows: Vec<AgeContextRow>) -> Result<Self, ConfigError> {
        let table = Self { rows };
        table.validate()?;
        Ok(table)
    }

    /// Bounds strictly increase and only the last row may be open-ended
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some((last, bounded)) = self.rows.split_last() else {
            return Err(ConfigError::Invalid("age_context table is empty".into()));
        };
        if last.below.is_some() {
            return Err(ConfigError::Invalid(
                "age_context must end with a catch-all row".into(),
            ));
        }
        let mut previous: Option<u32> = None;
        for row in bounded {
            let Some(below) = row.below else {
                return Err(ConfigError::Invalid(
                    "only the last age_context row may omit `below`".into(),
                ));
            };
            if previous.is_some_and(|p| p >= below) {
                return Err(ConfigError::Invalid(
                    "age_context bounds must strictly increase".into(),
                ));
            }
            previous = Some(below);
        }
        Ok(())
    }

    pub fn template_for(&self, age: u32) -> &str {
        self.rows
            .iter()
            .find(|row| row.below.map_or(true, |b| age < b))
            .map(|row| row.template.as_str())
            .unwrap_or_default()
    }
}

// ============================================================================
// Life phase (HUD)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifePhase {
    NormalWorld,
    CareerPeak,
    AgainstNature,
}

const PAUSED_PHASE_COLOR: &str = "#b0c4de";

impl LifePhase {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=30 => LifePhase::NormalWorld,
            31..=60 => LifePhase::CareerPeak,
            _ => LifePhase::AgainstNature,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LifePhase::NormalWorld => "The Normal World",
            LifePhase::CareerPeak => "Career Peak",
            LifePhase::AgainstNature => "Against Nature",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LifePhase::NormalWorld => "Everything that happened is normal to you",
            LifePhase::CareerPeak => "You're at the peak of your career during these events",
            LifePhase::AgainstNature => "Everything that happened goes against human nature for you",
        }
    }

    pub fn color(self, paused: bool) -> &'static str {
        if paused {
            return PAUSED_PHASE_COLOR;
        }
        match self {
            LifePhase::NormalWorld => "#64B5F6",
            LifePhase::CareerPeak => "#81C784",
            LifePhase::AgainstNature => "#FFB74D",
        }
    }
}

/// Header shown above the history list
pub fn phase_message(age: u32) -> &'static str {
    match age {
        0..=30 => "You grew up with these changes as your normal reality",
        31..=60 => "You witnessed and shaped these transformative events during your prime years",
        61..=90 => "Your long life experience gives you a unique perspective on these revolutionary changes",
        _ => "You've lived to see humanity transform beyond what anyone thought possible",
    }
}

// ============================================================================
// Frame payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub age: u32,
    pub year: i32,
    pub speed: u32,
    pub speed_label: String,
    pub paused: bool,
    pub phase: LifePhase,
    pub phase_name: &'static str,
    pub phase_description: &'static str,
    pub phase_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub heading: String,
    pub title: String,
    pub context: String,
    pub description: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItem {
    pub index: usize,
    pub year: i32,
    pub age: u32,
    pub title: String,
    pub caption: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub hud: Hud,
    /// Idle journey waiting for the first start request
    pub start_prompt: bool,
    pub paused_banner: bool,
    pub panel: Option<PanelView>,
    pub history_header: &'static str,
    pub history: Vec<HistoryItem>,
    pub summary: Option<JourneySummary>,
}

pub fn panel_view(event: &HistoricalEvent, table: &AgeContextTable) -> PanelView {
    PanelView {
        heading: format!("Age {}", event.age),
        title: event.title.clone(),
        context: table.template_for(event.age).to_string(),
        description: event.description.clone(),
        year: event.year,
    }
}

pub fn present(journey: &Journey, table: &AgeContextTable) -> OverlayFrame {
    let age = journey.clock().whole_years();
    let paused = journey.is_paused();
    let phase = LifePhase::for_age(age);
    let speed = journey.clock().speed();

    let hud = Hud {
        age,
        year: journey.current_year(),
        speed,
        speed_label: format!("{}x", speed),
        paused,
        phase,
        phase_name: phase.name(),
        phase_description: phase.description(),
        phase_color: phase.color(paused),
    };

    // the summary replaces the panel, sidebar and banner
    if journey.is_ended() {
        return OverlayFrame {
            hud,
            start_prompt: false,
            paused_banner: false,
            panel: None,
            history_header: phase_message(age),
            history: Vec::new(),
            summary: journey.summary(),
        };
    }

    let selected = journey.panel().map(|p| p.event.key());
    let history = journey
        .history()
        .iter()
        .enumerate()
        .map(|(index, e)| HistoryItem {
            index,
            year: e.year,
            age: e.age,
            title: e.title.clone(),
            caption: format!("You were {} years old", e.age),
            selected: selected == Some(e.key()),
        })
        .collect();

    OverlayFrame {
        hud,
        start_prompt: !journey.is_started(),
        paused_banner: paused,
        panel: journey.panel().map(|p| panel_view(&p.event, table)),
        history_header: phase_message(age),
        history,
        summary: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::config::JourneyConfig;
    use crate::input::BirthYear;
    use crate::resolver::resolve;

    fn journey(year: i32) -> Journey {
        let config = JourneyConfig::default();
        let birth = BirthYear::new(year, &config).unwrap();
        Journey::new(birth, resolve(CATALOG, year, 90), &config)
    }

    #[test]
    fn test_age_context_buckets() {
        let table = AgeContextTable::default();
        assert!(table.template_for(0).starts_with("Too young"));
        assert!(table.template_for(4).starts_with("Too young"));
        assert!(table.template_for(5).starts_with("Through your innocent"));
        assert!(table.template_for(29).starts_with("Young and full"));
        assert!(table.template_for(59).starts_with("You've seen enough"));
        assert!(table.template_for(60).starts_with("Your wisdom"));
        assert!(table.template_for(90).starts_with("Your wisdom"));
    }

    #[test]
    fn test_custom_table_validation() {
        let row = |below: Option<u32>, t: &str| AgeContextRow {
            below,
            template: t.into(),
        };
        let table = AgeContextTable::new(vec![row(Some(30), "young"), row(None, "old")]).unwrap();
        assert_eq!(table.template_for(29), "young");
        assert_eq!(table.template_for(30), "old");

        assert!(AgeContextTable::new(vec![]).is_err());
        assert!(AgeContextTable::new(vec![row(Some(30), "young")]).is_err());
        assert!(AgeContextTable::new(vec![row(Some(30), "a"), row(Some(20), "b"), row(None, "c")]).is_err());
        assert!(AgeContextTable::new(vec![row(None, "a"), row(None, "b")]).is_err());
    }

    #[test]
    fn test_table_round_trips_through_config_json() {
        let json = serde_json::to_string(&AgeContextTable::default()).unwrap();
        let parsed: AgeContextTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AgeContextTable::default());
    }

    #[test]
    fn test_life_phase_boundaries() {
        assert_eq!(LifePhase::for_age(30), LifePhase::NormalWorld);
        assert_eq!(LifePhase::for_age(31), LifePhase::CareerPeak);
        assert_eq!(LifePhase::for_age(60), LifePhase::CareerPeak);
        assert_eq!(LifePhase::for_age(61), LifePhase::AgainstNature);
        assert_eq!(LifePhase::CareerPeak.color(true), PAUSED_PHASE_COLOR);
    }

    #[test]
    fn test_idle_overlay_shows_start_prompt() {
        let j = journey(1990);
        let frame = present(&j, &AgeContextTable::default());
        assert!(frame.start_prompt);
        assert!(frame.panel.is_none());
        assert_eq!(frame.hud.year, 1990);
        assert_eq!(frame.hud.speed_label, "1x");
    }

    #[test]
    fn test_panel_and_history() {
        let mut j = journey(1990);
        j.request_toggle();
        j.tick(0.0);
        j.tick(3.0);
        let frame = present(&j, &AgeContextTable::default());
        let panel = frame.panel.unwrap();
        assert_eq!(panel.heading, "Age 1");
        assert_eq!(panel.year, 1991);
        assert!(panel.context.starts_with("Too young"));
        assert_eq!(frame.history.len(), 2);
        assert!(frame.history[0].selected);
        assert_eq!(frame.history[1].caption, "You were 0 years old");
        assert!(!frame.paused_banner);

        j.request_toggle();
        let paused = present(&j, &AgeContextTable::default());
        assert!(paused.paused_banner);
        assert_eq!(paused.hud.phase_color, PAUSED_PHASE_COLOR);
    }

    #[test]
    fn test_summary_replaces_overlay() {
        let mut j = journey(1990);
        j.request_toggle();
        j.cycle_speed();
        j.cycle_speed();
        j.cycle_speed();
        j.cycle_speed(); // 50x
        for _ in 0..20 {
            j.tick(1.0);
        }
        assert!(j.is_ended());
        let frame = present(&j, &AgeContextTable::default());
        assert!(frame.panel.is_none());
        assert!(frame.history.is_empty());
        assert!(!frame.paused_banner);
        let summary = frame.summary.unwrap();
        assert_eq!(summary.events_witnessed, j.history().len());
    }

    #[test]
    fn test_only_the_shown_event_is_selected() {
        // 2020 has two entries; showing one must not highlight the other
        let mut j = journey(2000);
        j.request_toggle();
        j.tick(61.0);
        assert_eq!(j.current_year(), 2020);
        let second = j.history().iter().position(|e| e.year == 2020 && Some(e) != j.active_event());
        let index = second.unwrap();
        j.select_history(index);

        let frame = present(&j, &AgeContextTable::default());
        let same_year: Vec<&HistoryItem> = frame.history.iter().filter(|h| h.year == 2020).collect();
        assert_eq!(same_year.len(), 2);
        assert_eq!(same_year.iter().filter(|h| h.selected).count(), 1);
        assert!(frame.history[index].selected);
    }
}
