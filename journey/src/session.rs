//! Session - one journey plus the scene drawn for it
//!
//! Every frame goes through [`Session::advance`]: the journey ticks, the
//! scene catches up to the new age, then both are composed into a
//! [`Frame`] for the host.

use serde::Serialize;

use crate::audio::AudioSettings;
use crate::components::HistoricalEvent;
use crate::config::JourneyConfig;
use crate::input::BirthYear;
use crate::journey::{Journey, TickResult};
use crate::overlay::{self, AgeContextTable, OverlayFrame};
use crate::scene::{SceneFrame, SceneLayout, SceneWorld};

/// Everything the host renders for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub scene: SceneFrame,
    pub overlay: OverlayFrame,
    pub audio: AudioSettings,
    pub tick: TickResult,
}

/// Something a [`crate::frame_runner::FrameRunner`] can drive
pub trait FrameSource {
    type Frame: Send + 'static;

    fn advance(&mut self, elapsed_secs: f64) -> Self::Frame;
}

pub struct Session {
    journey: Journey,
    scene: SceneWorld,
    age_context: AgeContextTable,
}

impl Session {
    pub fn new(birth_year: BirthYear, events: Vec<HistoricalEvent>, config: &JourneyConfig) -> Self {
        let mut scene = SceneWorld::new(config.sky_seed);
        // age-0 props are visible on the start screen
        scene.update(0.0, 0.0, false);
        Self {
            journey: Journey::new(birth_year, events, config),
            scene,
            age_context: config.age_context.clone(),
        }
    }

    pub fn advance(&mut self, elapsed_secs: f64) -> Frame {
        let tick = self.journey.tick(elapsed_secs);
        self.scene
            .update(elapsed_secs, self.journey.age(), self.journey.is_paused());
        self.compose(tick)
    }

    /// Current frame without advancing time
    pub fn frame(&self) -> Frame {
        self.compose(TickResult::default())
    }

    fn compose(&self, tick: TickResult) -> Frame {
        let journey = &self.journey;
        Frame {
            scene: self
                .scene
                .frame(journey.age(), journey.is_paused(), journey.is_started()),
            overlay: overlay::present(journey, &self.age_context),
            audio: *journey.audio(),
            tick,
        }
    }

    pub fn layout(&self) -> SceneLayout {
        self.scene.layout()
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn journey_mut(&mut self) -> &mut Journey {
        &mut self.journey
    }

    pub fn age_context(&self) -> &AgeContextTable {
        &self.age_context
    }
}

impl FrameSource for Session {
    type Frame = Frame;

    fn advance(&mut self, elapsed_secs: f64) -> Frame {
        Session::advance(self, elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::resolver::resolve;

    fn session(year: i32) -> Session {
        let config = JourneyConfig::default();
        let birth = BirthYear::new(year, &config).unwrap();
        Session::new(birth, resolve(CATALOG, year, 90), &config)
    }

    #[test]
    fn test_idle_session_shows_start_screen() {
        let mut session = session(1990);
        let frame = session.advance(1.0);
        assert_eq!(session.journey().age(), 0.0);
        assert!(frame.overlay.start_prompt);
        assert!(frame.scene.start_marker.is_some());
        assert_eq!(frame.scene.props.len(), 3);
    }

    #[test]
    fn test_scene_follows_journey() {
        let mut session = session(1990);
        session.journey_mut().request_toggle();
        session.journey_mut().cycle_speed(); // 2x
        session.journey_mut().cycle_speed(); // 5x
        session.journey_mut().cycle_speed(); // 10x
        session.journey_mut().cycle_speed(); // 50x

        // 50x: 50/3 years per second, one second reaches age ~16.7
        let frame = session.advance(1.0);
        assert!(frame.scene.start_marker.is_none());
        assert_eq!(frame.overlay.hud.age, 16);
        assert_eq!(frame.scene.props.len(), 9);
        assert_eq!(frame.scene.stage, "Adolescence");
    }

    #[test]
    fn test_paused_frame_styling() {
        let mut session = session(1990);
        session.journey_mut().request_toggle();
        session.advance(0.5);
        session.journey_mut().set_paused(true);

        let frame = session.advance(0.5);
        assert!(frame.overlay.paused_banner);
        assert_eq!(frame.scene.lighting.background, "#444444");
        assert_eq!(frame.overlay.hud.phase_color, "#b0c4de");
    }

    #[test]
    fn test_frame_does_not_advance() {
        let mut session = session(1990);
        session.journey_mut().request_toggle();
        session.advance(3.0);
        let age = session.journey().age();
        let frame = session.frame();
        assert_eq!(session.journey().age(), age);
        assert_eq!(frame.tick, TickResult::default());
    }
}
