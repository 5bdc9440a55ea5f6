//! Age Clock
//!
//! Accumulates simulated age from real elapsed time. The clock starts idle;
//! the first start request sets it running and later requests flip pause.

use serde::Serialize;
use tracing::info;

use crate::config::JourneyConfig;

/// What a start/pause request did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Started,
    Paused,
    Resumed,
    /// Journey already over; nothing to toggle
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgeClock {
    age: f64,
    running: bool,
    paused: bool,
    speed_index: usize,
    speed_steps: Vec<u32>,
    base_rate: f64,
    max_age: f64,
}

impl AgeClock {
    pub fn new(config: &JourneyConfig) -> Self {
        Self {
            age: 0.0,
            running: false,
            paused: false,
            speed_index: 0,
            speed_steps: config.speed_steps.clone(),
            base_rate: config.base_rate(),
            max_age: config.max_age as f64,
        }
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    /// Completed years of age
    pub fn whole_years(&self) -> u32 {
        self.age.floor() as u32
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Running and not paused
    pub fn is_advancing(&self) -> bool {
        self.running && !self.paused && !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.age >= self.max_age
    }

    pub fn speed(&self) -> u32 {
        self.speed_steps.get(self.speed_index).copied().unwrap_or(1)
    }

    pub fn max_age(&self) -> f64 {
        self.max_age
    }

    /// Advance by `elapsed_secs` of real time. Returns the age gained.
    ///
    /// Non-finite or negative elapsed time advances nothing.
    pub fn tick(&mut self, elapsed_secs: f64) -> f64 {
        if !self.is_advancing() || !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return 0.0;
        }
        let before = self.age;
        let step = elapsed_secs * self.base_rate * self.speed() as f64;
        self.age = (self.age + step).min(self.max_age);
        if self.is_finished() {
            info!("Age clock reached {}", self.max_age);
        }
        self.age - before
    }

    /// Spacebar behaviour: start once, then toggle pause
    pub fn request_toggle(&mut self) -> ToggleOutcome {
        if self.is_finished() {
            return ToggleOutcome::Finished;
        }
        if !self.running {
            self.running = true;
            self.paused = false;
            info!("Age clock started");
            return ToggleOutcome::Started;
        }
        self.set_paused(!self.paused);
        if self.paused {
            ToggleOutcome::Paused
        } else {
            ToggleOutcome::Resumed
        }
    }

    /// Level-triggered pause; setting the current value is a no-op
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        info!(
            "Age clock {} at age {:.2}",
            if paused { "paused" } else { "resumed" },
            self.age
        );
    }

    /// Step to the next speed multiplier, wrapping after the last
    pub fn cycle_speed(&mut self) -> u32 {
        self.speed_index = (self.speed_index + 1) % self.speed_steps.len().max(1);
        let speed = self.speed();
        info!("Speed set to {}x", speed);
        speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_clock() -> AgeClock {
        let mut clock = AgeClock::new(&JourneyConfig::default());
        assert_eq!(clock.request_toggle(), ToggleOutcome::Started);
        clock
    }

    #[test]
    fn test_idle_clock_does_not_advance() {
        let mut clock = AgeClock::new(&JourneyConfig::default());
        assert_eq!(clock.tick(10.0), 0.0);
        assert_eq!(clock.age(), 0.0);
    }

    #[test]
    fn test_one_year_per_three_seconds() {
        let mut clock = running_clock();
        clock.tick(3.0);
        assert!((clock.age() - 1.0).abs() < 1e-9);
        assert_eq!(clock.whole_years(), 1);
    }

    #[test]
    fn test_speed_scales_rate() {
        let mut clock = running_clock();
        clock.cycle_speed(); // 2x
        clock.cycle_speed(); // 5x
        clock.tick(3.0);
        assert!((clock.age() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_and_clamped() {
        let mut clock = running_clock();
        let mut last = clock.age();
        for dt in [0.5, 1.0, 0.0, -2.0, f64::NAN, 100.0, 500.0, 1.0] {
            clock.tick(dt);
            assert!(clock.age() >= last);
            assert!(clock.age() <= 90.0);
            last = clock.age();
        }
        assert_eq!(clock.age(), 90.0);
        assert!(clock.is_finished());

        clock.tick(10.0);
        assert_eq!(clock.age(), 90.0);
    }

    #[test]
    fn test_pause_freezes_age() {
        let mut clock = running_clock();
        clock.tick(1.5);
        assert_eq!(clock.request_toggle(), ToggleOutcome::Paused);
        let frozen = clock.age();
        for _ in 0..100 {
            clock.tick(0.016);
        }
        assert_eq!(clock.age(), frozen);

        // level-triggered: repeating the same state changes nothing
        clock.set_paused(true);
        assert!(clock.is_paused());
        assert_eq!(clock.request_toggle(), ToggleOutcome::Resumed);
        clock.tick(3.0);
        assert!(clock.age() > frozen);
    }

    #[test]
    fn test_speed_cycle_wraps() {
        let mut clock = AgeClock::new(&JourneyConfig::default());
        assert_eq!(clock.speed(), 1);
        let visited: Vec<u32> = (0..5).map(|_| clock.cycle_speed()).collect();
        assert_eq!(visited, vec![2, 5, 10, 50, 1]);
    }

    #[test]
    fn test_toggle_after_finish() {
        let mut clock = running_clock();
        clock.tick(1_000.0);
        assert_eq!(clock.request_toggle(), ToggleOutcome::Finished);
        assert!(!clock.is_paused());
    }
}
