//! Soundtrack volume and mute state
//!
//! Muting forces the effective volume to zero but leaves the stored volume
//! alone, so unmuting restores whatever the slider said.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    volume: f32,
    muted: bool,
}

impl AudioSettings {
    pub fn new(volume: f32) -> Self {
        let mut settings = Self {
            volume: 0.0,
            muted: false,
        };
        settings.set_volume(volume);
        settings
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Clamped to 0..=1; NaN is ignored
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Level actually sent to the output
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::new(0.3)
    }
}
