use journey::clock::ToggleOutcome;
use journey::{Frame, FrameRunner, JourneyConfig, Session};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::audio::AudioPlayer;

pub type SessionHandle = Arc<Mutex<Session>>;

/// The current session with the runner and audio that serve it.
/// Installed and torn down as one unit.
pub struct ActiveSession {
    // runner stops first so no frame is emitted for a half-dropped session
    runner: FrameRunner,
    audio: Option<AudioPlayer>,
    session: SessionHandle,
}

/// Global application state managed by Tauri
///
/// Everything except the config belongs to the current session and is
/// replaced wholesale on restart.
pub struct AppState {
    pub config: JourneyConfig,
    active: Mutex<Option<ActiveSession>>,
}

impl AppState {
    pub fn new(config: JourneyConfig) -> Self {
        Self {
            config,
            active: Mutex::new(None),
        }
    }

    /// Replace any previous session with `session` and start driving it.
    ///
    /// The slot stays locked from teardown to install, so concurrent
    /// submissions cannot pair one session's runner with another's inputs.
    pub fn start_session<F>(&self, session: Session, audio: Option<AudioPlayer>, on_frame: F) -> ClockState
    where
        F: Fn(Frame) + Send + 'static,
    {
        let mut active = lock(&self.active);
        if active.take().is_some() {
            info!("Previous session discarded");
        }

        let clock = ClockState::of(&session);
        let handle = Arc::new(Mutex::new(session));
        let mut runner = FrameRunner::new();
        runner.start(Arc::clone(&handle), self.config.frame_interval_ms, on_frame);

        *active = Some(ActiveSession {
            runner,
            audio,
            session: handle,
        });
        clock
    }

    pub fn current_session(&self) -> Result<SessionHandle, String> {
        lock(&self.active)
            .as_ref()
            .map(|a| Arc::clone(&a.session))
            .ok_or_else(|| "no journey in progress".to_string())
    }

    /// Run `f` against the current session
    pub fn with_session<T>(&self, f: impl FnOnce(&mut Session) -> T) -> Result<T, String> {
        let handle = self.current_session()?;
        let mut session = lock(&handle);
        Ok(f(&mut session))
    }

    /// Push the session's effective volume to the player
    pub fn sync_audio(&self, volume: f32) {
        if let Some(player) = lock(&self.active).as_ref().and_then(|a| a.audio.as_ref()) {
            player.set_volume(volume);
        }
    }

    /// Stop the runner and audio and forget the session
    pub fn discard_session(&self) {
        if let Some(mut previous) = lock(&self.active).take() {
            previous.runner.stop();
            info!("Session discarded");
        }
    }
}

/// Lock ignoring poison; a panicked frame leaves the session usable
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct AudioConfigView {
    pub track_path: String,
    pub default_volume: f32,
}

#[derive(Serialize, Clone)]
pub struct AppConfig {
    pub max_age: u32,
    pub seconds_per_year: f64,
    pub birth_year_min: i32,
    pub birth_year_max: i32,
    pub frame_interval_ms: u64,
    pub audio: AudioConfigView,
}

#[derive(Serialize, Clone)]
pub struct ClockState {
    pub age: f64,
    pub year: i32,
    pub speed: u32,
    pub is_started: bool,
    pub is_paused: bool,
    pub is_ended: bool,
}

impl ClockState {
    pub fn of(session: &Session) -> Self {
        let journey = session.journey();
        Self {
            age: journey.age(),
            year: journey.current_year(),
            speed: journey.clock().speed(),
            is_started: journey.is_started(),
            is_paused: journey.is_paused(),
            is_ended: journey.is_ended(),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct ToggleResult {
    pub outcome: ToggleOutcome,
    pub clock: ClockState,
}

#[derive(Serialize, Clone)]
pub struct SpeedMode {
    pub key: String,
    pub name: String,
    pub multiplier: u32,
}

#[derive(Serialize, Clone)]
pub struct AudioState {
    pub volume: f32,
    pub muted: bool,
    pub effective_volume: f32,
}

/// Speed modes offered by the speed button, in cycle order
pub fn speed_modes(config: &JourneyConfig) -> Vec<SpeedMode> {
    config
        .speed_steps
        .iter()
        .map(|&multiplier| SpeedMode {
            key: format!("{}x", multiplier),
            name: format!("{}x Speed", multiplier),
            multiplier,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey::catalog::CATALOG;
    use journey::resolver::resolve;
    use journey::BirthYear;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::thread;
    use std::time::Duration;

    fn session(config: &JourneyConfig, year: i32) -> Session {
        let birth = BirthYear::new(year, config).unwrap();
        Session::new(birth, resolve(CATALOG, year, config.max_age), config)
    }

    #[test]
    fn test_concurrent_submissions_keep_runner_and_session_paired() {
        let mut config = JourneyConfig::default();
        config.frame_interval_ms = 2;
        let state = Arc::new(AppState::new(config));
        // idle sessions report their birth year as the HUD year
        let emitted = Arc::new(AtomicI32::new(0));

        let workers: Vec<_> = [1960, 2010]
            .into_iter()
            .map(|year| {
                let state = Arc::clone(&state);
                let emitted = Arc::clone(&emitted);
                thread::spawn(move || {
                    for _ in 0..20 {
                        let emitted = Arc::clone(&emitted);
                        let s = session(&state.config, year);
                        state.start_session(s, None, move |frame: Frame| {
                            emitted.store(frame.overlay.hud.year, Ordering::SeqCst);
                        });
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        thread::sleep(Duration::from_millis(50));
        let current = state.with_session(|s| s.journey().birth_year()).unwrap();
        assert_eq!(emitted.load(Ordering::SeqCst), current);

        state.discard_session();
        assert!(state.current_session().is_err());
    }

    #[test]
    fn test_commands_need_a_session() {
        let state = AppState::new(JourneyConfig::default());
        assert!(state.with_session(|s| s.frame()).is_err());
        state.sync_audio(0.5);
        state.discard_session();
    }
}
