use std::path::PathBuf;
use tauri::{AppHandle, Emitter, State};
use tracing::{info, warn};

use journey::scene::SceneLayout;
use journey::{load_events, parse_birth_year, CatalogSource, Frame, Session};

use crate::audio::AudioPlayer;
use crate::state::{speed_modes, AppState, ClockState, SpeedMode, ToggleResult};

/// Validate the entered year and start a fresh session for it.
/// Invalid input is rejected before anything is torn down.
#[tauri::command]
pub async fn submit_birth_year(
    app: AppHandle,
    state: State<'_, AppState>,
    birth_year: String,
) -> Result<ClockState, String> {
    let config = &state.config;
    let birth = parse_birth_year(&birth_year, config).map_err(|e| e.to_string())?;
    let events = load_events(&CatalogSource::new(), birth.get(), config.max_age).await;

    let session = Session::new(birth, events, config);
    let audio = AudioPlayer::start(
        PathBuf::from(&config.audio.track_path),
        session.journey().audio().effective_volume(),
    );
    let clock = state.start_session(session, Some(audio), move |frame: Frame| {
        if let Err(e) = app.emit("journey-frame", &frame) {
            warn!("Failed to emit frame: {}", e);
        }
    });

    info!("Session started for birth year {}", birth.get());
    Ok(clock)
}

#[tauri::command]
pub fn get_scene_layout(state: State<AppState>) -> Result<SceneLayout, String> {
    state.with_session(|s| s.layout())
}

#[tauri::command]
pub fn get_frame(state: State<AppState>) -> Result<Frame, String> {
    state.with_session(|s| s.frame())
}

/// Advance by a host-measured interval, for hosts driving their own render loop
#[tauri::command]
pub fn advance_frame(state: State<AppState>, elapsed_secs: f64) -> Result<Frame, String> {
    state.with_session(|s| s.advance(elapsed_secs))
}

#[tauri::command]
pub fn get_clock_state(state: State<AppState>) -> Result<ClockState, String> {
    state.with_session(|s| ClockState::of(s))
}

/// Spacebar: start once, then pause/resume
#[tauri::command]
pub fn toggle_time(state: State<AppState>) -> Result<ToggleResult, String> {
    state.with_session(|s| {
        let outcome = s.journey_mut().request_toggle();
        ToggleResult {
            outcome,
            clock: ClockState::of(s),
        }
    })
}

#[tauri::command]
pub fn set_paused(state: State<AppState>, paused: bool) -> Result<ClockState, String> {
    state.with_session(|s| {
        s.journey_mut().set_paused(paused);
        ClockState::of(s)
    })
}

#[tauri::command]
pub fn cycle_speed(state: State<AppState>) -> Result<ClockState, String> {
    state.with_session(|s| {
        s.journey_mut().cycle_speed();
        ClockState::of(s)
    })
}

#[tauri::command]
pub fn get_speeds(state: State<AppState>) -> Vec<SpeedMode> {
    speed_modes(&state.config)
}

/// Throw the session away and go back to the entry screen
#[tauri::command]
pub fn restart_journey(state: State<AppState>) {
    state.discard_session();
    info!("Back to birth-year entry");
}

#[tauri::command]
pub fn exit_app(app: AppHandle, state: State<AppState>) {
    state.discard_session();
    app.exit(0);
}
