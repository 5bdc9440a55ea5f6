use tauri::State;

use crate::state::{AppConfig, AppState, AudioConfigView};

#[tauri::command]
pub fn get_config(state: State<AppState>) -> AppConfig {
    let config = &state.config;
    AppConfig {
        max_age: config.max_age,
        seconds_per_year: config.seconds_per_year,
        birth_year_min: config.birth_year_min,
        birth_year_max: config.birth_year_max,
        frame_interval_ms: config.frame_interval_ms,
        audio: AudioConfigView {
            track_path: config.audio.track_path.clone(),
            default_volume: config.audio.default_volume,
        },
    }
}
