// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod audio;
mod commands;
mod state;

use std::path::PathBuf;

use journey::JourneyConfig;
use state::AppState;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn load_config() -> JourneyConfig {
    let path = std::env::var_os("LIFEPATH_CONFIG").map(PathBuf::from);
    match JourneyConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config ({}); using defaults", e);
            JourneyConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("LifePath starting...");
    let app_state = AppState::new(load_config());

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Config
            commands::config::get_config,
            // Journey
            commands::journey::submit_birth_year,
            commands::journey::get_scene_layout,
            commands::journey::get_frame,
            commands::journey::advance_frame,
            commands::journey::get_clock_state,
            commands::journey::toggle_time,
            commands::journey::set_paused,
            commands::journey::cycle_speed,
            commands::journey::get_speeds,
            commands::journey::restart_journey,
            commands::journey::exit_app,
            // Overlay
            commands::overlay::select_history_event,
            commands::overlay::dismiss_event_panel,
            // Audio
            commands::audio::get_audio_state,
            commands::audio::toggle_mute,
            commands::audio::set_volume,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
