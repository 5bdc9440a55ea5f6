use tauri::State;

use journey::audio::AudioSettings;

use crate::state::{AppState, AudioState};

fn audio_state(settings: &AudioSettings) -> AudioState {
    AudioState {
        volume: settings.volume(),
        muted: settings.is_muted(),
        effective_volume: settings.effective_volume(),
    }
}

#[tauri::command]
pub fn get_audio_state(state: State<AppState>) -> Result<AudioState, String> {
    state.with_session(|s| audio_state(s.journey().audio()))
}

#[tauri::command]
pub fn toggle_mute(state: State<AppState>) -> Result<AudioState, String> {
    let audio = state.with_session(|s| {
        s.journey_mut().audio_mut().toggle_mute();
        audio_state(s.journey().audio())
    })?;
    state.sync_audio(audio.effective_volume);
    Ok(audio)
}

#[tauri::command]
pub fn set_volume(state: State<AppState>, volume: f32) -> Result<AudioState, String> {
    let audio = state.with_session(|s| {
        s.journey_mut().audio_mut().set_volume(volume);
        audio_state(s.journey().audio())
    })?;
    state.sync_audio(audio.effective_volume);
    Ok(audio)
}
