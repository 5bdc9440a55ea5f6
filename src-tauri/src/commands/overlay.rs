use tauri::State;

use journey::overlay::{panel_view, PanelView};

use crate::state::AppState;

/// Reopen a history entry in the event panel
#[tauri::command]
pub fn select_history_event(state: State<AppState>, index: usize) -> Result<Option<PanelView>, String> {
    state.with_session(|s| {
        let event = s.journey_mut().select_history(index).cloned()?;
        Some(panel_view(&event, s.age_context()))
    })
}

#[tauri::command]
pub fn dismiss_event_panel(state: State<AppState>) -> Result<bool, String> {
    state.with_session(|s| s.journey_mut().dismiss_panel())
}
