//! N-API bindings for Node.js
//!
//! Frames and layouts cross the boundary as JSON strings.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::config::JourneyConfig;
use crate::input::parse_birth_year;
use crate::resolver::{load_events, CatalogSource};
use crate::session::Session;

type SessionHandle = Arc<Mutex<Session>>;

fn lock(session: &SessionHandle) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::from_reason(e.to_string()))
}

/// Validate a birth year and build a session for it with the default config
#[napi]
pub fn create_session(birth_year: String) -> Result<External<SessionHandle>> {
    let config = JourneyConfig::default();
    let birth = parse_birth_year(&birth_year, &config).map_err(|e| Error::from_reason(e.to_string()))?;
    let events = futures::executor::block_on(load_events(&CatalogSource::new(), birth.get(), config.max_age));
    Ok(External::new(Arc::new(Mutex::new(Session::new(birth, events, &config)))))
}

#[napi]
pub fn advance_frame(session: External<SessionHandle>, elapsed_secs: f64) -> Result<String> {
    let frame = lock(&session).advance(elapsed_secs);
    to_json(&frame)
}

#[napi]
pub fn get_frame(session: External<SessionHandle>) -> Result<String> {
    to_json(&lock(&session).frame())
}

#[napi]
pub fn get_scene_layout(session: External<SessionHandle>) -> Result<String> {
    to_json(&lock(&session).layout())
}

/// Start, pause or resume. Returns "started", "paused", "resumed" or "finished".
#[napi]
pub fn toggle_time(session: External<SessionHandle>) -> Result<String> {
    let outcome = lock(&session).journey_mut().request_toggle();
    serde_json::to_value(outcome)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| Error::from_reason("unserializable toggle outcome"))
}

#[napi]
pub fn set_paused(session: External<SessionHandle>, paused: bool) {
    lock(&session).journey_mut().set_paused(paused);
}

#[napi]
pub fn cycle_speed(session: External<SessionHandle>) -> u32 {
    lock(&session).journey_mut().cycle_speed()
}

#[napi]
pub fn set_volume(session: External<SessionHandle>, volume: f64) {
    lock(&session).journey_mut().audio_mut().set_volume(volume as f32);
}

#[napi]
pub fn toggle_mute(session: External<SessionHandle>) -> bool {
    lock(&session).journey_mut().audio_mut().toggle_mute()
}

#[napi]
pub fn select_history_event(session: External<SessionHandle>, index: u32) -> bool {
    lock(&session).journey_mut().select_history(index as usize).is_some()
}

#[napi]
pub fn dismiss_event_panel(session: External<SessionHandle>) -> bool {
    lock(&session).journey_mut().dismiss_panel()
}

#[napi(object)]
pub struct JsClock {
    pub age: f64,
    pub year: i32,
    pub speed: u32,
    pub started: bool,
    pub paused: bool,
    pub ended: bool,
}

#[napi]
pub fn get_clock(session: External<SessionHandle>) -> JsClock {
    let s = lock(&session);
    let journey = s.journey();
    JsClock {
        age: journey.age(),
        year: journey.current_year(),
        speed: journey.clock().speed(),
        started: journey.is_started(),
        paused: journey.is_paused(),
        ended: journey.is_ended(),
    }
}

/// End summary as JSON, or null while the journey is still going
#[napi]
pub fn get_summary(session: External<SessionHandle>) -> Result<Option<String>> {
    lock(&session).journey().summary().map(|s| to_json(&s)).transpose()
}
