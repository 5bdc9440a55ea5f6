//! End-to-end walks through a whole journey

use futures::executor::block_on;
use journey::catalog::CATALOG;
use journey::clock::ToggleOutcome;
use journey::resolver::resolve;
use journey::{
    load_events, parse_birth_year, BirthYear, CatalogSource, EventSource, HistoricalEvent, InputError,
    JourneyConfig, Session, SourceError,
};

fn session(year: i32) -> Session {
    let config = JourneyConfig::default();
    let birth = BirthYear::new(year, &config).unwrap();
    let events = block_on(load_events(&CatalogSource::new(), year, config.max_age));
    Session::new(birth, events, &config)
}

#[test]
fn resolver_window_for_every_birth_year() {
    for birth_year in 1950..=2020 {
        let events = resolve(CATALOG, birth_year, 90);
        for e in &events {
            assert!(e.year >= birth_year && e.year <= birth_year + 90);
            assert_eq!(e.age as i32, e.year - birth_year);
        }
        assert_eq!(events, resolve(CATALOG, birth_year, 90));
    }
}

#[test]
fn born_1990_sees_2000_at_ten_and_nothing_before_birth() {
    let events = resolve(CATALOG, 1990, 90);
    assert!(events.iter().any(|e| e.year == 2000 && e.age == 10));
    assert!(events.iter().all(|e| e.year != 1989));
}

#[test]
fn full_run_halts_at_ninety() {
    let mut session = session(1990);
    assert_eq!(session.journey_mut().request_toggle(), ToggleOutcome::Started);

    let mut last_age = 0.0;
    let mut ended = false;
    for _ in 0..100_000 {
        let frame = session.advance(0.1);
        let age = session.journey().age();
        assert!(age >= last_age);
        assert!(age <= 90.0);
        last_age = age;
        if frame.tick.ended {
            ended = true;
            break;
        }
    }
    assert!(ended);
    assert_eq!(session.journey().age(), 90.0);

    for _ in 0..10 {
        session.advance(5.0);
        assert_eq!(session.journey().age(), 90.0);
    }

    let frame = session.frame();
    let summary = frame.overlay.summary.expect("summary once ended");
    assert_eq!(summary.birth_year, 1990);
    assert_eq!(summary.final_year, 2080);
    assert_eq!(summary.events_witnessed, session.journey().history().len());
    assert!(frame.overlay.panel.is_none());
    assert_eq!(frame.scene.props.len(), 30);
    assert_eq!(session.journey_mut().request_toggle(), ToggleOutcome::Finished);
}

#[test]
fn history_is_unique_and_newest_first() {
    let mut session = session(1960);
    session.journey_mut().request_toggle();
    while !session.advance(0.25).tick.ended {}

    let history: Vec<&HistoricalEvent> = session.journey().history().iter().collect();
    assert!(!history.is_empty());
    for (i, a) in history.iter().enumerate() {
        for b in &history[i + 1..] {
            assert_ne!(a.key(), b.key());
        }
    }
    assert!(history.windows(2).all(|w| w[0].year >= w[1].year));
}

#[test]
fn pause_freezes_age_and_active_event() {
    let mut session = session(1990);
    session.journey_mut().request_toggle();
    session.advance(31.0); // age ~10.3, year 2000
    assert_eq!(session.journey().current_year(), 2000);
    let active = session.journey().active_event().cloned();
    assert!(active.is_some());

    assert_eq!(session.journey_mut().request_toggle(), ToggleOutcome::Paused);
    let age = session.journey().age();
    for _ in 0..50 {
        session.advance(1.0);
    }
    assert_eq!(session.journey().age(), age);
    assert_eq!(session.journey().active_event().cloned(), active);
}

#[test]
fn speed_cycle_wraps_after_five_presses() {
    let mut session = session(1990);
    let seen: Vec<u32> = (0..5).map(|_| session.journey_mut().cycle_speed()).collect();
    assert_eq!(seen, vec![2, 5, 10, 50, 1]);
}

#[test]
fn mute_restores_chosen_volume() {
    let mut session = session(1990);
    session.journey_mut().audio_mut().set_volume(0.7);
    session.journey_mut().audio_mut().toggle_mute();
    assert_eq!(session.frame().audio.effective_volume(), 0.0);
    session.journey_mut().audio_mut().toggle_mute();
    assert_eq!(session.frame().audio.effective_volume(), 0.7);
}

#[test]
fn invalid_input_creates_nothing() {
    let config = JourneyConfig::default();
    assert!(matches!(
        parse_birth_year("nineteen ninety", &config),
        Err(InputError::NotANumber(_))
    ));
    assert!(matches!(
        parse_birth_year("1949", &config),
        Err(InputError::OutOfRange { .. })
    ));
    assert_eq!(parse_birth_year("2020", &config).map(|b| b.get()), Ok(2020));
}

struct Offline;

impl EventSource for Offline {
    async fn fetch(&self, _: i32, _: u32) -> Result<Vec<HistoricalEvent>, SourceError> {
        Err(SourceError::Unavailable("no network".into()))
    }
}

#[test]
fn failed_source_falls_back_to_catalog() {
    let events = block_on(load_events(&Offline, 1975, 90));
    assert_eq!(events, resolve(CATALOG, 1975, 90));
}
