//! LifePath Journey Engine
//!
//! Walks a chosen birth year through ninety years of history: an age clock
//! drives an event lookup over a built-in catalog, while a small ECS scene
//! reveals props along the path.

pub mod audio;
pub mod catalog;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod frame_runner;
pub mod history;
pub mod input;
pub mod journey;
pub mod overlay;
pub mod resolver;
pub mod scene;
pub mod session;
pub mod systems;

#[cfg(feature = "node")]
pub mod napi_bindings;

pub use components::*;
pub use config::JourneyConfig;
pub use error::{ConfigError, InputError, SourceError};
pub use frame_runner::FrameRunner;
pub use input::{parse_birth_year, BirthYear};
pub use journey::{Journey, JourneySummary, TickResult};
pub use resolver::{load_events, CatalogSource, EventSource};
pub use session::{Frame, FrameSource, Session};
