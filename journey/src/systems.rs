//! ECS Systems - run over the scene world each frame

pub mod drift;
pub mod reveal;
pub mod spin;

pub use drift::drift_system;
pub use reveal::reveal_system;
pub use spin::spin_system;
