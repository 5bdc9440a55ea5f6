pub mod audio;
pub mod config;
pub mod journey;
pub mod overlay;
