//! Video Player - in-memory video catalog with playback and playlists
//!
//! This library models a library of videos, a single playback slot,
//! user playlists and content flags, driven one command at a time.

pub mod command;
pub mod config;
pub mod loader;
pub mod model;
pub mod player;

pub use command::Command;
pub use config::PlayerConfig;
pub use player::{Outcome, PlayerError, Report, VideoPlayer};
