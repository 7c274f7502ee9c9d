//! Catalog data model
//!
//! Videos live in the library; playlists refer to them by id.

mod library;
mod playlist;
mod video;

pub use library::VideoLibrary;
pub use playlist::Playlist;
pub use video::Video;
