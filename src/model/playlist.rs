use serde::{Deserialize, Serialize};

/// A named, ordered set of videos
///
/// Videos are referenced by id so flag changes in the library stay visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, as the user typed it on creation
    pub name: String,

    /// Video ids in insertion order, no duplicates
    entries: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Registry key for a playlist name
    pub fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Append a video to this playlist
    ///
    /// Returns `false` and leaves the playlist untouched if the id is already present.
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.entries.push(video_id.to_string());
        true
    }

    /// Remove a video by id, returning whether it was present
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.entries.iter().position(|id| id == video_id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.entries.iter().any(|id| id == video_id)
    }

    /// Remove every video
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Video ids in insertion order
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
