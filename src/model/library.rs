use super::Video;
use std::collections::HashMap;

/// Catalog of every known video, indexed by id
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the library
    ///
    /// Returns `false` without replacing anything if the id is already taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.videos.contains_key(video.id()) {
            return false;
        }
        self.videos.insert(video.id().to_string(), video);
        true
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    pub(crate) fn get_video_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// Get all videos, in no particular order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for VideoLibrary {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Self::new();
        for video in iter {
            library.add_video(video);
        }
        library
    }
}
