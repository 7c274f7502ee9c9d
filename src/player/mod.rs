//! Video player state machine
//!
//! `VideoPlayer` owns the catalog, the playback state and the playlist
//! registry. Every operation runs to completion and returns either the
//! status lines to show or a [`PlayerError`] describing why nothing changed.

mod error;
mod report;
mod search;

pub use error::{Action, PlayerError, Reason};
pub use report::Report;
pub use search::SearchResults;

use crate::command::Command;
use crate::config::PlayerConfig;
use crate::loader::load_library;
use crate::model::{Playlist, Video, VideoLibrary};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::HashMap;

/// Result of a player operation
pub type Outcome = std::result::Result<Report, PlayerError>;

/// Playback state, holding the id of the active video
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl Playback {
    /// Id of the playing or paused video
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Playback::Stopped => None,
            Playback::Playing(id) | Playback::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Playback::Paused(_))
    }
}

/// Reason stored when the user gives none
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Blank reasons become [`DEFAULT_FLAG_REASON`]; spaces become underscores.
pub fn normalize_flag_reason(reason: &str) -> String {
    let reason = reason.trim();
    if reason.is_empty() {
        DEFAULT_FLAG_REASON.to_string()
    } else {
        reason.replace(' ', "_")
    }
}

pub struct VideoPlayer {
    library: VideoLibrary,
    playback: Playback,
    /// Keyed by lowercased name
    playlists: HashMap<String, Playlist>,
    rng: StdRng,
}

impl VideoPlayer {
    /// Create a player over `library`, seeding random play from the OS
    pub fn new(library: VideoLibrary) -> Self {
        Self::with_rng(library, StdRng::from_os_rng())
    }

    /// Create a player whose random play is reproducible
    pub fn with_seed(library: VideoLibrary, seed: u64) -> Self {
        Self::with_rng(library, StdRng::seed_from_u64(seed))
    }

    /// Load the configured catalog and build a player over it
    pub fn from_config(config: &PlayerConfig) -> Result<Self> {
        let library = load_library(&config.library_path)?;
        Ok(match config.random_seed {
            Some(seed) => Self::with_seed(library, seed),
            None => Self::new(library),
        })
    }

    fn with_rng(library: VideoLibrary, rng: StdRng) -> Self {
        Self {
            library,
            playback: Playback::Stopped,
            playlists: HashMap::new(),
            rng,
        }
    }

    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// The playing or paused video, resolved through the library
    pub fn currently_playing(&self) -> Option<&Video> {
        self.playback
            .video_id()
            .and_then(|id| self.library.get_video(id))
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::key(name))
    }

    // ---- Catalog ----

    pub fn number_of_videos(&self) -> Outcome {
        Ok(Report::line(format!(
            "{} videos in the library",
            self.library.video_count()
        )))
    }

    /// Every video, sorted by display string
    pub fn show_all_videos(&self) -> Outcome {
        let mut listing: Vec<String> = self.library.videos().map(Video::to_string).collect();
        listing.sort();

        let mut report = Report::line("Here's a list of all available videos:");
        for line in listing {
            report.push(format!("  {}", line));
        }
        Ok(report)
    }

    // ---- Playback ----

    pub fn play_video(&mut self, video_id: &str) -> Outcome {
        let video = self
            .library
            .get_video(video_id)
            .ok_or_else(|| PlayerError::rejected(Action::Play, Reason::VideoNotFound))?;
        if let Some(reason) = video.flagged() {
            return Err(PlayerError::rejected(
                Action::Play,
                Reason::VideoFlagged(reason.to_string()),
            ));
        }
        let title = video.title().to_string();

        let mut report = Report::new();
        if let Some(line) = self.stop_current() {
            report.push(line);
        }

        log::debug!("Playback: playing {}", video_id);
        self.playback = Playback::Playing(video_id.to_string());
        report.push(format!("Playing video: {}", title));
        Ok(report)
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random_video(&mut self) -> Outcome {
        let mut candidates: Vec<&str> = self
            .library
            .videos()
            .filter(|video| !video.is_flagged())
            .map(Video::id)
            .collect();
        // HashMap order varies between runs; sort so a seed gives a fixed pick.
        candidates.sort_unstable();

        let chosen = candidates
            .choose(&mut self.rng)
            .map(|id| id.to_string())
            .ok_or(PlayerError::NoVideosAvailable)?;
        self.play_video(&chosen)
    }

    pub fn stop_video(&mut self) -> Outcome {
        self.stop_current()
            .map(Report::line)
            .ok_or_else(|| PlayerError::rejected(Action::Stop, Reason::NothingPlaying))
    }

    pub fn pause_video(&mut self) -> Outcome {
        let (id, paused) = match &self.playback {
            Playback::Stopped => {
                return Err(PlayerError::rejected(Action::Pause, Reason::NothingPlaying))
            }
            Playback::Playing(id) => (id.clone(), false),
            Playback::Paused(id) => (id.clone(), true),
        };
        let title = self.title_of(&id);
        if paused {
            return Err(PlayerError::AlreadyPaused(title));
        }

        log::debug!("Playback: paused {}", id);
        self.playback = Playback::Paused(id);
        Ok(Report::line(format!("Pausing video: {}", title)))
    }

    pub fn continue_video(&mut self) -> Outcome {
        let id = match &self.playback {
            Playback::Stopped => {
                return Err(PlayerError::rejected(
                    Action::Continue,
                    Reason::NothingPlaying,
                ))
            }
            Playback::Playing(_) => {
                return Err(PlayerError::rejected(Action::Continue, Reason::NotPaused))
            }
            Playback::Paused(id) => id.clone(),
        };
        let title = self.title_of(&id);

        log::debug!("Playback: resumed {}", id);
        self.playback = Playback::Playing(id);
        Ok(Report::line(format!("Continuing video: {}", title)))
    }

    pub fn show_playing(&self) -> Outcome {
        let line = match self.currently_playing() {
            None => "No video is currently playing".to_string(),
            Some(video) if self.playback.is_paused() => {
                format!("Currently playing: {} - PAUSED", video)
            }
            Some(video) => format!("Currently playing: {}", video),
        };
        Ok(Report::line(line))
    }

    /// Stop whatever is active, returning the status line if anything was
    fn stop_current(&mut self) -> Option<String> {
        let id = self.playback.video_id()?.to_string();
        let title = self.title_of(&id);

        log::debug!("Playback: stopped {}", id);
        self.playback = Playback::Stopped;
        Some(format!("Stopping video: {}", title))
    }

    fn title_of(&self, video_id: &str) -> String {
        self.library
            .get_video(video_id)
            .map(|video| video.title().to_string())
            .unwrap_or_else(|| video_id.to_string())
    }

    // ---- Playlists ----

    pub fn create_playlist(&mut self, playlist_name: &str) -> Outcome {
        let key = Playlist::key(playlist_name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::rejected(
                Action::CreatePlaylist,
                Reason::PlaylistExists,
            ));
        }

        log::debug!("Created playlist {:?}", playlist_name);
        self.playlists
            .insert(key, Playlist::new(playlist_name.to_string()));
        Ok(Report::line(format!(
            "Successfully created new playlist: {}",
            playlist_name
        )))
    }

    pub fn add_to_playlist(&mut self, playlist_name: &str, video_id: &str) -> Outcome {
        let reject = |reason| {
            PlayerError::rejected(Action::AddToPlaylist(playlist_name.to_string()), reason)
        };

        let playlist = self
            .playlists
            .get_mut(&Playlist::key(playlist_name))
            .ok_or_else(|| reject(Reason::PlaylistNotFound))?;
        let video = self
            .library
            .get_video(video_id)
            .ok_or_else(|| reject(Reason::VideoNotFound))?;
        if let Some(reason) = video.flagged() {
            return Err(reject(Reason::VideoFlagged(reason.to_string())));
        }
        if !playlist.add_video(video_id) {
            return Err(reject(Reason::AlreadyInPlaylist));
        }

        Ok(Report::line(format!(
            "Added video to {}: {}",
            playlist_name,
            video.title()
        )))
    }

    /// Playlist names, sorted ignoring case
    pub fn show_all_playlists(&self) -> Outcome {
        if self.playlists.is_empty() {
            return Ok(Report::line("No playlists exist yet"));
        }

        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name.as_str()).collect();
        names.sort_by_key(|name| (name.to_lowercase(), *name));

        let mut report = Report::line("Showing all playlists:");
        for name in names {
            report.push(format!("  {}", name));
        }
        Ok(report)
    }

    pub fn show_playlist(&self, playlist_name: &str) -> Outcome {
        let playlist = self.playlist(playlist_name).ok_or_else(|| {
            PlayerError::rejected(
                Action::ShowPlaylist(playlist_name.to_string()),
                Reason::PlaylistNotFound,
            )
        })?;

        let mut report = Report::line(format!("Showing playlist: {}", playlist_name));
        if playlist.is_empty() {
            report.push("  No videos here yet");
        }
        for video in playlist
            .video_ids()
            .filter_map(|id| self.library.get_video(id))
        {
            report.push(format!("  {}", video));
        }
        Ok(report)
    }

    pub fn remove_from_playlist(&mut self, playlist_name: &str, video_id: &str) -> Outcome {
        let reject = |reason| {
            PlayerError::rejected(
                Action::RemoveFromPlaylist(playlist_name.to_string()),
                reason,
            )
        };

        let playlist = self
            .playlists
            .get_mut(&Playlist::key(playlist_name))
            .ok_or_else(|| reject(Reason::PlaylistNotFound))?;
        let video = self
            .library
            .get_video(video_id)
            .ok_or_else(|| reject(Reason::VideoNotFound))?;
        if !playlist.remove_video(video_id) {
            return Err(reject(Reason::NotInPlaylist));
        }

        Ok(Report::line(format!(
            "Removed video from {}: {}",
            playlist_name,
            video.title()
        )))
    }

    pub fn clear_playlist(&mut self, playlist_name: &str) -> Outcome {
        let playlist = self
            .playlists
            .get_mut(&Playlist::key(playlist_name))
            .ok_or_else(|| {
                PlayerError::rejected(
                    Action::ClearPlaylist(playlist_name.to_string()),
                    Reason::PlaylistNotFound,
                )
            })?;

        playlist.clear();
        Ok(Report::line(format!(
            "Successfully removed all videos from {}",
            playlist_name
        )))
    }

    pub fn delete_playlist(&mut self, playlist_name: &str) -> Outcome {
        if self.playlists.remove(&Playlist::key(playlist_name)).is_none() {
            return Err(PlayerError::rejected(
                Action::DeletePlaylist(playlist_name.to_string()),
                Reason::PlaylistNotFound,
            ));
        }

        log::debug!("Deleted playlist {:?}", playlist_name);
        Ok(Report::line(format!("Deleted playlist: {}", playlist_name)))
    }

    // ---- Search ----

    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn search_videos(&self, term: &str) -> Result<SearchResults, PlayerError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(PlayerError::NoSearchTerm);
        }

        let needle = term.to_lowercase();
        self.search(term, |video| video.title().to_lowercase().contains(&needle))
    }

    /// Unflagged videos carrying exactly `tag`, ignoring case
    pub fn search_videos_tag(&self, tag: &str) -> Result<SearchResults, PlayerError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(PlayerError::NoSearchTerm);
        }

        self.search(tag, |video| video.has_tag(tag))
    }

    fn search(
        &self,
        term: &str,
        matches: impl Fn(&Video) -> bool,
    ) -> Result<SearchResults, PlayerError> {
        let results = SearchResults::new(
            term,
            self.library
                .videos()
                .filter(|video| !video.is_flagged() && matches(*video)),
        );

        if results.is_empty() {
            return Err(PlayerError::NoSearchResults(term.to_string()));
        }
        Ok(results)
    }

    // ---- Flags ----

    pub fn flag_video(&mut self, video_id: &str, reason: &str) -> Outcome {
        let video = self
            .library
            .get_video(video_id)
            .ok_or_else(|| PlayerError::rejected(Action::Flag, Reason::VideoNotFound))?;
        if video.is_flagged() {
            return Err(PlayerError::rejected(Action::Flag, Reason::AlreadyFlagged));
        }
        let title = video.title().to_string();
        let reason = normalize_flag_reason(reason);

        let mut report = Report::new();
        if self.playback.video_id() == Some(video_id) {
            if let Some(line) = self.stop_current() {
                report.push(line);
            }
        }

        if let Some(video) = self.library.get_video_mut(video_id) {
            video.flag(reason.as_str());
        }
        log::debug!("Flagged {} ({})", video_id, reason);
        report.push(format!(
            "Successfully flagged video: {} (reason: {})",
            title, reason
        ));
        Ok(report)
    }

    pub fn allow_video(&mut self, video_id: &str) -> Outcome {
        let video = self
            .library
            .get_video_mut(video_id)
            .ok_or_else(|| PlayerError::rejected(Action::Allow, Reason::VideoNotFound))?;
        if !video.is_flagged() {
            return Err(PlayerError::rejected(Action::Allow, Reason::NotFlagged));
        }

        video.allow();
        log::debug!("Allowed {}", video_id);
        Ok(Report::line(format!(
            "Successfully removed flag from video: {}",
            video.title()
        )))
    }

    // ---- Dispatch ----

    /// Run a parsed command
    ///
    /// Searches return the listing and prompt only; answering the prompt is
    /// left to the caller via [`SearchResults::select`] and [`Self::play_video`].
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::NumberOfVideos => self.number_of_videos(),
            Command::ShowAllVideos => self.show_all_videos(),
            Command::Play(id) => self.play_video(&id),
            Command::PlayRandom => self.play_random_video(),
            Command::Stop => self.stop_video(),
            Command::Pause => self.pause_video(),
            Command::Continue => self.continue_video(),
            Command::ShowPlaying => self.show_playing(),
            Command::CreatePlaylist(name) => self.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                self.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => self.clear_playlist(&name),
            Command::DeletePlaylist(name) => self.delete_playlist(&name),
            Command::ShowPlaylist(name) => self.show_playlist(&name),
            Command::ShowAllPlaylists => self.show_all_playlists(),
            Command::SearchVideos(term) => self.search_videos(&term).map(|r| r.report()),
            Command::SearchVideosWithTag(tag) => {
                self.search_videos_tag(&tag).map(|r| r.report())
            }
            Command::FlagVideo { video_id, reason } => self.flag_video(&video_id, &reason),
            Command::AllowVideo(id) => self.allow_video(&id),
            Command::Help => Ok(Command::help()),
            Command::Exit => Ok(Report::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn test_player() -> VideoPlayer {
        let library: VideoLibrary = [
            Video::new("Amazing Cats", "amazing_cats_video_id", tags(&["#cat", "#animal"])),
            Video::new("Another Cat Video", "another_cat_video_id", tags(&["#cat", "#animal"])),
            Video::new("Funny Dogs", "funny_dogs_video_id", tags(&["#dog", "#animal"])),
            Video::new("Life at Google", "life_at_google_video_id", tags(&["#google", "#career"])),
            Video::new("Video about nothing", "nothing_video_id", Vec::new()),
        ]
        .into_iter()
        .collect();
        VideoPlayer::with_seed(library, 7)
    }

    fn lines(outcome: Outcome) -> Vec<String> {
        outcome.unwrap().lines().to_vec()
    }

    fn message(outcome: Outcome) -> String {
        outcome.unwrap_err().to_string()
    }

    #[test]
    fn test_normalize_flag_reason() {
        assert_eq!(normalize_flag_reason(""), "Not supplied");
        assert_eq!(normalize_flag_reason("   "), "Not supplied");
        assert_eq!(normalize_flag_reason("bad content"), "bad_content");
    }

    #[test]
    fn test_number_of_videos() {
        let player = test_player();
        assert_eq!(lines(player.number_of_videos()), vec!["5 videos in the library"]);
    }

    #[test]
    fn test_show_all_videos_sorted() {
        let player = test_player();
        assert_eq!(
            lines(player.show_all_videos()),
            vec![
                "Here's a list of all available videos:",
                "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
                "  Another Cat Video (another_cat_video_id) [#cat #animal]",
                "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
                "  Life at Google (life_at_google_video_id) [#google #career]",
                "  Video about nothing (nothing_video_id) []",
            ]
        );
    }

    #[test]
    fn test_play_transitions() {
        let mut player = test_player();
        assert_eq!(
            lines(player.play_video("amazing_cats_video_id")),
            vec!["Playing video: Amazing Cats"]
        );
        assert_eq!(
            player.playback(),
            &Playback::Playing("amazing_cats_video_id".to_string())
        );

        assert_eq!(
            lines(player.play_video("funny_dogs_video_id")),
            vec!["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]
        );
        assert_eq!(player.currently_playing().unwrap().title(), "Funny Dogs");
    }

    #[test]
    fn test_play_unpauses() {
        let mut player = test_player();
        player.play_video("amazing_cats_video_id").unwrap();
        player.pause_video().unwrap();
        player.play_video("funny_dogs_video_id").unwrap();
        assert!(!player.playback().is_paused());
    }

    #[test]
    fn test_play_missing_video_keeps_state() {
        let mut player = test_player();
        player.play_video("amazing_cats_video_id").unwrap();

        assert_eq!(
            message(player.play_video("does_not_exist")),
            "Cannot play video: Video does not exist"
        );
        assert_eq!(player.currently_playing().unwrap().id(), "amazing_cats_video_id");
    }

    #[test]
    fn test_pause_and_continue() {
        let mut player = test_player();
        assert_eq!(
            message(player.pause_video()),
            "Cannot pause video: No video is currently playing"
        );
        assert_eq!(
            message(player.continue_video()),
            "Cannot continue video: No video is currently playing"
        );

        player.play_video("funny_dogs_video_id").unwrap();
        assert_eq!(
            message(player.continue_video()),
            "Cannot continue video: Video is not paused"
        );
        assert_eq!(lines(player.pause_video()), vec!["Pausing video: Funny Dogs"]);
        assert_eq!(message(player.pause_video()), "Video already paused: Funny Dogs");
        assert_eq!(
            lines(player.show_playing()),
            vec!["Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED"]
        );
        assert_eq!(lines(player.continue_video()), vec!["Continuing video: Funny Dogs"]);
        assert_eq!(
            lines(player.show_playing()),
            vec!["Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal]"]
        );
    }

    #[test]
    fn test_stop() {
        let mut player = test_player();
        assert_eq!(
            message(player.stop_video()),
            "Cannot stop video: No video is currently playing"
        );

        player.play_video("nothing_video_id").unwrap();
        player.pause_video().unwrap();
        assert_eq!(lines(player.stop_video()), vec!["Stopping video: Video about nothing"]);
        assert_eq!(player.playback(), &Playback::Stopped);
        assert_eq!(lines(player.show_playing()), vec!["No video is currently playing"]);
        assert!(player.stop_video().is_err());
    }

    #[test]
    fn test_play_random_skips_flagged() {
        let mut player = test_player();
        for id in [
            "amazing_cats_video_id",
            "another_cat_video_id",
            "funny_dogs_video_id",
            "life_at_google_video_id",
        ] {
            player.flag_video(id, "").unwrap();
        }

        for _ in 0..10 {
            player.play_random_video().unwrap();
            assert_eq!(player.currently_playing().unwrap().id(), "nothing_video_id");
        }

        player.flag_video("nothing_video_id", "").unwrap();
        assert_eq!(player.play_random_video(), Err(PlayerError::NoVideosAvailable));
        assert_eq!(player.playback(), &Playback::Stopped);
    }

    #[test]
    fn test_play_random_with_seed_is_reproducible() {
        let mut first = test_player();
        let mut second = test_player();
        for _ in 0..5 {
            first.play_random_video().unwrap();
            second.play_random_video().unwrap();
            assert_eq!(first.playback(), second.playback());
        }
    }

    #[test]
    fn test_playlist_lifecycle() {
        let mut player = test_player();
        assert_eq!(lines(player.show_all_playlists()), vec!["No playlists exist yet"]);

        assert_eq!(
            lines(player.create_playlist("My Playlist")),
            vec!["Successfully created new playlist: My Playlist"]
        );
        assert_eq!(
            message(player.create_playlist("my PLAYLIST")),
            "Cannot create playlist: A playlist with the same name already exists"
        );

        assert_eq!(
            lines(player.add_to_playlist("MY PLAYLIST", "amazing_cats_video_id")),
            vec!["Added video to MY PLAYLIST: Amazing Cats"]
        );
        assert_eq!(
            message(player.add_to_playlist("my playlist", "amazing_cats_video_id")),
            "Cannot add video to my playlist: Video already added"
        );
        assert_eq!(player.playlist("My Playlist").unwrap().len(), 1);

        assert_eq!(
            lines(player.show_playlist("my playlist")),
            vec![
                "Showing playlist: my playlist",
                "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            ]
        );

        assert_eq!(
            lines(player.clear_playlist("My Playlist")),
            vec!["Successfully removed all videos from My Playlist"]
        );
        assert_eq!(
            lines(player.show_playlist("My Playlist")),
            vec!["Showing playlist: My Playlist", "  No videos here yet"]
        );

        assert_eq!(
            lines(player.delete_playlist("my playlist")),
            vec!["Deleted playlist: my playlist"]
        );
        assert!(player.playlist("My Playlist").is_none());
        assert_eq!(
            message(player.delete_playlist("my playlist")),
            "Cannot delete playlist my playlist: Playlist does not exist"
        );
    }

    #[test]
    fn test_add_to_playlist_check_order() {
        let mut player = test_player();
        assert_eq!(
            message(player.add_to_playlist("missing", "does_not_exist")),
            "Cannot add video to missing: Playlist does not exist"
        );

        player.create_playlist("list").unwrap();
        assert_eq!(
            message(player.add_to_playlist("list", "does_not_exist")),
            "Cannot add video to list: Video does not exist"
        );

        player.flag_video("funny_dogs_video_id", "dont like dogs").unwrap();
        assert_eq!(
            message(player.add_to_playlist("list", "funny_dogs_video_id")),
            "Cannot add video to list: Video is currently flagged (reason: dont_like_dogs)"
        );
        assert!(player.playlist("list").unwrap().is_empty());
    }

    #[test]
    fn test_remove_from_playlist() {
        let mut player = test_player();
        assert_eq!(
            message(player.remove_from_playlist("list", "amazing_cats_video_id")),
            "Cannot remove video from list: Playlist does not exist"
        );

        player.create_playlist("list").unwrap();
        assert_eq!(
            message(player.remove_from_playlist("list", "does_not_exist")),
            "Cannot remove video from list: Video does not exist"
        );

        player.add_to_playlist("list", "amazing_cats_video_id").unwrap();
        assert_eq!(
            lines(player.remove_from_playlist("list", "amazing_cats_video_id")),
            vec!["Removed video from list: Amazing Cats"]
        );
        assert_eq!(
            message(player.remove_from_playlist("list", "amazing_cats_video_id")),
            "Cannot remove video from list: Video is not in playlist"
        );
    }

    #[test]
    fn test_show_all_playlists_sorted_ignoring_case() {
        let mut player = test_player();
        player.create_playlist("beta").unwrap();
        player.create_playlist("Alpha").unwrap();
        player.create_playlist("Gamma").unwrap();

        assert_eq!(
            lines(player.show_all_playlists()),
            vec!["Showing all playlists:", "  Alpha", "  beta", "  Gamma"]
        );
    }

    #[test]
    fn test_flagged_video_shown_in_playlist() {
        let mut player = test_player();
        player.create_playlist("list").unwrap();
        player.add_to_playlist("list", "nothing_video_id").unwrap();
        player.flag_video("nothing_video_id", "boring").unwrap();

        assert_eq!(
            lines(player.show_playlist("list"))[1],
            "  Video about nothing (nothing_video_id) [] - FLAGGED (reason: boring)"
        );
    }

    #[test]
    fn test_search_by_title() {
        let player = test_player();
        let results = player.search_videos("CAT").unwrap();
        assert_eq!(
            results.video_ids().collect::<Vec<_>>(),
            vec!["amazing_cats_video_id", "another_cat_video_id"]
        );

        assert_eq!(
            player.search_videos("zzz_no_match"),
            Err(PlayerError::NoSearchResults("zzz_no_match".to_string()))
        );
        assert_eq!(player.search_videos(""), Err(PlayerError::NoSearchTerm));
    }

    #[test]
    fn test_search_by_tag_is_exact() {
        let player = test_player();
        let results = player.search_videos_tag("#ANIMAL").unwrap();
        assert_eq!(results.len(), 3);

        assert!(player.search_videos_tag("#anim").is_err());
        assert_eq!(player.search_videos_tag("  "), Err(PlayerError::NoSearchTerm));
    }

    #[test]
    fn test_search_non_ascii_case() {
        let library: VideoLibrary = [Video::new("Été Vibes", "ete_video_id", tags(&["#été"]))]
            .into_iter()
            .collect();
        let player = VideoPlayer::with_seed(library, 1);

        assert_eq!(player.search_videos("ÉTÉ").unwrap().len(), 1);
        assert_eq!(
            player
                .search_videos_tag("#ÉTÉ")
                .unwrap()
                .video_ids()
                .collect::<Vec<_>>(),
            vec!["ete_video_id"]
        );
    }

    #[test]
    fn test_show_playlist_keeps_insertion_order() {
        let mut player = test_player();
        player.create_playlist("list").unwrap();
        player.add_to_playlist("list", "nothing_video_id").unwrap();
        player.add_to_playlist("list", "amazing_cats_video_id").unwrap();
        player.add_to_playlist("list", "funny_dogs_video_id").unwrap();

        assert_eq!(
            lines(player.show_playlist("list")),
            vec![
                "Showing playlist: list",
                "  Video about nothing (nothing_video_id) []",
                "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
                "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            ]
        );
    }

    #[test]
    fn test_show_all_videos_includes_flag_in_sort_key() {
        let library: VideoLibrary = [
            Video::new("Intro", "intro", Vec::new()),
            Video::new("Intro (intro) [] !", "intro_remix", Vec::new()),
        ]
        .into_iter()
        .collect();
        let mut player = VideoPlayer::with_seed(library, 1);

        assert_eq!(
            lines(player.show_all_videos()),
            vec![
                "Here's a list of all available videos:",
                "  Intro (intro) []",
                "  Intro (intro) [] ! (intro_remix) []",
            ]
        );

        player.flag_video("intro", "x").unwrap();
        assert_eq!(
            lines(player.show_all_videos()),
            vec![
                "Here's a list of all available videos:",
                "  Intro (intro) [] ! (intro_remix) []",
                "  Intro (intro) [] - FLAGGED (reason: x)",
            ]
        );
    }

    #[test]
    fn test_show_all_videos_with_flagged_entry() {
        let mut player = test_player();
        player.flag_video("another_cat_video_id", "").unwrap();

        assert_eq!(
            lines(player.show_all_videos()),
            vec![
                "Here's a list of all available videos:",
                "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
                "  Another Cat Video (another_cat_video_id) [#cat #animal] - FLAGGED (reason: Not supplied)",
                "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
                "  Life at Google (life_at_google_video_id) [#google #career]",
                "  Video about nothing (nothing_video_id) []",
            ]
        );
    }

    #[test]
    fn test_search_excludes_flagged() {
        let mut player = test_player();
        player.flag_video("amazing_cats_video_id", "").unwrap();

        let results = player.search_videos_tag("#cat").unwrap();
        assert_eq!(
            results.video_ids().collect::<Vec<_>>(),
            vec!["another_cat_video_id"]
        );

        player.flag_video("another_cat_video_id", "").unwrap();
        assert!(player.search_videos("cat").is_err());
    }

    #[test]
    fn test_flag_stops_current_video() {
        let mut player = test_player();
        player.play_video("amazing_cats_video_id").unwrap();
        player.pause_video().unwrap();

        assert_eq!(
            lines(player.flag_video("amazing_cats_video_id", "dont like cats")),
            vec![
                "Stopping video: Amazing Cats",
                "Successfully flagged video: Amazing Cats (reason: dont_like_cats)",
            ]
        );
        assert_eq!(player.playback(), &Playback::Stopped);
    }

    #[test]
    fn test_flag_other_video_keeps_playing() {
        let mut player = test_player();
        player.play_video("amazing_cats_video_id").unwrap();

        assert_eq!(
            lines(player.flag_video("funny_dogs_video_id", "")),
            vec!["Successfully flagged video: Funny Dogs (reason: Not supplied)"]
        );
        assert_eq!(player.currently_playing().unwrap().id(), "amazing_cats_video_id");
    }

    #[test]
    fn test_flag_errors() {
        let mut player = test_player();
        assert_eq!(
            message(player.flag_video("does_not_exist", "x")),
            "Cannot flag video: Video does not exist"
        );

        player.flag_video("funny_dogs_video_id", "first").unwrap();
        assert_eq!(
            message(player.flag_video("funny_dogs_video_id", "second")),
            "Cannot flag video: Video is already flagged"
        );
        assert_eq!(
            player.library().get_video("funny_dogs_video_id").unwrap().flagged(),
            Some("first")
        );
    }

    #[test]
    fn test_flag_allow_round_trip() {
        let mut player = test_player();
        player.flag_video("funny_dogs_video_id", "bad content").unwrap();
        assert_eq!(
            message(player.play_video("funny_dogs_video_id")),
            "Cannot play video: Video is currently flagged (reason: bad_content)"
        );

        assert_eq!(
            lines(player.allow_video("funny_dogs_video_id")),
            vec!["Successfully removed flag from video: Funny Dogs"]
        );
        assert!(player
            .library()
            .get_video("funny_dogs_video_id")
            .unwrap()
            .flagged()
            .is_none());
        assert!(player.play_video("funny_dogs_video_id").is_ok());
    }

    #[test]
    fn test_allow_errors() {
        let mut player = test_player();
        assert_eq!(
            message(player.allow_video("does_not_exist")),
            "Cannot remove flag from video: Video does not exist"
        );
        assert_eq!(
            message(player.allow_video("funny_dogs_video_id")),
            "Cannot remove flag from video: Video is not flagged"
        );
    }

    #[test]
    fn test_execute_dispatches() {
        let mut player = test_player();
        player
            .execute(Command::CreatePlaylist("list".to_string()))
            .unwrap();
        player
            .execute(Command::AddToPlaylist {
                playlist: "list".to_string(),
                video_id: "nothing_video_id".to_string(),
            })
            .unwrap();
        assert_eq!(player.playlist("list").unwrap().len(), 1);

        let report = player
            .execute(Command::SearchVideos("google".to_string()))
            .unwrap();
        assert_eq!(
            report.lines()[1],
            "  1) Life at Google (life_at_google_video_id) [#google #career]"
        );
    }
}
