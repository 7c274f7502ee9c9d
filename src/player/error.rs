//! Rejections returned by player operations
//!
//! Every variant is an expected, recoverable condition; its `Display` is the
//! status line shown to the user.

use std::fmt;
use thiserror::Error;

/// Operation a rejection refers to, rendered as the message prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play,
    Stop,
    Pause,
    Continue,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    Flag,
    Allow,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play => write!(f, "Cannot play video"),
            Action::Stop => write!(f, "Cannot stop video"),
            Action::Pause => write!(f, "Cannot pause video"),
            Action::Continue => write!(f, "Cannot continue video"),
            Action::CreatePlaylist => write!(f, "Cannot create playlist"),
            Action::AddToPlaylist(name) => write!(f, "Cannot add video to {}", name),
            Action::RemoveFromPlaylist(name) => write!(f, "Cannot remove video from {}", name),
            Action::ClearPlaylist(name) => write!(f, "Cannot clear playlist {}", name),
            Action::DeletePlaylist(name) => write!(f, "Cannot delete playlist {}", name),
            Action::ShowPlaylist(name) => write!(f, "Cannot show playlist {}", name),
            Action::Flag => write!(f, "Cannot flag video"),
            Action::Allow => write!(f, "Cannot remove flag from video"),
        }
    }
}

/// Why an operation was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

/// A refused player operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("{action}: {reason}")]
    Rejected { action: Action, reason: Reason },

    #[error("Video already paused: {0}")]
    AlreadyPaused(String),

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("No search results for {0}")]
    NoSearchResults(String),

    #[error("No search term supplied")]
    NoSearchTerm,
}

impl PlayerError {
    pub(crate) fn rejected(action: Action, reason: Reason) -> Self {
        PlayerError::Rejected { action, reason }
    }

    /// The refusal reason, for rejections that carry one
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            PlayerError::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
