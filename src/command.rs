//! Front-end command parsing
//!
//! Turns a line such as `ADD_TO_PLAYLIST my_list amazing_cats_video_id` into a
//! [`Command`]. Verbs are case-insensitive; arguments are whitespace separated.

use crate::player::Report;
use thiserror::Error;

/// A parsed front-end command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    /// Empty term is kept so the player can report it
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: String },
    AllowVideo(String),
    Help,
    Exit,
}

/// Errors from parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a command")]
    Empty,

    #[error("Unknown command: {0}. Type HELP for a list of available commands")]
    Unknown(String),

    #[error("{command} needs a {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

const USAGE: &[&str] = &[
    "Available commands:",
    "  NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
    "  SHOW_ALL_VIDEOS - Lists all videos from the library.",
    "  PLAY <video_id> - Plays specified video.",
    "  PLAY_RANDOM - Plays a random video from the library.",
    "  STOP - Stop the current video.",
    "  PAUSE - Pause the current video.",
    "  CONTINUE - Resume the current paused video.",
    "  SHOW_PLAYING - Displays the title, video_id and tags of the video currently playing.",
    "  CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
    "  ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
    "  REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.",
    "  CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.",
    "  DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
    "  SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
    "  SHOW_ALL_PLAYLISTS - Display all the available playlists.",
    "  SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.",
    "  SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.",
    "  FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.",
    "  ALLOW_VIDEO <video_id> - Removes a flag from a video.",
    "  HELP - Displays help.",
    "  EXIT - Terminates the program execution.",
];

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let arg = |index: usize, command: &'static str, argument: &'static str| {
            args.get(index)
                .map(|value| value.to_string())
                .ok_or(CommandError::MissingArgument { command, argument })
        };

        let command = match verb.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(arg(0, "PLAY", "video_id")?),
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(arg(0, "CREATE_PLAYLIST", "playlist_name")?)
            }
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: arg(0, "ADD_TO_PLAYLIST", "playlist_name")?,
                video_id: arg(1, "ADD_TO_PLAYLIST", "video_id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: arg(0, "REMOVE_FROM_PLAYLIST", "playlist_name")?,
                video_id: arg(1, "REMOVE_FROM_PLAYLIST", "video_id")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(arg(0, "CLEAR_PLAYLIST", "playlist_name")?),
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(arg(0, "DELETE_PLAYLIST", "playlist_name")?)
            }
            "SHOW_PLAYLIST" => Command::ShowPlaylist(arg(0, "SHOW_PLAYLIST", "playlist_name")?),
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos(args.join(" ")),
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag(args.join(" ")),
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: arg(0, "FLAG_VIDEO", "video_id")?,
                reason: args.get(1..).unwrap_or_default().join(" "),
            },
            "ALLOW_VIDEO" => Command::AllowVideo(arg(0, "ALLOW_VIDEO", "video_id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        Ok(command)
    }

    /// Command reference shown by HELP
    pub fn help() -> Report {
        let mut report = Report::new();
        for line in USAGE {
            report.push(*line);
        }
        report
    }
}
