//! Catalog file loader
//!
//! One video per line: `Title | video_id | tag1,tag2`. The tag field is optional.

use crate::model::{Video, VideoLibrary};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and parse a catalog file into a library
pub fn load_library(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalog from {:?}", path);
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;

    let library = parse_library(&text);
    log::info!("Loaded library: {} videos", library.video_count());

    Ok(library)
}

/// Parse catalog text, skipping malformed lines
pub fn parse_library(text: &str) -> VideoLibrary {
    let mut library = VideoLibrary::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed catalog line {}: {:?}", line_number, line);
            continue;
        };

        let id = video.id().to_string();
        if !library.add_video(video) {
            log::warn!(
                "Skipping duplicate video id {:?} on catalog line {}",
                id,
                line_number
            );
        }
    }

    library
}

fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next()?;
    let id = fields.next().filter(|id| !id.is_empty())?;
    let tags = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(title, id, tags))
}
