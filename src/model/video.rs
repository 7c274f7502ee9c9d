use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry
///
/// Title, id and tags are fixed at construction; only the flag state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video title
    title: String,

    /// Unique identifier within the library
    id: String,

    /// Tags in catalog order (lowercase by convention)
    tags: Vec<String>,

    /// Flag reason, `None` when the video is allowed
    flagged: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new(title: impl Into<String>, id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            tags,
            flagged: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Flag reason, or `None` if the video is not flagged
    pub fn flagged(&self) -> Option<&str> {
        self.flagged.as_deref()
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged.is_some()
    }

    /// Mark the video as flagged, replacing any previous reason
    ///
    /// The reason is stored as given; normalisation is up to the caller.
    pub fn flag(&mut self, reason: impl Into<String>) {
        self.flagged = Some(reason.into());
    }

    /// Clear the flag
    pub fn allow(&mut self) {
        self.flagged = None;
    }

    /// Whether any tag equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if let Some(reason) = &self.flagged {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}
