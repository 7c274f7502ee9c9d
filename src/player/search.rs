//! Search result listing and numbered follow-up selection

use super::Report;
use crate::model::Video;

/// Matches of a search, sorted by display string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    term: String,
    /// (video id, display string), in presentation order
    entries: Vec<(String, String)>,
}

impl SearchResults {
    pub(crate) fn new<'a>(term: &str, matches: impl Iterator<Item = &'a Video>) -> Self {
        let mut entries: Vec<(String, String)> = matches
            .map(|video| (video.id().to_string(), video.to_string()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1));

        Self {
            term: term.to_string(),
            entries,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Matching video ids in presentation order
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a 1-based answer to the follow-up prompt
    ///
    /// Anything that is not a number within range means "no".
    pub fn select(&self, choice: &str) -> Option<&str> {
        let number: usize = choice.trim().parse().ok()?;
        let index = number.checked_sub(1)?;
        self.entries.get(index).map(|(id, _)| id.as_str())
    }

    /// Numbered listing followed by the play prompt
    pub fn report(&self) -> Report {
        let mut report = Report::line(format!("Here are the results for {}:", self.term));
        for (number, (_, display)) in self.entries.iter().enumerate() {
            report.push(format!("  {}) {}", number + 1, display));
        }
        report.push("Would you like to play any of the above? If yes, specify the number of the video.");
        report.push("If your answer is not a valid number, we will assume it's a no.");
        report
    }
}
