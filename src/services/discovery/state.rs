use serde::{Deserialize, Serialize};

use crate::models::{GenreId, MovieSummary};

/// What the user most recently asked for. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryIntent {
    FreeText(String),
    GenreFilter(GenreId),
    Recommended,
}

/// The three mutually exclusive display modes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayMode {
    /// No text, no genre: the popular feed
    #[default]
    Recommended,
    GenreSelected(GenreId),
    /// Text at or above the search threshold
    Searching(String),
}

/// Snapshot of everything the presentation layer observes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoveryState {
    /// Number of the most recent intent; completions from older sessions are discarded
    pub session: u64,
    pub mode: DisplayMode,
    /// Raw text as typed, including sub-threshold input
    pub text: String,
    pub results: Vec<MovieSummary>,
    pub is_loading: bool,
    /// Set when the latest fetch failed and `results` was cleared because of it
    pub last_fetch_failed: bool,
}

impl DiscoveryState {
    /// `None` means Recommended (or free-text search)
    pub fn selected_genre_id(&self) -> Option<GenreId> {
        match self.mode {
            DisplayMode::GenreSelected(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, DisplayMode::Searching(_))
    }
}
