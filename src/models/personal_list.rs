use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::MovieId;

/// The user's personal movie lists. Each kind is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Favorites,
    Watchlist,
    Watched,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Favorites => "favorites",
            ListKind::Watchlist => "watchlist",
            ListKind::Watched => "watched",
        }
    }
}

impl Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a movie is on one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMembership {
    pub list: ListKind,
    pub movie_id: MovieId,
    pub in_list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_serde() {
        for kind in [ListKind::Favorites, ListKind::Watchlist, ListKind::Watched] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.as_str()));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_value::<ListKind>(serde_json::json!("blocked")).is_err());
    }
}
