use serde::{Deserialize, Serialize};

use super::GenreId;

/// Catalog identifier for a movie
pub type MovieId = u64;

/// Placeholder year for movies without a release date
pub const UNKNOWN_YEAR: &str = "N/A";

/// One entry of a result list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// Four-digit year, or "N/A"
    pub release_year: String,
    /// Display label of the primary genre, empty until resolved against the genre catalog
    pub genre: String,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    pub rating: f32,
    pub poster_url: Option<String>,
    #[serde(default)]
    pub overview: String,
}

impl MovieSummary {
    /// Creates a summary with only the fields every result carries
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_year: UNKNOWN_YEAR.to_string(),
            genre: String::new(),
            genre_ids: Vec::new(),
            rating: 0.0,
            poster_url: None,
            overview: String::new(),
        }
    }

    /// First genre id, which decides the display label
    pub fn primary_genre(&self) -> Option<GenreId> {
        self.genre_ids.first().copied()
    }
}

/// Which curated list to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieList {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl MovieList {
    /// Path segment under `/movie/`
    pub fn path(&self) -> &'static str {
        match self {
            MovieList::Popular => "popular",
            MovieList::TopRated => "top_rated",
            MovieList::NowPlaying => "now_playing",
            MovieList::Upcoming => "upcoming",
        }
    }
}

/// Core record of a single movie, before credits and videos are merged in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub release_year: String,
    pub overview: String,
    pub rating: f32,
    /// Minutes, 0 when unknown
    pub runtime: u32,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub genres: Vec<String>,
}

/// A video attached to a movie (trailers, teasers, featurettes)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    pub kind: String,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.site == "YouTube" && self.kind == "Trailer"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    /// Billing position, lower is more prominent
    pub order: u32,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Director {
    pub id: u64,
    pub name: String,
    pub profile_url: Option<String>,
}

/// Everything the details view shows about one movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    pub release_year: String,
    pub genre: String,
    pub rating: f32,
    pub runtime: u32,
    pub overview: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub trailer_key: Option<String>,
    pub director: Option<Director>,
    pub cast: Vec<CastMember>,
    /// Names of `cast`, comma separated
    pub cast_line: String,
    pub similar: Vec<MovieSummary>,
}
