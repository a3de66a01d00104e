use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::{
    CastMember, Credits, CrewMember, Genre, GenreId, MovieId, MovieRecord, MovieSummary, Video,
    UNKNOWN_YEAR,
};

// ============================================================================
// TMDB API Types
// ============================================================================

/// One page of a TMDB movie listing (search, discover, curated lists, similar)
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMoviePage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<TmdbMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenreList {
    pub genres: Vec<TmdbGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub id: GenreId,
    pub name: String,
}

impl From<TmdbGenre> for Genre {
    fn from(genre: TmdbGenre) -> Self {
        Genre::new(genre.id, genre.name)
    }
}

/// Response from GET /movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideoList {
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

impl From<TmdbVideo> for Video {
    fn from(video: TmdbVideo) -> Self {
        Video {
            key: video.key,
            name: video.name,
            site: video.site,
            kind: video.video_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCast>,
    #[serde(default)]
    pub crew: Vec<TmdbCrew>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCast {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrew {
    pub id: u64,
    pub name: String,
    pub job: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

/// Builds absolute image URLs from TMDB relative paths
#[derive(Debug, Clone)]
pub struct ImageBase {
    base_url: String,
}

impl ImageBase {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.sized("w500", path)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.sized("w1280", path)
    }

    pub fn profile(&self, path: Option<&str>) -> Option<String> {
        self.sized("w185", path)
    }

    fn sized(&self, size: &str, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}/{}{}", self.base_url, size, p))
    }
}

/// Year part of a TMDB release date, or "N/A" when the date is missing or empty
pub fn release_year(release_date: Option<&str>) -> String {
    let Some(date) = release_date.map(str::trim).filter(|d| !d.is_empty()) else {
        return UNKNOWN_YEAR.to_string();
    };

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.year().to_string(),
        // Partial dates ("2024", "2024-05") still carry a usable year
        Err(_) => date
            .split('-')
            .next()
            .filter(|year| !year.is_empty())
            .unwrap_or(UNKNOWN_YEAR)
            .to_string(),
    }
}

impl TmdbMovie {
    pub fn into_summary(self, images: &ImageBase) -> MovieSummary {
        MovieSummary {
            id: self.id,
            release_year: release_year(self.release_date.as_deref()),
            poster_url: images.poster(self.poster_path.as_deref()),
            title: self.title,
            genre: String::new(),
            genre_ids: self.genre_ids,
            rating: self.vote_average as f32,
            overview: self.overview.unwrap_or_default(),
        }
    }
}

impl TmdbMoviePage {
    pub fn into_summaries(self, images: &ImageBase) -> Vec<MovieSummary> {
        self.results
            .into_iter()
            .map(|movie| movie.into_summary(images))
            .collect()
    }
}

impl TmdbMovieDetails {
    pub fn into_record(self, images: &ImageBase) -> MovieRecord {
        MovieRecord {
            id: self.id,
            release_year: release_year(self.release_date.as_deref()),
            poster_url: images.poster(self.poster_path.as_deref()),
            backdrop_url: images.backdrop(self.backdrop_path.as_deref()),
            title: self.title,
            overview: self.overview.unwrap_or_default(),
            rating: self.vote_average as f32,
            runtime: self.runtime.unwrap_or(0),
            genres: self.genres.into_iter().map(|genre| genre.name).collect(),
        }
    }
}

impl TmdbCredits {
    pub fn into_credits(self, images: &ImageBase) -> Credits {
        let cast = self
            .cast
            .into_iter()
            .map(|member| CastMember {
                profile_url: images.profile(member.profile_path.as_deref()),
                id: member.id,
                name: member.name,
                character: member.character,
                order: member.order,
            })
            .collect();

        let crew = self
            .crew
            .into_iter()
            .map(|member| CrewMember {
                profile_url: images.profile(member.profile_path.as_deref()),
                id: member.id,
                name: member.name,
                job: member.job,
            })
            .collect();

        Credits { cast, crew }
    }
}
