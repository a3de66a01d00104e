/// Movie catalog provider abstraction
///
/// A provider answers every catalog question the service asks: free-text search, genre
/// discovery, curated lists, the genre directory and per-movie details. The discovery
/// coordinator only sees this trait, so tests swap in scripted implementations.
use crate::{
    error::AppResult,
    models::{Credits, Genre, GenreId, MovieId, MovieList, MovieRecord, MovieSummary, Video},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie catalog providers
///
/// Listing operations return the first page only.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search movies by title text
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    /// Movies tagged with the given genre
    async fn movies_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<MovieSummary>>;

    /// One of the curated lists (popular, top rated, ...)
    async fn movie_list(&self, list: MovieList) -> AppResult<Vec<MovieSummary>>;

    /// Default feed shown when no filter is active
    async fn popular_movies(&self) -> AppResult<Vec<MovieSummary>> {
        self.movie_list(MovieList::Popular).await
    }

    /// The genre directory
    async fn list_genres(&self) -> AppResult<Vec<Genre>>;

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<MovieRecord>;

    async fn movie_videos(&self, movie_id: MovieId) -> AppResult<Vec<Video>>;

    async fn movie_credits(&self, movie_id: MovieId) -> AppResult<Credits>;

    async fn similar_movies(&self, movie_id: MovieId) -> AppResult<Vec<MovieSummary>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
