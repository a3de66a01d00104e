/// TMDB (The Movie Database) v3 provider
///
/// API Flow:
/// 1. Listings: /search/movie, /discover/movie, /movie/{list} → first page of results
/// 2. Directory: /genre/movie/list → every movie genre
/// 3. Details: /movie/{id} plus /videos, /credits and /similar sub-resources
///
/// Every request is authenticated with the `api_key` query parameter.
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        tmdb::{
            ImageBase, TmdbCredits, TmdbGenreList, TmdbMovieDetails, TmdbMoviePage, TmdbVideoList,
        },
        Credits, Genre, GenreId, MovieId, MovieList, MovieRecord, MovieSummary, Video,
    },
    services::providers::CatalogProvider,
};

const PROVIDER_NAME: &str = "tmdb";
const FIRST_PAGE: &str = "1";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
    images: ImageBase,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        image_url: String,
        language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
            images: ImageBase::new(image_url),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_image_url.clone(),
            config.tmdb_language.clone(),
            config.request_timeout(),
        )
    }

    /// Issues an authenticated GET and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("TMDB resource {}", path)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn fetch_page(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<Vec<MovieSummary>> {
        let mut params = params.to_vec();
        params.push(("page", FIRST_PAGE.to_string()));

        let page: TmdbMoviePage = self.get_json(path, &params).await?;
        Ok(page.into_summaries(&self.images))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput("Search query cannot be empty".to_string()));
        }

        let movies = self
            .fetch_page("/search/movie", &[("query", query.to_string())])
            .await?;

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = PROVIDER_NAME,
            "Movie search completed"
        );

        Ok(movies)
    }

    async fn movies_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<MovieSummary>> {
        let movies = self
            .fetch_page("/discover/movie", &[("with_genres", genre_id.to_string())])
            .await?;

        tracing::info!(
            genre_id,
            results = movies.len(),
            provider = PROVIDER_NAME,
            "Genre discovery completed"
        );

        Ok(movies)
    }

    async fn movie_list(&self, list: MovieList) -> AppResult<Vec<MovieSummary>> {
        let path = format!("/movie/{}", list.path());
        let movies = self.fetch_page(&path, &[]).await?;

        tracing::info!(
            list = list.path(),
            results = movies.len(),
            provider = PROVIDER_NAME,
            "Movie list fetched"
        );

        Ok(movies)
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        let list: TmdbGenreList = self.get_json("/genre/movie/list", &[]).await?;

        tracing::info!(
            genres = list.genres.len(),
            provider = PROVIDER_NAME,
            "Genre directory fetched"
        );

        Ok(list.genres.into_iter().map(Genre::from).collect())
    }

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<MovieRecord> {
        let details: TmdbMovieDetails = self
            .get_json(&format!("/movie/{}", movie_id), &[])
            .await?;
        Ok(details.into_record(&self.images))
    }

    async fn movie_videos(&self, movie_id: MovieId) -> AppResult<Vec<Video>> {
        let videos: TmdbVideoList = self
            .get_json(&format!("/movie/{}/videos", movie_id), &[])
            .await?;
        Ok(videos.results.into_iter().map(Video::from).collect())
    }

    async fn movie_credits(&self, movie_id: MovieId) -> AppResult<Credits> {
        let credits: TmdbCredits = self
            .get_json(&format!("/movie/{}/credits", movie_id), &[])
            .await?;
        Ok(credits.into_credits(&self.images))
    }

    async fn similar_movies(&self, movie_id: MovieId) -> AppResult<Vec<MovieSummary>> {
        self.fetch_page(&format!("/movie/{}/similar", movie_id), &[]).await
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TmdbProvider {
        TmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/3/".to_string(),
            "http://images.local/t/p".to_string(),
            "en-US".to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = create_test_provider();
        assert_eq!(provider.api_url, "http://test.local/3");
        assert_eq!(provider.name(), "tmdb");
    }

    #[tokio::test]
    async fn test_blank_query_rejected_without_request() {
        let provider = create_test_provider();
        let result = provider.search_movies("   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
