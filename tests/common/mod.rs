#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use movie_discovery::{
    error::{AppError, AppResult},
    models::{Credits, Genre, GenreId, MovieId, MovieList, MovieRecord, MovieSummary, Video},
    services::providers::CatalogProvider,
};
use tokio::time::Instant;

/// One call made against the scripted provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    Search(String),
    Genre(GenreId),
    List(MovieList),
    Genres,
    Details(MovieId),
}

#[derive(Clone)]
struct Script {
    delay: Duration,
    result: Result<Vec<MovieSummary>, String>,
}

/// In-memory catalog whose answers and latencies are set per call
pub struct ScriptedProvider {
    scripts: Mutex<HashMap<Call, Script>>,
    records: Mutex<HashMap<MovieId, MovieRecord>>,
    genres: Mutex<Result<Vec<Genre>, String>>,
    calls: Mutex<Vec<(Call, Instant)>>,
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            records: Mutex::new(HashMap::new()),
            genres: Mutex::new(Ok(vec![
                Genre::new(28, "Action"),
                Genre::new(12, "Adventure"),
                Genre::new(35, "Comedy"),
            ])),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, call: Call, delay_ms: u64, movies: Vec<MovieSummary>) -> &Self {
        self.scripts.lock().unwrap().insert(
            call,
            Script {
                delay: Duration::from_millis(delay_ms),
                result: Ok(movies),
            },
        );
        self
    }

    pub fn fail(&self, call: Call, delay_ms: u64, message: &str) -> &Self {
        self.scripts.lock().unwrap().insert(
            call,
            Script {
                delay: Duration::from_millis(delay_ms),
                result: Err(message.to_string()),
            },
        );
        self
    }

    pub fn fail_genres(&self, message: &str) {
        *self.genres.lock().unwrap() = Err(message.to_string());
    }

    pub fn add_record(&self, record: MovieRecord) {
        self.records.lock().unwrap().insert(record.id, record);
    }

    /// Query calls in order, leaving out genre directory lookups
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(call, _)| *call != Call::Genres)
            .map(|(call, _)| call.clone())
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(made, _)| made == call)
            .count()
    }

    /// Time of the first matching call
    pub fn called_at(&self, call: &Call) -> Option<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(made, _)| made == call)
            .map(|(_, at)| *at)
    }

    fn record(&self, call: &Call) {
        self.calls
            .lock()
            .unwrap()
            .push((call.clone(), Instant::now()));
    }

    async fn answer(&self, call: Call) -> AppResult<Vec<MovieSummary>> {
        self.record(&call);
        let script = self.scripts.lock().unwrap().get(&call).cloned();

        match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    tokio::time::sleep(script.delay).await;
                }
                script.result.map_err(AppError::ExternalApi)
            }
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for ScriptedProvider {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        self.answer(Call::Search(query.to_string())).await
    }

    async fn movies_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<MovieSummary>> {
        self.answer(Call::Genre(genre_id)).await
    }

    async fn movie_list(&self, list: MovieList) -> AppResult<Vec<MovieSummary>> {
        self.answer(Call::List(list)).await
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.record(&Call::Genres);
        self.genres
            .lock()
            .unwrap()
            .clone()
            .map_err(AppError::ExternalApi)
    }

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<MovieRecord> {
        self.record(&Call::Details(movie_id));
        self.records
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("movie {}", movie_id)))
    }

    async fn movie_videos(&self, _movie_id: MovieId) -> AppResult<Vec<Video>> {
        Ok(Vec::new())
    }

    async fn movie_credits(&self, _movie_id: MovieId) -> AppResult<Credits> {
        Ok(Credits::default())
    }

    async fn similar_movies(&self, _movie_id: MovieId) -> AppResult<Vec<MovieSummary>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn movie(id: MovieId, title: &str) -> MovieSummary {
    MovieSummary::new(id, title)
}

pub fn movie_in(id: MovieId, title: &str, genre_id: GenreId) -> MovieSummary {
    MovieSummary {
        genre_ids: vec![genre_id],
        ..MovieSummary::new(id, title)
    }
}

pub fn titles(movies: &[MovieSummary]) -> Vec<&str> {
    movies.iter().map(|movie| movie.title.as_str()).collect()
}
