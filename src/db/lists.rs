use std::collections::HashMap;

use parking_lot::RwLock;

use crate::{
    error::AppResult,
    models::{ListKind, MovieId, MovieSummary},
};

/// Storage for the personal lists
///
/// Every operation addresses exactly one list. Entries are keyed by movie id, so a movie is
/// on a given list at most once.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ListStore: Send + Sync {
    /// Entries of `kind` in the order they were added
    async fn entries(&self, kind: ListKind) -> AppResult<Vec<MovieSummary>>;

    async fn contains(&self, kind: ListKind, movie_id: MovieId) -> AppResult<bool>;

    /// Returns whether an entry was removed
    async fn remove(&self, kind: ListKind, movie_id: MovieId) -> AppResult<bool>;

    /// Removes the movie if listed, otherwise adds it, as one step.
    ///
    /// Returns whether the movie is listed afterwards.
    async fn toggle(&self, kind: ListKind, movie: MovieSummary) -> AppResult<bool>;
}

/// Process-local [`ListStore`]
#[derive(Default)]
pub struct MemoryListStore {
    lists: RwLock<HashMap<ListKind, Vec<MovieSummary>>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ListStore for MemoryListStore {
    async fn entries(&self, kind: ListKind) -> AppResult<Vec<MovieSummary>> {
        Ok(self.lists.read().get(&kind).cloned().unwrap_or_default())
    }

    async fn contains(&self, kind: ListKind, movie_id: MovieId) -> AppResult<bool> {
        Ok(self
            .lists
            .read()
            .get(&kind)
            .is_some_and(|entries| entries.iter().any(|movie| movie.id == movie_id)))
    }

    async fn remove(&self, kind: ListKind, movie_id: MovieId) -> AppResult<bool> {
        let mut lists = self.lists.write();
        let Some(entries) = lists.get_mut(&kind) else {
            return Ok(false);
        };

        let before = entries.len();
        entries.retain(|movie| movie.id != movie_id);
        Ok(entries.len() != before)
    }

    async fn toggle(&self, kind: ListKind, movie: MovieSummary) -> AppResult<bool> {
        let mut lists = self.lists.write();
        let entries = lists.entry(kind).or_default();

        match entries.iter().position(|listed| listed.id == movie.id) {
            Some(index) => {
                entries.remove(index);
                Ok(false)
            }
            None => {
                entries.push(movie);
                Ok(true)
            }
        }
    }
}
