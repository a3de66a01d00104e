use std::sync::Arc;

use crate::{
    db::{ListStore, MemoryListStore},
    error::{AppError, AppResult},
    models::{ListKind, ListMembership, MovieId, MovieSummary},
};

/// Favorites, watchlist and watched movies for the current user
#[derive(Clone)]
pub struct PersonalLists {
    store: Arc<dyn ListStore>,
}

impl PersonalLists {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryListStore::new()))
    }

    pub async fn movies(&self, list: ListKind) -> AppResult<Vec<MovieSummary>> {
        self.store.entries(list).await
    }

    pub async fn membership(&self, list: ListKind, movie_id: MovieId) -> AppResult<ListMembership> {
        let in_list = self.store.contains(list, movie_id).await?;
        Ok(ListMembership {
            list,
            movie_id,
            in_list,
        })
    }

    /// Adds the movie when it is not on `list`, otherwise takes it off
    pub async fn toggle(&self, list: ListKind, movie: MovieSummary) -> AppResult<ListMembership> {
        let movie_id = movie.id;
        let in_list = self.store.toggle(list, movie).await?;

        tracing::info!(list = %list, movie_id, in_list, "Personal list toggled");

        Ok(ListMembership {
            list,
            movie_id,
            in_list,
        })
    }

    /// Takes the movie off `list`; `NotFound` when it was not listed
    pub async fn remove(&self, list: ListKind, movie_id: MovieId) -> AppResult<()> {
        if !self.store.remove(list, movie_id).await? {
            return Err(AppError::NotFound(format!("movie {} is not in {}", movie_id, list)));
        }

        tracing::info!(list = %list, movie_id, "Removed from personal list");
        Ok(())
    }
}
