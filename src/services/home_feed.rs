use serde::Serialize;

use crate::{
    error::AppResult,
    models::{MovieList, MovieSummary},
    services::providers::CatalogProvider,
};

/// The four curated rows of the home screen
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeFeed {
    pub popular: Vec<MovieSummary>,
    pub top_rated: Vec<MovieSummary>,
    pub now_playing: Vec<MovieSummary>,
    pub upcoming: Vec<MovieSummary>,
}

/// Loads every curated list concurrently. The feed fails as a whole if any list fails.
pub async fn load_home_feed(provider: &dyn CatalogProvider) -> AppResult<HomeFeed> {
    let (popular, top_rated, now_playing, upcoming) = tokio::try_join!(
        provider.movie_list(MovieList::Popular),
        provider.movie_list(MovieList::TopRated),
        provider.movie_list(MovieList::NowPlaying),
        provider.movie_list(MovieList::Upcoming),
    )?;

    tracing::info!(
        popular = popular.len(),
        top_rated = top_rated.len(),
        now_playing = now_playing.len(),
        upcoming = upcoming.len(),
        provider = provider.name(),
        "Home feed loaded"
    );

    Ok(HomeFeed {
        popular,
        top_rated,
        now_playing,
        upcoming,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCatalogProvider;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_feed_maps_each_list() {
        let mut provider = MockCatalogProvider::new();
        for (list, id) in [
            (MovieList::Popular, 1),
            (MovieList::TopRated, 2),
            (MovieList::NowPlaying, 3),
            (MovieList::Upcoming, 4),
        ] {
            provider
                .expect_movie_list()
                .with(eq(list))
                .times(1)
                .returning(move |_| Ok(vec![MovieSummary::new(id, format!("movie {}", id))]));
        }
        provider.expect_name().return_const("mock");

        let feed = load_home_feed(&provider).await.unwrap();

        assert_eq!(feed.popular[0].id, 1);
        assert_eq!(feed.top_rated[0].id, 2);
        assert_eq!(feed.now_playing[0].id, 3);
        assert_eq!(feed.upcoming[0].id, 4);
    }

    #[tokio::test]
    async fn test_feed_fails_when_any_list_fails() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_movie_list()
            .with(eq(MovieList::Upcoming))
            .returning(|_| Err(AppError::ExternalApi("timeout".into())));
        provider
            .expect_movie_list()
            .returning(|_| Ok(Vec::new()));

        let result = load_home_feed(&provider).await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }
}
