//! Discovery coordinator.
//!
//! Turns raw user intents (text edits, genre taps) into at most one outstanding catalog
//! query and publishes the latest non-superseded result through a `watch` channel.
//!
//! Every intent opens a new session by bumping `DiscoveryState::session` inside the
//! channel's write. Fetch completions re-check their session inside the same kind of
//! write, so a stale completion can never overwrite state that belongs to a newer intent,
//! even if aborting its task raced with it finishing.

mod state;

pub use state::{DiscoveryState, DisplayMode, QueryIntent};

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::{watch, OnceCell};

use crate::{
    error::AppResult,
    models::{GenreCatalog, GenreId, MovieSummary, RECOMMENDED_GENRE_ID},
    services::{
        providers::CatalogProvider,
        task_slot::{Debouncer, TaskSlot},
    },
};

const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Coordinator tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverySettings {
    /// Quiet period before free text is searched
    pub debounce: Duration,
    /// Text shorter than this (in characters) is not a search
    pub min_query_chars: usize,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

/// Owns the discovery state for one screen. Clones share the same coordinator.
#[derive(Clone)]
pub struct DiscoveryCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    provider: Arc<dyn CatalogProvider>,
    settings: DiscoverySettings,
    state: watch::Sender<DiscoveryState>,
    genres: Arc<OnceCell<GenreCatalog>>,
    debounce: Debouncer,
    fetch: TaskSlot,
}

impl DiscoveryCoordinator {
    /// Creates an idle coordinator in Recommended mode without fetching anything
    pub fn new(provider: Arc<dyn CatalogProvider>, settings: DiscoverySettings) -> Self {
        let (state, _) = watch::channel(DiscoveryState::default());

        Self {
            inner: Arc::new(Inner {
                provider,
                settings,
                state,
                genres: Arc::new(OnceCell::new()),
                debounce: Debouncer::new(settings.debounce),
                fetch: TaskSlot::new(),
            }),
        }
    }

    /// Creates a coordinator and immediately loads the Recommended feed (and with it the
    /// genre catalog). Must be called within a Tokio runtime.
    pub fn start(provider: Arc<dyn CatalogProvider>, settings: DiscoverySettings) -> Self {
        let coordinator = Self::new(provider, settings);
        coordinator.refresh_recommended();
        coordinator
    }

    /// Current state
    pub fn snapshot(&self) -> DiscoveryState {
        self.inner.state.borrow().clone()
    }

    /// Whether a debounced search is still waiting for the input to settle
    pub fn search_pending(&self) -> bool {
        self.inner.debounce.is_pending()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<DiscoveryState> {
        self.inner.state.subscribe()
    }

    /// Records new free text.
    ///
    /// Surrounding whitespace does not count towards the threshold. Below the threshold the
    /// results are cleared at once and nothing is fetched. Otherwise the trimmed query is
    /// searched after the debounce delay, unless another intent arrives first.
    pub fn set_free_text(&self, text: impl Into<String>) {
        let text = text.into();
        let query = text.trim().to_string();
        let searching = query.chars().count() >= self.inner.settings.min_query_chars;

        let opened = self.inner.transition(|state| {
            state.text = text.clone();
            state.is_loading = false;
            state.last_fetch_failed = false;
            if searching {
                state.mode = DisplayMode::Searching(query.clone());
            } else {
                state.mode = DisplayMode::Recommended;
                state.results.clear();
            }
            Some(())
        });

        let Some((session, ())) = opened else {
            return;
        };

        if !searching {
            tracing::debug!(session, chars = query.chars().count(), "Text below search threshold");
            return;
        }

        tracing::debug!(session, query = %query, "Search debounced");

        let weak = Arc::downgrade(&self.inner);
        let intent = QueryIntent::FreeText(query);
        self.inner.debounce.schedule(session, async move {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.update_if_current(session, |state| state.is_loading = true) {
                spawn_fetch(&inner, session, intent);
            }
        });
    }

    /// Handles a genre tap.
    ///
    /// The sentinel id `0` means Recommended; tapping the selected genre again deselects it.
    /// Genre taps fetch immediately, without debounce.
    pub fn select_genre(&self, genre_id: GenreId) {
        let opened = self.inner.transition(|state| {
            let intent = match (&state.mode, genre_id) {
                (DisplayMode::Recommended, RECOMMENDED_GENRE_ID) => return None,
                (_, RECOMMENDED_GENRE_ID) => QueryIntent::Recommended,
                (DisplayMode::GenreSelected(current), id) if *current == id => {
                    QueryIntent::Recommended
                }
                (_, id) => QueryIntent::GenreFilter(id),
            };

            state.mode = match intent {
                QueryIntent::GenreFilter(id) => DisplayMode::GenreSelected(id),
                _ => DisplayMode::Recommended,
            };
            state.text.clear();
            state.results.clear();
            state.is_loading = true;
            state.last_fetch_failed = false;
            Some(intent)
        });

        match opened {
            Some((session, intent)) => {
                tracing::debug!(session, genre_id, intent = ?intent, "Genre intent");
                spawn_fetch(&self.inner, session, intent);
            }
            None => tracing::debug!(genre_id, "Already showing recommended movies"),
        }
    }

    /// Switches to Recommended mode and reloads the popular feed, keeping the current
    /// results on screen until the new ones arrive
    pub fn refresh_recommended(&self) {
        let opened = self.inner.transition(|state| {
            state.mode = DisplayMode::Recommended;
            state.text.clear();
            state.is_loading = true;
            state.last_fetch_failed = false;
            Some(QueryIntent::Recommended)
        });

        if let Some((session, intent)) = opened {
            spawn_fetch(&self.inner, session, intent);
        }
    }

    /// Genre catalog for this coordinator, loaded at most once.
    ///
    /// A failed load yields an empty catalog and is retried on the next call.
    pub async fn genre_catalog(&self) -> GenreCatalog {
        load_genres(self.inner.provider.as_ref(), &self.inner.genres)
            .await
            .cloned()
            .unwrap_or_default()
    }
}

impl Inner {
    /// Opens a new session when `decide` accepts the intent, then cancels older work.
    ///
    /// `decide` must leave the state untouched when it returns `None`.
    fn transition<T>(
        &self,
        decide: impl FnOnce(&mut DiscoveryState) -> Option<T>,
    ) -> Option<(u64, T)> {
        let mut opened = None;
        self.state.send_if_modified(|state| match decide(state) {
            Some(value) => {
                state.session += 1;
                opened = Some((state.session, value));
                true
            }
            None => false,
        });

        if let Some((session, _)) = &opened {
            self.debounce.cancel_before(*session);
            self.fetch.cancel_before(*session);
        }

        opened
    }

    /// Applies `update` only while `session` is still the latest one
    fn update_if_current(&self, session: u64, update: impl FnOnce(&mut DiscoveryState)) -> bool {
        self.state.send_if_modified(|state| {
            if state.session != session {
                return false;
            }
            update(state);
            true
        })
    }

    fn apply(
        &self,
        session: u64,
        intent: &QueryIntent,
        outcome: AppResult<Vec<MovieSummary>>,
        catalog: Option<&GenreCatalog>,
    ) {
        let applied = match outcome {
            Ok(mut movies) => {
                if let Some(catalog) = catalog {
                    label_genres(&mut movies, catalog);
                }
                let count = movies.len();
                let applied = self.update_if_current(session, |state| {
                    state.results = movies;
                    state.is_loading = false;
                    state.last_fetch_failed = false;
                });
                if applied {
                    tracing::debug!(session, results = count, intent = ?intent, "Results applied");
                }
                applied
            }
            Err(e) => {
                tracing::warn!(error = %e, session, intent = ?intent, "Discovery fetch failed");
                self.update_if_current(session, |state| {
                    state.results.clear();
                    state.is_loading = false;
                    state.last_fetch_failed = true;
                })
            }
        };

        if !applied {
            tracing::debug!(
                stale = session,
                current = self.state.borrow().session,
                "Discarded superseded result"
            );
        }
    }
}

/// Starts the catalog query for `intent` in the fetch slot
fn spawn_fetch(inner: &Arc<Inner>, session: u64, intent: QueryIntent) {
    let provider = inner.provider.clone();
    let genres = inner.genres.clone();
    let weak: Weak<Inner> = Arc::downgrade(inner);

    inner.fetch.spawn(session, async move {
        let (outcome, catalog) = tokio::join!(
            run_query(provider.as_ref(), &intent),
            load_genres(provider.as_ref(), &genres),
        );

        if let Some(inner) = weak.upgrade() {
            inner.apply(session, &intent, outcome, catalog);
        }
    });
}

async fn run_query(
    provider: &dyn CatalogProvider,
    intent: &QueryIntent,
) -> AppResult<Vec<MovieSummary>> {
    match intent {
        QueryIntent::FreeText(text) => provider.search_movies(text).await,
        QueryIntent::GenreFilter(genre_id) => provider.movies_by_genre(*genre_id).await,
        QueryIntent::Recommended => provider.popular_movies().await,
    }
}

async fn load_genres<'a>(
    provider: &dyn CatalogProvider,
    cell: &'a OnceCell<GenreCatalog>,
) -> Option<&'a GenreCatalog> {
    let loaded = cell
        .get_or_try_init(|| async { provider.list_genres().await.map(GenreCatalog::new) })
        .await;

    match loaded {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            tracing::warn!(error = %e, provider = provider.name(), "Genre catalog load failed");
            None
        }
    }
}

/// Fills in empty genre labels from each movie's primary genre
fn label_genres(movies: &mut [MovieSummary], catalog: &GenreCatalog) {
    for movie in movies.iter_mut().filter(|movie| movie.genre.is_empty()) {
        if let Some(name) = movie.primary_genre().and_then(|id| catalog.name_of(id)) {
            movie.genre = name.to_string();
        }
    }
}
