use crate::{
    error::AppResult,
    models::{CastMember, Credits, Director, MovieDetails, MovieId, MovieRecord, Video},
    services::providers::CatalogProvider,
};

/// Number of billed cast members shown on the details page
const TOP_CAST: usize = 5;

/// Loads a movie with its trailer, director, top cast and similar titles.
///
/// The details record is fetched first so an unknown id fails fast with `NotFound`; the
/// remaining lookups run concurrently.
pub async fn load_movie_details(
    provider: &dyn CatalogProvider,
    movie_id: MovieId,
) -> AppResult<MovieDetails> {
    let record = provider.movie_details(movie_id).await?;

    let (videos, credits, similar) = tokio::try_join!(
        provider.movie_videos(movie_id),
        provider.movie_credits(movie_id),
        provider.similar_movies(movie_id),
    )?;

    tracing::info!(
        movie_id,
        videos = videos.len(),
        cast = credits.cast.len(),
        similar = similar.len(),
        provider = provider.name(),
        "Movie details loaded"
    );

    let trailer_key = pick_trailer(&videos);
    let director = find_director(&credits);
    let cast = top_cast(credits.cast);
    let cast_line = cast
        .iter()
        .map(|member| member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let MovieRecord {
        id,
        title,
        release_year,
        overview,
        rating,
        runtime,
        poster_url,
        backdrop_url,
        genres,
    } = record;

    Ok(MovieDetails {
        id,
        title,
        release_year,
        genre: genres.into_iter().next().unwrap_or_default(),
        rating,
        runtime,
        overview,
        poster_url,
        backdrop_url,
        trailer_key,
        director,
        cast,
        cast_line,
        similar,
    })
}

fn pick_trailer(videos: &[Video]) -> Option<String> {
    videos
        .iter()
        .find(|video| video.is_youtube_trailer())
        .map(|video| video.key.clone())
}

fn find_director(credits: &Credits) -> Option<Director> {
    credits
        .crew
        .iter()
        .find(|member| member.job == "Director")
        .map(|member| Director {
            id: member.id,
            name: member.name.clone(),
            profile_url: member.profile_url.clone(),
        })
}

fn top_cast(mut cast: Vec<CastMember>) -> Vec<CastMember> {
    cast.sort_by_key(|member| member.order);
    cast.truncate(TOP_CAST);
    cast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{CrewMember, MovieSummary};
    use crate::services::providers::MockCatalogProvider;

    fn video(key: &str, site: &str, kind: &str) -> Video {
        Video {
            key: key.to_string(),
            name: format!("{} {}", site, kind),
            site: site.to_string(),
            kind: kind.to_string(),
        }
    }

    fn cast_member(id: u64, name: &str, order: u32) -> CastMember {
        CastMember {
            id,
            name: name.to_string(),
            character: String::new(),
            order,
            profile_url: None,
        }
    }

    fn record() -> MovieRecord {
        MovieRecord {
            id: 27205,
            title: "Inception".to_string(),
            release_year: "2010".to_string(),
            overview: "Dreams within dreams.".to_string(),
            rating: 8.4,
            runtime: 148,
            poster_url: None,
            backdrop_url: None,
            genres: vec!["Action".to_string(), "Science Fiction".to_string()],
        }
    }

    #[test]
    fn test_trailer_requires_youtube_and_trailer_type() {
        let videos = vec![
            video("teaser", "YouTube", "Teaser"),
            video("vimeo", "Vimeo", "Trailer"),
            video("yt", "YouTube", "Trailer"),
            video("yt2", "YouTube", "Trailer"),
        ];
        assert_eq!(pick_trailer(&videos).as_deref(), Some("yt"));
        assert_eq!(pick_trailer(&[]), None);
    }

    #[test]
    fn test_top_cast_sorted_by_billing_and_limited() {
        let cast = (0..8u32)
            .rev()
            .map(|order| cast_member(order as u64, &format!("actor {}", order), order))
            .collect();

        let top = top_cast(cast);

        assert_eq!(top.len(), 5);
        assert_eq!(top[0].order, 0);
        assert_eq!(top[4].order, 4);
    }

    #[tokio::test]
    async fn test_details_are_merged() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_movie_details().returning(|_| Ok(record()));
        provider
            .expect_movie_videos()
            .returning(|_| Ok(vec![video("YoHD9XEInc0", "YouTube", "Trailer")]));
        provider.expect_movie_credits().returning(|_| {
            Ok(Credits {
                cast: vec![
                    cast_member(2, "Joseph Gordon-Levitt", 1),
                    cast_member(1, "Leonardo DiCaprio", 0),
                ],
                crew: vec![
                    CrewMember {
                        id: 9,
                        name: "Hans Zimmer".to_string(),
                        job: "Original Music Composer".to_string(),
                        profile_url: None,
                    },
                    CrewMember {
                        id: 525,
                        name: "Christopher Nolan".to_string(),
                        job: "Director".to_string(),
                        profile_url: None,
                    },
                ],
            })
        });
        provider
            .expect_similar_movies()
            .returning(|_| Ok(vec![MovieSummary::new(157336, "Interstellar")]));
        provider.expect_name().return_const("mock");

        let details = load_movie_details(&provider, 27205).await.unwrap();

        assert_eq!(details.genre, "Action");
        assert_eq!(details.trailer_key.as_deref(), Some("YoHD9XEInc0"));
        assert_eq!(details.director.unwrap().name, "Christopher Nolan");
        assert_eq!(details.cast_line, "Leonardo DiCaprio, Joseph Gordon-Levitt");
        assert_eq!(details.similar.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_movie_skips_secondary_lookups() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_movie_details()
            .returning(|id| Err(AppError::NotFound(format!("movie {}", id))));
        provider.expect_movie_videos().never();
        provider.expect_movie_credits().never();
        provider.expect_similar_movies().never();

        let result = load_movie_details(&provider, 1).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
