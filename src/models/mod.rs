mod genre;
mod movie;
mod personal_list;
pub mod tmdb;

pub use genre::{Genre, GenreCatalog, GenreId, RECOMMENDED_GENRE_ID};
pub use movie::{
    CastMember, Credits, CrewMember, Director, MovieDetails, MovieId, MovieList, MovieRecord,
    MovieSummary, Video, UNKNOWN_YEAR,
};
pub use personal_list::{ListKind, ListMembership};
