pub mod discovery;
pub mod home_feed;
pub mod movie_details;
pub mod personal_lists;
pub mod providers;
pub mod task_slot;

pub use discovery::{DiscoveryCoordinator, DiscoverySettings};
pub use personal_lists::PersonalLists;
