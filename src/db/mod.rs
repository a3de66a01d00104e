pub mod lists;

pub use lists::{ListStore, MemoryListStore};
