//! Infrastructure layer - Configuration and persistence

pub mod config;
pub mod repository;
pub mod sqlite;
pub mod store;

pub use config::Config;
pub use repository::Repository;
pub use sqlite::SqliteTagStore;
pub use store::{canonical_path, TagStore};
