//! ftag - Tag files from the command line
//!
//! Keeps a SQLite database of tags and the files they are applied to,
//! distinguishing explicit taggings from implicit (derived) ones, with tag
//! merging and per-path tag listing.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FtagError;
