//! Error types for ftag

use crate::domain::{FileId, TagKind};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ftag
#[derive(Debug, Error)]
pub enum FtagError {
    #[error("Not an ftag directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Directory already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Too few arguments")]
    TooFewArguments,

    #[error("Source and destination tags are the same")]
    SourceEqualsDestination,

    #[error("Invalid tag name: '{0}'")]
    InvalidTagName(String),

    #[error("No such tag: '{0}'")]
    NoSuchTag(String),

    #[error("{}: no such file", .0.display())]
    NoSuchFile(PathBuf),

    #[error("{}: not tracked", .0.display())]
    NotTracked(PathBuf),

    #[error("Could not retrieve {kind} taggings of tag '{source_tag}' (merging into '{dest_tag}'): {cause}")]
    AssociationFetchFailed {
        source_tag: String,
        dest_tag: String,
        kind: TagKind,
        #[source]
        cause: Box<FtagError>,
    },

    #[error("Could not add {kind} tag '{dest_tag}' to file #{file_id} (merging '{source_tag}'): {cause}")]
    AssociationAddFailed {
        source_tag: String,
        dest_tag: String,
        kind: TagKind,
        file_id: FileId,
        #[source]
        cause: Box<FtagError>,
    },

    #[error("Could not remove {kind} taggings of tag '{source_tag}' (merging into '{dest_tag}'): {cause}")]
    AssociationRemoveFailed {
        source_tag: String,
        dest_tag: String,
        kind: TagKind,
        #[source]
        cause: Box<FtagError>,
    },

    #[error("Could not delete tag '{source_tag}' (merged into '{dest_tag}'): {cause}")]
    TagDeleteFailed {
        source_tag: String,
        dest_tag: String,
        #[source]
        cause: Box<FtagError>,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Broad classification used by callers to pick a failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command arguments, detected before touching the store
    Argument,
    /// Unknown tag, missing or untracked file
    NotFound,
    /// A store operation failed
    Store,
    /// Repository discovery, configuration and IO
    Environment,
}

impl FtagError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FtagError::TooFewArguments
            | FtagError::SourceEqualsDestination
            | FtagError::InvalidTagName(_) => ErrorKind::Argument,
            FtagError::NoSuchTag(_) | FtagError::NoSuchFile(_) | FtagError::NotTracked(_) => {
                ErrorKind::NotFound
            }
            FtagError::AssociationFetchFailed { .. }
            | FtagError::AssociationAddFailed { .. }
            | FtagError::AssociationRemoveFailed { .. }
            | FtagError::TagDeleteFailed { .. }
            | FtagError::Database(_) => ErrorKind::Store,
            FtagError::NotInitialized(_)
            | FtagError::AlreadyInitialized(_)
            | FtagError::Io(_)
            | FtagError::Config(_)
            | FtagError::TomlDeserialize(_)
            | FtagError::TomlSerialize(_) => ErrorKind::Environment,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FtagError::NotInitialized(_) => 2,
            FtagError::TooFewArguments
            | FtagError::SourceEqualsDestination
            | FtagError::InvalidTagName(_) => 3,
            FtagError::NoSuchTag(_) => 4,
            FtagError::NoSuchFile(_) | FtagError::NotTracked(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FtagError::NotInitialized(path) => {
                format!(
                    "Not an ftag directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'ftag init' in this directory to create a tag database\n\
                    • Navigate to a directory below an existing .ftag directory\n\
                    • Set FTAG_ROOT environment variable to your repository path",
                    path.display()
                )
            }
            FtagError::TooFewArguments => "Too few arguments\n\n\
                Usage: ftag merge TAG... DEST\n\
                Example: ftag merge photo pic image"
                .to_string(),
            FtagError::SourceEqualsDestination => {
                "Source and destination tags are the same\n\n\
                The last argument is the destination; list it only once."
                    .to_string()
            }
            FtagError::NoSuchTag(name) => {
                format!(
                    "No such tag: '{}'\n\n\
                    Suggestions:\n\
                    • Tag names are case-sensitive\n\
                    • Use 'ftag tags --all' to see defined tags",
                    name
                )
            }
            FtagError::NotTracked(path) => {
                format!(
                    "{}: not tracked\n\n\
                    Use 'ftag tag {} TAG' to start tracking it",
                    path.display(),
                    path.display()
                )
            }
            FtagError::InvalidTagName(name) => {
                format!(
                    "Invalid tag name: '{}'\n\n\
                    Tag names must not be empty or contain whitespace or '/'",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FtagError
pub type Result<T> = std::result::Result<T, FtagError>;
