//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_tags;
pub mod merge_tags;
pub mod resolve;
pub mod tag_files;

pub use list_tags::{ListRequest, ListTagsService, Listing, PathTags};
pub use merge_tags::{merge_tags, MergeReport, MergeRequest, MergedTag};
pub use resolve::TagResolver;
pub use tag_files::tag_file;
