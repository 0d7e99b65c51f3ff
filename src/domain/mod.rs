//! Domain layer - Tags, files and taggings

pub mod tag;

pub use tag::{is_valid_tag_name, File, FileId, FileTag, Tag, TagId, TagKind};
