//! Tag store abstraction

use crate::domain::{File, FileId, FileTag, Tag, TagId, TagKind};
use crate::error::{FtagError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Lookup, association and deletion primitives over tags and taggings.
///
/// Paths given to [`TagStore::file_by_path`] and [`TagStore::add_file`] are
/// stored and compared verbatim; the path-based helpers canonicalize first.
pub trait TagStore {
    /// Look up a tag by its exact name
    fn tag_by_name(&self, name: &str) -> Result<Option<Tag>>;

    /// All tags, ordered by name
    fn tags(&self) -> Result<Vec<Tag>>;

    /// Create a new tag
    fn add_tag(&self, name: &str) -> Result<Tag>;

    /// Delete a tag. Fails while taggings still reference it.
    fn delete_tag(&self, tag_id: TagId) -> Result<()>;

    fn file_by_path(&self, path: &Path) -> Result<Option<File>>;

    fn add_file(&self, path: &Path) -> Result<File>;

    /// Taggings of one kind that reference `tag_id`
    fn file_tags_by_tag_id(&self, tag_id: TagId, kind: TagKind) -> Result<Vec<FileTag>>;

    /// Insert a tagging. Adding one that already exists is a no-op.
    fn add_file_tag(&self, file_id: FileId, tag_id: TagId, kind: TagKind) -> Result<FileTag>;

    fn remove_file_tags_by_tag_id(&self, tag_id: TagId, kind: TagKind) -> Result<()>;

    /// Tags applied to a file, ordered by name, each listed once
    fn tags_for_file(&self, file_id: FileId, explicit_only: bool) -> Result<Vec<Tag>>;

    fn explicit_file_tags_by_tag_id(&self, tag_id: TagId) -> Result<Vec<FileTag>> {
        self.file_tags_by_tag_id(tag_id, TagKind::Explicit)
    }

    fn implicit_file_tags_by_tag_id(&self, tag_id: TagId) -> Result<Vec<FileTag>> {
        self.file_tags_by_tag_id(tag_id, TagKind::Implicit)
    }

    fn add_explicit_file_tag(&self, file_id: FileId, tag_id: TagId) -> Result<FileTag> {
        self.add_file_tag(file_id, tag_id, TagKind::Explicit)
    }

    fn add_implicit_file_tag(&self, file_id: FileId, tag_id: TagId) -> Result<FileTag> {
        self.add_file_tag(file_id, tag_id, TagKind::Implicit)
    }

    fn remove_explicit_file_tags_by_tag_id(&self, tag_id: TagId) -> Result<()> {
        self.remove_file_tags_by_tag_id(tag_id, TagKind::Explicit)
    }

    fn remove_implicit_file_tags_by_tag_id(&self, tag_id: TagId) -> Result<()> {
        self.remove_file_tags_by_tag_id(tag_id, TagKind::Implicit)
    }

    /// Tracked file at `path`.
    ///
    /// Fails with `NoSuchFile` when nothing exists at `path` and with
    /// `NotTracked` when the entry exists but is unknown to the store.
    fn tracked_file(&self, path: &Path) -> Result<File> {
        let canonical = canonical_path(path)?;
        self.file_by_path(&canonical)?
            .ok_or_else(|| FtagError::NotTracked(path.to_path_buf()))
    }

    /// Tracked file at `path`, tracking it first if needed
    fn track_path(&self, path: &Path) -> Result<File> {
        let canonical = canonical_path(path)?;
        match self.file_by_path(&canonical)? {
            Some(file) => Ok(file),
            None => self.add_file(&canonical),
        }
    }

    /// Explicit and implicit tags of the file at `path`
    fn tags_for_path(&self, path: &Path) -> Result<Vec<Tag>> {
        let file = self.tracked_file(path)?;
        self.tags_for_file(file.id, false)
    }

    fn explicit_tags_for_path(&self, path: &Path) -> Result<Vec<Tag>> {
        let file = self.tracked_file(path)?;
        self.tags_for_file(file.id, true)
    }
}

/// Absolute, symlink-free form of `path`
pub fn canonical_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FtagError::NoSuchFile(path.to_path_buf())
        } else {
            FtagError::Io(e)
        }
    })
}
