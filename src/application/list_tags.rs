//! List tags use case

use crate::application::resolve::TagResolver;
use crate::domain::Tag;
use crate::error::{ErrorKind, FtagError, Result};
use crate::infrastructure::TagStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// What to list
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// Paths to look up; empty means every entry of the working directory
    pub paths: Vec<PathBuf>,
    /// Leave out implicit taggings
    pub explicit_only: bool,
    /// List every defined tag instead of the tags of paths
    pub all_tags: bool,
}

/// Tags of one listed path, labelled the way the user referred to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTags {
    pub label: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Every defined tag
    AllTags(Vec<Tag>),
    /// Tags of the single requested path
    Single(Vec<Tag>),
    /// Tags of several paths or directory entries
    Entries(Vec<PathTags>),
}

/// How a failed lookup affects the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailurePolicy {
    /// The command fails
    Abort,
    /// Logged as a warning, the item is skipped
    Warn,
    /// Missing and untracked items are skipped quietly, other failures warn
    QuietWhenMissing,
}

impl FailurePolicy {
    fn handle(self, label: &str, err: FtagError) -> Result<()> {
        match (self, err.kind()) {
            (FailurePolicy::Abort, _) => Err(err),
            (FailurePolicy::QuietWhenMissing, ErrorKind::NotFound) => {
                debug!("'{}': skipped: {}", label, err);
                Ok(())
            }
            _ => {
                warn!("{}", err);
                Ok(())
            }
        }
    }
}

/// Resolves one path, leaving failures to `policy`. `None` means the
/// failure was tolerated and the item is skipped.
fn lookup<S: TagStore + ?Sized>(
    resolver: &TagResolver<'_, S>,
    path: &Path,
    label: &str,
    explicit_only: bool,
    policy: FailurePolicy,
) -> Result<Option<Vec<Tag>>> {
    match resolver.resolve(path, explicit_only) {
        Ok(tags) => Ok(Some(tags)),
        Err(err) => policy.handle(label, err).map(|()| None),
    }
}

/// Service for listing tags of paths or of the whole store
pub struct ListTagsService<'a, S: TagStore + ?Sized> {
    store: &'a S,
    working_dir: PathBuf,
}

impl<'a, S: TagStore + ?Sized> ListTagsService<'a, S> {
    /// `working_dir` is the directory enumerated when no paths are given.
    pub fn new(store: &'a S, working_dir: PathBuf) -> Self {
        ListTagsService { store, working_dir }
    }

    pub fn execute(&self, request: &ListRequest) -> Result<Listing> {
        if request.all_tags {
            info!("retrieving all tags");
            return Ok(Listing::AllTags(self.store.tags()?));
        }

        let resolver = TagResolver::new(self.store);

        match request.paths.as_slice() {
            [] => self
                .list_working_directory(&resolver, request.explicit_only)
                .map(Listing::Entries),
            [path] => {
                let label = path.display().to_string();
                info!("'{}': retrieving tags", label);
                let tags = lookup(
                    &resolver,
                    path,
                    &label,
                    request.explicit_only,
                    FailurePolicy::Abort,
                )?;
                Ok(Listing::Single(tags.unwrap_or_default()))
            }
            paths => self
                .list_paths(&resolver, paths, request.explicit_only)
                .map(Listing::Entries),
        }
    }

    fn list_paths(
        &self,
        resolver: &TagResolver<'_, S>,
        paths: &[PathBuf],
        explicit_only: bool,
    ) -> Result<Vec<PathTags>> {
        let mut entries = Vec::with_capacity(paths.len());

        for path in paths {
            let label = path.display().to_string();
            info!("'{}': retrieving tags", label);

            if let Some(tags) = lookup(resolver, path, &label, explicit_only, FailurePolicy::Warn)? {
                entries.push(PathTags { label, tags });
            }
        }

        Ok(entries)
    }

    /// Entries of the working directory in byte order of their names.
    /// Entries without tags are left out. Failing to read the directory
    /// itself is fatal; a failure on one entry only skips that entry.
    fn list_working_directory(
        &self,
        resolver: &TagResolver<'_, S>,
        explicit_only: bool,
    ) -> Result<Vec<PathTags>> {
        fs::read_dir(&self.working_dir).map_err(|err| self.unreadable(err))?;

        let walker = WalkDir::new(&self.working_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(self.unreadable(err.into())),
                Err(err) => {
                    warn!("could not read directory entry: {}", err);
                    continue;
                }
            };

            let label = entry.file_name().to_string_lossy().into_owned();
            info!("'{}': retrieving tags", label);

            let tags = lookup(
                resolver,
                entry.path(),
                &label,
                explicit_only,
                FailurePolicy::QuietWhenMissing,
            )?;
            if let Some(tags) = tags.filter(|tags| !tags.is_empty()) {
                entries.push(PathTags { label, tags });
            }
        }

        Ok(entries)
    }

    fn unreadable(&self, err: io::Error) -> FtagError {
        FtagError::Io(io::Error::new(
            err.kind(),
            format!(
                "could not read working directory {}: {}",
                self.working_dir.display(),
                err
            ),
        ))
    }
}
