//! Path to effective tag set resolution

use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::TagStore;
use std::path::Path;
use tracing::debug;

/// Computes the tags applied to a path.
pub struct TagResolver<'a, S: TagStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TagStore + ?Sized> TagResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        TagResolver { store }
    }

    /// Effective tags of the file at `path`, in store order.
    ///
    /// With `explicit_only` the implicit taggings are left out. Missing and
    /// untracked paths fail with the store's `NoSuchFile` / `NotTracked`.
    pub fn resolve(&self, path: &Path, explicit_only: bool) -> Result<Vec<Tag>> {
        debug!("'{}': retrieving tags", path.display());

        if explicit_only {
            self.store.explicit_tags_for_path(path)
        } else {
            self.store.tags_for_path(path)
        }
    }
}
