//! Tag file use case

use crate::domain::{is_valid_tag_name, Tag};
use crate::error::{FtagError, Result};
use crate::infrastructure::TagStore;
use std::path::Path;
use tracing::info;

/// Explicitly apply `tag_names` to the file at `path`.
///
/// The file is tracked and missing tags are created as needed. Returns the
/// applied tags in argument order.
pub fn tag_file<S: TagStore + ?Sized>(
    store: &S,
    path: &Path,
    tag_names: &[String],
) -> Result<Vec<Tag>> {
    if tag_names.is_empty() {
        return Err(FtagError::TooFewArguments);
    }
    for name in tag_names {
        validate_tag_name(name)?;
    }

    let file = store.track_path(path)?;

    let mut applied = Vec::with_capacity(tag_names.len());
    for name in tag_names {
        let tag = match store.tag_by_name(name)? {
            Some(tag) => tag,
            None => {
                info!("new tag '{}'", name);
                store.add_tag(name)?
            }
        };

        info!("'{}': applying tag '{}'", path.display(), tag.name);
        store.add_explicit_file_tag(file.id, tag.id)?;
        applied.push(tag);
    }

    Ok(applied)
}

fn validate_tag_name(name: &str) -> Result<()> {
    if !is_valid_tag_name(name) {
        return Err(FtagError::InvalidTagName(name.to_string()));
    }
    Ok(())
}
