//! Merge tags use case
//!
//! Folds one or more source tags into a destination tag: every tagging of a
//! source is copied onto the destination (keeping its explicit/implicit kind),
//! the source taggings are removed, and finally the source tag is deleted.

use crate::domain::{FileTag, Tag, TagKind};
use crate::error::{FtagError, Result};
use crate::infrastructure::TagStore;
use std::collections::HashSet;
use tracing::{debug, info};

/// Arguments of a merge, split from the `TAG... DEST` command line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub sources: Vec<String>,
    pub destination: String,
}

impl MergeRequest {
    /// The last argument is the destination, every other one a source.
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args.split_last() {
            Some((destination, sources)) if !sources.is_empty() => Ok(MergeRequest {
                sources: sources.to_vec(),
                destination: destination.clone(),
            }),
            _ => Err(FtagError::TooFewArguments),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTag {
    pub name: String,
    pub explicit: usize,
    pub implicit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub destination: String,
    pub merged: Vec<MergedTag>,
}

/// Merge every tag named in `source_names` into `dest_name`.
///
/// All names are validated before the store is modified. Sources are then
/// merged one at a time; a failure stops the merge but leaves the sources
/// already merged in place. Because adding a tagging is idempotent, running
/// the merge again over the remaining sources completes it.
pub fn merge_tags<S: TagStore + ?Sized>(
    store: &S,
    source_names: &[String],
    dest_name: &str,
) -> Result<MergeReport> {
    if source_names.is_empty() {
        return Err(FtagError::TooFewArguments);
    }

    let dest = store
        .tag_by_name(dest_name)?
        .ok_or_else(|| FtagError::NoSuchTag(dest_name.to_string()))?;

    let sources = lookup_sources(store, source_names, dest_name)?;

    let mut merged = Vec::with_capacity(sources.len());
    for source in &sources {
        merged.push(merge_one(store, source, &dest)?);
    }

    Ok(MergeReport {
        destination: dest.name,
        merged,
    })
}

fn lookup_sources<S: TagStore + ?Sized>(
    store: &S,
    source_names: &[String],
    dest_name: &str,
) -> Result<Vec<Tag>> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for name in source_names {
        if name == dest_name {
            return Err(FtagError::SourceEqualsDestination);
        }

        // An earlier occurrence would already have deleted the tag
        if !seen.insert(name.as_str()) {
            return Err(FtagError::NoSuchTag(name.clone()));
        }

        let tag = store
            .tag_by_name(name)?
            .ok_or_else(|| FtagError::NoSuchTag(name.clone()))?;
        sources.push(tag);
    }

    Ok(sources)
}

fn merge_one<S: TagStore + ?Sized>(store: &S, source: &Tag, dest: &Tag) -> Result<MergedTag> {
    info!("finding files tagged '{}'", source.name);

    let explicit = fetch(store, source, dest, TagKind::Explicit)?;
    let implicit = fetch(store, source, dest, TagKind::Implicit)?;

    info!(
        "applying tag '{}' to {} explicit and {} implicit tagging(s) of '{}'",
        dest.name,
        explicit.len(),
        implicit.len(),
        source.name
    );

    for file_tag in explicit.iter().chain(implicit.iter()) {
        store
            .add_file_tag(file_tag.file_id, dest.id, file_tag.kind)
            .map_err(|cause| FtagError::AssociationAddFailed {
                source_tag: source.name.clone(),
                dest_tag: dest.name.clone(),
                kind: file_tag.kind,
                file_id: file_tag.file_id,
                cause: Box::new(cause),
            })?;
    }

    debug!("untagging files tagged '{}'", source.name);

    for kind in [TagKind::Explicit, TagKind::Implicit] {
        store
            .remove_file_tags_by_tag_id(source.id, kind)
            .map_err(|cause| FtagError::AssociationRemoveFailed {
                source_tag: source.name.clone(),
                dest_tag: dest.name.clone(),
                kind,
                cause: Box::new(cause),
            })?;
    }

    info!("deleting tag '{}'", source.name);

    store
        .delete_tag(source.id)
        .map_err(|cause| FtagError::TagDeleteFailed {
            source_tag: source.name.clone(),
            dest_tag: dest.name.clone(),
            cause: Box::new(cause),
        })?;

    Ok(MergedTag {
        name: source.name.clone(),
        explicit: explicit.len(),
        implicit: implicit.len(),
    })
}

fn fetch<S: TagStore + ?Sized>(
    store: &S,
    source: &Tag,
    dest: &Tag,
    kind: TagKind,
) -> Result<Vec<FileTag>> {
    store
        .file_tags_by_tag_id(source.id, kind)
        .map_err(|cause| FtagError::AssociationFetchFailed {
            source_tag: source.name.clone(),
            dest_tag: dest.name.clone(),
            kind,
            cause: Box::new(cause),
        })
}
