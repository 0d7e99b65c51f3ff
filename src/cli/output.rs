//! Output formatting utilities

use crate::application::{Listing, PathTags};
use crate::domain::Tag;

/// Tag names joined by single spaces
pub fn tag_line(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<label>: <tag> <tag> ...`
pub fn format_path_tags(entry: &PathTags) -> String {
    format!("{}: {}", entry.label, tag_line(&entry.tags))
}

/// Render a listing, one line per tag or per entry.
pub fn format_listing(listing: &Listing) -> String {
    let mut output = String::new();

    match listing {
        Listing::AllTags(tags) | Listing::Single(tags) => {
            for tag in tags {
                output.push_str(&tag.name);
                output.push('\n');
            }
        }
        Listing::Entries(entries) => {
            for entry in entries {
                output.push_str(&format_path_tags(entry));
                output.push('\n');
            }
        }
    }

    output
}
