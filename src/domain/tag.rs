//! Tags, tracked files and the associations between them

use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub i64);

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named label. Names are unique and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Tag {
            id,
            name: name.into(),
        }
    }
}

/// A tracked filesystem entry, identified by its canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub id: FileId,
    pub path: PathBuf,
}

/// How a tag came to be applied to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Applied directly by a user
    Explicit,
    /// Derived from another tagging and recorded separately
    Implicit,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Explicit => "explicit",
            TagKind::Implicit => "implicit",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "explicit" => Ok(TagKind::Explicit),
            "implicit" => Ok(TagKind::Implicit),
            _ => Err(format!("Invalid tagging kind: {}", s)),
        }
    }
}

/// One (file, tag, kind) association. Associations form a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileTag {
    pub file_id: FileId,
    pub tag_id: TagId,
    pub kind: TagKind,
}

impl FileTag {
    pub fn new(file_id: FileId, tag_id: TagId, kind: TagKind) -> Self {
        FileTag {
            file_id,
            tag_id,
            kind,
        }
    }
}

fn tag_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^\s/]+$").unwrap())
}

/// Whether `name` can be used as a tag name.
pub fn is_valid_tag_name(name: &str) -> bool {
    tag_name_regex().is_match(name)
}
