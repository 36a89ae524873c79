use serde::{Deserialize, Serialize};

/// One immediate child of a listed directory.
///
/// Built once per entry and never mutated. `is_directory` reflects the entry
/// as observed by the directory scan: symlinks are not followed, so a link
/// pointing at a directory reports `false`.
///
/// Serializes as `{"name": ..., "isDirectory": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDescriptor {
    /// Base name of the entry. Never contains a path separator.
    pub name: String,

    /// Whether the entry is a directory.
    pub is_directory: bool,
}

impl EntryDescriptor {
    pub fn new(name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory,
        }
    }

    /// Shorthand for a non-directory entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Shorthand for a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}
