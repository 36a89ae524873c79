use std::time::Duration;

use crate::entry::EntryDescriptor;

/// The output of a completed listing.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Immediate children of the listed directory, grouped by `is_directory`
    /// and otherwise in enumeration order.
    pub entries: Vec<EntryDescriptor>,

    /// Counts and timing for this listing.
    pub stats: ListStats,
}

/// Statistics for a completed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    /// Entries that are not directories (files, symlinks, devices, ...).
    pub files: usize,

    /// Directory entries.
    pub dirs: usize,

    /// Wall-clock time spent enumerating and sorting.
    pub duration: Duration,
}

impl Listing {
    /// Drop the stats and keep the sorted entries.
    pub fn into_entries(self) -> Vec<EntryDescriptor> {
        self.entries
    }

    /// Render the entries as a JSON array of `{"name", "isDirectory"}` objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Like [`to_json`](Self::to_json), indented for humans.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
