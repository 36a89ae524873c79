//! # dirlist
//!
//! List the immediate children of a directory, files first and directories
//! last, keeping the order the filesystem reported within each group.
//!
//! ```rust,no_run
//! let entries = dirlist::list("/etc")?;
//! for e in &entries {
//!     println!("{}{}", e.name, if e.is_directory { "/" } else { "" });
//! }
//! # Ok::<(), dirlist::ListError>(())
//! ```
//!
//! Use [`lister()`] for more control: group order, scan stats, JSON output,
//! or a custom [`Source`] in place of the filesystem.
//!
//! ```rust
//! use std::path::Path;
//! use dirlist::{EntryDescriptor, ListError, Source};
//!
//! struct Fixed(Vec<EntryDescriptor>);
//!
//! impl Source for Fixed {
//!     fn read_dir(&self, _path: &Path) -> Box<dyn Iterator<Item = Result<EntryDescriptor, ListError>>> {
//!         Box::new(self.0.clone().into_iter().map(Ok::<_, ListError>))
//!     }
//! }
//!
//! let listing = dirlist::lister()
//!     .path("/virtual")
//!     .source(Fixed(vec![
//!         EntryDescriptor::file("b.txt"),
//!         EntryDescriptor::dir("a_dir"),
//!         EntryDescriptor::file("c.txt"),
//!     ]))
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(
//!     listing.to_json().unwrap(),
//!     r#"[{"name":"b.txt","isDirectory":false},{"name":"c.txt","isDirectory":false},{"name":"a_dir","isDirectory":true}]"#
//! );
//! ```

#![forbid(unsafe_code)]

pub mod engine;

mod builder;
mod entry;
mod error;
mod results;
mod traits;

use std::path::Path;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ListBuilder;
pub use engine::FsSource;
pub use entry::EntryDescriptor;
pub use error::ListError;
pub use results::{ListStats, Listing};
pub use traits::Source;

// ── Entry points ──────────────────────────────────────────────────────────────

/// List the immediate children of `path`, files before directories.
///
/// Entries of the same kind keep their enumeration order. Symlinks are not
/// followed, so a link to a directory is listed as a non-directory.
///
/// # Errors
///
/// See [`ListBuilder::run`].
pub fn list(path: impl AsRef<Path>) -> Result<Vec<EntryDescriptor>, ListError> {
    lister()
        .path(path.as_ref())
        .run()
        .map(Listing::into_entries)
}

/// Create a new [`ListBuilder`].
pub fn lister() -> ListBuilder {
    ListBuilder::default()
}
