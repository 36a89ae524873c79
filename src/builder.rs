use std::path::PathBuf;

use crate::engine::{run, EngineOptions, FsSource};
use crate::error::ListError;
use crate::results::Listing;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// ListBuilder
// ---------------------------------------------------------------------------

/// Configures and runs a directory listing.
///
/// Created via [`dirlist::lister()`](crate::lister). Configure with chained
/// builder methods, then call [`run()`](ListBuilder::run).
///
/// # Example
///
/// ```rust,no_run
/// let listing = dirlist::lister()
///     .path("/var/log")
///     .directories_first(true)
///     .run()?;
///
/// println!("{} files, {} dirs", listing.stats.files, listing.stats.dirs);
/// # Ok::<(), dirlist::ListError>(())
/// ```
pub struct ListBuilder {
    path:              Option<PathBuf>,
    source:            Box<dyn Source>,
    directories_first: bool,
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self {
            path:              None,
            source:            Box::new(FsSource),
            directories_first: false,
        }
    }
}

impl ListBuilder {
    // ── Target ────────────────────────────────────────────────────────────

    /// The directory to list. Required.
    pub fn path(mut self, p: impl Into<PathBuf>) -> Self {
        self.path = Some(p.into());
        self
    }

    /// Replace the filesystem with another [`Source`].
    ///
    /// The engine still sorts and short-circuits on errors, so custom sources
    /// only have to enumerate.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Box::new(s);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Put directories before files instead of after them.
    ///
    /// Off by default. Order within each group is unaffected.
    pub fn directories_first(mut self, yes: bool) -> Self {
        self.directories_first = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the listing.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] when the path does not exist (or none was set),
    /// [`ListError::NotADirectory`] when it is not a directory,
    /// [`ListError::PermissionDenied`] when it cannot be read. Any other
    /// failure is [`ListError::Io`] or [`ListError::Source`]. No partial
    /// results are returned.
    pub fn run(self) -> Result<Listing, ListError> {
        let root = self.path.ok_or_else(|| ListError::NotFound(PathBuf::new()))?;

        run(EngineOptions {
            root,
            source:            self.source,
            directories_first: self.directories_first,
        })
    }
}
