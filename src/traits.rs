use std::path::Path;

use crate::entry::EntryDescriptor;
use crate::error::ListError;

/// Something that can enumerate the immediate children of a directory.
///
/// The default is [`FsSource`](crate::engine::FsSource), which reads the real
/// filesystem. Implement this to list an in-memory tree, an archive, a remote
/// mount, or anything else with directory-like structure.
///
/// # Object Safety
///
/// `Source` is object-safe. The builder stores sources as `Box<dyn Source>`,
/// so `read_dir()` returns a boxed iterator rather than `impl Iterator`.
///
/// # Contract
///
/// - Yield children in enumeration order. Do not sort. The engine applies the
///   stable directories-last sort so every source gets the same ordering.
/// - Do not yield the directory itself, `.` or `..`.
/// - Yield `Err` for failures. The engine stops at the first error and returns
///   it to the caller. Partial results are discarded.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use dirlist::{EntryDescriptor, ListError, Source};
///
/// struct Fixed(Vec<EntryDescriptor>);
///
/// impl Source for Fixed {
///     fn read_dir(&self, _path: &Path) -> Box<dyn Iterator<Item = Result<EntryDescriptor, ListError>>> {
///         Box::new(self.0.clone().into_iter().map(Ok::<_, ListError>))
///     }
/// }
/// ```
pub trait Source: Send + Sync {
    /// Enumerate the immediate children of `path`.
    fn read_dir(&self, path: &Path) -> Box<dyn Iterator<Item = Result<EntryDescriptor, ListError>>>;
}
