use std::fs;
use std::iter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::entry::EntryDescriptor;
use crate::error::ListError;
use crate::results::{ListStats, Listing};
use crate::traits::Source;

type EntryIter = Box<dyn Iterator<Item = Result<EntryDescriptor, ListError>>>;

// ---------------------------------------------------------------------------
// FsSource
// ---------------------------------------------------------------------------

/// Lists a directory on the local filesystem.
///
/// The scan is a single-level walk with every filter switched off: hidden
/// files, `.gitignore`, `.ignore` and parent ignore files are all listed.
/// Links below the root are not followed, so their `is_directory` is `false`.
/// A root that is itself a symlink to a directory is resolved first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl Source for FsSource {
    fn read_dir(&self, path: &Path) -> EntryIter {
        let root = match resolve_root(path) {
            Ok(root) => root,
            Err(e)   => return Box::new(iter::once(Err(e))),
        };

        let walker = WalkBuilder::new(&root)
            .standard_filters(false)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(Some(1))
            .build();

        Box::new(walker.filter_map(move |res| match res {
            // The root comes back at depth 0; only its children are listed.
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry)                       => Some(Ok(describe(&entry))),
            Err(e)                          => Some(Err(map_ignore_error(e, &root))),
        }))
    }
}

/// Check that `path` is an existing directory and return the path to walk.
fn resolve_root(path: &Path) -> Result<PathBuf, ListError> {
    let meta = fs::metadata(path).map_err(|e| ListError::from_io(path, e))?;
    if !meta.is_dir() {
        return Err(ListError::NotADirectory(path.to_path_buf()));
    }

    let link = fs::symlink_metadata(path).map_err(|e| ListError::from_io(path, e))?;
    if link.file_type().is_symlink() {
        fs::canonicalize(path).map_err(|e| ListError::from_io(path, e))
    } else {
        Ok(path.to_path_buf())
    }
}

fn describe(entry: &DirEntry) -> EntryDescriptor {
    let is_directory = entry
        .file_type()
        .map(|ft| ft.is_dir())
        .unwrap_or(false);

    let name = entry
        .file_name()
        .to_string_lossy()
        .into_owned();

    EntryDescriptor { name, is_directory }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ListError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error, root: &Path) -> ListError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => ListError::from_io(path, io_err),
            other                     => map_ignore_error(other, &path),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err, root),
        ignore::Error::Io(io_err)            => ListError::from_io(root, io_err),
        other                                => ListError::Source(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub root:              PathBuf,
    pub source:            Box<dyn Source>,
    pub directories_first: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Enumerate `opts.root` through `opts.source` and sort the result.
///
/// The first error from the source aborts the listing. The sort key is
/// `is_directory` alone and the sort is stable, so entries of the same kind
/// keep the order the source produced them in.
pub(crate) fn run(opts: EngineOptions) -> Result<Listing, ListError> {
    debug!(path = %opts.root.display(), "listing directory");
    let start = Instant::now();

    let mut entries = opts
        .source
        .read_dir(&opts.root)
        .inspect(|res| {
            if let Ok(entry) = res {
                trace!(name = %entry.name, is_directory = entry.is_directory, "entry");
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    sort_entries(&mut entries, opts.directories_first);

    let duration = start.elapsed();
    let dirs     = entries.iter().filter(|e| e.is_directory).count();
    let files    = entries.len() - dirs;

    debug!(
        path = %opts.root.display(),
        files,
        dirs,
        elapsed_us = duration.as_micros() as u64,
        "listed directory"
    );

    Ok(Listing {
        entries,
        stats: ListStats { files, dirs, duration },
    })
}

/// Stable sort on `is_directory`. Files first unless `directories_first`.
fn sort_entries(entries: &mut [EntryDescriptor], directories_first: bool) {
    if directories_first {
        entries.sort_by_key(|e| !e.is_directory);
    } else {
        entries.sort_by_key(|e| e.is_directory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecSource(Vec<Result<EntryDescriptor, String>>);

    impl Source for VecSource {
        fn read_dir(&self, _path: &Path) -> EntryIter {
            let items = self
                .0
                .iter()
                .map(|r| r.clone().map_err(ListError::Source))
                .collect::<Vec<_>>();
            Box::new(items.into_iter())
        }
    }

    fn names(entries: &[EntryDescriptor]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn opts(source: VecSource, directories_first: bool) -> EngineOptions {
        EngineOptions {
            root: PathBuf::from("/virtual"),
            source: Box::new(source),
            directories_first,
        }
    }

    fn mixed() -> VecSource {
        VecSource(vec![
            Ok(EntryDescriptor::dir("z_dir")),
            Ok(EntryDescriptor::file("b.txt")),
            Ok(EntryDescriptor::dir("a_dir")),
            Ok(EntryDescriptor::file("c.txt")),
            Ok(EntryDescriptor::file("a.txt")),
        ])
    }

    #[test]
    fn files_first_keeps_enumeration_order() {
        let listing = run(opts(mixed(), false)).unwrap();
        assert_eq!(
            names(&listing.entries),
            ["b.txt", "c.txt", "a.txt", "z_dir", "a_dir"]
        );
        assert_eq!(listing.stats.files, 3);
        assert_eq!(listing.stats.dirs, 2);
    }

    #[test]
    fn directories_first_keeps_enumeration_order() {
        let listing = run(opts(mixed(), true)).unwrap();
        assert_eq!(
            names(&listing.entries),
            ["z_dir", "a_dir", "b.txt", "c.txt", "a.txt"]
        );
    }

    #[test]
    fn first_error_aborts_the_listing() {
        let source = VecSource(vec![
            Ok(EntryDescriptor::file("a")),
            Err("disk on fire".into()),
            Ok(EntryDescriptor::file("b")),
        ]);
        let err = run(opts(source, false)).unwrap_err();
        assert!(matches!(err, ListError::Source(ref m) if m == "disk on fire"));
    }

    #[test]
    fn empty_source_gives_empty_listing() {
        let listing = run(opts(VecSource(vec![]), false)).unwrap();
        assert!(listing.entries.is_empty());
        assert_eq!(listing.stats.files + listing.stats.dirs, 0);
    }

    #[test]
    fn wrapped_io_errors_keep_their_path() {
        let inner = ignore::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        let e = ignore::Error::WithDepth {
            depth: 1,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("/r/locked"),
                err: Box::new(inner),
            }),
        };
        let mapped = map_ignore_error(e, Path::new("/r"));
        assert!(matches!(mapped, ListError::PermissionDenied(ref p) if p == Path::new("/r/locked")));
    }

    #[test]
    fn bare_io_errors_fall_back_to_root() {
        let e = ignore::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        let mapped = map_ignore_error(e, Path::new("/r"));
        assert!(matches!(mapped, ListError::NotFound(ref p) if p == Path::new("/r")));
    }
}
