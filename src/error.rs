use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    // Preconditions
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    // Runtime
    #[error("IO error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Third-party extensibility
    #[error("source error: {0}")]
    Source(String),
}

impl ListError {
    /// Classify an [`io::Error`] raised while inspecting or reading `path`.
    ///
    /// The three kinds callers need to tell apart get their own variant;
    /// anything else is kept as [`ListError::Io`] with the original error
    /// attached as the source.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound         => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::NotADirectory    => Self::NotADirectory(path),
            _                               => Self::Io { path, source: err },
        }
    }

    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. } => Some(p),
            Self::Source(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_io_kinds_to_variants() {
        let p = PathBuf::from("/x");

        let e = ListError::from_io(&p, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, ListError::NotFound(ref q) if *q == p));

        let e = ListError::from_io(&p, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(e, ListError::PermissionDenied(_)));

        let e = ListError::from_io(&p, io::Error::from(io::ErrorKind::NotADirectory));
        assert!(matches!(e, ListError::NotADirectory(_)));
    }

    #[test]
    fn other_kinds_keep_the_source() {
        let e = ListError::from_io("/x", io::Error::new(io::ErrorKind::Interrupted, "eintr"));
        match e {
            ListError::Io { ref path, ref source } => {
                assert_eq!(path, &PathBuf::from("/x"));
                assert_eq!(source.kind(), io::ErrorKind::Interrupted);
            }
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn path_is_none_for_source_errors() {
        assert!(ListError::Source("boom".into()).path().is_none());
        assert_eq!(
            ListError::NotADirectory("/f".into()).path(),
            Some(&PathBuf::from("/f"))
        );
    }
}
