//! Error types for listing operations.
//!
//! Every failure is fatal for the invocation that hit it. [ListError::from_io] maps the
//! `std::io` error kinds the filesystem reports into the kinds callers care about.

use std::fmt;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for listing operations.
pub type ListResult<T> = Result<T, ListError>;

/// Which identity table a failed lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Group,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::User => f.write_str("user"),
            IdKind::Group => f.write_str("group"),
        }
    }
}

/// Errors that can occur while enumerating or describing entries.
#[derive(Debug, Error)]
pub enum ListError {
    /// The target path (or an entry inside it) does not exist.
    #[error("cannot access '{}': No such file or directory", .0.display())]
    PathNotFound(PathBuf),

    /// The status call or the directory read was denied.
    #[error("cannot access '{}': Permission denied", .0.display())]
    PermissionDenied(PathBuf),

    /// A numeric owner or group id has no name in the identity database.
    #[error("cannot resolve {kind} id {id} for '{}'", path.display())]
    IdentityResolution {
        kind: IdKind,
        id: u32,
        path: PathBuf,
    },

    /// Any other I/O failure, including writing the rendered output.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Classifies an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ListError::PathNotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => ListError::PermissionDenied(path.to_path_buf()),
            _ => ListError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
