//! Error types for namespace operations.
//!
//! Every engine operation reports its outcome through its return value:
//!
//! - [`ResolveError`] - a path could not be walked to a container
//! - [`FsError`] - the outcome of a namespace operation (wraps [`ResolveError`])
//! - [`DispatchError`] - a command line that names no operation or has the
//!   wrong number of arguments
//!
//! Nothing here is fatal. The command dispatcher folds every error into a
//! plain `false` / `not found` result.

use thiserror::Error;

/// Path resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// `..` was applied at the root.
    #[error("cannot go above the root")]
    AboveRoot,
    /// A segment names no child container and nothing was allowed to create it.
    #[error("no such directory: {0}")]
    Missing(String),
}

/// Namespace operation failures.
#[derive(Debug, Error)]
pub enum FsError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// No entity with this name at the resolved location.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// The entity exists but is a container.
    #[error("{0}: is a directory")]
    NotALeaf(String),

    /// A file was used where a directory is required.
    #[error("{0}: not a directory")]
    NotAContainer(String),

    /// A sibling with this name already exists.
    #[error("{0}: already exists")]
    AlreadyExists(String),

    /// The name fails validation for its kind.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// `mkdir` walked the whole path without creating a single container.
    #[error("{0}: nothing created")]
    NothingCreated(String),

    /// `cd` resolved to the container it started from.
    #[error("already in that directory")]
    Unchanged,

    /// A container cannot be moved into itself or one of its descendants.
    #[error("cannot move {0} into itself")]
    IntoOwnSubtree(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Command line rejections, raised before any operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Empty line or unknown command name.
    #[error("Command not found")]
    UnknownCommand,
    /// Wrong number of positional arguments.
    #[error("{name} requires {arity} arguments")]
    Arity { name: &'static str, arity: usize },
}

impl FsError {
    /// True for failures caused by a path that does not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Resolve(_))
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
