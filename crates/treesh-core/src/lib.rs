//! In-memory hierarchical namespace with a shell-like command surface.
//!
//! This crate provides:
//! - [`Tree`] - arena of [`Node`]s addressed by [`NodeId`]
//! - [`resolve`] / [`resolve_with`] - path resolution with `..` and optional
//!   creation of missing directories
//! - [`Namespace`] - the engine: `cd`, `mkdir`, `create_file`, `cat`, `rm`,
//!   `mv`, `cp`, `find`, `find_by_regex` and friends
//! - [`dispatch`] - whitespace command lines rendered to text results

pub mod dispatch;
mod entity;
pub mod error;
mod namespace;
pub mod path;
mod resolve;
mod search;
mod tree;

pub use dispatch::{Command, Output, available_commands, execute};
pub use entity::{Container, Entity, EntityKind, Leaf, Node, NodeId, SEPARATOR};
pub use error::{DispatchError, FsError, ResolveError, Result};
pub use namespace::{EntryInfo, Namespace, Transfer};
pub use resolve::{resolve, resolve_with};
pub use tree::Tree;
