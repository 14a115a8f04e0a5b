//! Path resolution against the namespace tree.
//!
//! One traversal serves every operation. [`resolve`] is strict: a missing
//! segment fails the whole walk. [`resolve_with`] hands each missing segment
//! to a caller-supplied handler that must return the container to continue
//! in; `mkdir` and the destination side of `mv`/`cp` use it to create
//! intermediate directories.
//!
//! Resolution only reads or extends the tree. It never touches the engine's
//! current position; the caller decides what to do with the returned node.

use tracing::trace;

use crate::entity::NodeId;
use crate::error::ResolveError;
use crate::path::{self, PARENT};
use crate::tree::Tree;

enum Step {
    Moved,
    Missing,
}

/// Walks segments, remembering where it came from so `..` out of a container
/// the handler returned unattached leads back to the container it was made in.
struct Cursor {
    at: NodeId,
    trail: Vec<NodeId>,
}

impl Cursor {
    fn start(tree: &Tree, from: NodeId, path: &str) -> Self {
        let at = if path::is_absolute(path) {
            tree.root()
        } else {
            from
        };
        Self {
            at,
            trail: Vec::new(),
        }
    }

    fn step(&mut self, tree: &Tree, segment: &str) -> Result<Step, ResolveError> {
        if segment == PARENT {
            let up = match self.trail.pop() {
                Some(prev) => prev,
                None => tree.node(self.at).parent().ok_or(ResolveError::AboveRoot)?,
            };
            self.at = up;
            return Ok(Step::Moved);
        }
        match tree.child_container(self.at, segment) {
            Some(child) => {
                self.enter(child);
                Ok(Step::Moved)
            }
            None => Ok(Step::Missing),
        }
    }

    fn enter(&mut self, next: NodeId) {
        self.trail.push(self.at);
        self.at = next;
    }
}

/// Strictly resolve `path` to a container, starting at `from` (or at the root
/// for absolute paths).
pub fn resolve(tree: &Tree, from: NodeId, path: &str) -> Result<NodeId, ResolveError> {
    let mut cursor = Cursor::start(tree, from, path);
    for segment in path::segments(path) {
        match cursor.step(tree, segment)? {
            Step::Moved => {}
            Step::Missing => {
                trace!(path, segment, "segment missing");
                return Err(ResolveError::Missing(segment.to_string()));
            }
        }
    }
    Ok(cursor.at)
}

/// Resolve `path`, calling `on_missing(tree, current, segment)` for every
/// segment that names no child container.
///
/// The handler returns the container to continue in. It may attach what it
/// creates or leave it detached; the walk continues either way.
pub fn resolve_with<F>(
    tree: &mut Tree,
    from: NodeId,
    path: &str,
    mut on_missing: F,
) -> Result<NodeId, ResolveError>
where
    F: FnMut(&mut Tree, NodeId, &str) -> NodeId,
{
    let mut cursor = Cursor::start(tree, from, path);
    for segment in path::segments(path) {
        match cursor.step(tree, segment)? {
            Step::Moved => {}
            Step::Missing => {
                let made = on_missing(tree, cursor.at, segment);
                trace!(path, segment, made = made.index(), "segment created");
                cursor.enter(made);
            }
        }
    }
    Ok(cursor.at)
}
