//! The namespace engine: every user-facing operation over one [`Tree`].
//!
//! Operations resolve their paths against the current position (working
//! directory) and report their outcome as a [`Result`]. The engine is a plain
//! owned value; mutating operations take `&mut self`.
//!
//! # Path handling per operation
//!
//! | Operation | Parent path | Missing directories |
//! |-----------|-------------|---------------------|
//! | `mkdir` | whole path | created |
//! | `create_file`, `cat`, `rm` | all but the last segment | error |
//! | `mv`, `cp` (destination) | see [`Namespace::mv`] | created |

use tracing::debug;

use crate::entity::{EntityKind, Node, NodeId};
use crate::error::{FsError, Result};
use crate::path::{self, PARENT};
use crate::resolve::{resolve, resolve_with};
use crate::tree::Tree;

/// Description of one entity, returned by lookups and searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    /// Absolute path (`/` for the root).
    pub path: String,
    pub kind: EntityKind,
    /// Permission tag; `None` for containers.
    pub permissions: Option<String>,
}

impl EntryInfo {
    pub fn is_container(&self) -> bool {
        self.kind == EntityKind::Container
    }
}

/// Whether a transfer keeps the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    Copy,
    Move,
}

/// Result of an auto-creating walk.
struct Walk {
    end: Result<NodeId>,
    /// Directories created, including those made inside scratch.
    created: usize,
    /// Created directories still attached to the tree, in creation order.
    kept: Vec<NodeId>,
}

/// In-memory hierarchical namespace with a current position.
#[derive(Clone, Debug)]
pub struct Namespace {
    pub(crate) tree: Tree,
    pub(crate) cwd: NodeId,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create an empty namespace positioned at the root.
    pub fn new() -> Self {
        let tree = Tree::new();
        let cwd = tree.root();
        Self { tree, cwd }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Current position.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    // =========================================================================
    // Navigation and reads
    // =========================================================================

    /// Change the current position.
    ///
    /// Fails with [`FsError::Unchanged`] when `path` resolves to the current
    /// position itself (an empty path, `/` at the root, `a/..`).
    pub fn cd(&mut self, path: &str) -> Result<()> {
        let target = resolve(&self.tree, self.cwd, path)?;
        if target == self.cwd {
            return Err(FsError::Unchanged);
        }
        self.cwd = target;
        Ok(())
    }

    /// Absolute path of the current position: `/` at the root, `/a/b` below.
    pub fn pwd_path(&self) -> String {
        if self.cwd == self.tree.root() {
            return "/".to_string();
        }
        self.tree.path(self.cwd)
    }

    /// Names of the current container's children, in insertion order.
    pub fn ls(&self) -> Vec<String> {
        self.tree
            .node(self.cwd)
            .children()
            .iter()
            .map(|&id| self.tree.node(id).name().to_string())
            .collect()
    }

    /// Contents of the file at `path`.
    pub fn cat(&self, path: &str) -> Result<&str> {
        let (parent, name) = path::split_parent(path);
        let dir = resolve(&self.tree, self.cwd, parent)?;
        let id = self
            .tree
            .child(dir, name)
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        match self.tree.node(id).as_leaf() {
            Some(leaf) => Ok(leaf.contents.as_str()),
            None => Err(FsError::NotALeaf(path.to_string())),
        }
    }

    /// Describe the entity at `path`. `/`, `""` and paths ending in `..`
    /// describe containers reached by resolution.
    pub fn stat(&self, path: &str) -> Result<EntryInfo> {
        let id = self.lookup(path)?;
        Ok(self.entry_info(id))
    }

    pub(crate) fn entry_info(&self, id: NodeId) -> EntryInfo {
        let node = self.tree.node(id);
        let path = if id == self.tree.root() {
            "/".to_string()
        } else {
            self.tree.path(id)
        };
        EntryInfo {
            name: node.name().to_string(),
            path,
            kind: node.kind(),
            permissions: node.as_leaf().map(|leaf| leaf.permissions.clone()),
        }
    }

    /// Any entity at `path`, including containers named by `/` or `..`.
    fn lookup(&self, path: &str) -> Result<NodeId> {
        let (parent, name) = path::split_entry(path);
        if name.is_empty() || name == PARENT {
            return Ok(resolve(&self.tree, self.cwd, path)?);
        }
        let dir = resolve(&self.tree, self.cwd, parent)?;
        self.tree
            .child(dir, name)
            .ok_or_else(|| FsError::NotFound(path.to_string()))
    }

    /// An entity that lives under a name in some container (never the root,
    /// never reached through a trailing `..`).
    fn lookup_named(&self, path: &str) -> Result<NodeId> {
        let (parent, name) = path::split_entry(path);
        if name.is_empty() || name == PARENT {
            return Err(FsError::NotFound(path.to_string()));
        }
        let dir = resolve(&self.tree, self.cwd, parent)?;
        self.tree
            .child(dir, name)
            .ok_or_else(|| FsError::NotFound(path.to_string()))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create every missing directory along `path`.
    ///
    /// Succeeds if at least one directory was created, even when a later
    /// segment is invalid. A segment with an invalid name (for example
    /// `a.b`) is not created; the rest of the path is then walked inside a
    /// detached scratch directory that is discarded when the call returns,
    /// so anything made beneath it never becomes visible (but still counts
    /// as created).
    ///
    /// A segment that names an existing file is not a creation: the walk
    /// continues in scratch there, and `mkdir f` over a file `f` fails with
    /// [`FsError::NothingCreated`].
    pub fn mkdir(&mut self, path: &str) -> Result<()> {
        let walk = self.walk_creating(path);
        if walk.created > 0 {
            debug!(path, created = walk.created, "mkdir");
            return Ok(());
        }
        match walk.end {
            Err(err @ FsError::Resolve(_)) => Err(err),
            _ => Err(FsError::NothingCreated(path.to_string())),
        }
    }

    /// Create a file. Parent directories must already exist.
    pub fn create_file(&mut self, path: &str, contents: impl Into<String>) -> Result<()> {
        let (parent, name) = path::split_parent(path);
        let dir = resolve(&self.tree, self.cwd, parent)?;

        let node = Node::leaf(name, contents);
        if !node.validate() {
            return Err(FsError::InvalidName(name.to_string()));
        }
        let id = self.tree.alloc(node);
        if let Err(err) = self.tree.attach(dir, id) {
            self.tree.remove(id);
            return Err(err);
        }
        debug!(path, "create_file");
        Ok(())
    }

    /// Remove the file or directory at `path`, with everything beneath it.
    ///
    /// If the current position is inside the removed subtree, it moves to the
    /// removed entity's parent.
    pub fn rm(&mut self, path: &str) -> Result<()> {
        let (parent, name) = path::split_parent(path);
        let dir = resolve(&self.tree, self.cwd, parent)?;
        let id = self
            .tree
            .child(dir, name)
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;

        if self.tree.is_within(self.cwd, id) {
            self.cwd = dir;
        }
        self.tree.remove(id);
        debug!(path, "rm");
        Ok(())
    }

    /// Set the permission tag of a file directly under the current position.
    /// Does nothing if there is no such file. The tag is never enforced.
    pub fn chmod(&mut self, name: &str, permissions: impl Into<String>) {
        if let Some(id) = self.tree.child_leaf(self.cwd, name)
            && let Some(leaf) = self.tree.node_mut(id).as_leaf_mut()
        {
            leaf.permissions = permissions.into();
        }
    }

    /// Copy `from` to `to`. See [`Namespace::mv`] for destination rules.
    pub fn cp(&mut self, from: &str, to: &str) -> Result<()> {
        self.transfer(from, to, Transfer::Copy)
    }

    /// Move `from` to `to`.
    ///
    /// - `to` is an existing directory: the entity goes inside it and keeps
    ///   its name.
    /// - `to` ends in `/`: it names a directory, created like `mkdir` if
    ///   missing, and the entity goes inside it and keeps its name.
    /// - otherwise the last segment of `to` is the new name and the rest is
    ///   the destination directory, created like `mkdir` if missing.
    ///
    /// An existing sibling with the target name is an error; nothing is
    /// overwritten. A failed move leaves the source in place and removes any
    /// directories it created on the way.
    pub fn mv(&mut self, from: &str, to: &str) -> Result<()> {
        self.transfer(from, to, Transfer::Move)
    }

    pub fn transfer(&mut self, from: &str, to: &str, mode: Transfer) -> Result<()> {
        let source = self.lookup_named(from)?;
        let source_name = self.tree.node(source).name().to_string();

        let (dest, name, made) = match self.lookup(to) {
            Ok(id) if self.tree.node(id).is_container() => (id, source_name, Vec::new()),
            _ => {
                let (dir, name) = path::split_parent(to);
                let name = if name.is_empty() {
                    source_name
                } else {
                    name.to_string()
                };
                if name == PARENT || !self.tree.node(source).kind().validate(&name) {
                    return Err(FsError::InvalidName(name));
                }
                let walk = self.walk_creating(dir);
                match walk.end {
                    Ok(dest) => (dest, name, walk.kept),
                    Err(err) => {
                        self.discard(walk.kept);
                        return Err(err);
                    }
                }
            }
        };

        if let Err(err) = self.place(source, dest, name, mode) {
            self.discard(made);
            return Err(err);
        }
        debug!(from, to, ?mode, "transfer");
        Ok(())
    }

    /// Put `source` (or a copy of it) under `dest` as `name`.
    fn place(
        &mut self,
        source: NodeId,
        dest: NodeId,
        name: String,
        mode: Transfer,
    ) -> Result<()> {
        if self.tree.child(dest, &name).is_some() {
            return Err(FsError::AlreadyExists(name));
        }
        match mode {
            Transfer::Copy => {
                let copy = self.tree.deep_clone(source);
                self.tree.rename(copy, name);
                if let Err(err) = self.tree.attach(dest, copy) {
                    self.tree.remove(copy);
                    return Err(err);
                }
                Ok(())
            }
            Transfer::Move => {
                if self.tree.is_within(dest, source) {
                    return Err(FsError::IntoOwnSubtree(self.tree.path(source)));
                }
                self.relink(source, dest, name)
            }
        }
    }

    /// Remove directories created by a walk whose operation then failed.
    /// Newest first, so each one is empty when it goes.
    fn discard(&mut self, made: Vec<NodeId>) {
        for id in made.into_iter().rev() {
            self.tree.remove(id);
        }
    }

    /// Detach `id`, rename it and attach it under `dest`. Puts it back under
    /// its old parent and name if the attach fails.
    fn relink(&mut self, id: NodeId, dest: NodeId, name: String) -> Result<()> {
        let node = self.tree.node(id);
        let (old_parent, old_name) = (node.parent(), node.name().to_string());

        self.tree.detach(id);
        self.tree.rename(id, name);
        if let Err(err) = self.tree.attach(dest, id) {
            self.tree.rename(id, old_name);
            if let Some(parent) = old_parent {
                self.tree.attach(parent, id)?;
            }
            return Err(err);
        }
        Ok(())
    }

    /// Walk `path`, creating missing directories the way `mkdir` does.
    ///
    /// `end` is an error when the walk finishes inside a scratch directory.
    fn walk_creating(&mut self, path: &str) -> Walk {
        let mut kept = Vec::new();
        let mut created = 0;
        let mut scratch = Vec::new();

        let end = resolve_with(&mut self.tree, self.cwd, path, |tree, at, name| {
            let id = tree.alloc(Node::container(name));
            if tree.node(id).validate() && tree.attach(at, id).is_ok() {
                created += 1;
                kept.push(id);
            } else {
                scratch.push(id);
            }
            id
        });

        let end = match end {
            Ok(id) if self.tree.is_attached(id) => Ok(id),
            Ok(_) => Err(FsError::InvalidName(path.to_string())),
            Err(err) => Err(err.into()),
        };
        for id in scratch {
            self.tree.remove(id);
        }
        // Anything made inside scratch went with it.
        kept.retain(|&id| self.tree.get(id).is_some());
        Walk { end, created, kept }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns_with(paths: &[&str]) -> Namespace {
        let mut ns = Namespace::new();
        for p in paths {
            ns.mkdir(p).unwrap();
        }
        ns
    }

    // =========================================================================
    // mkdir
    // =========================================================================

    #[test]
    fn test_mkdir_adds_folder() {
        let mut ns = Namespace::new();
        ns.mkdir("folder").unwrap();
        assert_eq!(ns.ls(), vec!["folder"]);
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_mkdir_nested_then_cd() {
        let mut ns = ns_with(&["folder/folder2/folder3"]);
        ns.cd("folder").unwrap();
        ns.cd("folder2").unwrap();
        ns.cd("folder3").unwrap();
        assert_eq!(ns.pwd_path(), "/folder/folder2/folder3");
    }

    #[test]
    fn test_mkdir_existing_creates_nothing() {
        let mut ns = ns_with(&["a"]);
        assert!(matches!(ns.mkdir("a"), Err(FsError::NothingCreated(_))));
        assert_eq!(ns.ls(), vec!["a"]);
    }

    #[test]
    fn test_mkdir_invalid_name() {
        let mut ns = Namespace::new();
        assert!(ns.mkdir("a.b").is_err());
        assert!(ns.ls().is_empty());
        assert!(ns.tree().is_empty());
    }

    #[test]
    fn test_mkdir_partial_success() {
        let mut ns = Namespace::new();
        ns.mkdir("a/b/c.d").unwrap();
        assert_eq!(ns.ls(), vec!["a"]);
        ns.cd("a/b").unwrap();
        assert!(ns.ls().is_empty());
    }

    #[test]
    fn test_mkdir_through_invalid_segment_is_discarded() {
        let mut ns = Namespace::new();
        // `c` is created inside the scratch `x.y`, which counts as success
        // but never becomes visible.
        ns.mkdir("x.y/c").unwrap();
        assert!(ns.ls().is_empty());
        assert!(ns.tree().is_empty());
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_mkdir_parent_out_of_scratch() {
        let mut ns = Namespace::new();
        ns.mkdir("x.y/../z").unwrap();
        assert_eq!(ns.ls(), vec!["z"]);
    }

    #[test]
    fn test_mkdir_above_root_after_create_still_succeeds() {
        let mut ns = Namespace::new();
        ns.mkdir("a/../../b").unwrap();
        assert_eq!(ns.ls(), vec!["a"]);
        assert!(matches!(ns.mkdir("../x"), Err(FsError::Resolve(_))));
    }

    #[test]
    fn test_mkdir_over_file_creates_nothing() {
        let mut ns = Namespace::new();
        ns.create_file("f", "x").unwrap();
        assert!(matches!(ns.mkdir("f"), Err(FsError::NothingCreated(_))));
        // A later segment under the file name lands in scratch but counts.
        ns.mkdir("f/sub").unwrap();
        assert_eq!(ns.ls(), vec!["f"]);
        assert_eq!(ns.tree().len(), 2);
    }

    #[test]
    fn test_mkdir_slash_in_name_splits() {
        let mut ns = Namespace::new();
        ns.mkdir("folde/r").unwrap();
        assert_eq!(ns.ls(), vec!["folde"]);
    }

    // =========================================================================
    // cd / pwd
    // =========================================================================

    #[test]
    fn test_cd_and_back() {
        let mut ns = ns_with(&["folder/folder2"]);
        ns.cd("folder").unwrap();
        ns.cd("folder2").unwrap();
        ns.cd("../").unwrap();
        assert_eq!(ns.pwd_path(), "/folder");
        ns.cd("/").unwrap();
        assert_eq!(ns.pwd_path(), "/");
    }

    #[test]
    fn test_cd_same_directory_is_unchanged() {
        let mut ns = ns_with(&["a"]);
        assert!(matches!(ns.cd(""), Err(FsError::Unchanged)));
        assert!(matches!(ns.cd("/"), Err(FsError::Unchanged)));
        assert!(matches!(ns.cd("a/.."), Err(FsError::Unchanged)));
    }

    #[test]
    fn test_cd_failures_keep_position() {
        let mut ns = ns_with(&["a"]);
        ns.cd("a").unwrap();
        assert!(ns.cd("missing").is_err());
        assert!(matches!(ns.cd("../.."), Err(FsError::Resolve(_))));
        assert_eq!(ns.pwd_path(), "/a");
    }

    #[test]
    fn test_cd_into_file_fails() {
        let mut ns = Namespace::new();
        ns.create_file("f", "x").unwrap();
        assert!(ns.cd("f").is_err());
    }

    // =========================================================================
    // Files
    // =========================================================================

    #[test]
    fn test_create_and_cat() {
        let mut ns = ns_with(&["folder"]);
        ns.create_file("/folder/file.txt", "contents").unwrap();
        assert_eq!(ns.cat("/folder/file.txt").unwrap(), "contents");
    }

    #[test]
    fn test_create_file_needs_parent() {
        let mut ns = Namespace::new();
        assert!(matches!(
            ns.create_file("/d/file.txt", "x"),
            Err(FsError::Resolve(_))
        ));
        assert!(ns.ls().is_empty());
    }

    #[test]
    fn test_create_file_collision() {
        let mut ns = ns_with(&["a"]);
        assert!(matches!(
            ns.create_file("a", "x"),
            Err(FsError::AlreadyExists(_))
        ));
        ns.create_file("f", "1").unwrap();
        assert!(ns.create_file("f", "2").is_err());
        assert_eq!(ns.cat("f").unwrap(), "1");
        assert_eq!(ns.tree().len(), 3);
    }

    #[test]
    fn test_create_file_absolute_single_segment() {
        let mut ns = ns_with(&["sub"]);
        ns.cd("sub").unwrap();
        ns.create_file("/top.txt", "t").unwrap();
        assert!(ns.ls().is_empty());
        assert_eq!(ns.cat("/top.txt").unwrap(), "t");
    }

    #[test]
    fn test_create_file_empty_name() {
        let mut ns = ns_with(&["a"]);
        assert!(matches!(
            ns.create_file("a/", "x"),
            Err(FsError::InvalidName(_))
        ));
    }

    #[test]
    fn test_cat_errors() {
        let mut ns = ns_with(&["dir"]);
        assert!(matches!(ns.cat("dir"), Err(FsError::NotALeaf(_))));
        assert!(matches!(ns.cat("nope"), Err(FsError::NotFound(_))));
        assert!(matches!(ns.cat("nope/file"), Err(FsError::Resolve(_))));
        ns.create_file("dir/f", "x").unwrap();
        assert_eq!(ns.cat("dir/f").unwrap(), "x");
    }

    #[test]
    fn test_chmod_and_stat() {
        let mut ns = Namespace::new();
        ns.create_file("f", "x").unwrap();
        ns.chmod("f", "rw-");
        ns.chmod("missing", "rwx");

        let info = ns.stat("f").unwrap();
        assert_eq!(info.path, "/f");
        assert_eq!(info.kind, EntityKind::Leaf);
        assert_eq!(info.permissions.as_deref(), Some("rw-"));
    }

    #[test]
    fn test_stat_containers() {
        let mut ns = ns_with(&["a/b"]);
        ns.cd("a/b").unwrap();
        assert_eq!(ns.stat("/").unwrap().path, "/");
        assert_eq!(ns.stat("..").unwrap().path, "/a");
        assert_eq!(ns.stat("").unwrap().path, "/a/b");
        assert!(ns.stat("/a/").unwrap().is_container());
        assert!(ns.stat("/zzz").is_err());
    }

    // =========================================================================
    // rm
    // =========================================================================

    #[test]
    fn test_rm_folder() {
        let mut ns = ns_with(&["folder"]);
        ns.rm("folder").unwrap();
        assert!(ns.ls().is_empty());
    }

    #[test]
    fn test_rm_nested_with_path() {
        let mut ns = ns_with(&["/folder/folder2/folder3"]);
        ns.rm("/folder/folder2/folder3").unwrap();
        ns.cd("/folder/folder2").unwrap();
        assert!(ns.ls().is_empty());
    }

    #[test]
    fn test_rm_frees_subtree() {
        let mut ns = ns_with(&["a/b/c"]);
        ns.create_file("a/b/f", "x").unwrap();
        ns.rm("a").unwrap();
        assert!(ns.cd("a/b").is_err());
        assert!(ns.tree().is_empty());
    }

    #[test]
    fn test_rm_missing() {
        let mut ns = Namespace::new();
        assert!(matches!(ns.rm("ghost"), Err(FsError::NotFound(_))));
        assert!(ns.rm("").is_err());
        assert!(ns.rm("/").is_err());
    }

    #[test]
    fn test_rm_ancestor_of_cwd() {
        let mut ns = ns_with(&["a/b/c"]);
        ns.cd("a/b/c").unwrap();
        ns.rm("/a/b").unwrap();
        assert_eq!(ns.pwd_path(), "/a");
        assert!(ns.ls().is_empty());
    }

    // =========================================================================
    // mv / cp
    // =========================================================================

    #[test]
    fn test_mv_file_to_root() {
        let mut ns = ns_with(&["folder"]);
        ns.cd("folder").unwrap();
        ns.create_file("file.txt", "BLA").unwrap();
        ns.mv("file.txt", "/").unwrap();

        assert!(ns.cat("file.txt").is_err());
        ns.cd("/").unwrap();
        assert_eq!(ns.cat("file.txt").unwrap(), "BLA");
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_cp_file_to_root() {
        let mut ns = ns_with(&["folder"]);
        ns.cd("folder").unwrap();
        ns.create_file("file.txt", "BLA").unwrap();
        ns.cp("file.txt", "/").unwrap();

        assert_eq!(ns.cat("file.txt").unwrap(), "BLA");
        assert_eq!(ns.cat("/file.txt").unwrap(), "BLA");
    }

    #[test]
    fn test_mv_rename_file() {
        let mut ns = Namespace::new();
        ns.create_file("A", "content").unwrap();
        ns.mv("A", "B").unwrap();
        assert_eq!(ns.cat("B").unwrap(), "content");
        assert_eq!(ns.ls(), vec!["B"]);
    }

    #[test]
    fn test_mv_file_into_folder() {
        let mut ns = Namespace::new();
        ns.create_file("A", "content").unwrap();
        ns.mkdir("folder").unwrap();
        ns.mv("A", "folder").unwrap();
        ns.cd("folder").unwrap();
        assert_eq!(ns.cat("A").unwrap(), "content");
    }

    #[test]
    fn test_mv_folder_into_existing_folder() {
        let mut ns = ns_with(&["A", "B"]);
        ns.mv("A", "B").unwrap();
        assert_eq!(ns.ls(), vec!["B"]);
        ns.cd("B").unwrap();
        assert_eq!(ns.ls(), vec!["A"]);
        ns.cd("A").unwrap();
        assert_eq!(ns.pwd_path(), "/B/A");
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_cp_folder_new_name() {
        let mut ns = ns_with(&["A/inner"]);
        ns.cp("A", "B").unwrap();
        assert_eq!(ns.ls(), vec!["A", "B"]);

        ns.mkdir("B/only_in_b").unwrap();
        ns.cd("A").unwrap();
        assert_eq!(ns.ls(), vec!["inner"]);
        ns.cd("/B").unwrap();
        assert_eq!(ns.ls(), vec!["inner", "only_in_b"]);
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_cp_creates_destination_dirs() {
        let mut ns = Namespace::new();
        ns.create_file("f", "x").unwrap();
        ns.cp("f", "new/dir/g").unwrap();
        assert_eq!(ns.cat("/new/dir/g").unwrap(), "x");
    }

    #[test]
    fn test_cp_keeps_permissions() {
        let mut ns = Namespace::new();
        ns.create_file("f", "x").unwrap();
        ns.chmod("f", "r--");
        ns.cp("f", "g").unwrap();
        assert_eq!(ns.stat("g").unwrap().permissions.as_deref(), Some("r--"));
    }

    #[test]
    fn test_transfer_collision_keeps_source() {
        let mut ns = Namespace::new();
        ns.create_file("a", "1").unwrap();
        ns.create_file("b", "2").unwrap();
        assert!(matches!(ns.mv("a", "b"), Err(FsError::AlreadyExists(_))));
        assert_eq!(ns.cat("a").unwrap(), "1");
        assert_eq!(ns.cat("b").unwrap(), "2");

        ns.mkdir("d").unwrap();
        ns.create_file("d/a", "3").unwrap();
        assert!(ns.cp("a", "d").is_err());
        assert_eq!(ns.cat("d/a").unwrap(), "3");
    }

    #[test]
    fn test_mv_into_own_subtree() {
        let mut ns = ns_with(&["a/b"]);
        assert!(matches!(ns.mv("a", "a/b"), Err(FsError::IntoOwnSubtree(_))));
        assert!(matches!(ns.mv("a", "a"), Err(FsError::IntoOwnSubtree(_))));
        ns.cd("a/b").unwrap();
        assert_eq!(ns.pwd_path(), "/a/b");
    }

    #[test]
    fn test_cp_into_own_subtree_copies_snapshot() {
        let mut ns = ns_with(&["a/b"]);
        ns.cp("a", "a/b").unwrap();
        ns.cd("a/b/a").unwrap();
        assert_eq!(ns.ls(), vec!["b"]);
        ns.cd("b").unwrap();
        assert!(ns.ls().is_empty());
    }

    #[test]
    fn test_transfer_invalid_target_names() {
        let mut ns = ns_with(&["dir"]);
        assert!(matches!(ns.mv("dir", "d.x"), Err(FsError::InvalidName(_))));
        assert!(ns.cp("dir", "bad.d/x").is_err());
        assert_eq!(ns.ls(), vec!["dir"]);
    }

    #[test]
    fn test_transfer_missing_source() {
        let mut ns = Namespace::new();
        assert!(matches!(ns.mv("ghost", "x"), Err(FsError::NotFound(_))));
        assert!(ns.cp("/", "x").is_err());
    }

    #[test]
    fn test_mv_keeps_cwd_inside_moved_tree() {
        let mut ns = ns_with(&["a/b", "c"]);
        ns.cd("a/b").unwrap();
        ns.mv("/a", "/c").unwrap();
        assert_eq!(ns.pwd_path(), "/c/a/b");
    }

    #[test]
    fn test_mv_into_new_directory_with_trailing_slash() {
        let mut ns = Namespace::new();
        ns.create_file("f", "data").unwrap();
        ns.mv("f", "newdir/").unwrap();
        assert_eq!(ns.ls(), vec!["newdir"]);
        assert_eq!(ns.cat("newdir/f").unwrap(), "data");

        ns.cp("newdir/f", "deep/er/").unwrap();
        assert_eq!(ns.cat("/deep/er/f").unwrap(), "data");
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_failed_transfer_leaves_tree_unchanged() {
        let mut ns = ns_with(&["a/b"]);
        ns.create_file("f", "x").unwrap();
        let before = ns.tree().len();

        assert!(matches!(ns.mv("a", "a/new/x"), Err(FsError::IntoOwnSubtree(_))));
        assert!(matches!(ns.mv("a", "a/b/new/"), Err(FsError::IntoOwnSubtree(_))));
        assert!(matches!(ns.cp("f", "new/../../x"), Err(FsError::Resolve(_))));
        assert!(matches!(ns.cp("f", "made/bad.dir/"), Err(FsError::InvalidName(_))));

        assert_eq!(ns.tree().len(), before);
        assert_eq!(ns.ls(), vec!["a", "f"]);
        ns.cd("a/b").unwrap();
        assert!(ns.ls().is_empty());
        assert!(ns.tree().is_consistent());
    }

    #[test]
    fn test_mv_up_with_parent_path() {
        let mut ns = ns_with(&["a/b"]);
        ns.cd("a/b").unwrap();
        ns.create_file("f", "x").unwrap();
        ns.mv("f", "../..").unwrap();
        assert_eq!(ns.cat("/f").unwrap(), "x");
    }
}
