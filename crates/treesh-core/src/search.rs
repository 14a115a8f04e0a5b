//! Depth-first searches below the current position.

use std::ops::ControlFlow;

use regex::Regex;
use tracing::debug;

use crate::entity::NodeId;
use crate::error::Result;
use crate::namespace::{EntryInfo, Namespace};
use crate::resolve::resolve;

impl Namespace {
    /// Every entity named `name` at or below the current position, in
    /// pre-order: a direct child first, then each child directory searched in
    /// turn. The current directory itself is never a match.
    pub fn find(&self, name: &str) -> Vec<EntryInfo> {
        let mut hits = Vec::new();
        self.collect_named(self.cwd, name, &mut hits);
        hits.into_iter().map(|id| self.entry_info(id)).collect()
    }

    fn collect_named(&self, dir: NodeId, name: &str, hits: &mut Vec<NodeId>) {
        if let Some(hit) = self.tree.child(dir, name) {
            hits.push(hit);
        }
        for &child in self.tree.node(dir).children() {
            if self.tree.node(child).is_container() {
                self.collect_named(child, name, hits);
            }
        }
    }

    /// Absolute paths of files whose names match `pattern`.
    ///
    /// Directories below the current position are visited depth-first and
    /// each one's own files are tested. The first directory with at least one
    /// match supplies the whole result; nothing after it is searched. Files
    /// directly in the current directory are not considered.
    pub fn find_by_regex(&self, pattern: &str) -> Result<Vec<String>> {
        let regex = Regex::new(pattern)?;
        let hits = self.first_matching_dir(self.cwd, &regex).unwrap_or_default();
        debug!(pattern, hits = hits.len(), "find_by_regex");
        Ok(hits.into_iter().map(|id| self.tree.path(id)).collect())
    }

    fn first_matching_dir(&self, dir: NodeId, regex: &Regex) -> Option<Vec<NodeId>> {
        for &child in self.tree.node(dir).children() {
            if !self.tree.node(child).is_container() {
                continue;
            }
            let hits = self.matching_files(child, regex);
            if !hits.is_empty() {
                return Some(hits);
            }
            if let Some(found) = self.first_matching_dir(child, regex) {
                return Some(found);
            }
        }
        None
    }

    fn matching_files(&self, dir: NodeId, regex: &Regex) -> Vec<NodeId> {
        self.tree
            .node(dir)
            .children()
            .iter()
            .copied()
            .filter(|&id| {
                let node = self.tree.node(id);
                node.is_leaf() && regex.is_match(node.name())
            })
            .collect()
    }

    /// Visit every directory below `path`, depth-first.
    ///
    /// Returning [`ControlFlow::Break`] from `visit` skips that directory's
    /// subtree; its siblings are still visited.
    pub fn walk<F>(&self, path: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(&EntryInfo) -> ControlFlow<()>,
    {
        let start = resolve(&self.tree, self.cwd, path)?;
        self.walk_dirs(start, &mut visit);
        Ok(())
    }

    fn walk_dirs<F>(&self, dir: NodeId, visit: &mut F)
    where
        F: FnMut(&EntryInfo) -> ControlFlow<()>,
    {
        for &child in self.tree.node(dir).children() {
            if !self.tree.node(child).is_container() {
                continue;
            }
            if visit(&self.entry_info(child)).is_continue() {
                self.walk_dirs(child, visit);
            }
        }
    }
}
