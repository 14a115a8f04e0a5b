//! Arena storage for the namespace.
//!
//! All nodes live in one slot vector and refer to each other by [`NodeId`].
//! A node's parent is an index, so moving a subtree only rewrites the parent
//! index of the subtree root and the two child lists involved; descendants
//! keep pointing at the right container without any repair pass.
//!
//! Removed subtrees free their slots; later allocations reuse them.

use crate::entity::{Container, Entity, Node, NodeId};
use crate::error::{FsError, Result};

#[derive(Clone, Debug)]
pub struct Tree {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the root container (empty name, no parent).
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Node::container(""))],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// True when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Get a node by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a freed slot.
    pub fn node(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node id {}", id.0),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.0).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("stale node id {}", id.0),
        }
    }

    /// Store a node without linking it anywhere. The result is detached.
    pub(crate) fn alloc(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Find a direct child of `parent` by name, of any kind.
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent)
            .children()
            .iter()
            .copied()
            .find(|&id| self.node(id).name == name)
    }

    /// Find a direct child container of `parent` by name.
    pub fn child_container(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.child(parent, name)
            .filter(|&id| self.node(id).is_container())
    }

    /// Find a direct child leaf of `parent` by name.
    pub fn child_leaf(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.child(parent, name).filter(|&id| self.node(id).is_leaf())
    }

    /// Link a detached node under `parent`.
    ///
    /// Fails if a sibling already uses the child's name or if `parent` is a
    /// leaf. On success the child's parent index is set.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let name = self.node(child).name.clone();
        if !self.node(parent).is_container() {
            return Err(FsError::NotAContainer(self.node(parent).name.clone()));
        }
        if self.child(parent, &name).is_some() {
            return Err(FsError::AlreadyExists(name));
        }
        self.link(parent, child);
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Entity::Container(container) = &mut self.node_mut(parent).entity {
            container.children.push(child);
        }
        self.node_mut(child).parent = Some(parent);
    }

    /// Unlink a node from its parent. The subtree stays allocated.
    pub(crate) fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };
        if let Entity::Container(container) = &mut self.node_mut(parent).entity {
            container.children.retain(|&c| c != id);
        }
        self.node_mut(id).parent = None;
    }

    /// Unlink a node and free its whole subtree.
    pub(crate) fn remove(&mut self, id: NodeId) {
        self.detach(id);
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.slots[next.0].take() {
                stack.extend_from_slice(node.children());
                self.free.push(next.0);
            }
        }
    }

    pub(crate) fn rename(&mut self, id: NodeId, name: impl Into<String>) {
        self.node_mut(id).name = name.into();
    }

    /// Copy a subtree into fresh slots. The copy is detached.
    ///
    /// Leaves keep their contents and permission tag.
    pub(crate) fn deep_clone(&mut self, id: NodeId) -> NodeId {
        let source = self.node(id);
        let entity = match &source.entity {
            Entity::Leaf(leaf) => Entity::Leaf(leaf.clone()),
            Entity::Container(_) => Entity::Container(Container::default()),
        };
        let copy = Node {
            name: source.name.clone(),
            parent: None,
            entity,
        };
        let children = source.children().to_vec();

        let copy_id = self.alloc(copy);
        for child in children {
            let child_copy = self.deep_clone(child);
            self.link(copy_id, child_copy);
        }
        copy_id
    }

    /// Ancestors of `id` from its parent upwards.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).parent, move |&p| self.node(p).parent)
    }

    /// True if `id` hangs (transitively) under the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == self.root || self.ancestors(id).any(|a| a == self.root)
    }

    /// True if `id` is `ancestor` or lies beneath it.
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        id == ancestor || self.ancestors(id).any(|a| a == ancestor)
    }

    /// Absolute path of a node: `""` for the root, `/a/b` otherwise.
    ///
    /// Leaves render as `<container path>/<name>`.
    pub fn path(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = std::iter::once(id)
            .chain(self.ancestors(id))
            .filter(|&n| n != self.root)
            .map(|n| self.node(n).name.as_str())
            .collect();
        names.reverse();

        let mut path = String::new();
        for name in names {
            path.push('/');
            path.push_str(name);
        }
        path
    }

    /// Check every parent index against the child lists, in both directions,
    /// and sibling-name uniqueness.
    pub fn is_consistent(&self) -> bool {
        if self.node(self.root).parent.is_some() {
            return false;
        }
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(node) = slot else { continue };
            let id = NodeId(index);

            let mut names: Vec<&str> = Vec::with_capacity(node.children().len());
            for &child in node.children() {
                match self.get(child) {
                    Some(c) if c.parent == Some(id) => names.push(c.name.as_str()),
                    _ => return false,
                }
            }
            names.sort_unstable();
            if names.windows(2).any(|w| w[0] == w[1]) {
                return false;
            }

            if let Some(parent) = node.parent {
                match self.get(parent) {
                    Some(p) if p.children().contains(&id) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}
