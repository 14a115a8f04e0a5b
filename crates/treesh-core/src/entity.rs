//! Namespace nodes: containers (directories) and leaves (files).

use std::fmt;

/// Path separator. Forbidden in every entity name.
pub const SEPARATOR: char = '/';

/// Handle to a node stored in a [`Tree`](crate::Tree).
///
/// Handles are plain indices. A handle to a removed node must not be used;
/// doing so panics or, once the slot is reused, refers to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of entity, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Container,
    Leaf,
}

impl EntityKind {
    /// Check whether `name` is acceptable for an entity of this kind.
    ///
    /// - Leaf: non-empty, no `/`
    /// - Container: non-empty, no `/`, no `.`
    pub fn validate(self, name: &str) -> bool {
        if name.is_empty() || name.contains(SEPARATOR) {
            return false;
        }
        match self {
            Self::Leaf => true,
            Self::Container => !name.contains('.'),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => write!(f, "directory"),
            Self::Leaf => write!(f, "file"),
        }
    }
}

/// A file: opaque contents plus an unenforced permission tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaf {
    pub contents: String,
    pub permissions: String,
}

impl Leaf {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            permissions: String::new(),
        }
    }
}

/// A directory: ordered child handles. Insertion order is listing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    pub(crate) children: Vec<NodeId>,
}

impl Container {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Payload of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Container(Container),
    Leaf(Leaf),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Container(_) => EntityKind::Container,
            Self::Leaf(_) => EntityKind::Leaf,
        }
    }
}

/// A named node with a parent index.
///
/// `parent` is `None` for the root and for detached nodes that have not been
/// attached yet (or have just been detached).
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) entity: Entity,
}

impl Node {
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            entity: Entity::Container(Container::default()),
        }
    }

    pub fn leaf(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            entity: Entity::Leaf(Leaf::new(contents)),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.entity, Entity::Container(_))
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.entity, Entity::Leaf(_))
    }

    /// Child handles; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match &self.entity {
            Entity::Container(c) => c.children(),
            Entity::Leaf(_) => &[],
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match &self.entity {
            Entity::Leaf(leaf) => Some(leaf),
            Entity::Container(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match &mut self.entity {
            Entity::Leaf(leaf) => Some(leaf),
            Entity::Container(_) => None,
        }
    }

    /// Check the node's own name against its kind's rules.
    pub fn validate(&self) -> bool {
        self.kind().validate(&self.name)
    }
}
