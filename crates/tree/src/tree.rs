use crate::error::{Result, TreeError};
use crate::item::LibraryItem;
use crate::key::HierarchicalKey;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Stable handle of a node inside one [`CatalogTree`].
///
/// Slots are tombstoned on removal and never reused, so a handle stays valid
/// as an identifier for the life of the tree; lookups on a removed node
/// report [`TreeError::NodeNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// What a node represents in the browsed catalog.
///
/// A closed taxonomy dispatched by pattern matching; only book entries carry
/// a payload item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A browsable group of the remote listing.
    Catalog {
        title: String,
        summary: Option<String>,
    },

    /// A single book entry.
    Book(LibraryItem),

    /// The synthetic root of a search-results subtree.
    Search { pattern: String },
}

impl NodeKind {
    pub fn payload(&self) -> Option<&LibraryItem> {
        match self {
            NodeKind::Book(item) => Some(item),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
    local_id: String,
    kind: NodeKind,
    // Computed on first key_of call, immutable afterwards.
    key: OnceCell<Rc<HierarchicalKey>>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn payload(&self) -> Option<&LibraryItem> {
        self.kind.payload()
    }
}

/// Arena-backed ordered tree mirroring a remote catalog listing.
///
/// All nodes live in the arena and reference each other by [`NodeId`], which
/// keeps parent back-references non-owning and lets whole subtrees be
/// detached without lifetime gymnastics. Callers must serialize access to a
/// given tree; there is no internal locking.
pub struct CatalogTree {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl CatalogTree {
    pub fn new(local_id: impl Into<String>, kind: NodeKind) -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            depth: 0,
            local_id: local_id.into(),
            kind,
            key: OnceCell::new(),
        };
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(Option::is_some)
    }

    /// Live nodes currently in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn get(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(TreeError::NodeNotFound(id))
    }

    /// Appends a child under `parent`, after its existing children. The
    /// local id should be unique among the parent's children; the tree does
    /// not check this, and duplicates produce colliding keys.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        local_id: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let depth = self.get(parent)?.depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            parent: Some(parent),
            children: Vec::new(),
            depth,
            local_id: local_id.into(),
            kind,
            key: OnceCell::new(),
        }));
        if let Some(node) = self.nodes[parent.0].as_mut() {
            node.children.push(id);
        }
        Ok(id)
    }

    /// Memoized hierarchical key of `id`, computed on first request from the
    /// ancestor chain. Fails if the node is gone or its local id is empty (a
    /// tree-builder bug that must surface).
    pub fn key_of(&self, id: NodeId) -> Result<Rc<HierarchicalKey>> {
        let node = self.get(id)?;
        if let Some(key) = node.key.get() {
            return Ok(Rc::clone(key));
        }
        let parent_key = match node.parent {
            Some(parent) => Some(self.key_of(parent)?),
            None => None,
        };
        let key = Rc::new(HierarchicalKey::new(parent_key, node.local_id.clone())?);
        Ok(Rc::clone(node.key.get_or_init(|| key)))
    }

    /// Removes `id` and its whole subtree from the tree. The detached nodes
    /// are dropped; their handles become invalid.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        let parent = self.get(id)?.parent;
        if let Some(parent) = parent {
            if let Some(node) = self.nodes[parent.0].as_mut() {
                node.children.retain(|&child| child != id);
            }
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes[current.0].take() {
                stack.extend(node.children);
            }
        }
        Ok(())
    }
}
