use crate::error::{Result, TreeError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Local id of the synthetic search-results root.
pub const SEARCH_ID: &str = "@Search";

/// Stable address of a tree node, derived from its ancestor chain.
///
/// Parent keys are shared (`Rc`) between siblings: every child of one node
/// points at the same parent-key allocation, and equality compares that
/// allocation by identity rather than by value. Two keys with value-equal but
/// separately allocated parents are therefore *not* equal; use
/// [`same_path`](Self::same_path) for structural comparison (the form the
/// wire round-trip guarantees).
#[derive(Debug)]
pub struct HierarchicalKey {
    parent: Option<Rc<HierarchicalKey>>,
    local_id: String,
}

impl HierarchicalKey {
    /// Builds a key segment. The local id must be non-empty and unique among
    /// the siblings of the same parent; uniqueness is the tree builder's
    /// responsibility and is not checked here (violations silently produce
    /// colliding keys).
    pub fn new(parent: Option<Rc<HierarchicalKey>>, local_id: impl Into<String>) -> Result<Self> {
        let local_id = local_id.into();
        if local_id.is_empty() {
            return Err(TreeError::EmptyLocalId);
        }
        Ok(Self { parent, local_id })
    }

    /// Key of the search-results root (no parent, id [`SEARCH_ID`]).
    pub fn search() -> Rc<HierarchicalKey> {
        Rc::new(HierarchicalKey {
            parent: None,
            local_id: SEARCH_ID.to_string(),
        })
    }

    pub fn parent(&self) -> Option<&Rc<HierarchicalKey>> {
        self.parent.as_ref()
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Local ids of the ancestor chain, root first, this key last.
    pub fn segments(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cur = Some(self);
        while let Some(key) = cur {
            out.push(key.local_id.as_str());
            cur = key.parent.as_deref();
        }
        out.reverse();
        out
    }

    /// Structural equality: same local-id sequence, regardless of which
    /// allocation each parent link points at.
    pub fn same_path(&self, other: &HierarchicalKey) -> bool {
        self.segments() == other.segments()
    }

    /// Wire encoding: each segment's UTF-8 bytes followed by a single NUL,
    /// root first. No length prefixes, no escaping; a segment must not itself
    /// contain NUL (unenforced precondition).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for segment in self.segments() {
            out.extend_from_slice(segment.as_bytes());
            out.push(0);
        }
        out
    }

    /// Decodes a key from its wire form. Each NUL-terminated segment becomes
    /// a key whose parent is the key built from the segments before it. A
    /// trailing run of bytes without a terminator is discarded; end of stream
    /// is the only termination signal. Returns `None` when no complete
    /// segment was present.
    pub fn from_bytes(bytes: &[u8]) -> Result<Option<Rc<HierarchicalKey>>> {
        let mut key: Option<Rc<HierarchicalKey>> = None;
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if b == 0 {
                let segment = std::str::from_utf8(&bytes[start..i])?;
                key = Some(Rc::new(HierarchicalKey::new(key.take(), segment)?));
                start = i + 1;
            }
        }
        Ok(key)
    }
}

impl PartialEq for HierarchicalKey {
    fn eq(&self, other: &Self) -> bool {
        let parents_match = match (&self.parent, &other.parent) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        parents_match && self.local_id == other.local_id
    }
}

impl Eq for HierarchicalKey {}

/// Hashes the local id alone: keys that share a local id under different
/// parents collide. Swap this impl for a path-aware hash if that ever stops
/// being acceptable; callers only go through `Hash`.
impl Hash for HierarchicalKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_id.hash(state);
    }
}

impl fmt::Display for HierarchicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}
