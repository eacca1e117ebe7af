//! # Catalog Tree
//!
//! Core tree model for a network-backed library browser.
//!
//! ## Features
//!
//! - **Hierarchical addressing** - every node has a stable `HierarchicalKey`
//!   derived from its ancestor chain, with a byte-exact wire format
//! - **Bulk removal** - synchronize a subtree against a set of payload items
//!   that disappeared from the remote catalog
//! - **Closed node taxonomy** - catalog groups, book entries, and search
//!   results as a tagged union dispatched by pattern matching
//!
//! ## Architecture
//!
//! ```text
//! CatalogTree (arena)
//!     │
//!     ├──> Node[NodeId]
//!     │      ├─ parent: Option<NodeId>       (non-owning back-reference)
//!     │      ├─ children: Vec<NodeId>        (insertion order)
//!     │      ├─ kind: Catalog | Book | Search
//!     │      └─ key cache (computed once, immutable after)
//!     │
//!     ├──> HierarchicalKey
//!     │      ├─ parent: Option<Rc<Key>>      (identity-compared)
//!     │      └─ local_id                     (hashed alone)
//!     │
//!     └──> remove_items (two-phase: direct children, then recurse)
//! ```

mod error;
mod item;
mod key;
mod remove;
mod tree;

pub use error::{Result, TreeError};
pub use item::LibraryItem;
pub use key::{HierarchicalKey, SEARCH_ID};
pub use tree::{CatalogTree, Node, NodeId, NodeKind};
