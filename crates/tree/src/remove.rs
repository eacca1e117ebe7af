use crate::item::LibraryItem;
use crate::tree::{CatalogTree, NodeId};
use std::collections::HashSet;

impl CatalogTree {
    /// Synchronizes the subtree under `root` against a set of payload items
    /// that disappeared from the remote catalog: every descendant holding an
    /// item from `items` is detached, and each item actually found is removed
    /// from `items`. Items that match nothing simply stay in the set.
    ///
    /// The scan is two-phase on purpose: direct children first, then the
    /// remaining children depth-first in reverse order. When the same payload
    /// occurs at several depths this picks the shallowest occurrence, which a
    /// single flat traversal would not.
    pub fn remove_items(&mut self, root: NodeId, items: &mut HashSet<LibraryItem>) {
        if items.is_empty() {
            return;
        }
        let direct: Vec<NodeId> = match self.node(root) {
            Some(node) if !node.children().is_empty() => node.children().to_vec(),
            _ => return,
        };

        let mut matched = Vec::new();
        for &child in &direct {
            let hit = self
                .node(child)
                .and_then(|node| node.payload())
                .filter(|item| items.contains(*item))
                .cloned();
            if let Some(item) = hit {
                items.remove(&item);
                matched.push(child);
            }
        }
        if !matched.is_empty() {
            log::debug!(
                "removing {} direct children of {:?} from the catalog tree",
                matched.len(),
                root
            );
        }
        for child in matched {
            let _ = self.detach(child);
        }
        if items.is_empty() {
            return;
        }

        let remaining: Vec<NodeId> = self
            .node(root)
            .map(|node| node.children().to_vec())
            .unwrap_or_default();
        for &child in remaining.iter().rev() {
            self.remove_items(child, items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use pretty_assertions::assert_eq;

    fn catalog(title: &str) -> NodeKind {
        NodeKind::Catalog {
            title: title.to_string(),
            summary: None,
        }
    }

    fn item(title: &str) -> LibraryItem {
        LibraryItem::new(title, "opds://lib/main")
    }

    fn book(title: &str) -> NodeKind {
        NodeKind::Book(item(title))
    }

    #[test]
    fn removes_a_nested_payload_and_leaves_siblings_intact() {
        let mut tree = CatalogTree::new("root", catalog("Library"));
        let a = tree.add_child(tree.root(), "a", catalog("A")).unwrap();
        let b = tree.add_child(tree.root(), "b", catalog("B")).unwrap();
        let c = tree.add_child(tree.root(), "c", catalog("C")).unwrap();
        let b_other = tree.add_child(b, "b-other", book("Other")).unwrap();
        let b_target = tree.add_child(b, "b-target", book("Target")).unwrap();

        let mut items = HashSet::from([item("Target")]);
        tree.remove_items(tree.root(), &mut items);

        assert!(items.is_empty());
        assert!(!tree.contains(b_target));
        assert!(tree.contains(a));
        assert!(tree.contains(c));
        assert!(tree.contains(b_other));
        assert_eq!(tree.node(b).unwrap().children(), &[b_other]);
    }

    #[test]
    fn unmatched_items_stay_in_the_set() {
        let mut tree = CatalogTree::new("root", catalog("Library"));
        tree.add_child(tree.root(), "a", book("Present")).unwrap();

        let mut items = HashSet::from([item("Present"), item("Absent")]);
        tree.remove_items(tree.root(), &mut items);

        assert_eq!(items, HashSet::from([item("Absent")]));
    }

    #[test]
    fn second_run_with_the_emptied_set_is_a_no_op() {
        let mut tree = CatalogTree::new("root", catalog("Library"));
        tree.add_child(tree.root(), "a", book("Target")).unwrap();
        let keep = tree.add_child(tree.root(), "b", book("Keep")).unwrap();

        let mut items = HashSet::from([item("Target")]);
        tree.remove_items(tree.root(), &mut items);
        assert!(items.is_empty());

        let before = tree.node_count();
        tree.remove_items(tree.root(), &mut items);
        assert_eq!(tree.node_count(), before);
        assert!(tree.contains(keep));
    }

    #[test]
    fn shallow_duplicate_wins_over_a_deeper_one() {
        // The same payload sits both directly under the root and deeper in a
        // sibling subtree; the direct-children phase consumes the set before
        // recursion reaches the deep copy.
        let mut tree = CatalogTree::new("root", catalog("Library"));
        let group = tree.add_child(tree.root(), "g", catalog("Group")).unwrap();
        let deep = tree.add_child(group, "deep", book("Dup")).unwrap();
        let shallow = tree.add_child(tree.root(), "shallow", book("Dup")).unwrap();

        let mut items = HashSet::from([item("Dup")]);
        tree.remove_items(tree.root(), &mut items);

        assert!(items.is_empty());
        assert!(!tree.contains(shallow));
        assert!(tree.contains(deep));
    }

    #[test]
    fn equal_depth_duplicates_resolve_in_reverse_child_order() {
        let mut tree = CatalogTree::new("root", catalog("Library"));
        let first = tree.add_child(tree.root(), "first", catalog("First")).unwrap();
        let second = tree.add_child(tree.root(), "second", catalog("Second")).unwrap();
        let in_first = tree.add_child(first, "dup", book("Dup")).unwrap();
        let in_second = tree.add_child(second, "dup", book("Dup")).unwrap();

        let mut items = HashSet::from([item("Dup")]);
        tree.remove_items(tree.root(), &mut items);

        // Recursion walks the children back to front, so the copy under the
        // later sibling goes first and empties the set.
        assert!(!tree.contains(in_second));
        assert!(tree.contains(in_first));
    }

    #[test]
    fn payloadless_nodes_are_recursed_into_not_matched() {
        let mut tree = CatalogTree::new("root", catalog("Library"));
        let level1 = tree.add_child(tree.root(), "l1", catalog("L1")).unwrap();
        let level2 = tree.add_child(level1, "l2", catalog("L2")).unwrap();
        let target = tree.add_child(level2, "t", book("Target")).unwrap();

        let mut items = HashSet::from([item("Target")]);
        tree.remove_items(tree.root(), &mut items);

        assert!(items.is_empty());
        assert!(!tree.contains(target));
        assert!(tree.contains(level1));
        assert!(tree.contains(level2));
    }

    #[test]
    fn childless_root_is_a_no_op() {
        let mut tree = CatalogTree::new("root", catalog("Library"));
        let mut items = HashSet::from([item("Anything")]);
        tree.remove_items(tree.root(), &mut items);
        assert_eq!(items.len(), 1);
    }
}
