//! Cuts an icon tree at the boundary of its root and first child so it can be written out as
//! literal data.
//!
//! A parsed tree links every child back to its parent, which literal data can't express. Both
//! strategies sever the back-references between the root and its first child, then record the
//! rest of the tree through forward links only.
use octi_ast::arena::{Arena, NodeData, NodeId, Tree};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "camelCase")]
/// How the root of an icon is separated from its children
pub enum Strategy {
    /// Clears the root's last-child link and the first child's parent link, writing the root as
    /// a single record.
    ///
    /// Loading the record with `LiteralNode::load` rebuilds every back-reference, but the
    /// record is loaded again on each call.
    Flat,
    /// Splits the root into a parent record without children and a record of its first child,
    /// which are linked back together once when loaded.
    #[default]
    TwoStep,
}

#[derive(Clone, PartialEq, Debug)]
/// A node which owns its forward links
pub struct RecordNode {
    /// The contents of the node
    pub data: NodeData,
    /// The first child of the node
    pub first_child: Option<Box<RecordNode>>,
    /// The node following this one in its parent's child list
    pub next_sibling: Option<Box<RecordNode>>,
}

impl RecordNode {
    /// Records the node, its descendants, and its following siblings through forward links
    fn record(arena: &Arena, id: NodeId) -> Self {
        let mut siblings = vec![];
        let mut current = id;
        while let Some(next) = arena.get(current).next_sibling() {
            siblings.push(next);
            current = next;
        }

        // Built back to front so each node can own the one after it
        let next_sibling = siblings.into_iter().rev().fold(None, |next_sibling, id| {
            Some(Box::new(Self::record_node(arena, id, next_sibling)))
        });
        Self::record_node(arena, id, next_sibling)
    }

    /// Records only the node and its descendants
    fn record_subtree(arena: &Arena, id: NodeId) -> Self {
        Self::record_node(arena, id, None)
    }

    fn record_node(arena: &Arena, id: NodeId, next_sibling: Option<Box<RecordNode>>) -> Self {
        let node = arena.get(id);
        RecordNode {
            data: node.data.clone(),
            first_child: node
                .first_child()
                .map(|child| Box::new(Self::record(arena, child))),
            next_sibling,
        }
    }

    /// Returns the children of the node
    pub fn children(&self) -> impl Iterator<Item = &RecordNode> {
        std::iter::successors(self.first_child.as_deref(), |node| {
            node.next_sibling.as_deref()
        })
    }

    /// Returns the descendants of the node in document order
    pub fn descendants(&self) -> impl Iterator<Item = &RecordNode> {
        let mut stack: Vec<&RecordNode> = self.first_child.as_deref().into_iter().collect();
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            stack.extend(current.next_sibling.as_deref());
            stack.extend(current.first_child.as_deref());
            Some(current)
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
/// An icon tree without any back-references
pub enum AcyclicIcon {
    /// The root and its descendants as one record
    Flat(RecordNode),
    /// The root without children, and its first child with the following siblings
    TwoStep {
        /// The root, with no first or last child
        parent: RecordNode,
        /// The first child of the root, if any
        child: Option<RecordNode>,
    },
}

impl AcyclicIcon {
    /// Returns every node reachable from the root in document order, following the path a
    /// relinked tree would take
    pub fn nodes(&self) -> Vec<&RecordNode> {
        match self {
            Self::Flat(root) => std::iter::once(root).chain(root.descendants()).collect(),
            Self::TwoStep { parent, child } => {
                let mut nodes = vec![parent];
                let mut sibling = child.as_ref();
                while let Some(node) = sibling {
                    nodes.push(node);
                    nodes.extend(node.descendants());
                    sibling = node.next_sibling.as_deref();
                }
                nodes
            }
        }
    }
}

/// Severs the root of the tree from its first child and records the result.
///
/// Links below the first child are left as they are.
pub fn break_cycles(tree: &mut Tree, strategy: Strategy) -> AcyclicIcon {
    let Tree { arena, root } = tree;
    let root = *root;
    debug_assert!(arena.get(root).parent().is_none());

    match strategy {
        Strategy::Flat => {
            arena.take_last_child(root);
            if let Some(child) = arena.get(root).first_child() {
                arena.take_parent(child);
            }
            AcyclicIcon::Flat(RecordNode::record_subtree(arena, root))
        }
        Strategy::TwoStep => {
            arena.take_last_child(root);
            let child = arena.take_first_child(root);
            if let Some(child) = child {
                arena.take_parent(child);
            }
            AcyclicIcon::TwoStep {
                parent: RecordNode::record_subtree(arena, root),
                child: child.map(|child| RecordNode::record(arena, child)),
            }
        }
    }
}

#[cfg(test)]
const NESTED: &str = r#"<svg width="24"><g id="a"><path d="M0 0"/><circle r="1"/></g><rect width="2"/></svg>"#;

#[cfg(test)]
fn forward_data(arena: &Arena, root: NodeId) -> Vec<NodeData> {
    std::iter::once(root)
        .chain(arena.descendants(root))
        .map(|id| arena.get(id).data.clone())
        .collect()
}

#[test]
fn flat() {
    let mut tree = crate::parse::parse_icon("nested", NESTED).unwrap();
    let before = forward_data(&tree.arena, tree.root);
    let g = tree.arena.get(tree.root).first_child().unwrap();
    let path = tree.arena.get(g).first_child().unwrap();

    let icon = break_cycles(&mut tree, Strategy::Flat);

    let arena = &tree.arena;
    assert_eq!(arena.get(tree.root).last_child(), None);
    assert_eq!(arena.get(tree.root).first_child(), Some(g));
    assert_eq!(arena.get(g).parent(), None);
    // Links below the first child are untouched
    assert_eq!(arena.get(path).parent(), Some(g));
    assert_eq!(forward_data(arena, tree.root), before);

    let AcyclicIcon::Flat(root) = &icon else {
        panic!("expected flat record");
    };
    assert_eq!(root.next_sibling, None);
    assert_eq!(root.children().count(), 2);
    let recorded: Vec<_> = icon.nodes().into_iter().map(|node| node.data.clone()).collect();
    assert_eq!(recorded, before);
}

#[test]
fn two_step() {
    let mut tree = crate::parse::parse_icon("nested", NESTED).unwrap();
    let before = forward_data(&tree.arena, tree.root);
    let g = tree.arena.get(tree.root).first_child().unwrap();
    let path = tree.arena.get(g).first_child().unwrap();

    let icon = break_cycles(&mut tree, Strategy::TwoStep);

    let arena = &tree.arena;
    assert_eq!(arena.get(tree.root).first_child(), None);
    assert_eq!(arena.get(tree.root).last_child(), None);
    assert_eq!(arena.get(g).parent(), None);
    assert_eq!(arena.get(path).parent(), Some(g));

    let AcyclicIcon::TwoStep { parent, child } = &icon else {
        panic!("expected two-step record");
    };
    assert_eq!(parent.first_child, None);
    let child = child.as_ref().unwrap();
    assert_eq!(child.children().count(), 2);
    assert!(child.next_sibling.is_some());

    let recorded: Vec<_> = icon.nodes().into_iter().map(|node| node.data.clone()).collect();
    assert_eq!(recorded, before);
}

#[test]
fn childless_root() {
    let mut tree = crate::parse::parse_icon("empty", "<svg></svg>").unwrap();
    assert!(matches!(
        break_cycles(&mut tree, Strategy::TwoStep),
        AcyclicIcon::TwoStep { child: None, .. }
    ));

    let mut tree = crate::parse::parse_icon("empty", "<svg></svg>").unwrap();
    let AcyclicIcon::Flat(root) = break_cycles(&mut tree, Strategy::Flat) else {
        panic!("expected flat record");
    };
    assert_eq!(root.first_child, None);
}
