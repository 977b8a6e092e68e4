//! Trees that can be written as `static` literal data.
//!
//! A literal tree only stores forward links (first-child and next-sibling), so it can be
//! expressed as nested `&'static` references without any cycles. Back-references are
//! recreated when an [`Icon`] is first loaded into an [`Arena`].
//!
//! # Example
//!
//! ```
//! use octi_ast::{
//!     literal::{Icon, LiteralAttribute, LiteralData, LiteralNode},
//!     name::Namespace,
//! };
//!
//! static DOT: Icon = Icon::new(
//!     "dot",
//!     LiteralNode {
//!         data: LiteralData::Element {
//!             namespace: Namespace::Svg,
//!             tag: "svg",
//!             attrs: &[LiteralAttribute {
//!                 namespace: Namespace::None,
//!                 key: "width",
//!                 value: "16",
//!             }],
//!         },
//!         first_child: None,
//!         next_sibling: None,
//!     },
//!     Some(&LiteralNode {
//!         data: LiteralData::Element {
//!             namespace: Namespace::Svg,
//!             tag: "circle",
//!             attrs: &[],
//!         },
//!         first_child: None,
//!         next_sibling: None,
//!     }),
//! );
//!
//! assert_eq!(DOT.markup(), r#"<svg width="16"><circle></circle></svg>"#);
//! ```
use std::sync::OnceLock;

use crate::{
    arena::{Arena, NodeData, NodeId, Tree},
    name::{Attribute, ElementName, Namespace},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// An attribute of a [`LiteralData::Element`]
pub struct LiteralAttribute {
    /// The namespace of the attribute
    pub namespace: Namespace,
    /// The local name of the attribute
    pub key: &'static str,
    /// The value of the attribute
    pub value: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// The contents of a [`LiteralNode`]
pub enum LiteralData {
    /// An element and its attributes
    Element {
        /// The namespace of the element
        namespace: Namespace,
        /// The local name of the element
        tag: &'static str,
        /// The attributes in source order, possibly with repeated keys
        attrs: &'static [LiteralAttribute],
    },
    /// Text content
    Text(&'static str),
    /// A comment
    Comment(&'static str),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// A node which only links forward to its first child and next sibling.
pub struct LiteralNode {
    /// The contents of the node
    pub data: LiteralData,
    /// The first child of the node
    pub first_child: Option<&'static LiteralNode>,
    /// The node following this one in its parent's child list
    pub next_sibling: Option<&'static LiteralNode>,
}

impl From<&LiteralData> for NodeData {
    fn from(value: &LiteralData) -> Self {
        match *value {
            LiteralData::Element {
                namespace,
                tag,
                attrs,
            } => NodeData::Element {
                name: ElementName::new(namespace, tag),
                attrs: attrs
                    .iter()
                    .map(|attr| Attribute {
                        namespace: attr.namespace,
                        key: attr.key.to_string(),
                        value: attr.value.to_string(),
                    })
                    .collect(),
            },
            LiteralData::Text(text) => NodeData::Text(text.to_string()),
            LiteralData::Comment(comment) => NodeData::Comment(comment.to_string()),
        }
    }
}

impl LiteralNode {
    /// Returns the children of the node by following the sibling chain of the first child
    pub fn children(&self) -> impl Iterator<Item = &'static LiteralNode> {
        std::iter::successors(self.first_child, |node| node.next_sibling)
    }

    /// Returns the descendants of the node in document order
    pub fn descendants(&self) -> impl Iterator<Item = &'static LiteralNode> {
        let mut stack: Vec<&'static LiteralNode> = self.first_child.into_iter().collect();
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            stack.extend(current.next_sibling);
            stack.extend(current.first_child);
            Some(current)
        })
    }

    /// Allocates the node and its descendants into the arena, linking every child to its parent
    pub fn load_into(&self, arena: &mut Arena) -> NodeId {
        let id = arena.alloc(NodeData::from(&self.data));
        for child in self.children() {
            let child = child.load_into(arena);
            arena.append_child(id, child);
        }
        id
    }

    /// Loads the node into a new arena
    pub fn load(&self) -> Tree {
        let mut arena = Arena::new();
        let root = self.load_into(&mut arena);
        Tree { arena, root }
    }
}

/// An icon split into a parent record without children and the child it was split from.
///
/// The tree is joined back together the first time it's requested.
pub struct Icon {
    name: &'static str,
    parent: LiteralNode,
    child: Option<&'static LiteralNode>,
    tree: OnceLock<Tree>,
}

impl Icon {
    /// Creates an icon from the parent and child records
    pub const fn new(
        name: &'static str,
        parent: LiteralNode,
        child: Option<&'static LiteralNode>,
    ) -> Self {
        Self {
            name,
            parent,
            child,
            tree: OnceLock::new(),
        }
    }

    /// The name the icon was catalogued as
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The root element of the icon, without children
    pub fn parent(&self) -> &LiteralNode {
        &self.parent
    }

    /// The first child of the root element, followed by its siblings
    pub fn child(&self) -> Option<&'static LiteralNode> {
        self.child
    }

    /// Returns the fully linked tree of the icon, linking it on first use
    pub fn tree(&self) -> &Tree {
        self.tree.get_or_init(|| self.link())
    }

    /// Returns the icon as markup
    pub fn markup(&self) -> String {
        let tree = self.tree();
        tree.arena.markup(tree.root)
    }

    /// Rejoins the parent with its child, recreating the back-references from the parent and
    /// child.
    fn link(&self) -> Tree {
        log::debug!("linking icon `{}`", self.name);
        let mut tree = self.parent.load();
        let siblings = std::iter::successors(self.child, |node| node.next_sibling);
        for child in siblings {
            let child = child.load_into(&mut tree.arena);
            tree.arena.append_child(tree.root, child);
        }
        tree
    }
}

impl std::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
static PATH: LiteralNode = LiteralNode {
    data: LiteralData::Element {
        namespace: Namespace::Svg,
        tag: "path",
        attrs: &[LiteralAttribute {
            namespace: Namespace::None,
            key: "d",
            value: "M0 0",
        }],
    },
    first_child: Some(&LiteralNode {
        data: LiteralData::Element {
            namespace: Namespace::Svg,
            tag: "title",
            attrs: &[],
        },
        first_child: Some(&LiteralNode {
            data: LiteralData::Text("path"),
            first_child: None,
            next_sibling: None,
        }),
        next_sibling: None,
    }),
    next_sibling: Some(&LiteralNode {
        data: LiteralData::Comment(" end "),
        first_child: None,
        next_sibling: None,
    }),
};

#[cfg(test)]
static ICON: Icon = Icon::new(
    "test",
    LiteralNode {
        data: LiteralData::Element {
            namespace: Namespace::Svg,
            tag: "svg",
            attrs: &[
                LiteralAttribute {
                    namespace: Namespace::None,
                    key: "width",
                    value: "16",
                },
                LiteralAttribute {
                    namespace: Namespace::None,
                    key: "style",
                    value: "vertical-align: top;",
                },
            ],
        },
        first_child: None,
        next_sibling: None,
    },
    Some(&PATH),
);

#[test]
fn literal_traversal() {
    let tags: Vec<_> = PATH
        .descendants()
        .map(|node| match node.data {
            LiteralData::Element { tag, .. } => tag,
            LiteralData::Text(text) | LiteralData::Comment(text) => text,
        })
        .collect();
    assert_eq!(tags, vec!["title", "path"]);
    assert_eq!(PATH.children().count(), 1);
}

#[test]
fn icon_tree_links_parent_and_child() {
    let Tree { arena, root } = ICON.tree();
    let root_node = arena.get(*root);
    assert_eq!(root_node.parent(), None);

    let path = root_node.first_child().unwrap();
    let comment = root_node.last_child().unwrap();
    assert_eq!(arena.get(path).parent(), Some(*root));
    assert_eq!(arena.get(path).next_sibling(), Some(comment));
    assert_eq!(arena.get(comment).previous_sibling(), Some(path));
    assert_eq!(arena.get(comment).parent(), Some(*root));

    let title = arena.get(path).first_child().unwrap();
    assert_eq!(arena.get(title).parent(), Some(path));
    assert!(std::ptr::eq(ICON.tree(), ICON.tree()));
}

#[test]
fn icon_markup() {
    assert_eq!(
        ICON.markup(),
        r#"<svg width="16" style="vertical-align: top;"><path d="M0 0"><title>path</title></path><!-- end --></svg>"#
    );
    assert_eq!(ICON.name(), "test");
    assert_eq!(ICON.child(), Some(&PATH));
}
