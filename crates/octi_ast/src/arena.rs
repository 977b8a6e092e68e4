//! The arena used to allocate nodes
//!
//! Nodes refer to each other by [`NodeId`] rather than by reference, so a tree with parent and
//! sibling back-references never owns a cycle.
use crate::name::{Attribute, ElementName, Namespace};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
/// The index of a node within an [`Arena`]
pub struct NodeId(usize);

#[derive(Clone, PartialEq, Debug)]
/// The contents of a node.
pub enum NodeData {
    /// The document a parser inserts nodes into
    Document,
    /// An element like `<svg>` or `<path>`
    Element {
        /// The qualified name of the element
        name: ElementName,
        /// The attributes of the element, in source order
        attrs: Vec<Attribute>,
    },
    /// The text content between elements
    Text(String),
    /// A comment, such as `<!-- ... -->`
    Comment(String),
}

#[derive(Clone, Debug)]
/// A node within an [`Arena`] along with the links to its neighbours.
pub struct Node {
    /// The contents of the node
    pub data: NodeData,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    previous_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            previous_sibling: None,
            next_sibling: None,
        }
    }

    /// [MDN | parentNode](https://developer.mozilla.org/en-US/docs/Web/API/Node/parentNode)
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// [MDN | firstChild](https://developer.mozilla.org/en-US/docs/Web/API/Node/firstChild)
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    /// [MDN | lastChild](https://developer.mozilla.org/en-US/docs/Web/API/Node/lastChild)
    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    /// [MDN | previousSibling](https://developer.mozilla.org/en-US/docs/Web/API/Node/previousSibling)
    pub fn previous_sibling(&self) -> Option<NodeId> {
        self.previous_sibling
    }

    /// [MDN | nextSibling](https://developer.mozilla.org/en-US/docs/Web/API/Node/nextSibling)
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// Returns the name of the node if it's an element
    pub fn element_name(&self) -> Option<&ElementName> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the attributes of the node if it's an element
    pub fn attributes(&self) -> Option<&[Attribute]> {
        match &self.data {
            NodeData::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    /// Returns the attribute list of the node if it's an element
    pub fn attributes_mut(&mut self) -> Option<&mut Vec<Attribute>> {
        match &mut self.data {
            NodeData::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// An arena of [`Node`] values for a single tree
pub struct Arena {
    nodes: Vec<Node>,
}

#[derive(Clone, Debug)]
/// An arena along with the node considered to be the root of its tree
pub struct Tree {
    /// The nodes of the tree
    pub arena: Arena,
    /// The root of the tree
    pub root: NodeId,
}

impl Arena {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a detached node with the given [`NodeData`]
    pub fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Returns the node for the id.
    ///
    /// # Panics
    ///
    /// If the id was allocated by another arena
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the node for the id mutably. Links can only be changed through the arena.
    ///
    /// # Panics
    ///
    /// If the id was allocated by another arena
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Adds a node to the end of the list of children of `parent`, detaching it from any
    /// previous parent first.
    ///
    /// [MDN | appendChild](https://developer.mozilla.org/en-US/docs/Web/API/Node/appendChild)
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert_ne!(parent, child);
        self.detach(child);
        let previous = self.nodes[parent.0].last_child;
        {
            let child = &mut self.nodes[child.0];
            child.parent = Some(parent);
            child.previous_sibling = previous;
        }
        match previous {
            Some(previous) => self.nodes[previous.0].next_sibling = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
    }

    /// Inserts `new_node` into the child list of `sibling`'s parent, directly before `sibling`.
    ///
    /// Returns `false` when `sibling` has no parent, leaving `new_node` untouched.
    ///
    /// [MDN | insertBefore](https://developer.mozilla.org/en-US/docs/Web/API/Node/insertBefore)
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) -> bool {
        let Some(parent) = self.nodes[sibling.0].parent else {
            return false;
        };
        self.detach(new_node);
        let previous = self.nodes[sibling.0].previous_sibling;
        {
            let node = &mut self.nodes[new_node.0];
            node.parent = Some(parent);
            node.previous_sibling = previous;
            node.next_sibling = Some(sibling);
        }
        self.nodes[sibling.0].previous_sibling = Some(new_node);
        match previous {
            Some(previous) => self.nodes[previous.0].next_sibling = Some(new_node),
            None => self.nodes[parent.0].first_child = Some(new_node),
        }
        true
    }

    /// Removes the node from its parent's child list and clears its parent and sibling links.
    /// The node's own children stay attached to it.
    ///
    /// [MDN | remove](https://developer.mozilla.org/en-US/docs/Web/API/Element/remove)
    pub fn detach(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        let parent = node.parent.take();
        let previous = node.previous_sibling.take();
        let next = node.next_sibling.take();

        match previous {
            Some(previous) => self.nodes[previous.0].next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.nodes[next.0].previous_sibling = previous,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].last_child = previous;
                }
            }
        }
    }

    /// Moves every child of `node` to the end of `new_parent`'s child list
    pub fn reparent_children(&mut self, node: NodeId, new_parent: NodeId) {
        while let Some(child) = self.nodes[node.0].first_child {
            self.append_child(new_parent, child);
        }
    }

    /// Clears the parent link of a node without touching the parent's child list.
    ///
    /// # Warning
    ///
    /// The parent will still list the node as a child, so the links of the tree no longer agree.
    /// This is only useful when preparing a tree to be written out through its forward links.
    pub fn take_parent(&mut self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent.take()
    }

    /// Clears the first-child link of a node without touching the child.
    ///
    /// # Warning
    ///
    /// See [`Arena::take_parent`]
    pub fn take_first_child(&mut self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].first_child.take()
    }

    /// Clears the last-child link of a node without touching the child.
    ///
    /// # Warning
    ///
    /// See [`Arena::take_parent`]
    pub fn take_last_child(&mut self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].last_child.take()
    }

    /// Iterates the children of a node through the first-child and next-sibling links
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            arena: self,
            next: self.nodes[id.0].first_child,
        }
    }

    /// Iterates the descendants of a node in document order through forward links only.
    /// The node itself isn't included.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            arena: self,
            stack: self.nodes[id.0].first_child.into_iter().collect(),
        }
    }

    /// Does a depth-first search from the node to find an element with the given name
    pub fn find_element(&self, from: NodeId, namespace: Namespace, local: &str) -> Option<NodeId> {
        self.descendants(from).find(|id| {
            self.get(*id)
                .element_name()
                .is_some_and(|name| name.is(namespace, local))
        })
    }
}

/// An iterator over the children of a node.
pub struct Children<'a> {
    arena: &'a Arena,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.arena.get(current).next_sibling;
        Some(current)
    }
}

/// A pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    arena: &'a Arena,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let node = self.arena.get(current);
        if let Some(next) = node.next_sibling {
            self.stack.push(next);
        }
        if let Some(child) = node.first_child {
            self.stack.push(child);
        }
        Some(current)
    }
}

#[cfg(test)]
fn element(arena: &mut Arena, local: &str) -> NodeId {
    arena.alloc(NodeData::Element {
        name: ElementName::new(Namespace::Svg, local),
        attrs: vec![],
    })
}

#[test]
fn append_child() {
    let mut arena = Arena::new();
    let svg = element(&mut arena, "svg");
    let a = element(&mut arena, "path");
    let b = element(&mut arena, "circle");
    arena.append_child(svg, a);
    arena.append_child(svg, b);

    let root = arena.get(svg);
    assert_eq!(root.first_child(), Some(a));
    assert_eq!(root.last_child(), Some(b));
    assert_eq!(arena.get(a).next_sibling(), Some(b));
    assert_eq!(arena.get(b).previous_sibling(), Some(a));
    assert_eq!(arena.get(b).parent(), Some(svg));
    assert_eq!(arena.children(svg).collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn detach() {
    let mut arena = Arena::new();
    let svg = element(&mut arena, "svg");
    let a = element(&mut arena, "path");
    let b = element(&mut arena, "circle");
    let c = element(&mut arena, "rect");
    for child in [a, b, c] {
        arena.append_child(svg, child);
    }

    arena.detach(b);
    assert_eq!(arena.children(svg).collect::<Vec<_>>(), vec![a, c]);
    assert_eq!(arena.get(a).next_sibling(), Some(c));
    assert_eq!(arena.get(c).previous_sibling(), Some(a));
    assert_eq!(arena.get(b).parent(), None);

    arena.detach(a);
    arena.detach(c);
    assert_eq!(arena.get(svg).first_child(), None);
    assert_eq!(arena.get(svg).last_child(), None);
}

#[test]
fn insert_before() {
    let mut arena = Arena::new();
    let svg = element(&mut arena, "svg");
    let a = element(&mut arena, "path");
    let b = element(&mut arena, "circle");
    arena.append_child(svg, b);

    assert!(arena.insert_before(b, a));
    assert_eq!(arena.children(svg).collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(arena.get(svg).first_child(), Some(a));
    assert!(!arena.insert_before(svg, b));
}

#[test]
fn reparent_children() {
    let mut arena = Arena::new();
    let from = element(&mut arena, "g");
    let to = element(&mut arena, "svg");
    let existing = element(&mut arena, "title");
    let a = element(&mut arena, "path");
    let b = element(&mut arena, "circle");
    arena.append_child(to, existing);
    arena.append_child(from, a);
    arena.append_child(from, b);

    arena.reparent_children(from, to);
    assert_eq!(arena.children(from).count(), 0);
    assert_eq!(arena.children(to).collect::<Vec<_>>(), vec![existing, a, b]);
    assert_eq!(arena.get(a).parent(), Some(to));
}

#[test]
fn descendants() {
    let mut arena = Arena::new();
    let svg = element(&mut arena, "svg");
    let g = element(&mut arena, "g");
    let path = element(&mut arena, "path");
    let circle = element(&mut arena, "circle");
    arena.append_child(svg, g);
    arena.append_child(g, path);
    arena.append_child(svg, circle);

    assert_eq!(
        arena.descendants(svg).collect::<Vec<_>>(),
        vec![g, path, circle]
    );
    assert_eq!(arena.descendants(g).collect::<Vec<_>>(), vec![path]);
    assert_eq!(arena.find_element(svg, Namespace::Svg, "circle"), Some(circle));
    assert_eq!(arena.find_element(svg, Namespace::Html, "circle"), None);
}
