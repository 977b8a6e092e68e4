//! Parsing methods using html5ever
//!
//! # Quirks
//!
//! html5ever parses a fragment as if it were inserted into a document, so the parsed nodes are
//! found under a synthetic `<html>` element rather than directly under the document.
use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
};

use html5ever::{
    interface::{ElemName as ElemNameTrait, ElementFlags, NodeOrText, QuirksMode, TreeSink},
    parse_fragment as parse_html_fragment,
    tendril::{StrTendril, TendrilSink},
    LocalName, ParseOpts, QualName,
};

use crate::{
    arena::{Arena, NodeData, NodeId, Tree},
    name::{Attribute, ElementName, Namespace},
};

/// Parse a markup fragment with html5ever, using `<body>` as the context element.
///
/// The returned tree is rooted at the document node; the parsed nodes live under the synthetic
/// `<html>` element the parser inserts.
pub fn parse_fragment(source: &str) -> Tree {
    let context = QualName::new(
        None,
        Namespace::Html.uri().into(),
        LocalName::from("body"),
    );
    parse_html_fragment(Sink::new(), ParseOpts::default(), context, vec![], false).one(source)
}

struct Sink {
    arena: RefCell<Arena>,
    document: NodeId,
    line: Cell<u64>,
}

#[derive(Debug)]
struct ElemName {
    ns: html5ever::Namespace,
    local_name: LocalName,
}
impl ElemNameTrait for ElemName {
    fn ns(&self) -> &html5ever::Namespace {
        &self.ns
    }

    fn local_name(&self) -> &LocalName {
        &self.local_name
    }
}

impl Sink {
    fn new() -> Self {
        let mut arena = Arena::new();
        let document = arena.alloc(NodeData::Document);
        Self {
            arena: RefCell::new(arena),
            document,
            line: Cell::new(1),
        }
    }

    fn new_node(&self, data: NodeData) -> NodeId {
        self.arena.borrow_mut().alloc(data)
    }

    fn namespace(&self, ns: &html5ever::Namespace) -> Namespace {
        Namespace::from_uri(ns).unwrap_or_else(|| {
            log::warn!(
                "line {}: unsupported namespace `{}` was dropped",
                self.line.get(),
                &**ns
            );
            Namespace::None
        })
    }

    fn attribute(&self, attr: html5ever::Attribute) -> Attribute {
        Attribute {
            namespace: self.namespace(&attr.name.ns),
            key: attr.name.local.to_string(),
            value: String::from(&*attr.value),
        }
    }

    /// Appends text to the previous text node if there is one
    fn merge_text(arena: &mut Arena, previous: Option<NodeId>, text: &str) -> bool {
        let Some(previous) = previous else {
            return false;
        };
        if let NodeData::Text(previous_text) = &mut arena.get_mut(previous).data {
            previous_text.push_str(text);
            true
        } else {
            false
        }
    }
}

impl TreeSink for Sink {
    type Handle = NodeId;
    type Output = Tree;
    type ElemName<'a>
        = ElemName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        Tree {
            arena: self.arena.into_inner(),
            root: self.document,
        }
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        log::debug!("line {}: {msg}", self.line.get());
    }

    fn get_document(&self) -> Self::Handle {
        self.document
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        log::trace!("quirks mode set to {mode:?}");
    }

    fn set_current_line(&self, line: u64) {
        self.line.set(line);
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        let arena = self.arena.borrow();
        let name = arena.get(*target).element_name().expect("not an element!");
        ElemName {
            ns: name.namespace.uri().into(),
            local_name: LocalName::from(name.local.as_str()),
        }
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        *target
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<html5ever::Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let name = ElementName::new(self.namespace(&name.ns), name.local.to_string());
        let attrs = attrs.into_iter().map(|attr| self.attribute(attr)).collect();
        self.new_node(NodeData::Element { name, attrs })
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        self.new_node(NodeData::Comment(String::from(&*text)))
    }

    /// Only called by XML tokenizers; HTML turns `<?...>` into a comment itself
    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Self::Handle {
        self.new_node(NodeData::Comment(format!("?{} {}?", &*target, &*data)))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => {
                arena.append_child(*parent, node);
                debug_assert_eq!(arena.get(*parent).last_child(), Some(node));
            }
            NodeOrText::AppendText(text) => {
                if text.is_empty() {
                    return;
                }
                let previous = arena.get(*parent).last_child();
                if Self::merge_text(&mut arena, previous, &text) {
                    return;
                }
                let node = arena.alloc(NodeData::Text(String::from(&*text)));
                arena.append_child(*parent, node);
            }
        }
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        let node = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => {
                let previous = arena.get(*sibling).previous_sibling();
                if Self::merge_text(&mut arena, previous, &text) {
                    return;
                }
                arena.alloc(NodeData::Text(String::from(&*text)))
            }
        };
        let inserted = arena.insert_before(*sibling, node);
        debug_assert!(inserted, "parsed sibling should have parent");
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.arena.borrow().get(*element).parent().is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // doctype not needed in svg fragments
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, new_attrs: Vec<html5ever::Attribute>) {
        let new_attrs: Vec<_> = new_attrs
            .into_iter()
            .map(|attr| self.attribute(attr))
            .collect();
        let mut arena = self.arena.borrow_mut();
        let attrs = arena
            .get_mut(*target)
            .attributes_mut()
            .expect("not an element!");
        for attr in new_attrs {
            if attrs
                .iter()
                .any(|existing| existing.namespace == attr.namespace && existing.key == attr.key)
            {
                continue;
            }
            attrs.push(attr);
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.arena.borrow_mut().detach(*target);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        self.arena.borrow_mut().reparent_children(*node, *new_parent);
    }
}

#[test]
fn parse_svg_fragment() {
    let source = r##"<svg width="24" height="24" viewBox="0 0 24 24"><path d="M0 0"/><use xlink:href="#a"/></svg>"##;
    let Tree { arena, root } = parse_fragment(source);

    assert_eq!(arena.get(root).data, NodeData::Document);
    let html = arena.get(root).first_child().unwrap();
    assert!(arena
        .get(html)
        .element_name()
        .is_some_and(|name| name.is(Namespace::Html, "html")));

    let svg = arena.find_element(root, Namespace::Svg, "svg").unwrap();
    let attrs = arena.get(svg).attributes().unwrap();
    assert_eq!(
        attrs,
        &[
            Attribute::new("width", "24"),
            Attribute::new("height", "24"),
            Attribute::new("viewBox", "0 0 24 24"),
        ]
    );

    let children: Vec<_> = arena.children(svg).collect();
    assert_eq!(children.len(), 2);
    assert!(arena
        .get(children[0])
        .element_name()
        .is_some_and(|name| name.is(Namespace::Svg, "path")));
    assert_eq!(
        arena.get(children[1]).attributes().unwrap(),
        &[Attribute {
            namespace: Namespace::XLink,
            key: "href".into(),
            value: "#a".into(),
        }]
    );
}

#[test]
fn parse_text_and_comments() {
    let Tree { arena, root } = parse_fragment("<svg><!-- icon --><title>a &amp; b</title></svg>");

    let svg = arena.find_element(root, Namespace::Svg, "svg").unwrap();
    let children: Vec<_> = arena.children(svg).collect();
    assert_eq!(arena.get(children[0]).data, NodeData::Comment(" icon ".into()));
    let title = arena.get(children[1]).first_child().unwrap();
    assert_eq!(arena.get(title).data, NodeData::Text("a & b".into()));
}

#[test]
fn parse_processing_instruction_as_comment() {
    let Tree { arena, root } = parse_fragment("<svg><?xml-stylesheet href=\"a\"?></svg>");

    let svg = arena.find_element(root, Namespace::Svg, "svg").unwrap();
    let pi = arena.get(svg).first_child().unwrap();
    assert_eq!(
        arena.get(pi).data,
        NodeData::Comment("?xml-stylesheet href=\"a\"?".into())
    );
}
