//! Serializing arena trees back into markup.
use std::fmt::{self, Write};

use crate::{
    arena::{Arena, NodeData, NodeId},
    name::AttributeName,
};

/// Escapes markup-significant characters while writing a string
struct Escaped<'a> {
    value: &'a str,
    quotes: bool,
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut part_start = 0;
        for (position, char) in self.value.char_indices() {
            let escaped = match char {
                '&' => "&amp;",
                '<' if !self.quotes => "&lt;",
                '>' if !self.quotes => "&gt;",
                '"' if self.quotes => "&quot;",
                '\u{a0}' => "&nbsp;",
                _ => continue,
            };
            f.write_str(&self.value[part_start..position])?;
            f.write_str(escaped)?;
            part_start = position + char.len_utf8();
        }
        f.write_str(&self.value[part_start..])
    }
}

impl Arena {
    /// Writes the node and its descendants as markup.
    ///
    /// Only forward links are followed, so a tree prepared for literal output can still be
    /// serialized.
    ///
    /// # Errors
    ///
    /// If the writer fails
    pub fn write_markup(&self, id: NodeId, w: &mut impl Write) -> fmt::Result {
        match &self.get(id).data {
            NodeData::Document => {
                for child in self.children(id) {
                    self.write_markup(child, w)?;
                }
                Ok(())
            }
            NodeData::Element { name, attrs } => {
                write!(w, "<{name}")?;
                for attr in attrs {
                    write!(
                        w,
                        r#" {}="{}""#,
                        AttributeName::new(attr.namespace, &attr.key),
                        Escaped {
                            value: &attr.value,
                            quotes: true,
                        }
                    )?;
                }
                w.write_char('>')?;
                for child in self.children(id) {
                    self.write_markup(child, w)?;
                }
                write!(w, "</{name}>")
            }
            NodeData::Text(text) => write!(
                w,
                "{}",
                Escaped {
                    value: text,
                    quotes: false,
                }
            ),
            NodeData::Comment(comment) => write!(w, "<!--{comment}-->"),
        }
    }

    /// Returns the node and its descendants as markup
    pub fn markup(&self, id: NodeId) -> String {
        let mut result = String::new();
        self.write_markup(id, &mut result)
            .expect("writing to a string never fails");
        result
    }
}

#[test]
fn markup() {
    use crate::name::{Attribute, ElementName, Namespace};

    let mut arena = Arena::new();
    let svg = arena.alloc(NodeData::Element {
        name: ElementName::new(Namespace::Svg, "svg"),
        attrs: vec![
            Attribute::new("width", "16"),
            Attribute {
                namespace: Namespace::Xmlns,
                key: "xlink".into(),
                value: Namespace::XLink.uri().into(),
            },
        ],
    });
    let title = arena.alloc(NodeData::Element {
        name: ElementName::new(Namespace::Svg, "title"),
        attrs: vec![Attribute::new("data-label", r#"say "hi""#)],
    });
    let text = arena.alloc(NodeData::Text("<a & b>".into()));
    arena.append_child(svg, title);
    arena.append_child(title, text);

    assert_eq!(
        arena.markup(svg),
        r#"<svg width="16" xmlns:xlink="http://www.w3.org/1999/xlink"><title data-label="say &quot;hi&quot;">&lt;a &amp; b&gt;</title></svg>"#
    );
}
