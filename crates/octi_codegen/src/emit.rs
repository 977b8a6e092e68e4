//! Writes recorded icons as a Rust source artifact.
use std::io::Write;

use itertools::Itertools;
use octi_ast::arena::NodeData;

use crate::{
    cycles::{AcyclicIcon, RecordNode, Strategy},
    error::Error,
    writer::{Delimiter, SourceWriter},
    Options,
};

/// An icon which is ready to be declared
#[derive(Clone, Debug)]
pub struct Declaration {
    /// The name of the icon in the catalog
    pub name: String,
    /// The identifier the icon is declared as
    pub identifier: String,
    /// The icon's nodes
    pub icon: AcyclicIcon,
}

/// Writes the declarations, sorted by name, followed by a lookup table of every icon.
///
/// # Errors
///
/// If a declaration can't be written as a literal or the writer fails
pub fn emit<W: Write>(
    writer: W,
    declarations: Vec<Declaration>,
    options: &Options,
) -> Result<W, Error> {
    let mut w = SourceWriter::new(writer, options.writer);
    let ast = &options.ast_path;
    let declarations = declarations
        .into_iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect_vec();
    let declares_icons = match declarations.first() {
        Some(declaration) => matches!(declaration.icon, AcyclicIcon::TwoStep { .. }),
        None => options.strategy == Strategy::TwoStep,
    };

    w.line(format_args!("// Code generated by octi. DO NOT EDIT."))?;
    w.blank_line()?;
    if declares_icons {
        w.line(format_args!(
            "use {ast}::literal::{{Icon, LiteralAttribute, LiteralData, LiteralNode}};"
        ))?;
    } else {
        w.line(format_args!(
            "use {ast}::literal::{{LiteralAttribute, LiteralData, LiteralNode}};"
        ))?;
    }
    w.line(format_args!("use {ast}::name::Namespace;"))?;

    for declaration in &declarations {
        log::debug!("emitting `{}`", declaration.identifier);
        w.blank_line()?;
        write_declaration(&mut w, declaration)?;
    }

    let entry_type = if declares_icons { "Icon" } else { "LiteralNode" };
    w.blank_line()?;
    w.line(format_args!("/// Every icon by name, sorted by name."))?;
    w.start(
        format_args!("pub static ICONS: &[(&str, &{entry_type})] = &"),
        Delimiter::Bracket,
    )?;
    for Declaration {
        name, identifier, ..
    } in &declarations
    {
        w.line(format_args!("({name:?}, &{identifier}),"))?;
    }
    w.end(";")?;
    w.blank_line()?;
    w.line(format_args!("/// Returns the icon with the given name."))?;
    w.start(
        format_args!("pub fn icon(name: &str) -> Option<&'static {entry_type}>"),
        Delimiter::Brace,
    )?;
    w.line(format_args!("ICONS"))?;
    w.line(format_args!("    .binary_search_by_key(&name, |&(key, _)| key)"))?;
    w.line(format_args!("    .ok()"))?;
    w.line(format_args!("    .map(|index| ICONS[index].1)"))?;
    w.end("")?;

    Ok(w.end_document()?)
}

fn write_declaration<W: Write>(
    w: &mut SourceWriter<W>,
    Declaration {
        name,
        identifier,
        icon,
    }: &Declaration,
) -> Result<(), Error> {
    w.line(format_args!("/// `{identifier}` is the {name:?} icon SVG node."))?;
    w.line(format_args!("#[allow(non_upper_case_globals)]"))?;
    match icon {
        AcyclicIcon::Flat(root) => write_node(
            w,
            name,
            root,
            format_args!("pub static {identifier}: LiteralNode = "),
            ";",
        ),
        AcyclicIcon::TwoStep { parent, child } => {
            w.start(
                format_args!("pub static {identifier}: Icon = Icon::new"),
                Delimiter::Paren,
            )?;
            w.line(format_args!("{name:?},"))?;
            write_node(w, name, parent, format_args!(""), ",")?;
            match child {
                Some(child) => write_node(w, name, child, format_args!("Some(&"), "),")?,
                None => w.line(format_args!("None,"))?,
            }
            w.end(";")?;
            Ok(())
        }
    }
}

fn write_node<W: Write>(
    w: &mut SourceWriter<W>,
    name: &str,
    node: &RecordNode,
    prefix: std::fmt::Arguments,
    suffix: &str,
) -> Result<(), Error> {
    w.start(format_args!("{prefix}LiteralNode"), Delimiter::Brace)?;
    write_data(w, name, &node.data)?;
    match &node.first_child {
        Some(child) => write_node(w, name, child, format_args!("first_child: Some(&"), "),")?,
        None => w.line(format_args!("first_child: None,"))?,
    }
    match &node.next_sibling {
        Some(sibling) => {
            write_node(w, name, sibling, format_args!("next_sibling: Some(&"), "),")?;
        }
        None => w.line(format_args!("next_sibling: None,"))?,
    }
    w.end(suffix)?;
    Ok(())
}

fn write_data<W: Write>(
    w: &mut SourceWriter<W>,
    name: &str,
    data: &NodeData,
) -> Result<(), Error> {
    match data {
        NodeData::Element { name: tag, attrs } => {
            w.start(format_args!("data: LiteralData::Element"), Delimiter::Brace)?;
            w.line(format_args!("namespace: Namespace::{:?},", tag.namespace))?;
            w.line(format_args!("tag: {:?},", tag.local))?;
            if attrs.is_empty() {
                w.line(format_args!("attrs: &[],"))?;
            } else {
                w.start(format_args!("attrs: &"), Delimiter::Bracket)?;
                for attr in attrs {
                    w.start(format_args!("LiteralAttribute"), Delimiter::Brace)?;
                    w.line(format_args!("namespace: Namespace::{:?},", attr.namespace))?;
                    w.line(format_args!("key: {:?},", attr.key))?;
                    w.line(format_args!("value: {:?},", attr.value))?;
                    w.end(",")?;
                }
                w.end(",")?;
            }
            w.end(",")?;
        }
        NodeData::Text(text) => w.line(format_args!("data: LiteralData::Text({text:?}),"))?,
        NodeData::Comment(comment) => {
            w.line(format_args!("data: LiteralData::Comment({comment:?}),"))?;
        }
        NodeData::Document => {
            return Err(Error::UnsupportedNode {
                name: name.to_string(),
                kind: "document",
            })
        }
    }
    Ok(())
}

#[cfg(test)]
fn declare(name: &str, markup: &str, strategy: Strategy) -> Declaration {
    let mut tree = crate::parse::parse_icon(name, markup).unwrap();
    crate::normalize::normalize(&mut tree, &Options::default());
    Declaration {
        name: name.to_string(),
        identifier: crate::identifier::dash_sep_to_mixed_caps(name),
        icon: crate::cycles::break_cycles(&mut tree, strategy),
    }
}

#[cfg(test)]
fn emit_string(declarations: Vec<Declaration>) -> String {
    String::from_utf8(emit(Vec::new(), declarations, &Options::default()).unwrap()).unwrap()
}

#[test]
fn emit_two_step() {
    let output = emit_string(vec![declare(
        "dot",
        r#"<svg width="24"><circle r="1"/>a</svg>"#,
        Strategy::TwoStep,
    )]);

    insta::assert_snapshot!(output, @r###"
    // Code generated by octi. DO NOT EDIT.

    use octi_ast::literal::{Icon, LiteralAttribute, LiteralData, LiteralNode};
    use octi_ast::name::Namespace;

    /// `Dot` is the "dot" icon SVG node.
    #[allow(non_upper_case_globals)]
    pub static Dot: Icon = Icon::new(
        "dot",
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
        Some(&LiteralNode {
            data: LiteralData::Element {
                namespace: Namespace::Svg,
                tag: "circle",
                attrs: &[
                    LiteralAttribute {
                        namespace: Namespace::None,
                        key: "r",
                        value: "1",
                    },
                ],
            },
            first_child: None,
            next_sibling: Some(&LiteralNode {
                data: LiteralData::Text("a"),
                first_child: None,
                next_sibling: None,
            }),
        }),
    );

    /// Every icon by name, sorted by name.
    pub static ICONS: &[(&str, &Icon)] = &[
        ("dot", &Dot),
    ];

    /// Returns the icon with the given name.
    pub fn icon(name: &str) -> Option<&'static Icon> {
        ICONS
            .binary_search_by_key(&name, |&(key, _)| key)
            .ok()
            .map(|index| ICONS[index].1)
    }
    "###);
}

#[test]
fn emit_flat() {
    let output = emit_string(vec![declare(
        "blank",
        r#"<svg><title>"quoted"</title></svg>"#,
        Strategy::Flat,
    )]);

    insta::assert_snapshot!(output, @r###"
    // Code generated by octi. DO NOT EDIT.

    use octi_ast::literal::{LiteralAttribute, LiteralData, LiteralNode};
    use octi_ast::name::Namespace;

    /// `Blank` is the "blank" icon SVG node.
    #[allow(non_upper_case_globals)]
    pub static Blank: LiteralNode = LiteralNode {
        data: LiteralData::Element {
            namespace: Namespace::Svg,
            tag: "svg",
            attrs: &[
                LiteralAttribute {
                    namespace: Namespace::None,
                    key: "style",
                    value: "vertical-align: top;",
                },
            ],
        },
        first_child: Some(&LiteralNode {
            data: LiteralData::Element {
                namespace: Namespace::Svg,
                tag: "title",
                attrs: &[],
            },
            first_child: Some(&LiteralNode {
                data: LiteralData::Text("\"quoted\""),
                first_child: None,
                next_sibling: None,
            }),
            next_sibling: None,
        }),
        next_sibling: None,
    };

    /// Every icon by name, sorted by name.
    pub static ICONS: &[(&str, &LiteralNode)] = &[
        ("blank", &Blank),
    ];

    /// Returns the icon with the given name.
    pub fn icon(name: &str) -> Option<&'static LiteralNode> {
        ICONS
            .binary_search_by_key(&name, |&(key, _)| key)
            .ok()
            .map(|index| ICONS[index].1)
    }
    "###);
}

#[test]
fn emit_sorts_by_name() {
    let declarations = ["zap", "alert", "git-branch", "alert-fill"]
        .into_iter()
        .map(|name| declare(name, "<svg></svg>", Strategy::TwoStep))
        .collect_vec();
    let output = emit_string(declarations.clone());

    let declared = output
        .lines()
        .filter_map(|line| line.strip_prefix("pub static "))
        .filter_map(|line| line.split_once(':'))
        .map(|(identifier, _)| identifier)
        .collect_vec();
    assert_eq!(declared, ["Alert", "AlertFill", "GitBranch", "Zap", "ICONS"]);

    let reversed = declarations.into_iter().rev().collect_vec();
    assert_eq!(emit_string(reversed), output);
}

#[test]
fn emit_escapes_strings() {
    let output = emit_string(vec![declare(
        "quote",
        "<svg><desc>a\\b\n\u{e9}</desc></svg>",
        Strategy::TwoStep,
    )]);
    assert!(output.contains(r#"data: LiteralData::Text("a\\b\né"),"#));
}
