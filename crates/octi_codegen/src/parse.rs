//! Extracting the `<svg>` root from an icon's markup.
use octi_ast::{
    arena::Tree,
    name::Namespace,
    parse::parse_fragment,
};

use crate::error::Error;

/// Parses the markup of an icon and detaches its `<svg>` element from the wrappers the parser
/// inserts, returning a tree rooted at the `<svg>` element.
///
/// # Errors
///
/// If the markup has no `<svg>` element
pub fn parse_icon(name: &str, markup: &str) -> Result<Tree, Error> {
    let Tree { mut arena, root } = parse_fragment(markup);
    let Some(svg) = arena.find_element(root, Namespace::Svg, "svg") else {
        return Err(Error::MissingRoot {
            name: name.to_string(),
        });
    };
    arena.detach(svg);
    debug_assert!(arena.get(svg).parent().is_none());

    Ok(Tree { arena, root: svg })
}

#[test]
fn parse_icon_detaches_root() {
    let Tree { arena, root } =
        parse_icon("alert", r#"<svg width="24" height="24"><path d="M0 0"/></svg>"#).unwrap();

    let svg = arena.get(root);
    assert!(svg
        .element_name()
        .is_some_and(|name| name.is(Namespace::Svg, "svg")));
    assert_eq!(svg.parent(), None);
    assert_eq!(svg.next_sibling(), None);
    assert_eq!(svg.previous_sibling(), None);

    let path = svg.first_child().unwrap();
    assert_eq!(arena.get(path).parent(), Some(root));
    assert_eq!(svg.last_child(), Some(path));
}

#[test]
fn parse_icon_without_svg() {
    let error = parse_icon("broken", "<p>not an icon</p>").unwrap_err();
    assert!(matches!(error, Error::MissingRoot { name } if name == "broken"));
}
