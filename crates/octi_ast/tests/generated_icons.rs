//! Loads source written by `octi_codegen` for `icons/catalog.json`.
use octi_ast::{arena::Tree, name::Namespace};

mod icons {
    include!("icons/generated.rs");
}

#[test]
fn lookup() {
    assert_eq!(icons::ICONS.len(), 2);
    assert_eq!(icons::icon("alert").map(|icon| icon.name()), Some("alert"));
    assert!(std::ptr::eq(icons::icon("dot-fill").unwrap(), &icons::DotFill));
    assert!(icons::icon("dot").is_none());
    assert!(icons::icon("zap").is_none());
}

#[test]
fn tree_restores_back_references() {
    let Tree { arena, root } = icons::Alert.tree();
    let svg = arena.get(*root);
    assert!(svg
        .element_name()
        .is_some_and(|name| name.is(Namespace::Svg, "svg")));
    assert_eq!(svg.parent(), None);

    let children: Vec<_> = arena.children(*root).collect();
    assert_eq!(children.len(), 3);
    assert_eq!(svg.first_child(), Some(children[0]));
    assert_eq!(svg.last_child(), Some(children[2]));
    for (index, &child) in children.iter().enumerate() {
        assert_eq!(arena.get(child).parent(), Some(*root));
        let previous = index.checked_sub(1).map(|index| children[index]);
        assert_eq!(arena.get(child).previous_sibling(), previous);
    }

    let g = children[1];
    let grandchildren: Vec<_> = arena.children(g).collect();
    assert_eq!(grandchildren.len(), 2);
    assert_eq!(arena.get(g).last_child(), Some(grandchildren[1]));
    for &grandchild in &grandchildren {
        assert_eq!(arena.get(grandchild).parent(), Some(g));
    }
    let xlink = arena.get(grandchildren[1]).attributes().unwrap();
    assert_eq!(xlink[0].namespace, Namespace::XLink);
    assert_eq!(xlink[0].name().to_string(), "xlink:href");
}

#[test]
fn markup() {
    assert_eq!(
        icons::Alert.markup(),
        r##"<svg width="16" height="24" viewBox="0 0 24 24" style="vertical-align: top;"><path d="M0 0"></path><g fill="none"><circle r="1"></circle><use xlink:href="#a"></use></g><title>Alert &amp; warn</title></svg>"##
    );
    assert_eq!(
        icons::DotFill.markup(),
        r#"<svg width="16" style="fill: red" style="vertical-align: top;"><circle r="2"></circle></svg>"#
    );
}
