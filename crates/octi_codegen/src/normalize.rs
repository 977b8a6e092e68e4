//! Rewrites the root of an icon for display.
use octi_ast::{
    arena::Tree,
    name::{Attribute, Namespace},
};

use crate::Options;

/// Pins the width of the root element and appends the configured style to it.
///
/// Only the first un-namespaced `width` is changed and no width is added when missing. The
/// style is always appended, even when the root already has a `style` attribute.
pub fn normalize(tree: &mut Tree, options: &Options) {
    let Some(attrs) = tree.arena.get_mut(tree.root).attributes_mut() else {
        log::warn!("normalize: root is not an element");
        return;
    };

    if let Some(width) = attrs
        .iter_mut()
        .find(|attr| attr.namespace == Namespace::None && attr.key == "width")
    {
        width.value.clone_from(&options.width);
    }
    attrs.push(Attribute::new("style", options.style.as_str()));
}

#[cfg(test)]
fn normalized_attributes(markup: &str) -> Vec<Attribute> {
    let mut tree = crate::parse::parse_icon("test", markup).unwrap();
    normalize(&mut tree, &Options::default());
    tree.arena
        .get(tree.root)
        .attributes()
        .unwrap()
        .to_vec()
}

#[test]
fn normalize_width_and_style() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        normalized_attributes(r#"<svg width="24" height="24"><path d="M0 0"/></svg>"#),
        vec![
            Attribute::new("width", "16"),
            Attribute::new("height", "24"),
            Attribute::new("style", "vertical-align: top;"),
        ]
    );
}

#[test]
fn normalize_without_width() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        normalized_attributes(r#"<svg height="24"></svg>"#),
        vec![
            Attribute::new("height", "24"),
            Attribute::new("style", "vertical-align: top;"),
        ]
    );
}

#[test]
fn normalize_keeps_existing_style() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        normalized_attributes(r#"<svg style="fill: red" width="8" width="9"></svg>"#),
        vec![
            Attribute::new("style", "fill: red"),
            Attribute::new("width", "16"),
            Attribute::new("style", "vertical-align: top;"),
        ]
    );
}

#[test]
fn normalize_with_options() {
    let options: Options =
        serde_json::from_str(r#"{ "width": "24", "style": "display: inline;" }"#).unwrap();
    let mut tree = crate::parse::parse_icon("test", r#"<svg width="12"></svg>"#).unwrap();
    normalize(&mut tree, &options);
    assert_eq!(
        tree.arena.markup(tree.root),
        r#"<svg width="24" style="display: inline;"></svg>"#
    );
}
