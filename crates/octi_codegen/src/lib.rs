/*!
Generates Rust source which embeds a catalog of SVG icons as literal DOM trees.

Each icon is parsed, normalised for display, severed at its root so that it holds no
back-references, and written out under a mixed caps identifier.

# Usage

```rust
use octi_codegen::{generate, IconCatalog, Options};

let catalog = IconCatalog::from_iter([(
    "dot".to_string(),
    r#"<svg width="24"><circle r="1"/></svg>"#.to_string(),
)]);
let source = generate(&catalog, &Options::default()).unwrap();
let source = String::from_utf8(source).unwrap();

assert!(source.contains("pub static Dot: Icon = Icon::new("));
assert!(source.contains(r#"value: "vertical-align: top;","#));
```
*/
pub mod cycles;
pub mod emit;
mod error;
pub mod identifier;
pub mod normalize;
pub mod parse;
pub mod writer;

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use crate::{cycles::Strategy, error::Error};
use crate::{emit::Declaration, identifier::Identifiers};

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default, rename_all = "camelCase")]
/// Options for how icons are generated
pub struct Options {
    /// The value every icon's `width` is pinned to
    ///
    /// Default: `"16"`
    pub width: String,
    /// The style appended to every icon
    ///
    /// Default: `"vertical-align: top;"`
    pub style: String,
    /// How icon roots are separated from their children
    ///
    /// Default: [`Strategy::TwoStep`]
    pub strategy: Strategy,
    /// The path of the crate providing the literal types, as used in the artifact
    ///
    /// Default: `"octi_ast"`
    pub ast_path: String,
    /// The layout of the artifact
    #[serde(skip)]
    pub writer: writer::Options,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: String::from("16"),
            style: String::from("vertical-align: top;"),
            strategy: Strategy::default(),
            ast_path: String::from("octi_ast"),
            writer: writer::Options::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq, Eq)]
#[serde(transparent)]
/// A mapping of icon names to their SVG markup
pub struct IconCatalog(HashMap<String, String>);

impl IconCatalog {
    /// Returns the number of icons in the catalog
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no icons
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the markup of the named icon
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the icons sorted by name
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, markup)| (name.as_str(), markup.as_str()))
            .sorted_by_key(|&(name, _)| name)
    }
}

impl FromIterator<(String, String)> for IconCatalog {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Prepares a single icon for emission.
///
/// # Errors
///
/// If the markup has no `<svg>` element or the name can't be made into an identifier
pub fn declare(
    identifiers: &mut Identifiers,
    name: &str,
    markup: &str,
    options: &Options,
) -> Result<Declaration, Error> {
    let identifier = identifiers.claim(name)?;
    let mut tree = parse::parse_icon(name, markup)?;
    normalize::normalize(&mut tree, options);
    let icon = cycles::break_cycles(&mut tree, options.strategy);
    log::debug!("declared `{name}` as `{identifier}`");
    Ok(Declaration {
        name: name.to_string(),
        identifier,
        icon,
    })
}

/// Generates the source of an artifact declaring every icon in the catalog.
///
/// The output only depends on the contents of the catalog and options, and nothing is returned
/// when any icon fails.
///
/// # Errors
///
/// If any icon can't be declared
pub fn generate(catalog: &IconCatalog, options: &Options) -> Result<Vec<u8>, Error> {
    log::info!("generating {} icons", catalog.len());
    let mut identifiers = Identifiers::default();
    let declarations = catalog
        .sorted()
        .map(|(name, markup)| declare(&mut identifiers, name, markup, options))
        .collect::<Result<Vec<_>, _>>()?;

    emit::emit(Vec::new(), declarations, options)
}

#[cfg(test)]
fn catalog(icons: &[(&str, &str)]) -> IconCatalog {
    icons
        .iter()
        .map(|&(name, markup)| (name.to_string(), markup.to_string()))
        .collect()
}

#[test]
fn generate_is_deterministic() {
    let icons = [
        ("zap", r#"<svg width="16"><path d="M1 1"/></svg>"#),
        ("alert", r#"<svg width="24"><path d="M0 0"/></svg>"#),
        ("git-branch", r#"<svg><g><path d="M2 2"/></g></svg>"#),
    ];
    let forwards = generate(&catalog(&icons), &Options::default()).unwrap();
    let mut reversed = icons;
    reversed.reverse();
    let backwards = generate(&catalog(&reversed), &Options::default()).unwrap();

    assert_eq!(forwards, backwards);
    let source = String::from_utf8(forwards).unwrap();
    let alert = source.find("pub static Alert:").unwrap();
    let git_branch = source.find("pub static GitBranch:").unwrap();
    let zap = source.find("pub static Zap:").unwrap();
    assert!(alert < git_branch && git_branch < zap);
}

#[test]
fn generate_empty_catalog() {
    let source = generate(&IconCatalog::default(), &Options::default()).unwrap();
    let source = String::from_utf8(source).unwrap();
    assert!(source.contains("pub static ICONS: &[(&str, &Icon)] = &[\n];"));
}

#[test]
fn generate_fails_without_output() {
    let error = generate(
        &catalog(&[("alert", "<svg></svg>"), ("broken", "<p></p>")]),
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(error, Error::MissingRoot { name } if name == "broken"));

    let error = generate(
        &catalog(&[("url", "<svg></svg>"), ("URL", "<svg></svg>")]),
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        Error::IdentifierCollision { first, second, .. } if first == "URL" && second == "url"
    ));

    let error = generate(
        &catalog(&[("alert", "<svg><path/></svg>"), ("none", "<svg><path/></svg>")]),
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        Error::InvalidIdentifier { name, identifier } if name == "none" && identifier == "None"
    ));
}

#[test]
fn options_defaults() {
    let options: Options = serde_json::from_str(r#"{ "strategy": "flat" }"#).unwrap();
    assert_eq!(options.width, "16");
    assert_eq!(options.style, "vertical-align: top;");
    assert_eq!(options.strategy, Strategy::Flat);
    assert_eq!(options.ast_path, "octi_ast");

    let source = generate(&catalog(&[("dot", "<svg></svg>")]), &options).unwrap();
    let source = String::from_utf8(source).unwrap();
    assert!(source.contains("pub static Dot: LiteralNode = LiteralNode {"));
}

#[test]
fn catalog_from_json() {
    let catalog: IconCatalog =
        serde_json::from_str(r#"{ "alert": "<svg></svg>", "zap": "<svg/>" }"#).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("zap"), Some("<svg/>"));
    assert_eq!(
        catalog.sorted().map(|(name, _)| name).collect::<Vec<_>>(),
        ["alert", "zap"]
    );
}

#[test]
fn generated_icons_are_up_to_date() {
    use pretty_assertions::assert_eq;

    let catalog: IconCatalog =
        serde_json::from_str(include_str!("../../octi_ast/tests/icons/catalog.json")).unwrap();
    let source = generate(&catalog, &Options::default()).unwrap();
    assert_eq!(
        String::from_utf8(source).unwrap(),
        include_str!("../../octi_ast/tests/icons/generated.rs"),
        "regenerate `octi_ast/tests/icons/generated.rs` from `catalog.json`"
    );
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
