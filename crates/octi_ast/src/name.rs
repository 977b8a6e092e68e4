//! Namespaces and qualified names for elements and attributes.
use std::fmt::Display;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
/// The namespace of an element or attribute.
///
/// Only the namespaces an HTML parser can assign are represented, which keeps the type
/// usable in `static` literal data.
///
/// [WHATWG | Namespaces](https://infra.spec.whatwg.org/#namespaces)
pub enum Namespace {
    /// No namespace, as used by most attributes
    #[default]
    None,
    /// `http://www.w3.org/1999/xhtml`
    Html,
    /// `http://www.w3.org/2000/svg`
    Svg,
    /// `http://www.w3.org/1998/Math/MathML`
    MathMl,
    /// `http://www.w3.org/1999/xlink`
    XLink,
    /// `http://www.w3.org/XML/1998/namespace`
    Xml,
    /// `http://www.w3.org/2000/xmlns/`
    Xmlns,
}

impl Namespace {
    /// Returns the namespace uri, which is empty for [`Namespace::None`]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Html => "http://www.w3.org/1999/xhtml",
            Self::Svg => "http://www.w3.org/2000/svg",
            Self::MathMl => "http://www.w3.org/1998/Math/MathML",
            Self::XLink => "http://www.w3.org/1999/xlink",
            Self::Xml => "http://www.w3.org/XML/1998/namespace",
            Self::Xmlns => "http://www.w3.org/2000/xmlns/",
        }
    }

    /// Finds the namespace for the given uri.
    ///
    /// Returns [None] for namespaces which can't be produced by an HTML parser.
    pub fn from_uri(uri: &str) -> Option<Self> {
        Some(match uri {
            "" => Self::None,
            "http://www.w3.org/1999/xhtml" => Self::Html,
            "http://www.w3.org/2000/svg" => Self::Svg,
            "http://www.w3.org/1998/Math/MathML" => Self::MathMl,
            "http://www.w3.org/1999/xlink" => Self::XLink,
            "http://www.w3.org/XML/1998/namespace" => Self::Xml,
            "http://www.w3.org/2000/xmlns/" => Self::Xmlns,
            _ => return None,
        })
    }

    /// The prefix used when serializing an attribute in this namespace
    pub const fn attribute_prefix(self) -> Option<&'static str> {
        match self {
            Self::XLink => Some("xlink"),
            Self::Xml => Some("xml"),
            Self::Xmlns => Some("xmlns"),
            Self::None | Self::Html | Self::Svg | Self::MathMl => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// The qualified name of an element, such as `svg` in the SVG namespace.
pub struct ElementName {
    /// The namespace the element belongs to
    pub namespace: Namespace,
    /// The local part of the tag name
    pub local: String,
}

impl ElementName {
    /// Creates an element name
    pub fn new(namespace: Namespace, local: impl Into<String>) -> Self {
        Self {
            namespace,
            local: local.into(),
        }
    }

    /// Whether the name matches the namespace and local name
    pub fn is(&self, namespace: Namespace, local: &str) -> bool {
        self.namespace == namespace && self.local == local
    }
}

impl Display for ElementName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.local)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// An attribute of an element.
///
/// Attributes are kept as an ordered list by their element and may repeat a key.
pub struct Attribute {
    /// The namespace of the attribute, usually [`Namespace::None`]
    pub namespace: Namespace,
    /// The local name of the attribute, e.g. the `href` of `xlink:href`
    pub key: String,
    /// The unparsed value of the attribute
    pub value: String,
}

impl Attribute {
    /// Creates an attribute without a namespace
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: Namespace::None,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns a formatter for the serialized name, e.g. `xlink:href`
    pub fn name(&self) -> AttributeName<'_> {
        AttributeName {
            namespace: self.namespace,
            key: &self.key,
        }
    }
}

/// Formats the serialized name of an attribute
pub struct AttributeName<'a> {
    namespace: Namespace,
    key: &'a str,
}

impl<'a> AttributeName<'a> {
    /// Creates a formatter for an attribute name from its parts
    pub fn new(namespace: Namespace, key: &'a str) -> Self {
        Self { namespace, key }
    }
}

impl Display for AttributeName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.namespace.attribute_prefix() {
            // `xmlns` itself lives in the xmlns namespace
            Some("xmlns") if self.key == "xmlns" => f.write_str(self.key),
            Some(prefix) => f.write_fmt(format_args!("{prefix}:{}", self.key)),
            None => f.write_str(self.key),
        }
    }
}

#[test]
fn namespace_uri() {
    for namespace in [
        Namespace::None,
        Namespace::Html,
        Namespace::Svg,
        Namespace::MathMl,
        Namespace::XLink,
        Namespace::Xml,
        Namespace::Xmlns,
    ] {
        assert_eq!(Namespace::from_uri(namespace.uri()), Some(namespace));
    }
    assert_eq!(Namespace::from_uri("urn:example"), None);
}

#[test]
fn attribute_name() {
    let href = Attribute {
        namespace: Namespace::XLink,
        key: "href".into(),
        value: "#a".into(),
    };
    assert_eq!(href.name().to_string(), "xlink:href");
    assert_eq!(
        AttributeName::new(Namespace::Xmlns, "xmlns").to_string(),
        "xmlns"
    );
    assert_eq!(
        AttributeName::new(Namespace::Xmlns, "xlink").to_string(),
        "xmlns:xlink"
    );
    assert_eq!(Attribute::new("width", "16").name().to_string(), "width");
}
