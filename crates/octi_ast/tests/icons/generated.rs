// Code generated by octi. DO NOT EDIT.

use octi_ast::literal::{Icon, LiteralAttribute, LiteralData, LiteralNode};
use octi_ast::name::Namespace;

/// `Alert` is the "alert" icon SVG node.
#[allow(non_upper_case_globals)]
pub static Alert: Icon = Icon::new(
    "alert",
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
                    key: "height",
                    value: "24",
                },
                LiteralAttribute {
                    namespace: Namespace::None,
                    key: "viewBox",
                    value: "0 0 24 24",
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
            tag: "path",
            attrs: &[
                LiteralAttribute {
                    namespace: Namespace::None,
                    key: "d",
                    value: "M0 0",
                },
            ],
        },
        first_child: None,
        next_sibling: Some(&LiteralNode {
            data: LiteralData::Element {
                namespace: Namespace::Svg,
                tag: "g",
                attrs: &[
                    LiteralAttribute {
                        namespace: Namespace::None,
                        key: "fill",
                        value: "none",
                    },
                ],
            },
            first_child: Some(&LiteralNode {
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
                    data: LiteralData::Element {
                        namespace: Namespace::Svg,
                        tag: "use",
                        attrs: &[
                            LiteralAttribute {
                                namespace: Namespace::XLink,
                                key: "href",
                                value: "#a",
                            },
                        ],
                    },
                    first_child: None,
                    next_sibling: None,
                }),
            }),
            next_sibling: Some(&LiteralNode {
                data: LiteralData::Element {
                    namespace: Namespace::Svg,
                    tag: "title",
                    attrs: &[],
                },
                first_child: Some(&LiteralNode {
                    data: LiteralData::Text("Alert & warn"),
                    first_child: None,
                    next_sibling: None,
                }),
                next_sibling: None,
            }),
        }),
    }),
);

/// `DotFill` is the "dot-fill" icon SVG node.
#[allow(non_upper_case_globals)]
pub static DotFill: Icon = Icon::new(
    "dot-fill",
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
                    value: "fill: red",
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
                    value: "2",
                },
            ],
        },
        first_child: None,
        next_sibling: None,
    }),
);

/// Every icon by name, sorted by name.
pub static ICONS: &[(&str, &Icon)] = &[
    ("alert", &Alert),
    ("dot-fill", &DotFill),
];

/// Returns the icon with the given name.
pub fn icon(name: &str) -> Option<&'static Icon> {
    ICONS
        .binary_search_by_key(&name, |&(key, _)| key)
        .ok()
        .map(|index| ICONS[index].1)
}
