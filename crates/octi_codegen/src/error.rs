//! Error types.
use std::fmt::Display;

#[derive(Debug)]
/// Errors which stop the generation of an artifact
pub enum Error {
    /// The markup of an icon didn't contain an `<svg>` element
    MissingRoot {
        /// The name of the icon
        name: String,
    },
    /// The identifier generated for an icon isn't a usable Rust identifier
    InvalidIdentifier {
        /// The name of the icon
        name: String,
        /// The identifier generated for the name
        identifier: String,
    },
    /// Two icons generated the same identifier
    IdentifierCollision {
        /// The identifier both names generate
        identifier: String,
        /// The name which first claimed the identifier
        first: String,
        /// The name which generated the identifier again
        second: String,
    },
    /// The icon contains a node which has no literal form
    UnsupportedNode {
        /// The name of the icon
        name: String,
        /// The kind of node found
        kind: &'static str,
    },
    /// There was an issue while writing the artifact
    IO(std::io::Error),
    /// The artifact was written with unbalanced delimiters
    Write(crate::writer::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRoot { name } => f.write_fmt(format_args!(
                "internal error: the markup of `{name}` has no `<svg>` element"
            )),
            Self::InvalidIdentifier { name, identifier } => f.write_fmt(format_args!(
                "`{name}` generates `{identifier}`, which is not a valid identifier"
            )),
            Self::IdentifierCollision {
                identifier,
                first,
                second,
            } => f.write_fmt(format_args!(
                "`{first}` and `{second}` both generate the identifier `{identifier}`"
            )),
            Self::UnsupportedNode { name, kind } => f.write_fmt(format_args!(
                "`{name}` contains a {kind} node, which can't be embedded"
            )),
            Self::IO(err) => err.fmt(f),
            Self::Write(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IO(err) => Some(err),
            Self::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IO(value)
    }
}

impl From<crate::writer::Error> for Error {
    fn from(value: crate::writer::Error) -> Self {
        match value {
            crate::writer::Error::IO(err) => Self::IO(err),
            err => Self::Write(err),
        }
    }
}
