use std::fmt;

/// Problems found in a template.
///
/// Substitution never fails; these surface only through
/// [`Tabby::diagnose`](crate::Tabby::diagnose) and keyword parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Directive kind not in the catalog
    UnknownKind { kind: String, position: usize },
    /// Parameter that will be replaced by its default
    InvalidParameter {
        kind: String,
        index: usize,
        value: String,
        position: usize,
    },
    /// `{{` with no closing `}}`
    UnclosedMarker(usize),
    /// `{{` followed by a `}}` that still does not form a marker, as in `{{a}b}}` or `{{}}`
    MalformedMarker(usize),
    /// Keyword outside any template that names no directive kind
    UnknownKeyword(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownKind { kind, position } => {
                write!(f, "Unknown placeholder type '{}' at position {}", kind, position)
            }
            Error::InvalidParameter { kind, index, value, position } => write!(
                f,
                "Invalid parameter {} '{}' for '{}' at position {}, default used",
                index, value, kind, position
            ),
            Error::UnclosedMarker(pos) => write!(f, "Unclosed placeholder starting at position {}", pos),
            Error::MalformedMarker(pos) => write!(f, "Malformed placeholder starting at position {}", pos),
            Error::UnknownKeyword(kind) => write!(f, "Unknown placeholder type '{}'", kind),
        }
    }
}

impl std::error::Error for Error {}
