//! Node kind descriptors for diagnostics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variant of a [`Node`](crate::Node), without its payload.
///
/// Used to report what a loader expected and what it actually found.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// Boolean leaf.
    Bool,
    /// 64-bit signed integer leaf.
    Int,
    /// 64-bit floating point leaf.
    Float,
    /// Text leaf.
    Text,
    /// Keyword leaf (`:name`).
    Keyword,
    /// Ordered sequence of nodes.
    Vector,
    /// Keyword-keyed mapping.
    Map,
}

impl NodeKind {
    /// Returns true for the composite kinds (vector and map).
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Vector | Self::Map)
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Keyword => "keyword",
            Self::Vector => "vector",
            Self::Map => "map",
        }
    }

    /// Returns the name with an indefinite article ("a map", "an int").
    #[must_use]
    pub const fn with_article(self) -> &'static str {
        match self {
            Self::Bool => "a bool",
            Self::Int => "an int",
            Self::Float => "a float",
            Self::Text => "a text",
            Self::Keyword => "a keyword",
            Self::Vector => "a vector",
            Self::Map => "a map",
        }
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
