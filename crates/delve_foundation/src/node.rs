//! The node tree every stored entity is written as.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::{NodeMap, NodeVec};
use crate::error::NonDeserializableError;
use crate::keyword::Keyword;
use crate::kind::NodeKind;

/// One datum in the storage format.
///
/// A node is either a typed leaf or a typed composite. Its variant is fixed at
/// construction; composites may still grow while a tree is being built.
/// Cloning is O(1) for every variant.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// Boolean leaf.
    Bool(bool),
    /// 64-bit signed integer leaf.
    Int(i64),
    /// 64-bit floating point leaf.
    Float(f64),
    /// Text leaf.
    Text(Arc<str>),
    /// Keyword leaf (`:name`).
    Keyword(Keyword),
    /// Ordered sequence.
    Vector(NodeVec),
    /// Keyword-keyed mapping.
    Map(NodeMap),
}

impl Node {
    /// Builds a vector node from an iterator of nodes.
    #[must_use]
    pub fn vector(items: impl IntoIterator<Item = Node>) -> Self {
        Self::Vector(items.into_iter().collect())
    }

    /// Builds a map node from keyword/value pairs.
    ///
    /// Later pairs overwrite earlier pairs with the same key.
    #[must_use]
    pub fn map<K: Into<Keyword>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Builds a keyword leaf from a bare name.
    #[must_use]
    pub fn keyword(name: &str) -> Self {
        Self::Keyword(Keyword::new(name))
    }

    /// Returns the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Bool(_) => NodeKind::Bool,
            Self::Int(_) => NodeKind::Int,
            Self::Float(_) => NodeKind::Float,
            Self::Text(_) => NodeKind::Text,
            Self::Keyword(_) => NodeKind::Keyword,
            Self::Vector(_) => NodeKind::Vector,
            Self::Map(_) => NodeKind::Map,
        }
    }

    /// Returns true if this node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !self.kind().is_composite()
    }

    // =========================================================================
    // Try-get accessors
    // =========================================================================

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a text reference.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a keyword.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Self::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Attempts to extract a keyword's name (without the leading `:`).
    #[must_use]
    pub fn as_keyword_name(&self) -> Option<&str> {
        self.as_keyword().map(Keyword::name)
    }

    /// Attempts to extract a vector reference.
    #[must_use]
    pub const fn as_vector(&self) -> Option<&NodeVec> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a map reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    // =========================================================================
    // Strict accessors
    // =========================================================================

    /// Extracts a boolean value.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not a bool node.
    pub fn to_bool(&self) -> Result<bool, NonDeserializableError> {
        self.as_bool().ok_or_else(|| self.cannot_yield(NodeKind::Bool))
    }

    /// Extracts an integer value.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not an int node.
    pub fn to_int(&self) -> Result<i64, NonDeserializableError> {
        self.as_int().ok_or_else(|| self.cannot_yield(NodeKind::Int))
    }

    /// Extracts a float value.
    ///
    /// Int nodes are not promoted: a float field must be written as a float.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not a float node.
    pub fn to_float(&self) -> Result<f64, NonDeserializableError> {
        self.as_float().ok_or_else(|| self.cannot_yield(NodeKind::Float))
    }

    /// Extracts a text reference.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not a text node.
    pub fn to_text(&self) -> Result<&str, NonDeserializableError> {
        self.as_text().ok_or_else(|| self.cannot_yield(NodeKind::Text))
    }

    /// Extracts a keyword.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not a keyword node.
    pub fn to_keyword(&self) -> Result<&Keyword, NonDeserializableError> {
        self.as_keyword()
            .ok_or_else(|| self.cannot_yield(NodeKind::Keyword))
    }

    /// Extracts a vector reference.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not a vector node.
    pub fn to_vector(&self) -> Result<&NodeVec, NonDeserializableError> {
        self.as_vector()
            .ok_or_else(|| self.cannot_yield(NodeKind::Vector))
    }

    /// Extracts a map reference.
    ///
    /// # Errors
    ///
    /// Returns a [`NonDeserializableError`] if this is not a map node.
    pub fn to_map(&self) -> Result<&NodeMap, NonDeserializableError> {
        self.as_map().ok_or_else(|| self.cannot_yield(NodeKind::Map))
    }

    fn cannot_yield(&self, requested: NodeKind) -> NonDeserializableError {
        NonDeserializableError::new(requested, self.kind())
    }
}

// Floats compare by bit pattern so that equality stays reflexive for NaN.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Keyword(a), Self::Keyword(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write_float(f, *n),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Keyword(kw) => write!(f, "{kw}"),
            Self::Vector(v) => write!(f, "{v:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
        }
    }
}

/// Renders the literal form: `[1 2.0 "three" :four]`, `{:a 1, :b true}`.
///
/// Map entries are written sorted by key so output is deterministic.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write_float(f, *n),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Keyword(kw) => write!(f, "{kw}"),
            Self::Vector(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.sorted_entries().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// A float literal always carries a decimal point, so `2.0` never reads as an int.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let text = n.to_string();
    if n.is_finite() && !text.contains('.') {
        write!(f, "{text}.0")
    } else {
        f.write_str(&text)
    }
}

// Convenience From implementations

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Arc<str>> for Node {
    fn from(s: Arc<str>) -> Self {
        Self::Text(s)
    }
}

impl From<Keyword> for Node {
    fn from(kw: Keyword) -> Self {
        Self::Keyword(kw)
    }
}

impl From<NodeVec> for Node {
    fn from(v: NodeVec) -> Self {
        Self::Vector(v)
    }
}

impl From<NodeMap> for Node {
    fn from(m: NodeMap) -> Self {
        Self::Map(m)
    }
}
