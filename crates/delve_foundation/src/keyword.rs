//! Keywords: the symbolic keys of map nodes.
//!
//! A keyword is written with a leading `:` (`:squares`, `:encounterRate`) so
//! that a key can never be confused with a text value. The stored name never
//! includes the sigil.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symbolic key used by map nodes.
///
/// Keywords hash and compare by name, and borrow as `&str`, so a
/// [`NodeMap`](crate::NodeMap) can be queried by plain name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Keyword(Arc<str>);

impl Keyword {
    /// The sigil that marks a keyword in the literal form.
    pub const SIGIL: char = ':';

    /// Creates a keyword from its bare name.
    ///
    /// The name should NOT include the leading `:`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Parses the literal form of a keyword (`:name`).
    ///
    /// Returns `None` if the sigil is missing or the name is empty.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        literal
            .strip_prefix(Self::SIGIL)
            .filter(|name| !name.is_empty())
            .map(Self::new)
    }

    /// Returns the name without the leading `:`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Keyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Keyword {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword({})", self.0)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SIGIL, self.0)
    }
}
