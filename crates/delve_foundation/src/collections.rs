//! Composite node collections with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent data structures.
//! Cloning a collection is O(1), so a dumped tree can be handed out freely
//! without aliasing the entity it came from.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::keyword::Keyword;
use crate::node::Node;

/// Ordered sequence of nodes.
///
/// Order is content: a chamber's rows are identified by their index.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeVec(im::Vector<Node>);

impl NodeVec {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    ///
    /// Callers are expected to have checked the length first; an
    /// out-of-range index is a caller error and yields `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index)
    }

    /// Appends a node, preserving order. Amortized O(1).
    pub fn push(&mut self, node: impl Into<Node>) {
        self.0.push_back(node.into());
    }

    /// Appends a node and returns the vector, for chained building.
    #[must_use]
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.0.iter()
    }
}

impl fmt::Debug for NodeVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Node> for NodeVec {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl IntoIterator for NodeVec {
    type Item = Node;
    type IntoIter = im::vector::ConsumingIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeVec {
    type Item = &'a Node;
    type IntoIter = im::vector::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Keyword-keyed mapping of nodes.
///
/// Keys are unique: inserting an existing key overwrites its value. The
/// order entries come back in is unspecified.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeMap(im::HashMap<Keyword, Node>);

impl NodeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a value by keyword name (without the leading `:`).
    ///
    /// Absence is `None`; it is up to the loader to decide whether a missing
    /// key is an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.0.get(name)
    }

    /// Returns true if the map has an entry for the keyword name.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Inserts a key/value pair, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<Keyword>, value: impl Into<Node>) -> Option<Node> {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts a key/value pair and returns the map, for chained building.
    #[must_use]
    pub fn with(mut self, key: impl Into<Keyword>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns an iterator over key/value pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, &Node)> {
        self.0.iter()
    }

    /// Returns an iterator over keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &Keyword> {
        self.0.keys()
    }

    /// Returns the entries sorted by key name.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&Keyword, &Node)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl fmt::Debug for NodeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted_entries()).finish()
    }
}

impl<K: Into<Keyword>> FromIterator<(K, Node)> for NodeMap {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
