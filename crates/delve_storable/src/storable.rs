//! The `Storable` protocol.

use delve_foundation::{Node, Result};

/// An entity that can be written to and rebuilt from a [`Node`] tree.
///
/// `dump` followed by `load` must reproduce an equal entity for every field
/// the entity writes.
pub trait Storable: Sized {
    /// Entity name used in loading errors (e.g. `Chamber`).
    const NAME: &'static str;

    /// Builds a fully initialized entity from a node.
    ///
    /// Checks run top-down and stop at the first violation. A child's error
    /// is returned with its complaint intact; callers may only add frames.
    ///
    /// # Errors
    ///
    /// Returns an error if the node does not have the shape this entity
    /// expects, or if a leaf cannot yield the value the entity asks of it.
    fn load(node: &Node) -> Result<Self>;

    /// Writes this entity as a fresh node tree.
    ///
    /// Never fails, and never shares mutable state with `self`.
    fn dump(&self) -> Node;

    /// Replaces `self` with an entity loaded from `node`.
    ///
    /// On failure `self` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the error [`Storable::load`] produced.
    fn reload(&mut self, node: &Node) -> Result<()> {
        *self = Self::load(node)?;
        Ok(())
    }
}
