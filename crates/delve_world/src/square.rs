//! A single chamber cell.

use delve_foundation::{Node, Result};
use delve_storable::Storable;

/// One cell of a [`Chamber`](crate::Chamber).
///
/// Stored as a bare boolean leaf: `true` for a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Square {
    /// Whether this cell blocks movement.
    pub is_wall: bool,
}

impl Square {
    /// An open cell.
    pub const FLOOR: Square = Square { is_wall: false };

    /// A blocking cell.
    pub const WALL: Square = Square { is_wall: true };

    /// Creates a square.
    #[must_use]
    pub const fn new(is_wall: bool) -> Self {
        Self { is_wall }
    }

    /// Returns the map glyph for this square.
    #[must_use]
    pub const fn glyph(self) -> char {
        if self.is_wall { '#' } else { '.' }
    }
}

impl Storable for Square {
    const NAME: &'static str = "Square";

    // No shape checks of its own: a non-bool node is the node layer's error.
    fn load(node: &Node) -> Result<Self> {
        Ok(Self::new(node.to_bool()?))
    }

    fn dump(&self) -> Node {
        Node::Bool(self.is_wall)
    }
}
