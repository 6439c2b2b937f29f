//! Compass directions and chamber exit sets.

use std::fmt;
use std::iter::FromIterator;

/// One of the four chamber edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top edge (`y = 0`).
    North,
    /// Right edge (`x = WIDTH - 1`).
    East,
    /// Bottom edge (`y = HEIGHT - 1`).
    South,
    /// Left edge (`x = 0`).
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the direction facing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::North => 1,
            Self::East => 1 << 1,
            Self::South => 1 << 2,
            Self::West => 1 << 3,
        }
    }
}

/// The set of edges a chamber has openings on.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exits(u8);

impl Exits {
    /// No exits.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// An exit on every edge.
    #[must_use]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    /// Returns this set with `direction` added.
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Returns this set with `direction` removed.
    #[must_use]
    pub const fn without(self, direction: Direction) -> Self {
        Self(self.0 & !direction.bit())
    }

    /// Returns true if `direction` has an exit.
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Returns true if there are no exits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the directions in this set.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for Exits {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl fmt::Debug for Exits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
