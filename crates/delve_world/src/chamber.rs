//! Chambers: fixed-size rooms made of squares.
//!
//! A chamber is stored as
//!
//! ```text
//! {:encounterRate 0.02,
//!  :squares [[false false ...]    ; WIDTH columns,
//!            [false true ...]     ; each HEIGHT squares tall
//!            ...]}
//! ```

use std::fmt;

use delve_foundation::{
    Axis, Keyword, LoadingError, Location, Node, NodeKind, NodeMap, NodeVec, Result,
};
use delve_storable::{Storable, validate};
use log::{debug, trace};

use crate::direction::{Direction, Exits};
use crate::square::Square;

const SQUARES: &str = "squares";
const ENCOUNTER_RATE: &str = "encounterRate";

/// A room of `WIDTH` x `HEIGHT` squares, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chamber {
    /// The cells of this chamber, column-major.
    pub squares: [[Square; Chamber::HEIGHT]; Chamber::WIDTH],
    /// Chance of a random encounter per step.
    pub encounter_rate: f64,
}

impl Chamber {
    /// Number of columns.
    pub const WIDTH: usize = 25;

    /// Number of squares in each column.
    pub const HEIGHT: usize = 20;

    /// Width of the opening carved for each exit.
    pub const EXIT_WIDTH: usize = 2;

    /// Encounter rate of a fresh chamber.
    pub const DEFAULT_ENCOUNTER_RATE: f64 = 0.02;

    /// Creates an empty chamber: all floor, default encounter rate.
    #[must_use]
    pub fn new() -> Self {
        Self::from_squares([[Square::FLOOR; Self::HEIGHT]; Self::WIDTH])
    }

    /// Creates a chamber that takes ownership of a grid of squares.
    #[must_use]
    pub fn from_squares(squares: [[Square; Self::HEIGHT]; Self::WIDTH]) -> Self {
        Self {
            squares,
            encounter_rate: Self::DEFAULT_ENCOUNTER_RATE,
        }
    }

    /// Creates an empty chamber and walls it in, leaving the given exits open.
    #[must_use]
    pub fn with_exits(exits: Exits) -> Self {
        let mut chamber = Self::new();
        chamber.generate(exits);
        chamber
    }

    /// Returns the square at `(x, y)`, if in bounds.
    #[must_use]
    pub fn square(&self, x: usize, y: usize) -> Option<&Square> {
        self.squares.get(x)?.get(y)
    }

    /// Returns the square at `(x, y)` mutably, if in bounds.
    pub fn square_mut(&mut self, x: usize, y: usize) -> Option<&mut Square> {
        self.squares.get_mut(x)?.get_mut(y)
    }

    /// Puts walls along all four edges, leaving an `EXIT_WIDTH` gap in the
    /// middle of every edge listed in `exits`.
    ///
    /// Only raises walls; squares that are already walls stay walls.
    pub fn generate(&mut self, exits: Exits) {
        trace!("generating chamber walls with exits {exits:?}");

        let north_open = exits.contains(Direction::North);
        let south_open = exits.contains(Direction::South);
        for (x, column) in self.squares.iter_mut().enumerate() {
            let in_gap = Self::in_exit_gap(x, Self::WIDTH);
            if !(north_open && in_gap) {
                column[0].is_wall = true;
            }
            if !(south_open && in_gap) {
                column[Self::HEIGHT - 1].is_wall = true;
            }
        }

        let west_open = exits.contains(Direction::West);
        for (y, square) in self.squares[0].iter_mut().enumerate() {
            if !(west_open && Self::in_exit_gap(y, Self::HEIGHT)) {
                square.is_wall = true;
            }
        }

        let east_open = exits.contains(Direction::East);
        for (y, square) in self.squares[Self::WIDTH - 1].iter_mut().enumerate() {
            if !(east_open && Self::in_exit_gap(y, Self::HEIGHT)) {
                square.is_wall = true;
            }
        }
    }

    /// Returns true if `index` lies in the exit gap of an edge `len` long.
    #[must_use]
    pub const fn in_exit_gap(index: usize, len: usize) -> bool {
        index >= len / 2 && index < len / 2 + Self::EXIT_WIDTH
    }
}

impl Default for Chamber {
    fn default() -> Self {
        Self::new()
    }
}

impl Storable for Chamber {
    const NAME: &'static str = "Chamber";

    fn load(node: &Node) -> Result<Self> {
        debug!("loading {}", Self::NAME);
        let map = validate::expect_map(Self::NAME, node)?;
        let matrix = match map.get(SQUARES) {
            Some(Node::Vector(matrix)) => matrix,
            Some(other) => {
                return Err(LoadingError::wrong_kind(
                    Self::NAME,
                    Location::Field(Keyword::new(SQUARES)),
                    NodeKind::Vector,
                    other.kind(),
                )
                .with_complaint("no square matrix node found (wrong type)")
                .into());
            }
            None => {
                return Err(LoadingError::missing_field(Self::NAME, Keyword::new(SQUARES))
                    .with_complaint("no square matrix node found (no mapping)")
                    .into());
            }
        };
        validate::expect_len(
            Self::NAME,
            matrix,
            Axis::Width,
            Location::Field(Keyword::new(SQUARES)),
            Self::WIDTH,
        )?;

        // Every column is shape-checked before any square is loaded.
        let columns = matrix
            .iter()
            .enumerate()
            .map(|(x, column_node)| -> Result<&NodeVec> {
                let cells = validate::element_vector(Self::NAME, column_node, x)?;
                validate::expect_len(
                    Self::NAME,
                    cells,
                    Axis::Height,
                    Location::Element(x),
                    Self::HEIGHT,
                )?;
                Ok(cells)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut squares = [[Square::FLOOR; Self::HEIGHT]; Self::WIDTH];
        for ((x, cells), column) in columns.into_iter().enumerate().zip(squares.iter_mut()) {
            for ((y, cell), square) in cells.iter().enumerate().zip(column.iter_mut()) {
                *square = validate::load_element(cell, || {
                    format!("square ({x}, {y}) of {}", Self::NAME)
                })?;
            }
        }

        // :encounterRate is written by dump but not read back here.
        Ok(Self::from_squares(squares))
    }

    fn dump(&self) -> Node {
        let matrix = Node::vector(
            self.squares
                .iter()
                .map(|column| Node::vector(column.iter().map(Storable::dump))),
        );
        NodeMap::new()
            .with(ENCOUNTER_RATE, self.encounter_rate)
            .with(SQUARES, matrix)
            .into()
    }
}

/// Draws the chamber one row (`y`) per line.
impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..Self::HEIGHT {
            for column in &self.squares {
                write!(f, "{}", column[y].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
