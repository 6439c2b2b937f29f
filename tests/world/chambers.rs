//! Integration tests for Chamber
//!
//! Tests grid loading, dimension checks, error chains, and exit generation.

use delve_foundation::{Axis, Condition, Location, Node, NodeKind, NodeMap};
use delve_storable::Storable;
use delve_world::{Chamber, Direction, Exits, Square};
use proptest::prelude::*;

use crate::init_logging;

fn grid(width: usize, height: usize) -> Node {
    Node::vector((0..width).map(|_| Node::vector((0..height).map(|_| Node::Bool(false)))))
}

fn chamber_node(squares: Node) -> Node {
    NodeMap::new().with("squares", squares).into()
}

fn is_border(x: usize, y: usize) -> bool {
    x == 0 || y == 0 || x == Chamber::WIDTH - 1 || y == Chamber::HEIGHT - 1
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn load_reads_every_square() {
    init_logging();
    let mut chamber = Chamber::new();
    *chamber.square_mut(3, 17).unwrap() = Square::WALL;

    let loaded = Chamber::load(&chamber.dump()).unwrap();
    assert_eq!(loaded.square(3, 17), Some(&Square::WALL));
    assert_eq!(loaded.square(17, 3), Some(&Square::FLOOR));
    assert_eq!(loaded, chamber);
}

#[test]
fn encounter_rate_reverts_to_default() {
    let mut chamber = Chamber::new();
    chamber.encounter_rate = 0.5;

    let node = chamber.dump();
    assert_eq!(node.as_map().unwrap().get("encounterRate"), Some(&Node::Float(0.5)));
    assert_eq!(
        Chamber::load(&node).unwrap().encounter_rate,
        Chamber::DEFAULT_ENCOUNTER_RATE
    );
}

#[test]
fn extra_fields_are_ignored() {
    let node: Node = NodeMap::new()
        .with("squares", grid(Chamber::WIDTH, Chamber::HEIGHT))
        .with("theme", Node::keyword("crypt"))
        .into();
    assert_eq!(Chamber::load(&node).unwrap(), Chamber::new());
}

#[test]
fn non_map_root() {
    let err = Chamber::load(&grid(Chamber::WIDTH, Chamber::HEIGHT)).unwrap_err();
    assert!(matches!(
        err.condition(),
        Some(Condition::WrongNodeKind { at: Location::Root, .. })
    ));
    assert_eq!(err.to_string(), "Chamber: must be a map node");
}

#[test]
fn twenty_four_rows_is_a_width_error() {
    let err = Chamber::load(&chamber_node(grid(24, Chamber::HEIGHT))).unwrap_err();
    assert!(matches!(
        err.condition(),
        Some(Condition::DimensionMismatch {
            axis: Axis::Width,
            expected: 25,
            actual: 24,
            ..
        })
    ));
}

#[test]
fn one_short_row_names_its_index() {
    let columns = (0..Chamber::WIDTH).map(|x| {
        let height = if x == 7 { Chamber::HEIGHT - 1 } else { Chamber::HEIGHT };
        Node::vector((0..height).map(|_| Node::Bool(true)))
    });
    let err = Chamber::load(&chamber_node(Node::vector(columns))).unwrap_err();
    assert!(matches!(
        err.condition(),
        Some(Condition::DimensionMismatch {
            axis: Axis::Height,
            at: Location::Element(7),
            expected: 20,
            actual: 19,
        })
    ));
}

#[test]
fn missing_and_mistyped_squares_differ() {
    let missing = Chamber::load(&NodeMap::new().with("encounterRate", 0.02).into()).unwrap_err();
    let mistyped = Chamber::load(&chamber_node(Node::from("grid"))).unwrap_err();

    assert!(matches!(missing.condition(), Some(Condition::MissingField { .. })));
    assert!(matches!(
        mistyped.condition(),
        Some(Condition::WrongNodeKind {
            actual: NodeKind::Text,
            ..
        })
    ));
    assert_ne!(missing.to_string(), mistyped.to_string());
}

#[test]
fn bad_square_keeps_its_own_error() {
    let columns = (0..Chamber::WIDTH).map(|x| {
        Node::vector((0..Chamber::HEIGHT).map(move |y| {
            if (x, y) == (4, 9) {
                Node::Float(1.0)
            } else {
                Node::Bool(false)
            }
        }))
    });
    let err = Chamber::load(&chamber_node(Node::vector(columns))).unwrap_err();

    assert!(err.is_non_deserializable());
    assert!(err.to_string().starts_with("cannot deserialize a float node as a bool"));
    assert_eq!(err.frames(), ["square (4, 9) of Chamber"]);
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn sealed_chamber_has_a_full_border() {
    let chamber = Chamber::with_exits(Exits::none());
    for x in 0..Chamber::WIDTH {
        for y in 0..Chamber::HEIGHT {
            let square = chamber.square(x, y).unwrap();
            assert_eq!(square.is_wall, is_border(x, y), "square ({x}, {y})");
        }
    }
}

#[test]
fn open_chamber_has_four_gaps() {
    let chamber = Chamber::with_exits(Exits::all());
    let open_border: Vec<(usize, usize)> = (0..Chamber::WIDTH)
        .flat_map(|x| (0..Chamber::HEIGHT).map(move |y| (x, y)))
        .filter(|&(x, y)| is_border(x, y) && !chamber.square(x, y).unwrap().is_wall)
        .collect();

    assert_eq!(
        open_border,
        [(0, 10), (0, 11), (12, 0), (12, 19), (13, 0), (13, 19), (24, 10), (24, 11)]
    );
}

#[test]
fn generation_never_removes_walls() {
    let mut chamber = Chamber::with_exits(Exits::none());
    chamber.generate(Exits::all());
    assert_eq!(chamber, Chamber::with_exits(Exits::none()));
}

proptest! {
    #[test]
    fn toggling_an_exit_changes_only_that_edge(
        mask in prop::collection::vec(any::<bool>(), 4),
        toggle in 0usize..4,
    ) {
        let exits: Exits = Direction::ALL
            .into_iter()
            .zip(&mask)
            .filter(|(_, open)| **open)
            .map(|(direction, _)| direction)
            .collect();
        let direction = Direction::ALL[toggle];
        let toggled = if exits.contains(direction) {
            exits.without(direction)
        } else {
            exits.with(direction)
        };

        let before = Chamber::with_exits(exits);
        let after = Chamber::with_exits(toggled);
        for x in 0..Chamber::WIDTH {
            for y in 0..Chamber::HEIGHT {
                let on_edge = match direction {
                    Direction::North => y == 0,
                    Direction::South => y == Chamber::HEIGHT - 1,
                    Direction::West => x == 0,
                    Direction::East => x == Chamber::WIDTH - 1,
                };
                if !on_edge {
                    prop_assert_eq!(before.square(x, y), after.square(x, y));
                }
            }
        }
    }

    #[test]
    fn any_wall_pattern_round_trips(
        walls in prop::collection::vec(any::<bool>(), Chamber::WIDTH * Chamber::HEIGHT),
    ) {
        let mut chamber = Chamber::new();
        for (i, is_wall) in walls.into_iter().enumerate() {
            chamber.square_mut(i / Chamber::HEIGHT, i % Chamber::HEIGHT).unwrap().is_wall = is_wall;
        }
        prop_assert_eq!(Chamber::load(&chamber.dump()).unwrap(), chamber);
    }
}
