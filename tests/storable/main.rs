//! Integration tests for Layer 1: Storable
//!
//! Tests the Storable protocol and validation helpers through a small
//! two-level entity: a ring of torches, each with a fuel gauge.

use delve_foundation::{
    Axis, Condition, Keyword, Location, Node, NodeKind, NodeMap, Result,
};
use delve_storable::{Storable, validate};

#[derive(Debug, Clone, PartialEq)]
struct Torch {
    lit: bool,
    fuel: f64,
}

impl Storable for Torch {
    const NAME: &'static str = "Torch";

    fn load(node: &Node) -> Result<Self> {
        let map = validate::expect_map(Self::NAME, node)?;
        Ok(Self {
            lit: validate::require_bool(Self::NAME, map, "lit")?,
            fuel: validate::require_float(Self::NAME, map, "fuel")?,
        })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with("lit", self.lit)
            .with("fuel", self.fuel)
            .into()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Sconce {
    label: String,
    torches: Vec<Torch>,
}

impl Sconce {
    const SLOTS: usize = 3;
}

impl Storable for Sconce {
    const NAME: &'static str = "Sconce";

    fn load(node: &Node) -> Result<Self> {
        let map = validate::expect_map(Self::NAME, node)?;
        let label = validate::require_text(Self::NAME, map, "label")?.to_owned();
        let slots = validate::require_vector(Self::NAME, map, "torches")?;
        validate::expect_len(
            Self::NAME,
            slots,
            Axis::Length,
            Location::Field(Keyword::new("torches")),
            Self::SLOTS,
        )?;
        let torches = validate::load_elements(Self::NAME, "torch", slots)?;
        Ok(Self { label, torches })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with("label", self.label.as_str())
            .with("torches", validate::dump_elements(&self.torches))
            .into()
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sconce() -> Sconce {
    Sconce {
        label: "north hall".to_owned(),
        torches: vec![
            Torch { lit: true, fuel: 0.75 },
            Torch { lit: false, fuel: 0.0 },
            Torch { lit: true, fuel: 1.0 },
        ],
    }
}

fn sconce_map() -> NodeMap {
    match sconce().dump() {
        Node::Map(map) => map,
        other => panic!("sconce dumped as {other}"),
    }
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn dump_then_load_is_identity() {
    init_logging();
    let original = sconce();
    assert_eq!(Sconce::load(&original.dump()).unwrap(), original);
}

#[test]
fn dump_produces_independent_trees() {
    let mut original = sconce();
    let before = original.dump();
    original.torches[0].fuel = 0.5;
    assert_ne!(before, original.dump());
    assert_eq!(Sconce::load(&before).unwrap().torches[0].fuel, 0.75);
}

#[test]
fn reload_leaves_entity_untouched_on_failure() {
    let mut entity = sconce();
    assert!(entity.reload(&Node::Int(3)).is_err());
    assert_eq!(entity, sconce());
}

// =============================================================================
// Validation failures
// =============================================================================

#[test]
fn non_map_root_fails_first() {
    let err = Sconce::load(&Node::vector([Node::Int(1)])).unwrap_err();
    assert!(matches!(
        err.condition(),
        Some(Condition::WrongNodeKind {
            at: Location::Root,
            expected: NodeKind::Map,
            actual: NodeKind::Vector,
        })
    ));
}

#[test]
fn missing_and_wrong_kind_are_distinct() {
    init_logging();
    let torches = validate::dump_elements(&sconce().torches);
    let missing = NodeMap::new().with("torches", torches.clone());
    let wrong = NodeMap::new().with("label", 4i64).with("torches", torches);

    let missing_err = Sconce::load(&missing.into()).unwrap_err();
    let wrong_err = Sconce::load(&wrong.into()).unwrap_err();

    assert!(matches!(missing_err.condition(), Some(Condition::MissingField { .. })));
    assert!(matches!(
        wrong_err.condition(),
        Some(Condition::WrongNodeKind {
            expected: NodeKind::Text,
            actual: NodeKind::Int,
            ..
        })
    ));
}

#[test]
fn wrong_length_is_a_dimension_mismatch() {
    let mut map = sconce_map();
    map.insert("torches", Node::vector([Torch { lit: true, fuel: 1.0 }.dump()]));

    let err = Sconce::load(&map.into()).unwrap_err();
    assert!(matches!(
        err.condition(),
        Some(Condition::DimensionMismatch {
            axis: Axis::Length,
            expected: 3,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn child_error_is_kept_and_framed() {
    let mut map = sconce_map();
    let bad_torch = NodeMap::new().with("lit", true).with("fuel", "plenty");
    map.insert(
        "torches",
        Node::vector([
            Torch { lit: true, fuel: 1.0 }.dump(),
            Torch { lit: true, fuel: 1.0 }.dump(),
            bad_torch.into(),
        ]),
    );

    let err = Sconce::load(&map.into()).unwrap_err();
    let loading = err.loading().unwrap();
    assert_eq!(loading.entity, "Torch");
    assert!(matches!(
        loading.condition,
        Condition::WrongNodeKind {
            expected: NodeKind::Float,
            actual: NodeKind::Text,
            ..
        }
    ));
    assert_eq!(err.frames(), ["torch 2 of Sconce"]);
    assert!(err.to_string().ends_with("\n  in torch 2 of Sconce"));
}
