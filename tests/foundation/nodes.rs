//! Integration tests for Node types
//!
//! Tests Node construction, accessors, equality, and literal display.

use delve_foundation::{Keyword, Node, NodeKind, NodeMap, NodeVec};

// =============================================================================
// Node Construction
// =============================================================================

#[test]
fn leaves_report_their_kind() {
    assert_eq!(Node::Bool(true).kind(), NodeKind::Bool);
    assert_eq!(Node::Int(3).kind(), NodeKind::Int);
    assert_eq!(Node::Float(0.5).kind(), NodeKind::Float);
    assert_eq!(Node::from("three").kind(), NodeKind::Text);
    assert_eq!(Node::keyword("four").kind(), NodeKind::Keyword);
    assert!(Node::Int(3).is_leaf());
}

#[test]
fn composites_are_not_leaves() {
    let vector = Node::vector([Node::Int(1)]);
    let map = Node::map([("a", Node::Int(1))]);
    assert_eq!(vector.kind(), NodeKind::Vector);
    assert_eq!(map.kind(), NodeKind::Map);
    assert!(!vector.is_leaf());
    assert!(!map.is_leaf());
}

#[test]
fn keyword_literal_requires_sigil() {
    assert_eq!(Keyword::from_literal(":squares"), Some(Keyword::new("squares")));
    assert_eq!(Keyword::from_literal("squares"), None);
    assert_eq!(Keyword::new("squares").to_string(), ":squares");
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn try_accessors_return_none_on_mismatch() {
    let node = Node::Int(7);
    assert_eq!(node.as_int(), Some(7));
    assert_eq!(node.as_float(), None);
    assert_eq!(node.as_text(), None);
    assert!(node.as_vector().is_none());
    assert!(node.as_map().is_none());
}

#[test]
fn strict_accessor_names_both_kinds() {
    let err = Node::Float(1.5).to_vector().unwrap_err();
    assert_eq!(err.to_string(), "cannot deserialize a float node as a vector");
}

#[test]
fn int_is_not_silently_a_float() {
    assert!(Node::Int(2).to_float().is_err());
}

#[test]
fn map_lookup_by_name() {
    let map: NodeMap = [("gold", Node::Int(12)), ("name", Node::from("Player"))]
        .into_iter()
        .collect();
    assert_eq!(map.get("gold"), Some(&Node::Int(12)));
    assert!(map.contains_key("name"));
    assert!(map.get("squares").is_none());
}

#[test]
fn map_insert_replaces_existing_key() {
    let mut map = NodeMap::new();
    assert!(map.insert("gold", 1i64).is_none());
    assert_eq!(map.insert("gold", 2i64), Some(Node::Int(1)));
    assert_eq!(map.len(), 1);
}

#[test]
fn vector_preserves_order() {
    let vec: NodeVec = (0..5i64).map(Node::from).collect();
    let ints: Vec<i64> = vec.iter().filter_map(Node::as_int).collect();
    assert_eq!(ints, [0, 1, 2, 3, 4]);
}

// =============================================================================
// Equality and Display
// =============================================================================

#[test]
fn nan_equals_itself() {
    assert_eq!(Node::Float(f64::NAN), Node::Float(f64::NAN));
    assert_ne!(Node::Float(0.0), Node::Float(-0.0));
}

#[test]
fn clones_share_structure_but_compare_equal() {
    let grid = Node::vector((0..25).map(|_| Node::vector((0..20).map(|_| Node::Bool(false)))));
    let copy = grid.clone();
    assert_eq!(grid, copy);
}

#[test]
fn display_literal_form() {
    let node = Node::vector([
        Node::Int(1),
        Node::Float(2.0),
        Node::from("three"),
        Node::keyword("four"),
    ]);
    assert_eq!(node.to_string(), r#"[1 2.0 "three" :four]"#);
}

#[test]
fn display_sorts_map_keys() {
    let node = Node::map([("b", Node::Bool(true)), ("a", Node::Int(1))]);
    assert_eq!(node.to_string(), "{:a 1, :b true}");
}
