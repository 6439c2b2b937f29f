//! Integration tests for Error types
//!
//! Tests error construction, display, context frames, and error kinds.

use delve_foundation::{
    Axis, Condition, Error, ErrorKind, Keyword, LoadingError, Location, Node, NodeKind,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn wrong_kind_at_root() {
    let err: Error =
        LoadingError::wrong_kind("Chamber", Location::Root, NodeKind::Map, NodeKind::Int).into();
    assert!(err.is_loading());
    assert_eq!(err.to_string(), "Chamber: must be a map node");
}

#[test]
fn wrong_kind_at_field() {
    let err = LoadingError::wrong_kind(
        "Chamber",
        Location::Field(Keyword::new("squares")),
        NodeKind::Vector,
        NodeKind::Int,
    );
    assert_eq!(
        err.to_string(),
        "Chamber: :squares must be a vector node, found an int"
    );
}

#[test]
fn missing_field_names_the_key() {
    let err = LoadingError::missing_field("Chamber", Keyword::new("squares"));
    assert!(matches!(
        err.condition,
        Condition::MissingField { ref field } if field.name() == "squares"
    ));
    assert_eq!(err.to_string(), "Chamber: no :squares field found");
}

#[test]
fn dimension_mismatch_names_axis_and_sizes() {
    let err =
        LoadingError::dimension_mismatch("Chamber", Axis::Height, Location::Element(3), 20, 19);
    let msg = err.to_string();
    assert!(msg.contains("element 3"));
    assert!(msg.contains("wrong height"));
    assert!(msg.contains("expected 20, got 19"));
}

#[test]
fn custom_complaint_keeps_condition() {
    let err = LoadingError::missing_field("Chamber", Keyword::new("squares"))
        .with_complaint("no square matrix node found (no mapping)");
    assert!(matches!(err.condition, Condition::MissingField { .. }));
    assert!(err.to_string().ends_with("(no mapping)"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn frames_do_not_change_kind() {
    let inner: Error = Node::Int(1).to_bool().unwrap_err().into();
    let outer = inner.clone().within("square (0, 0) of Chamber").within("chamber 2 of SaveGame");

    assert_eq!(outer.kind, inner.kind);
    assert!(outer.is_non_deserializable());
    assert_eq!(outer.frames(), ["square (0, 0) of Chamber", "chamber 2 of SaveGame"]);
}

#[test]
fn display_lists_frames_innermost_first() {
    let err: Error = LoadingError::missing_field("Shield", Keyword::new("name")).into();
    let err = err.within(":shield of PlayerState").within(":player of SaveGame");
    assert_eq!(
        err.to_string(),
        "Shield: no :name field found\n  in :shield of PlayerState\n  in :player of SaveGame"
    );
}

#[test]
fn persistence_kinds() {
    assert!(matches!(Error::serialization("bad marker").kind, ErrorKind::Serialization(_)));
    let err = Error::io("failed to open file 'save.msgpack'");
    assert!(err.to_string().contains("save.msgpack"));
    assert!(err.loading().is_none());
    assert!(err.condition().is_none());
}
