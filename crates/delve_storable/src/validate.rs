//! Shape checks for loading entities.
//!
//! Every `load` runs the same pipeline, stopping at the first failure:
//!
//! 1. root kind ([`expect_map`], [`expect_vector`])
//! 2. required keys ([`require_all`], [`require`])
//! 3. field kinds ([`require_vector`], [`require_map`], [`require_int`], ...)
//! 4. fixed sizes ([`expect_len`], [`expect_max_len`])
//! 5. recursive element loads ([`load_field`], [`load_element`], [`load_elements`])
//!
//! Steps 1-4 produce [`LoadingError`]s naming the entity. Step 5 hands the
//! child's error back unchanged apart from one added context frame.

use delve_foundation::{
    Axis, Keyword, LoadingError, Location, Node, NodeKind, NodeMap, NodeVec,
    NonDeserializableError, Result,
};
use log::trace;

use crate::storable::Storable;

/// Checks that an entity's root node is a map.
///
/// # Errors
///
/// Returns a `WrongNodeKind` loading error ("must be a map node") otherwise.
pub fn expect_map<'n>(entity: &str, node: &'n Node) -> Result<&'n NodeMap> {
    node.as_map().ok_or_else(|| {
        LoadingError::wrong_kind(entity, Location::Root, NodeKind::Map, node.kind()).into()
    })
}

/// Checks that an entity's root node is a vector.
///
/// # Errors
///
/// Returns a `WrongNodeKind` loading error ("must be a vector node") otherwise.
pub fn expect_vector<'n>(entity: &str, node: &'n Node) -> Result<&'n NodeVec> {
    node.as_vector().ok_or_else(|| {
        LoadingError::wrong_kind(entity, Location::Root, NodeKind::Vector, node.kind()).into()
    })
}

/// Looks up a required field.
///
/// # Errors
///
/// Returns a `MissingField` loading error if the key is absent.
pub fn require<'n>(entity: &str, map: &'n NodeMap, field: &str) -> Result<&'n Node> {
    map.get(field)
        .ok_or_else(|| LoadingError::missing_field(entity, Keyword::new(field)).into())
}

/// Checks that every listed field is present, before any is read.
///
/// # Errors
///
/// Returns `MissingField` for the first absent key, in `fields` order.
pub fn require_all(entity: &str, map: &NodeMap, fields: &[&str]) -> Result<()> {
    fields
        .iter()
        .try_for_each(|field| require(entity, map, field).map(|_| ()))
}

/// Looks up a required field that must hold a vector.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if not a vector.
pub fn require_vector<'n>(entity: &str, map: &'n NodeMap, field: &str) -> Result<&'n NodeVec> {
    read_field(entity, map, field, Node::to_vector)
}

/// Looks up a required field that must hold a map.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if not a map.
pub fn require_map<'n>(entity: &str, map: &'n NodeMap, field: &str) -> Result<&'n NodeMap> {
    read_field(entity, map, field, Node::to_map)
}

/// Reads a required float field.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if not a float.
pub fn require_float(entity: &str, map: &NodeMap, field: &str) -> Result<f64> {
    read_field(entity, map, field, Node::to_float)
}

/// Reads a required integer field.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if not an int.
pub fn require_int(entity: &str, map: &NodeMap, field: &str) -> Result<i64> {
    read_field(entity, map, field, Node::to_int)
}

/// Reads a required text field.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if not text.
pub fn require_text<'n>(entity: &str, map: &'n NodeMap, field: &str) -> Result<&'n str> {
    read_field(entity, map, field, Node::to_text)
}

/// Reads a required boolean field.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if not a bool.
pub fn require_bool(entity: &str, map: &NodeMap, field: &str) -> Result<bool> {
    read_field(entity, map, field, Node::to_bool)
}

/// Reads a required field through one of the strict node accessors.
///
/// A kind mismatch here is the entity's own field-kind check failing, so it
/// is reported as a `WrongNodeKind` scoped to the field rather than as a
/// [`NonDeserializableError`].
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongNodeKind` if the accessor rejects
/// the node.
pub fn read_field<'n, T>(
    entity: &str,
    map: &'n NodeMap,
    field: &str,
    read: impl FnOnce(&'n Node) -> std::result::Result<T, NonDeserializableError>,
) -> Result<T> {
    let node = require(entity, map, field)?;
    read(node).map_err(|err| {
        LoadingError::wrong_kind(
            entity,
            Location::Field(Keyword::new(field)),
            err.requested,
            err.actual,
        )
        .into()
    })
}

/// Checks that an element of a vector is itself a vector.
///
/// # Errors
///
/// Returns a `WrongNodeKind` loading error scoped to the element index.
pub fn element_vector<'n>(entity: &str, node: &'n Node, index: usize) -> Result<&'n NodeVec> {
    node.as_vector().ok_or_else(|| {
        LoadingError::wrong_kind(
            entity,
            Location::Element(index),
            NodeKind::Vector,
            node.kind(),
        )
        .into()
    })
}

/// Checks that a vector has exactly `expected` elements.
///
/// # Errors
///
/// Returns a `DimensionMismatch` loading error naming `axis` otherwise.
pub fn expect_len(
    entity: &str,
    vec: &NodeVec,
    axis: Axis,
    at: Location,
    expected: usize,
) -> Result<()> {
    if vec.len() == expected {
        Ok(())
    } else {
        Err(LoadingError::dimension_mismatch(entity, axis, at, expected, vec.len()).into())
    }
}

/// Checks that a vector has at most `max` elements.
///
/// # Errors
///
/// Returns a `DimensionMismatch` loading error naming `axis` otherwise.
pub fn expect_max_len(
    entity: &str,
    vec: &NodeVec,
    axis: Axis,
    at: Location,
    max: usize,
) -> Result<()> {
    if vec.len() <= max {
        Ok(())
    } else {
        let complaint = format!("{at} has too many elements (at most {max}, got {})", vec.len());
        Err(LoadingError::dimension_mismatch(entity, axis, at, max, vec.len())
            .with_complaint(complaint)
            .into())
    }
}

/// Requires a field and loads it as a child entity.
///
/// # Errors
///
/// Returns `MissingField` if absent, or the child's own error with a frame
/// naming the field.
pub fn load_field<T: Storable>(entity: &str, map: &NodeMap, field: &str) -> Result<T> {
    let node = require(entity, map, field)?;
    trace!("{entity}: loading {} from :{field}", T::NAME);
    T::load(node).map_err(|err| err.within(format!(":{field} of {entity}")))
}

/// Loads one child entity, adding `frame` to any error.
///
/// # Errors
///
/// Returns the child's error with `frame` appended.
pub fn load_element<T: Storable>(node: &Node, frame: impl FnOnce() -> String) -> Result<T> {
    T::load(node).map_err(|err| err.within(frame()))
}

/// Loads every element of a vector as a child entity.
///
/// # Errors
///
/// Returns the first child error, with a frame naming its index.
pub fn load_elements<T: Storable>(entity: &str, what: &str, vec: &NodeVec) -> Result<Vec<T>> {
    vec.iter()
        .enumerate()
        .map(|(i, node)| load_element(node, || format!("{what} {i} of {entity}")))
        .collect()
}

/// Dumps a slice of entities as a vector node.
#[must_use]
pub fn dump_elements<T: Storable>(items: &[T]) -> Node {
    Node::vector(items.iter().map(Storable::dump))
}
