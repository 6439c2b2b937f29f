//! Error types for loading and storing entities.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Two families are kept apart:
//! - [`LoadingError`]: the input tree does not have the shape an entity
//!   expects (bad save data).
//! - [`NonDeserializableError`]: a node was asked for a value it cannot
//!   represent (loader code disagrees with the node it is reading).

use std::fmt;

use thiserror::Error;

use crate::keyword::Keyword;
use crate::kind::NodeKind;

/// Result type used throughout Delve.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Delve operations.
///
/// `kind` always holds the innermost complaint. Parents that propagate a
/// child's failure only add frames to `context`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}{context}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The chain of entities being loaded when the error occurred.
    pub context: ErrorContext,
}

impl Error {
    /// Creates a new error with the given kind and no context.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: ErrorContext::new(),
        }
    }

    /// Adds a context frame, leaving the complaint untouched.
    #[must_use]
    pub fn within(mut self, frame: impl Into<String>) -> Self {
        self.context.push(frame);
        self
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this is a data-shape error.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.kind, ErrorKind::Loading(_))
    }

    /// Returns true if a node was asked for a value it cannot represent.
    #[must_use]
    pub const fn is_non_deserializable(&self) -> bool {
        matches!(self.kind, ErrorKind::NonDeserializable(_))
    }

    /// Returns the loading error, if this is one.
    #[must_use]
    pub const fn loading(&self) -> Option<&LoadingError> {
        match &self.kind {
            ErrorKind::Loading(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the loading condition, if this is a loading error.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.loading().map(|err| &err.condition)
    }

    /// Returns the context frames, innermost first.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.context.frames
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<LoadingError> for Error {
    fn from(err: LoadingError) -> Self {
        Self::new(ErrorKind::Loading(err))
    }
}

impl From<NonDeserializableError> for Error {
    fn from(err: NonDeserializableError) -> Self {
        Self::new(ErrorKind::NonDeserializable(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// The node tree does not have the shape an entity expects.
    #[error(transparent)]
    Loading(LoadingError),

    /// A node was asked for a value it cannot represent.
    #[error(transparent)]
    NonDeserializable(NonDeserializableError),

    /// Encoding or decoding a node tree failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a save file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// A node was asked to yield a value of a kind it cannot represent.
///
/// Raised by the strict node accessors (`Node::to_float` and friends), never
/// by an entity's own shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "cannot deserialize {} node as {}",
    .actual.with_article(),
    .requested.with_article()
)]
pub struct NonDeserializableError {
    /// The kind the caller asked for.
    pub requested: NodeKind,
    /// The kind the node actually is.
    pub actual: NodeKind,
}

impl NonDeserializableError {
    /// Creates a new error.
    #[must_use]
    pub const fn new(requested: NodeKind, actual: NodeKind) -> Self {
        Self { requested, actual }
    }
}

/// A data-shape violation found while loading an entity.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{entity}: {complaint}")]
pub struct LoadingError {
    /// Name of the entity being loaded (e.g. `Chamber`).
    pub entity: String,
    /// What went wrong, in structured form.
    pub condition: Condition,
    /// Human-readable complaint.
    pub complaint: String,
}

impl LoadingError {
    /// Creates a loading error with an explicit complaint.
    #[must_use]
    pub fn new(
        entity: impl Into<String>,
        condition: Condition,
        complaint: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            condition,
            complaint: complaint.into(),
        }
    }

    /// A node had the wrong kind.
    #[must_use]
    pub fn wrong_kind(
        entity: impl Into<String>,
        at: Location,
        expected: NodeKind,
        actual: NodeKind,
    ) -> Self {
        let complaint = match &at {
            Location::Root => format!("must be {} node", expected.with_article()),
            at => format!(
                "{at} must be {} node, found {}",
                expected.with_article(),
                actual.with_article()
            ),
        };
        Self::new(
            entity,
            Condition::WrongNodeKind {
                at,
                expected,
                actual,
            },
            complaint,
        )
    }

    /// A required field was absent.
    #[must_use]
    pub fn missing_field(entity: impl Into<String>, field: Keyword) -> Self {
        let complaint = format!("no {field} field found");
        Self::new(entity, Condition::MissingField { field }, complaint)
    }

    /// A composite had the wrong size.
    #[must_use]
    pub fn dimension_mismatch(
        entity: impl Into<String>,
        axis: Axis,
        at: Location,
        expected: usize,
        actual: usize,
    ) -> Self {
        let complaint = format!(
            "{at} has incorrect dimensions (wrong {axis}: expected {expected}, got {actual})"
        );
        Self::new(
            entity,
            Condition::DimensionMismatch {
                axis,
                at,
                expected,
                actual,
            },
            complaint,
        )
    }

    /// A value had the right kind but is not acceptable.
    #[must_use]
    pub fn invalid_value(entity: impl Into<String>, at: Location, reason: &str) -> Self {
        let complaint = format!("{at} is invalid: {reason}");
        Self::new(entity, Condition::InvalidValue { at }, complaint)
    }

    /// Replaces the generated complaint with a custom one.
    #[must_use]
    pub fn with_complaint(mut self, complaint: impl Into<String>) -> Self {
        self.complaint = complaint.into();
        self
    }
}

/// Structured description of a loading failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// A node had a different kind than expected.
    WrongNodeKind {
        /// Where the node was found.
        at: Location,
        /// The kind the entity expected.
        expected: NodeKind,
        /// The kind actually found.
        actual: NodeKind,
    },
    /// A required map key was absent.
    MissingField {
        /// The missing key.
        field: Keyword,
    },
    /// A vector had a different length than expected.
    DimensionMismatch {
        /// Which dimension is wrong.
        axis: Axis,
        /// Where the vector was found.
        at: Location,
        /// The expected length (or limit).
        expected: usize,
        /// The actual length.
        actual: usize,
    },
    /// A value had the right kind but an unacceptable content.
    InvalidValue {
        /// Where the value was found.
        at: Location,
    },
}

/// Where inside an entity's node a problem was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The entity's root node.
    Root,
    /// A named field of a map node.
    Field(Keyword),
    /// An element of a vector node, by index.
    Element(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Field(kw) => write!(f, "{kw}"),
            Self::Element(index) => write!(f, "element {index}"),
        }
    }
}

/// A dimension of a fixed-size composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Number of columns in a grid (outer vector).
    Width,
    /// Number of cells in a column (inner vector).
    Height,
    /// Length of a flat vector.
    Length,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
            Self::Length => write!(f, "length"),
        }
    }
}

/// The chain of entities being loaded when an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Context frames, innermost first.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Appends an outer frame.
    pub fn push(&mut self, frame: impl Into<String>) {
        self.frames.push(frame.into());
    }

    /// Adds a frame, builder-style.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.push(frame);
        self
    }

    /// Returns true if there are no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            write!(f, "\n  in {frame}")?;
        }
        Ok(())
    }
}
