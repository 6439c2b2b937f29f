//! Node tree, keywords, and error types for Delve.
//!
//! This crate provides:
//! - [`Node`] - The tagged value every stored entity is written as
//! - [`Keyword`] - Symbolic map keys (`:name`)
//! - [`NodeKind`] - Variant descriptors used in diagnostics
//! - [`Error`] - Loading errors with a chain of context frames
//! - Node collections ([`NodeVec`], [`NodeMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod keyword;
pub mod kind;
pub mod node;

pub use collections::{NodeMap, NodeVec};
pub use error::{
    Axis, Condition, Error, ErrorContext, ErrorKind, LoadingError, Location,
    NonDeserializableError, Result,
};
pub use keyword::Keyword;
pub use kind::NodeKind;
pub use node::Node;
