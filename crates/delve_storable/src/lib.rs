//! The Storable protocol and node shape validation for Delve.
//!
//! This crate provides:
//! - [`Storable`] - The `load`/`dump` contract every persistable entity implements
//! - [`validate`] - Shape checks that produce contextual loading errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod storable;
pub mod validate;

pub use storable::Storable;
