//! Save files for Delve.
//!
//! This crate provides:
//! - [`serialize`] - `MessagePack` encoding of node trees, to bytes or files
//! - [`SaveConfig`] - Encoding choice and file size limits
//!
//! Any [`Storable`](delve_storable::Storable) entity can be saved with
//! [`save_entity`] and read back with [`load_entity`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod serialize;

pub use config::{Encoding, SaveConfig};
pub use serialize::{
    from_bytes, load_entity, load_from_file, save_entity, save_to_file, to_bytes,
};
