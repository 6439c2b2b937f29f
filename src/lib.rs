//! Delve - Storable game entities over a self-describing node tree
//!
//! This crate re-exports all layers of the Delve save system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: delve_save        - MessagePack save files, SaveConfig
//! Layer 2: delve_world       - Chamber, Square, characters, items, SaveGame
//! Layer 1: delve_storable    - Storable trait, shape validation helpers
//! Layer 0: delve_foundation  - Node tree, Keyword, NodeKind, Error
//! ```

pub use delve_foundation as foundation;
pub use delve_save as save;
pub use delve_storable as storable;
pub use delve_world as world;
