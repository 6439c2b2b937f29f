//! Storable game entities for Delve.
//!
//! This crate provides:
//! - [`Chamber`] - A fixed-size room made of [`Square`]s, with exit generation
//! - [`Direction`] and [`Exits`] - The four chamber edges
//! - [`CharacterStats`] - Persisted state of anything that can fight
//! - [`Item`], [`Shield`], and [`Weapon`] - Inventory contents and equipment
//! - [`PlayerState`] - The player's character, gold, and inventory
//! - [`SaveGame`] - Everything written to a save file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chamber;
pub mod character;
pub mod direction;
pub mod item;
pub mod player;
pub mod save_game;
pub mod square;

pub use chamber::Chamber;
pub use character::CharacterStats;
pub use direction::{Direction, Exits};
pub use item::{Item, Shield, Weapon};
pub use player::PlayerState;
pub use save_game::SaveGame;
pub use square::Square;
