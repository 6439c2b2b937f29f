//! Integration tests for Layer 2: World
//!
//! Tests for chambers, characters, items, player state, and save games.

mod chambers;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
