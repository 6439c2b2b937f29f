//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Node, Keyword, NodeKind, and Error.

mod errors;
mod nodes;
