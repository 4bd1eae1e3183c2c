//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pieces.rs` - Per-kind movement rules
//! - `edge_cases.rs` - Early rejections, legacy pawn rule and odd positions
//! - `proptest.rs` - Property-based tests
