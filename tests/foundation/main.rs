//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: identifiers, items, and errors.

mod errors;
mod ids;
mod items;
