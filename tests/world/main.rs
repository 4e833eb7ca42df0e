//! Integration tests for Layer 1: World
//!
//! Tests for room-graph documents, loading, and player movement.

mod documents;
mod loading;
mod movement;
