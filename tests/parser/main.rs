//! Integration tests for Layer 2: Parser
//!
//! Tests for input sanitizing, the command vocabulary, and pending tags.

mod vocabulary;
