//! Integration tests for content-gravity
//!
//! These tests verify the complete extraction pipeline works end-to-end
//! with realistic HTML samples.

mod edge_cases;
mod real_world_articles;
