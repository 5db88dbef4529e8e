//! Common types and utilities for the cppac completion engine.
//!
//! This crate provides foundational types used across all cppac crates:
//! - Source spans (`Span`) measured in byte offsets
//! - Position/LineMap types for line/column source locations
//! - Engine limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;

// Position types for line/column source locations
pub mod position;
pub use position::{HostPosition, LineMap, Position};
