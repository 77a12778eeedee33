//! guidon_core: Core primitives for the guidon indent guide pipeline.
//!
//! Provides column arithmetic with hard tab-stop expansion, and the line
//! index a host uses to slice a document into scan lines.

pub mod column;
pub mod lines;

// Re-export commonly used types
pub use column::{advance_column, depth_at, Column};
pub use lines::LineIndex;
