// src/refine/mod.rs

//! What-if analysis for edits to a single task.

pub mod change;
pub mod impact;

pub use change::RefinementChange;
pub use impact::{ImpactReport, analyze_refinement};
