// src/dag/mod.rs

//! Task dependency graph analysis.
//!
//! - [`graph`] builds the adjacency structure from a snapshot of drafts.
//! - [`cycles`] finds dependency loops.
//! - [`validator`] combines structural checks into a [`ValidationReport`].
//! - [`planner`] groups tasks into levels that may run in parallel.
//! - [`critical_path`] finds the longest duration-weighted chain.
//!
//! Every entry point is a pure function of its input snapshot.

pub mod critical_path;
pub mod cycles;
pub mod graph;
pub mod planner;
pub mod validator;

pub use critical_path::{CriticalPath, ScheduleEntry, estimate_critical_path};
pub use cycles::Cycle;
pub use graph::TaskGraph;
pub use planner::{ExecutionLevel, plan_execution_order};
pub use validator::{ValidationReport, validate};
