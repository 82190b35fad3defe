// src/config/mod.rs

//! Plan files: TOML model, loading and checks.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_plan_path, load_from_path, load_plan, parse_plan};
pub use model::{ConfigSection, DurationValue, PlanFile, RawPlanFile, TaskConfig};
