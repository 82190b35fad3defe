// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Load a plan file from a given path and return the raw `RawPlanFile`.
///
/// This only performs TOML deserialization; it does **not** check settings
/// or durations. Use [`load_plan`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read plan file");

    let raw: RawPlanFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Parse plan file contents that are already in memory.
pub fn parse_plan(contents: &str) -> Result<PlanFile> {
    let raw: RawPlanFile = toml::from_str(contents)?;
    PlanFile::try_from(raw)
}

/// Load a plan file from path and check it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Resolves durations and rejects negative or unparseable ones.
///
/// The resulting task drafts can still contain cycles or dangling
/// references; run [`crate::dag::validate`] on them to find out.
pub fn load_plan(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    let plan = PlanFile::try_from(raw)?;
    Ok(plan)
}

/// Plan file used when `--plan` is not given: `Plan.toml` in the current
/// working directory.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Plan.toml")
}
