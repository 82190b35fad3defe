// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::default_plan_path;
use crate::errors::Result;
use crate::refine::RefinementChange;
use crate::types::Hours;

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Check task dependency plans, order them and estimate their critical path.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Plan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub plan: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    /// The plan file to load: `--plan` if given, otherwise the default.
    pub fn plan_path(&self) -> PathBuf {
        self.plan.clone().unwrap_or_else(default_plan_path)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate the plan: cycles, dangling references, resource conflicts.
    Check,
    /// Print the execution levels (tasks in one level may run in parallel).
    Order,
    /// Print the critical path, its length and per-task slack.
    CriticalPath,
    /// Show the impact of editing one task.
    Refine(RefineArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RefineArgs {
    /// Id of the task to edit.
    #[arg(value_name = "TASK")]
    pub task: String,

    /// New duration, e.g. `6`, `90m`, `1.5h`, `2d`.
    #[arg(long, value_name = "DURATION")]
    pub duration: Option<String>,

    /// New assignee; `unassigned` clears it.
    #[arg(long, value_name = "NAME")]
    pub assignee: Option<String>,

    /// New title.
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Replacement dependency list, comma separated. Pass with no value to
    /// clear all dependencies.
    #[arg(long, value_name = "IDS", value_delimiter = ',', num_args = 0..)]
    pub after: Option<Vec<String>>,
}

impl RefineArgs {
    /// Turn the flags into a [`RefinementChange`], parsing the duration with
    /// the plan's day length.
    pub fn to_change(&self, hours_per_day: f64) -> Result<RefinementChange> {
        let mut change = RefinementChange::new(self.task.clone());
        if let Some(d) = &self.duration {
            change = change.with_duration(Hours::parse(d, hours_per_day)?);
        }
        if let Some(a) = &self.assignee {
            change = change.with_assignee(a.clone());
        }
        if let Some(t) = &self.title {
            change = change.with_title(t.clone());
        }
        if let Some(deps) = &self.after {
            change = change.with_dependencies(
                deps.iter()
                    .map(|d| d.trim())
                    .filter(|d| !d.is_empty())
                    .map(str::to_string),
            );
        }
        Ok(change)
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
