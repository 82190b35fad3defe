// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The planning engine itself never fails: structural problems in a plan are
//! reported through [`ValidationReport`](crate::dag::ValidationReport) fields.
//! These errors cover everything around it (plan files, durations, CLI flow).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Plan is invalid: {cycles} cycle(s), {invalid_references} invalid reference(s)")]
    InvalidPlan {
        cycles: usize,
        invalid_references: usize,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
