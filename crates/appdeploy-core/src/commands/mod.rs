//! High-level commands for deploy operations.
//!
//! This module provides the public API the CLI calls into. Each command
//! takes a fully loaded [`DeployContext`](crate::context::DeployContext).

pub mod deploy;
pub mod plan;
pub mod show;

pub use deploy::{DeployCommand, DeployOptions, DeployReport, DeployTarget};
pub use plan::DeployPlan;
pub use show::{EffectivePaths, effective_paths, show_configuration};
