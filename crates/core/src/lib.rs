//! Crossbuild Core Library
//!
//! This is the core library for the crossbuild release tool. It builds every
//! release target of a project at the same time, each as its own compiler
//! process, and reports success only when all of them exit cleanly.
//!
//! ## Architecture
//!
//! - [`build_manager`] - High-level interface used by the CLI
//! - [`execution`] - Process spawning, task state machine and the parallel runner
//! - [`tasks`] - The build task model and target color management
//! - [`configs`] - The compiled-in target list
//! - [`results`] - Per-task outcomes and the overall build report
//! - [`types`] - Error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crossbuild_core::build_manager::{BuildManager, BuildManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> crossbuild_core::types::CrossbuildResult<()> {
//! let manager = BuildManager::new(BuildManagerConfig {
//!     workspace_root: PathBuf::from("."),
//! })?;
//!
//! let report = manager.run().await?;
//! println!("{} task(s) settled", report.outcomes.len());
//! # Ok(())
//! # }
//! ```

pub mod build_manager;
pub mod configs;
pub mod execution;
pub mod results;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use build_manager::{BuildManager, BuildManagerConfig};
pub use types::{CrossbuildError, CrossbuildResult, TaskError};
