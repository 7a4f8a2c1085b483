//! Task execution module
//!
//! This module launches build tasks as child processes, tracks each task's
//! state and gathers the outcomes into a report.

pub mod command;
pub mod runner;
pub mod status;

pub use command::CommandExecutor;
pub use runner::TaskRunner;
pub use status::{BuildState, TaskExit, TaskState};
