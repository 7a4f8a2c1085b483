use std::path::PathBuf;

use thiserror::Error;

/// The main error type for crossbuild operations
#[derive(Debug, Error)]
pub enum CrossbuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task error: {0}")]
    Task(String),

    #[error("{} of {total} build task(s) failed: {}", .failures.len(), join_failures(.failures))]
    BuildFailed {
        failures: Vec<TaskError>,
        total: usize,
    },
}

/// Why a single build task did not succeed
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{task}: process exited with non-zero code: {} signal: {}", describe_code(.code), describe_signal(.signal))]
    Exited {
        task: String,
        code: Option<i32>,
        signal: Option<i32>,
    },

    #[error("{task}: failed to spawn '{program}': {source}")]
    Spawn {
        task: String,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{task}: failed to wait for process: {source}")]
    Wait {
        task: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{task}: working directory '{}' does not exist", .path.display())]
    MissingWorkingDir { task: String, path: PathBuf },
}

impl TaskError {
    /// Name of the task that failed
    pub fn task(&self) -> &str {
        match self {
            TaskError::Exited { task, .. }
            | TaskError::Spawn { task, .. }
            | TaskError::Wait { task, .. }
            | TaskError::MissingWorkingDir { task, .. } => task,
        }
    }
}

/// Result type alias for crossbuild operations
pub type CrossbuildResult<T> = Result<T, CrossbuildError>;

fn join_failures(failures: &[TaskError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Render a signal number as its conventional name where the platform knows it
pub fn describe_signal(signal: &Option<i32>) -> String {
    match *signal {
        Some(number) => signal_name(number).unwrap_or_else(|| number.to_string()),
        None => "none".to_string(),
    }
}

#[cfg(unix)]
fn signal_name(number: i32) -> Option<String> {
    nix::sys::signal::Signal::try_from(number)
        .ok()
        .map(|signal| signal.as_str().to_string())
}

#[cfg(not(unix))]
fn signal_name(_number: i32) -> Option<String> {
    None
}
