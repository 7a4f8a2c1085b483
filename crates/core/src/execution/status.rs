//! Task and build state machines
//!
//! Each task moves `Pending -> Running -> Exited`. A task that could not be
//! launched goes straight from `Pending` to `LaunchFailed`. Both end states
//! are terminal.

use std::process::ExitStatus;

use crate::types::{describe_signal, CrossbuildError, CrossbuildResult};

/// How a child process terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskExit {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl TaskExit {
    pub fn success(&self) -> bool {
        self.code == Some(0) && self.signal.is_none()
    }

    pub fn describe(&self) -> String {
        match (self.code, self.signal) {
            (Some(code), _) => format!("exit code {}", code),
            (None, signal) => format!("signal {}", describe_signal(&signal)),
        }
    }
}

impl From<ExitStatus> for TaskExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            #[cfg(unix)]
            signal: {
                use std::os::unix::process::ExitStatusExt;
                status.signal()
            },
            #[cfg(not(unix))]
            signal: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Running,
    Exited(TaskExit),
    LaunchFailed,
}

impl TaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Exited(_) | TaskState::LaunchFailed)
    }

    /// Terminal and exited cleanly with code zero
    pub fn is_success(&self) -> bool {
        matches!(self, TaskState::Exited(exit) if exit.success())
    }

    pub fn start(self) -> CrossbuildResult<Self> {
        match self {
            TaskState::Pending => Ok(TaskState::Running),
            other => Err(invalid_transition(other, "Running")),
        }
    }

    pub fn exit(self, exit: TaskExit) -> CrossbuildResult<Self> {
        match self {
            TaskState::Running => Ok(TaskState::Exited(exit)),
            other => Err(invalid_transition(other, "Exited")),
        }
    }

    pub fn launch_failed(self) -> CrossbuildResult<Self> {
        match self {
            TaskState::Pending => Ok(TaskState::LaunchFailed),
            other => Err(invalid_transition(other, "LaunchFailed")),
        }
    }
}

fn invalid_transition(from: TaskState, to: &str) -> CrossbuildError {
    CrossbuildError::Task(format!("Invalid task transition from {:?} to {}", from, to))
}

/// Overall verdict of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Running,
    Succeeded,
    Failed,
}

impl BuildState {
    /// Fold task states into a verdict; any non-terminal task keeps the build running
    pub fn from_tasks<'a>(states: impl IntoIterator<Item = &'a TaskState>) -> Self {
        let mut failed = false;
        for state in states {
            if !state.is_terminal() {
                return BuildState::Running;
            }
            failed |= !state.is_success();
        }
        if failed {
            BuildState::Failed
        } else {
            BuildState::Succeeded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: TaskExit = TaskExit {
        code: Some(0),
        signal: None,
    };

    #[test]
    fn task_walks_pending_running_exited() {
        let state = TaskState::Pending.start().unwrap().exit(OK).unwrap();
        assert_eq!(state, TaskState::Exited(OK));
        assert!(state.is_terminal());
        assert!(state.is_success());
    }

    #[test]
    fn exited_is_terminal() {
        let state = TaskState::Exited(OK);
        assert!(state.start().is_err());
        assert!(state.exit(OK).is_err());
        assert!(state.launch_failed().is_err());
    }

    #[test]
    fn pending_cannot_exit_without_running() {
        let err = TaskState::Pending.exit(OK).unwrap_err();
        assert!(err.to_string().contains("Invalid task transition"));
    }

    #[test]
    fn signal_termination_is_not_success() {
        let killed = TaskExit {
            code: None,
            signal: Some(9),
        };
        assert!(!killed.success());
        assert!(!TaskState::Exited(killed).is_success());
    }

    #[test]
    fn build_state_folds_task_states() {
        let failed = TaskState::Exited(TaskExit {
            code: Some(1),
            signal: None,
        });

        assert_eq!(BuildState::from_tasks(&[]), BuildState::Succeeded);
        assert_eq!(
            BuildState::from_tasks(&[TaskState::Exited(OK), TaskState::Exited(OK)]),
            BuildState::Succeeded
        );
        assert_eq!(
            BuildState::from_tasks(&[TaskState::Exited(OK), failed]),
            BuildState::Failed
        );
        assert_eq!(
            BuildState::from_tasks(&[failed, TaskState::Running]),
            BuildState::Running
        );
        assert_eq!(
            BuildState::from_tasks(&[TaskState::LaunchFailed]),
            BuildState::Failed
        );
    }

    #[test]
    fn describe_prefers_exit_code() {
        assert_eq!(
            TaskExit {
                code: Some(101),
                signal: None
            }
            .describe(),
            "exit code 101"
        );
    }
}
