//! Command execution for a single build task
//!
//! The child inherits this process's standard streams so build output shows up
//! live. Nothing here cancels or times out a child; a hung process keeps the
//! task running.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, warn};

use crate::execution::status::{TaskExit, TaskState};
use crate::results::TaskOutcome;
use crate::tasks::BuildTask;
use crate::types::{CrossbuildResult, TaskError};

/// Runs one [`BuildTask`] to completion
pub struct CommandExecutor<'a> {
    task: &'a BuildTask,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(task: &'a BuildTask) -> Self {
        Self { task }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.task.program);
        command
            .args(&self.task.args)
            .current_dir(&self.task.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Spawn the task and wait for it to exit
    ///
    /// Launch and exit failures are recorded on the returned outcome; the
    /// error path is reserved for state machine violations.
    pub async fn execute(&self) -> CrossbuildResult<TaskOutcome> {
        let task = self.task;
        let state = TaskState::Pending;

        if !task.working_dir.is_dir() {
            warn!(task = %task.name, dir = %task.working_dir.display(), "working directory missing");
            return Ok(self.outcome(
                state.launch_failed()?,
                Duration::ZERO,
                Some(TaskError::MissingWorkingDir {
                    task: task.name.clone(),
                    path: task.working_dir.clone(),
                }),
            ));
        }

        debug!(task = %task.name, command = %task.command_line(), "spawning");
        let mut child = match self.command().spawn() {
            Ok(child) => child,
            Err(source) => {
                warn!(task = %task.name, error = %source, "spawn failed");
                return Ok(self.outcome(
                    state.launch_failed()?,
                    Duration::ZERO,
                    Some(TaskError::Spawn {
                        task: task.name.clone(),
                        program: task.program.clone(),
                        source,
                    }),
                ));
            }
        };

        let state = state.start()?;
        let started = Instant::now();
        debug!(task = %task.name, pid = ?child.id(), "running");

        let (exit, error) = match child.wait().await {
            Ok(status) => {
                let exit = TaskExit::from(status);
                let error = (!exit.success()).then(|| TaskError::Exited {
                    task: task.name.clone(),
                    code: exit.code,
                    signal: exit.signal,
                });
                (exit, error)
            }
            Err(source) => (
                TaskExit {
                    code: None,
                    signal: None,
                },
                Some(TaskError::Wait {
                    task: task.name.clone(),
                    source,
                }),
            ),
        };

        let duration = started.elapsed();
        match &error {
            None => debug!(task = %task.name, ?duration, "exited successfully"),
            Some(err) => warn!(task = %task.name, ?duration, "{}", err),
        }

        Ok(self.outcome(state.exit(exit)?, duration, error))
    }

    fn outcome(&self, state: TaskState, duration: Duration, error: Option<TaskError>) -> TaskOutcome {
        TaskOutcome {
            task: self.task.clone(),
            state,
            duration,
            error,
        }
    }
}
