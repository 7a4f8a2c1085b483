//! Result types for build runs
//!
//! A [`BuildReport`] is only produced once every task has settled, so its
//! state is always [`BuildState::Succeeded`] or [`BuildState::Failed`].

use std::time::Duration;

use crate::execution::status::{BuildState, TaskState};
use crate::tasks::BuildTask;
use crate::types::{CrossbuildError, CrossbuildResult, TaskError};

/// Final record of one task
#[derive(Debug)]
pub struct TaskOutcome {
    pub task: BuildTask,
    pub state: TaskState,
    pub duration: Duration,
    pub error: Option<TaskError>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.state.is_success()
    }
}

/// Outcomes of a whole run, in task declaration order
#[derive(Debug, Default)]
pub struct BuildReport {
    pub outcomes: Vec<TaskOutcome>,
    pub elapsed: Duration,
}

impl BuildReport {
    pub fn new(outcomes: Vec<TaskOutcome>, elapsed: Duration) -> Self {
        Self { outcomes, elapsed }
    }

    pub fn state(&self) -> BuildState {
        if self.outcomes.iter().any(|o| o.error.is_some()) {
            return BuildState::Failed;
        }
        BuildState::from_tasks(self.outcomes.iter().map(|o| &o.state))
    }

    pub fn is_success(&self) -> bool {
        self.state() == BuildState::Succeeded
    }

    pub fn failures(&self) -> impl Iterator<Item = &TaskError> {
        self.outcomes.iter().filter_map(|o| o.error.as_ref())
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Turn a failed report into [`CrossbuildError::BuildFailed`] carrying every failure
    pub fn into_result(self) -> CrossbuildResult<()> {
        if self.is_success() {
            return Ok(());
        }
        let total = self.outcomes.len();
        let failures = self
            .outcomes
            .into_iter()
            .filter_map(|o| o.error)
            .collect();
        Err(CrossbuildError::BuildFailed { failures, total })
    }
}
