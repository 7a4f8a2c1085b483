//! Parallel task runner
//!
//! Every task is launched at once and the runner waits for all of them to
//! settle before deciding. A failing task never cancels its siblings.

use std::time::Instant;

use futures::future::join_all;
use tracing::info;

use crate::execution::command::CommandExecutor;
use crate::results::BuildReport;
use crate::tasks::BuildTask;
use crate::types::CrossbuildResult;

/// Runs a fixed list of build tasks concurrently
pub struct TaskRunner<'a> {
    tasks: &'a [BuildTask],
}

impl<'a> TaskRunner<'a> {
    pub fn new(tasks: &'a [BuildTask]) -> Self {
        Self { tasks }
    }

    /// Launch all tasks, wait for every one of them and collect the report
    ///
    /// Task failures are recorded in the report rather than returned as
    /// errors; use [`BuildReport::into_result`] to turn them into one.
    pub async fn run(&self) -> CrossbuildResult<BuildReport> {
        let started = Instant::now();
        info!(tasks = self.tasks.len(), "launching build tasks");

        let outcomes = join_all(
            self.tasks
                .iter()
                .map(|task| async move { CommandExecutor::new(task).execute().await }),
        )
        .await
        .into_iter()
        .collect::<CrossbuildResult<Vec<_>>>()?;

        let report = BuildReport::new(outcomes, started.elapsed());
        info!(
            state = ?report.state(),
            failed = report.failures().count(),
            elapsed = ?report.elapsed,
            "all build tasks settled"
        );
        Ok(report)
    }
}
