//! High-level build management interface
//!
//! [`BuildManager`] is the entry point the CLI uses. It loads the compiled-in
//! target list, resolves it into [`BuildTask`]s rooted at the workspace
//! directory and runs them through the [`TaskRunner`].
//!
//! ## Example
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
//! report.into_result()?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tracing::debug;

use crate::configs::targets::{builtin_build_config, BuildConfig};
use crate::execution::runner::TaskRunner;
use crate::results::BuildReport;
use crate::tasks::{tasks_from_config, BuildTask};
use crate::types::CrossbuildResult;

/// Owns the resolved task list for one build invocation
pub struct BuildManager {
    pub workspace_root: PathBuf,
    pub build_config: BuildConfig,
    tasks: Vec<BuildTask>,
}

/// Configuration for initializing a build manager
pub struct BuildManagerConfig {
    pub workspace_root: PathBuf,
}

impl BuildManager {
    /// Initialize a build manager with the target list shipped in the binary
    pub fn new(config: BuildManagerConfig) -> CrossbuildResult<Self> {
        let build_config = builtin_build_config()?;
        Ok(Self::with_build_config(config, build_config))
    }

    /// Initialize a build manager with an explicit target list
    pub fn with_build_config(config: BuildManagerConfig, build_config: BuildConfig) -> Self {
        let tasks = tasks_from_config(&build_config, &config.workspace_root);
        debug!(
            root = %config.workspace_root.display(),
            tasks = tasks.len(),
            "resolved build tasks"
        );
        Self {
            workspace_root: config.workspace_root,
            build_config,
            tasks,
        }
    }

    pub fn tasks(&self) -> &[BuildTask] {
        &self.tasks
    }

    /// Run every task concurrently and wait for all of them
    pub async fn run(&self) -> CrossbuildResult<BuildReport> {
        TaskRunner::new(&self.tasks).run().await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::configs::targets::parse_build_config;

    #[test]
    fn builtin_targets_run_in_cli_dir() {
        let manager = BuildManager::new(BuildManagerConfig {
            workspace_root: PathBuf::from("/repo"),
        })
        .unwrap();

        assert_eq!(manager.tasks().len(), 3);
        assert!(manager
            .tasks()
            .iter()
            .all(|t| t.working_dir == PathBuf::from("/repo/cli")));
        assert_eq!(
            manager.tasks()[1].command_line(),
            "cargo build --target x86_64-unknown-linux-musl --release"
        );
    }

    #[tokio::test]
    async fn runs_configured_targets_from_workspace_root() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("cli")).unwrap();
        let config = parse_build_config(
            "workingDir: cli\ntargets:\n  - name: a\n    command: sh\n    args: [-c, touch a.out]\n  - name: b\n    command: sh\n    args: [-c, touch b.out]\n",
        )
        .unwrap();

        let manager = BuildManager::with_build_config(
            BuildManagerConfig {
                workspace_root: root.path().to_path_buf(),
            },
            config,
        );
        let report = manager.run().await.unwrap();

        assert!(report.is_success());
        assert!(root.path().join("cli/a.out").exists());
        assert!(root.path().join("cli/b.out").exists());
    }

    #[tokio::test]
    async fn missing_cli_dir_fails_every_target() {
        let root = tempfile::tempdir().unwrap();
        let manager = BuildManager::new(BuildManagerConfig {
            workspace_root: root.path().to_path_buf(),
        })
        .unwrap();

        let report = manager.run().await.unwrap();

        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.failures().count(), 3);
    }
}
