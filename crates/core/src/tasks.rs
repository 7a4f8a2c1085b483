//! Build task model and target color management
//!
//! A [`BuildTask`] is one external process invocation: an executable, its
//! arguments and the directory it runs in. Tasks are created once from the
//! build configuration and never mutated.

use std::path::{Path, PathBuf};

use colored::*;

use crate::configs::targets::{BuildConfig, TargetConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTask {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl BuildTask {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// Build a task from a target entry, resolving relative directories against `root`
    pub fn from_target(target: &TargetConfig, default_dir: Option<&str>, root: &Path) -> Self {
        let dir = target
            .working_dir
            .as_deref()
            .or(default_dir)
            .map(PathBuf::from)
            .unwrap_or_default();

        let working_dir = if dir.is_relative() {
            root.join(dir)
        } else {
            dir
        };

        Self::new(
            target.name.clone(),
            target.command.clone(),
            target.args.iter().cloned(),
            working_dir,
        )
    }

    /// The command line as it would be typed in a shell
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Expand every target of `config` into a task, preserving declaration order
pub fn tasks_from_config(config: &BuildConfig, root: &Path) -> Vec<BuildTask> {
    config
        .targets
        .iter()
        .map(|target| BuildTask::from_target(target, config.working_dir.as_deref(), root))
        .collect()
}

/// Get a consistent color for a target name
pub fn get_target_color(target_name: &str) -> Color {
    let hash = target_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label colors, kept clear of the red/green used for pass/fail
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        },
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        },
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        },
        Color::TrueColor {
            r: 72,
            g: 209,
            b: 204,
        },
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        },
    ];

    colors[(hash % colors.len() as u64) as usize]
}
