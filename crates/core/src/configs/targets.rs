use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{CrossbuildError, CrossbuildResult};

/// Target list compiled into the binary
pub const BUILTIN_TARGETS: &str = include_str!("targets.yml");

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetConfig {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Overrides the file-level working directory for this target
    pub working_dir: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    pub working_dir: Option<String>,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

pub fn parse_build_config(yaml_str: &str) -> CrossbuildResult<BuildConfig> {
    let config: BuildConfig = serde_yaml::from_str(yaml_str)?;
    validate_build_config(&config)?;
    Ok(config)
}

/// Load the target list shipped with the binary
pub fn builtin_build_config() -> CrossbuildResult<BuildConfig> {
    parse_build_config(BUILTIN_TARGETS)
}

fn validate_build_config(config: &BuildConfig) -> CrossbuildResult<()> {
    let mut seen = HashSet::new();
    for target in &config.targets {
        if target.name.trim().is_empty() {
            return Err(CrossbuildError::Config(
                "Target name must not be empty".to_string(),
            ));
        }
        if target.command.trim().is_empty() {
            return Err(CrossbuildError::Config(format!(
                "Target '{}' has no command",
                target.name
            )));
        }
        if !seen.insert(target.name.as_str()) {
            return Err(CrossbuildError::Config(format!(
                "Target '{}' is declared more than once",
                target.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_lists_three_release_targets() {
        let config = builtin_build_config().unwrap();

        assert_eq!(config.working_dir.as_deref(), Some("cli"));
        let names: Vec<&str> = config.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "aarch64-apple-darwin",
                "x86_64-unknown-linux-musl",
                "x86_64-pc-windows-msvc"
            ]
        );

        let windows = &config.targets[2];
        assert_eq!(windows.command, "cargo");
        assert_eq!(
            windows.args,
            vec!["xwin", "build", "--target", "x86_64-pc-windows-msvc", "--release"]
        );
    }

    #[test]
    fn target_without_args_defaults_to_empty() {
        let config = parse_build_config("targets:\n  - name: t\n    command: \"true\"\n").unwrap();
        assert!(config.targets[0].args.is_empty());
        assert!(config.working_dir.is_none());
    }

    #[test]
    fn empty_document_has_no_targets() {
        let config = parse_build_config("targets: []\n").unwrap();
        assert!(config.targets.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_build_config("targets: []\nretries: 3\n").unwrap_err();
        assert!(matches!(err, CrossbuildError::Yaml(_)));
    }

    #[test]
    fn rejects_duplicate_target_names() {
        let yaml = "targets:\n  - name: a\n    command: x\n  - name: a\n    command: y\n";
        let err = parse_build_config(yaml).unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn rejects_blank_command() {
        let yaml = "targets:\n  - name: a\n    command: \"  \"\n";
        let err = parse_build_config(yaml).unwrap_err();
        assert!(err.to_string().contains("has no command"));
    }
}
