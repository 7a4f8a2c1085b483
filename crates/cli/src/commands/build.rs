use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use crossbuild_core::build_manager::BuildManager;
use crossbuild_core::execution::TaskState;
use crossbuild_core::results::{BuildReport, TaskOutcome};
use crossbuild_core::tasks::get_target_color;

pub async fn execute(manager: &BuildManager) -> Result<()> {
    print_header(manager);

    let report = manager
        .run()
        .await
        .context("Failed to run build tasks")?;

    print_summary(&report);

    if report.is_success() {
        println!(
            "{} {}",
            "✓".green().bold(),
            "All targets built successfully!".green().bold()
        );
    } else {
        eprintln!();
        for failure in report.failures() {
            eprintln!("{} {}", "✗".red().bold(), failure.to_string().red());
        }
    }

    report.into_result().map_err(Into::into)
}

fn print_header(manager: &BuildManager) {
    let tasks = manager.tasks();
    println!(
        "┌─ {} {}",
        "Building".bold(),
        format!("{} target(s) in parallel", tasks.len()).bold()
    );
    for task in tasks {
        println!(
            "│  {} {}",
            task.name.color(get_target_color(&task.name)).bold(),
            task.command_line().bright_black()
        );
    }
    println!("└─");
    println!();
}

fn print_summary(report: &BuildReport) {
    println!();
    println!("{}", "Summary".bold().underline());

    if report.outcomes.is_empty() {
        println!("  {}", "No targets configured".dimmed());
    }

    for outcome in &report.outcomes {
        println!("  {}", summary_line(outcome));
    }

    println!(
        "  {} {}",
        "Elapsed:".bright_black(),
        format_duration(report.elapsed)
    );
    println!();
}

fn summary_line(outcome: &TaskOutcome) -> String {
    let mark = if outcome.is_success() {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };

    let status = match outcome.state {
        TaskState::Exited(exit) => exit.describe(),
        TaskState::LaunchFailed => "not started".to_string(),
        TaskState::Pending | TaskState::Running => "unfinished".to_string(),
    };

    format!(
        "{} {} {} {}",
        mark,
        outcome.task.name.color(get_target_color(&outcome.task.name)),
        status.bright_black(),
        format!("({})", format_duration(outcome.duration)).dimmed()
    )
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
