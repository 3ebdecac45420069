//! Charm-style CLI prompts using cliclack

use crate::answers::{AnswerRecord, PackageManager, PartialAnswers};
use crate::config::{load_preset, ScaffoldOptions, Verbosity};
use crate::error::ScaffoldError;
use crate::executor::{self, Progress, RunReport, ScaffoldOutcome, Summary};
use crate::plan::Task;
use crate::questions::{questions, Question, QuestionKind};
use crate::runtime::check;
use crate::runtime::ProcessRunner;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project name; the project directory is created under the current directory
    pub project_name: String,

    /// YAML file with answers to skip prompts for
    pub preset: Option<PathBuf>,

    /// Answers given directly as flags; these win over the preset
    pub answers: PartialAnswers,

    /// Skip the package manager check
    pub skip_check: bool,

    /// Use the default for every question left unanswered (non-interactive mode)
    pub yes: bool,

    pub verbosity: Verbosity,
}

/// Run the init flow with interactive prompts
pub async fn run(args: InitArgs) -> Result<()> {
    cliclack::intro("cli-frameworks-setup")?;
    cliclack::log::info(format!("{} mode is enabled", args.verbosity.flag()))?;

    // Step 1: Validate the target before asking anything
    let parent_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let options =
        ScaffoldOptions::new(parent_dir, &args.project_name).with_verbosity(args.verbosity);
    if let Err(e) = ScaffoldOptions::validate_project_name(&options.project_name)
        .and_then(|()| executor::ensure_target_available(&options.project_root()))
    {
        cliclack::log::error(e.to_string())?;
        anyhow::bail!("Setup cancelled.");
    }

    // Step 2: Gather answers from the preset, flags and prompts
    let partial = initial_answers(&args).await?;
    let record = collect_answers(partial)?;

    let package_manager = match &record {
        AnswerRecord::Complete(answers) => answers.package_manager,
        AnswerRecord::Cancelled => {
            cliclack::outro_cancel("Process canceled by user.")?;
            return Ok(());
        }
    };

    // Step 3: Check the package manager
    if args.skip_check {
        cliclack::log::info("Skipping package manager check")?;
    } else {
        check_runtimes(package_manager)?;
    }

    // Step 4: Scaffold
    let runner = ProcessRunner::new(options.verbosity);
    let mut progress = CliProgress::new(options.verbosity);
    let outcome = match executor::scaffold(record, &options, &runner, &mut progress).await {
        Ok(outcome) => outcome,
        Err(e) => {
            cliclack::outro_cancel("Error initializing project.")?;
            return Err(e.into());
        }
    };

    match outcome {
        ScaffoldOutcome::Cancelled => cliclack::outro_cancel("Process canceled by user.")?,
        ScaffoldOutcome::Completed(summary) => print_summary(&summary)?,
    }

    Ok(())
}

async fn initial_answers(args: &InitArgs) -> Result<PartialAnswers> {
    let mut partial = match &args.preset {
        Some(path) => {
            let preset = load_preset(path).await?;
            cliclack::log::info(format!("Using answers from {}", path.display()))?;
            preset
        }
        None => PartialAnswers::default(),
    };
    partial.merge(args.answers.clone());

    if args.yes {
        partial.fill_defaults();
    }
    Ok(partial)
}

/// Ask every question that is still unanswered, in order
///
/// Leaving a prompt (Esc or Ctrl-C) ends the flow with a cancelled record.
fn collect_answers(mut partial: PartialAnswers) -> Result<AnswerRecord> {
    for question in questions() {
        if partial.is_answered(question.field) {
            continue;
        }

        match ask(&question) {
            Ok(values) => partial
                .answer(question.field, &values)
                .map_err(ScaffoldError::from)?,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Ok(AnswerRecord::Cancelled)
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(partial.complete())
}

fn ask(question: &Question) -> io::Result<Vec<&'static str>> {
    match question.kind {
        QuestionKind::Select => {
            let mut select = cliclack::select(question.message);
            for (value, title) in &question.choices {
                select = select.item(*value, *title, "");
            }
            if let Some(initial) = question.initial_value() {
                select = select.initial_value(initial);
            }
            Ok(vec![select.interact()?])
        }
        QuestionKind::MultiSelect => {
            let mut multi = cliclack::multiselect(question.message);
            for (value, title) in &question.choices {
                multi = multi.item(*value, *title, "");
            }
            multi.required(false).interact()
        }
    }
}

fn check_runtimes(package_manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking package manager...");

    match check::check_package_manager(package_manager) {
        Ok(info) => {
            spinner.stop(format!(
                "Detected {} ({})",
                info.name,
                info.version.as_deref().unwrap_or("unknown")
            ));
        }
        Err(e) => {
            spinner.stop("Missing package manager");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install {} and try again.", package_manager);
        }
    }

    if check::needs_node(package_manager) {
        let node = check::check_node();
        let warning = node
            .version
            .as_deref()
            .and_then(|v| check::node_version_warning(v, check::MIN_NODE_VERSION));
        if let Some(warning) = warning {
            cliclack::log::warning(warning)?;
        }
    }

    Ok(())
}

/// Reports task progress: a spinner per task, or plain log lines while
/// package manager output streams to the terminal
struct CliProgress {
    verbosity: Verbosity,
    spinner: Option<cliclack::ProgressBar>,
}

impl CliProgress {
    fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            spinner: None,
        }
    }
}

impl Progress for CliProgress {
    fn task_started(&mut self, task: &Task) {
        if self.verbosity.is_verbose() {
            let _ = cliclack::log::step(&task.pending);
        } else {
            let spinner = cliclack::spinner();
            spinner.start(&task.pending);
            self.spinner = Some(spinner);
        }
    }

    fn task_succeeded(&mut self, task: &Task) {
        match self.spinner.take() {
            Some(spinner) => spinner.stop(&task.success),
            None => {
                let _ = cliclack::log::success(&task.success);
            }
        }
    }

    fn task_failed(&mut self, task: &Task, error: &ScaffoldError) {
        match self.spinner.take() {
            Some(spinner) => spinner.error(&task.failure),
            None => {
                let _ = cliclack::log::error(&task.failure);
            }
        }
        let _ = cliclack::log::remark(error.to_string());
    }

    fn task_skipped(&mut self, task: &Task) {
        let _ = cliclack::log::remark(format!("Skipped {}", task.name));
    }
}

fn completion_message(report: &RunReport) -> Option<String> {
    let failed: Vec<&str> = report.failures().map(|o| o.name.as_str()).collect();
    if failed.is_empty() {
        None
    } else {
        Some(format!(
            "{} of {} steps failed: {}",
            failed.len(),
            report.outcomes.len(),
            failed.join(", ")
        ))
    }
}

fn print_summary(summary: &Summary) -> Result<()> {
    match completion_message(&summary.report) {
        None => cliclack::log::success("Project initialized.")?,
        Some(message) => cliclack::log::warning(format!("Project initialized. {}", message))?,
    }

    if summary.removed_dependencies {
        cliclack::log::warning(
            "node_modules was removed. Install dependencies again before starting the dev server.",
        )?;
    }

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in summary.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{TaskOutcome, TaskStatus};

    fn outcome(name: &str, status: TaskStatus) -> TaskOutcome {
        TaskOutcome {
            name: name.to_string(),
            status,
        }
    }

    #[test]
    fn test_completion_message_all_succeeded() {
        let report = RunReport {
            outcomes: vec![
                outcome("Vite + React + TS", TaskStatus::Succeeded),
                outcome("CLSX", TaskStatus::Succeeded),
            ],
        };
        assert_eq!(completion_message(&report), None);
    }

    #[test]
    fn test_completion_message_lists_failures() {
        let report = RunReport {
            outcomes: vec![
                outcome("Vite + React + TS", TaskStatus::Succeeded),
                outcome("Husky and lint-staged", TaskStatus::Failed("boom".into())),
                outcome("Vite aliases", TaskStatus::Succeeded),
            ],
        };
        assert_eq!(
            completion_message(&report).unwrap(),
            "1 of 3 steps failed: Husky and lint-staged"
        );
    }

    #[tokio::test]
    async fn test_flags_override_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("preset.yaml");
        std::fs::write(&preset, "packageManager: npm\nrouting: react-router\n").unwrap();

        let args = InitArgs {
            project_name: "app".to_string(),
            preset: Some(preset),
            answers: PartialAnswers {
                package_manager: Some(PackageManager::Bun),
                ..Default::default()
            },
            ..Default::default()
        };
        let partial = initial_answers(&args).await.unwrap();

        assert_eq!(partial.package_manager, Some(PackageManager::Bun));
        assert_eq!(partial.routing, Some(crate::answers::Routing::ReactRouter));
        assert_eq!(partial.framework, None);
    }
}
