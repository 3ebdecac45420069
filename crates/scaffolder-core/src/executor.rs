//! Step executor
//!
//! Runs planned tasks strictly in order. Each task is its own failure
//! boundary: a failing step ends the task, the failure is reported, and the
//! next task runs. When a required task fails there is no project to work
//! in, so every remaining task is skipped.

use crate::answers::{AnswerRecord, Answers};
use crate::config::ScaffoldOptions;
use crate::error::ScaffoldError;
use crate::manifest;
use crate::plan::{self, Location, Step, Task};
use crate::runtime::CommandRunner;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory removed after setup so the user reinstalls from scratch
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Receives progress events while tasks run
pub trait Progress {
    fn task_started(&mut self, task: &Task);
    fn task_succeeded(&mut self, task: &Task);
    fn task_failed(&mut self, task: &Task, error: &ScaffoldError);
    fn task_skipped(&mut self, _task: &Task) {}
}

/// How a task ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Succeeded,
    /// Failed with the error detail
    Failed(String),
    /// Not attempted because a required task failed
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub name: String,
    pub status: TaskStatus,
}

/// Per-task results of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl RunReport {
    /// Tasks that failed, with their error detail
    pub fn failures(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, TaskStatus::Failed(_)))
    }

    pub fn status_of(&self, name: &str) -> Option<&TaskStatus> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.status)
    }
}

/// Result of a scaffold run that did not hit a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The answers were incomplete; nothing was touched
    Cancelled,
    Completed(Summary),
}

/// What a completed run did and what the user should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub project_root: PathBuf,
    pub report: RunReport,
    /// Whether the dependency directory was removed
    pub removed_dependencies: bool,
    pub next_steps: Vec<String>,
}

/// Fail if the project directory is already present
pub fn ensure_target_available(project_root: &Path) -> Result<(), ScaffoldError> {
    if project_root.exists() {
        Err(ScaffoldError::DirectoryExists(project_root.to_path_buf()))
    } else {
        Ok(())
    }
}

/// Scaffold a project from an answer record
///
/// Returns `Cancelled` without side effects when the record is incomplete,
/// and an error without side effects when the project name is unusable or
/// the project directory exists.
pub async fn scaffold<R, P>(
    record: AnswerRecord,
    options: &ScaffoldOptions,
    runner: &R,
    progress: &mut P,
) -> Result<ScaffoldOutcome, ScaffoldError>
where
    R: CommandRunner,
    P: Progress,
{
    let answers = match record {
        AnswerRecord::Cancelled => return Ok(ScaffoldOutcome::Cancelled),
        AnswerRecord::Complete(answers) => answers,
    };

    ScaffoldOptions::validate_project_name(&options.project_name)?;
    let project_root = options.project_root();
    ensure_target_available(&project_root)?;

    let tasks = plan::plan(&answers, &options.project_name);
    let executor = Executor::new(runner, options.parent_dir(), &project_root);
    let report = executor.execute(&tasks, progress).await?;

    let removed_dependencies = remove_dependency_dir(&project_root).await?;

    Ok(ScaffoldOutcome::Completed(Summary {
        project_root,
        report,
        removed_dependencies,
        next_steps: next_steps(&answers, options),
    }))
}

fn next_steps(answers: &Answers, options: &ScaffoldOptions) -> Vec<String> {
    plan::next_steps(answers, &options.project_name)
}

/// Remove the dependency directory if present
pub async fn remove_dependency_dir(project_root: &Path) -> Result<bool, ScaffoldError> {
    let dir = project_root.join(DEPENDENCY_DIR);
    if !dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(&dir)
        .await
        .map_err(|source| ScaffoldError::io(&dir, source))?;
    Ok(true)
}

/// Executes tasks against an explicit parent directory and project root
pub struct Executor<'a, R> {
    runner: &'a R,
    parent_dir: &'a Path,
    project_root: &'a Path,
}

impl<'a, R: CommandRunner> Executor<'a, R> {
    pub fn new(runner: &'a R, parent_dir: &'a Path, project_root: &'a Path) -> Self {
        Self {
            runner,
            parent_dir,
            project_root,
        }
    }

    /// Run every task in order
    ///
    /// Fails only when a required task failed; the remaining tasks are
    /// reported as skipped before returning.
    pub async fn execute<P: Progress>(
        &self,
        tasks: &[Task],
        progress: &mut P,
    ) -> Result<RunReport, ScaffoldError> {
        let mut report = RunReport::default();
        let mut aborted: Option<ScaffoldError> = None;

        for task in tasks {
            if aborted.is_some() {
                progress.task_skipped(task);
                report.outcomes.push(TaskOutcome {
                    name: task.name.clone(),
                    status: TaskStatus::Skipped,
                });
                continue;
            }

            progress.task_started(task);
            let status = match self.run_task(task).await {
                Ok(()) => {
                    progress.task_succeeded(task);
                    TaskStatus::Succeeded
                }
                Err(error) => {
                    progress.task_failed(task, &error);
                    let detail = error.to_string();
                    if task.required {
                        aborted = Some(ScaffoldError::Aborted {
                            task: task.name.clone(),
                            reason: detail.clone(),
                        });
                    }
                    TaskStatus::Failed(detail)
                }
            };
            report.outcomes.push(TaskOutcome {
                name: task.name.clone(),
                status,
            });
        }

        match aborted {
            Some(error) => Err(error),
            None => Ok(report),
        }
    }

    async fn run_task(&self, task: &Task) -> Result<(), ScaffoldError> {
        for step in &task.steps {
            self.run_step(step).await?;
        }
        Ok(())
    }

    async fn run_step(&self, step: &Step) -> Result<(), ScaffoldError> {
        match step {
            Step::Run {
                invocation,
                location,
            } => {
                let cwd = match location {
                    Location::Parent => self.parent_dir,
                    Location::Project => self.project_root,
                };
                self.runner.run(invocation, cwd).await
            }
            Step::WriteFile { template, mode } => {
                let path = self.project_root.join(template.path());
                write_file(&path, template.contents(), *mode).await
            }
            Step::MergeManifest(patch) => {
                let path = self.project_root.join(manifest::PACKAGE_JSON);
                manifest::merge_file(&path, patch).await
            }
            Step::SetManifestField { key, value } => {
                let path = self.project_root.join(manifest::PACKAGE_JSON);
                manifest::set_field_file(&path, key, value).await
            }
        }
    }
}

async fn write_file(path: &Path, contents: &str, mode: Option<u32>) -> Result<(), ScaffoldError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ScaffoldError::io(parent, source))?;
    }
    fs::write(path, contents)
        .await
        .map_err(|source| ScaffoldError::io(path, source))?;

    if let Some(mode) = mode {
        set_mode(path, mode).await?;
    }
    Ok(())
}

#[cfg(unix)]
async fn set_mode(path: &Path, mode: u32) -> Result<(), ScaffoldError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .await
        .map_err(|source| ScaffoldError::io(path, source))
}

// Permission bits only exist on unix
#[cfg(not(unix))]
async fn set_mode(_path: &Path, _mode: u32) -> Result<(), ScaffoldError> {
    Ok(())
}
