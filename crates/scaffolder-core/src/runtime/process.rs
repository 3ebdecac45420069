//! Package manager process execution
//!
//! Spawns package manager commands either with inherited stdio (verbose) or
//! with output captured, so a failure can report what the tool printed.

use crate::config::Verbosity;
use crate::error::ScaffoldError;
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Lines of captured stderr kept in a failure report
const STDERR_TAIL_LINES: usize = 20;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the executor
pub trait CommandRunner {
    /// Run `invocation` in `cwd` to completion
    fn run(
        &self,
        invocation: &Invocation,
        cwd: &Path,
    ) -> impl Future<Output = Result<(), ScaffoldError>>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    verbosity: Verbosity,
}

impl ProcessRunner {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<(), ScaffoldError> {
        let command_line = invocation.to_string();
        let mut command = TokioCommand::new(&invocation.program);
        command.args(&invocation.args).current_dir(cwd);

        let spawn_error = |source: std::io::Error| ScaffoldError::Spawn {
            command: command_line.clone(),
            source,
        };

        if self.verbosity.is_verbose() {
            let status = command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(spawn_error)?;

            if status.success() {
                return Ok(());
            }
            return Err(ScaffoldError::CommandFailed {
                command: command_line.clone(),
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(spawn_error)?;

        if output.status.success() {
            Ok(())
        } else {
            // Some package managers report errors on stdout
            let stderr = if output.stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout)
            } else {
                String::from_utf8_lossy(&output.stderr)
            };
            Err(ScaffoldError::CommandFailed {
                command: command_line.clone(),
                status: output.status.to_string(),
                stderr: tail(&stderr, STDERR_TAIL_LINES),
            })
        }
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.trim_end().lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
