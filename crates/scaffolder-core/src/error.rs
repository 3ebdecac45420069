//! Error types for the scaffolding library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while planning or executing a scaffold
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project name cannot be used as a directory name
    #[error("Invalid project name '{0}': use a plain directory name")]
    InvalidProjectName(String),

    /// The project directory is already present
    #[error("Directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    /// A package manager process could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// A package manager process exited unsuccessfully
    #[error("`{command}` exited with {status}{}", format_stderr(.stderr))]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Filesystem access failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `package.json` could not be parsed or serialized
    #[error("Invalid package manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A preset answers file could not be parsed
    #[error("Invalid preset file {}: {source}", .path.display())]
    Preset {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The selected package manager is not callable
    #[error("{0} is not installed or not in PATH")]
    MissingPackageManager(&'static str),

    /// A required task failed, so the rest of the setup could not run
    #[error("{task} failed: {reason}")]
    Aborted { task: String, reason: String },

    /// A value that is not one of a question's choices
    #[error(transparent)]
    UnknownChoice(#[from] UnknownChoice),
}

/// Raised when parsing a value that is not among a question's choices
#[derive(Debug, Clone, Error)]
#[error("'{value}' is not a valid {field} (expected one of: {expected})")]
pub struct UnknownChoice {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}
