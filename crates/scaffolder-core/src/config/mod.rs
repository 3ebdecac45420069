//! Scaffold options and answer presets

pub mod preset;

pub use preset::load_preset;

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};

/// How much package manager output reaches the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Capture subprocess output; show it only when a step fails
    #[default]
    Quiet,
    /// Stream subprocess output live
    Verbose,
}

impl Verbosity {
    /// Resolve the `--verbose` / `--quiet` flags (quiet is the default)
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose && !quiet {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }

    /// The flag that selects this mode
    pub fn flag(self) -> &'static str {
        match self {
            Verbosity::Quiet => "--quiet",
            Verbosity::Verbose => "--verbose",
        }
    }
}

/// Where and how a project is scaffolded
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the project directory is created in
    pub parent_dir: PathBuf,
    /// Project name; also the project directory name
    pub project_name: String,
    pub verbosity: Verbosity,
}

impl ScaffoldOptions {
    pub fn new(parent_dir: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Self {
            parent_dir: parent_dir.into(),
            project_name: project_name.into(),
            verbosity: Verbosity::default(),
        }
    }

    /// Reject names that are not a single plain directory name
    pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
        let invalid = name.trim().is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\']);
        if invalid {
            Err(ScaffoldError::InvalidProjectName(name.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    /// The project root every step after creation works in
    pub fn project_root(&self) -> PathBuf {
        self.parent_dir.join(&self.project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::Verbose.flag(), "--verbose");
    }

    #[test]
    fn test_validate_project_name() {
        assert!(ScaffoldOptions::validate_project_name("my-app").is_ok());
        assert!(ScaffoldOptions::validate_project_name("app_2").is_ok());
        for bad in ["", "  ", ".", "..", "nested/app", "nested\\app"] {
            assert!(
                ScaffoldOptions::validate_project_name(bad).is_err(),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_project_root() {
        let options = ScaffoldOptions::new("/work", "my-app");
        assert_eq!(options.project_root(), PathBuf::from("/work/my-app"));
        assert_eq!(options.verbosity, Verbosity::Quiet);
    }
}
