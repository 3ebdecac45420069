//! Scaffolder Core - library behind the `cli-frameworks-setup` binary
//!
//! Creates a Vite project through the user's package manager and layers
//! optional libraries and tooling on top of it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - answer types, questions, package manager
//!   command shapes, config file templates and `package.json` merging
//! - **Layer 2: Workflow Orchestration** - [`plan::plan`] turns answers into
//!   tasks, [`executor::scaffold`] runs them through a [`CommandRunner`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{scaffold, PartialAnswers, ProcessRunner, ScaffoldOptions};
//!
//! let mut answers = PartialAnswers::default();
//! answers.fill_defaults();
//!
//! let options = ScaffoldOptions::new(std::env::current_dir()?, "my-app");
//! let runner = ProcessRunner::new(options.verbosity);
//! let outcome = scaffold(answers.complete(), &options, &runner, &mut my_progress).await?;
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod executor;
pub mod manifest;
pub mod package_manager;
pub mod plan;
pub mod questions;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{
    AnswerRecord, Answers, Choice, Extra, Framework, PackageManager, PartialAnswers,
};
pub use config::{load_preset, ScaffoldOptions, Verbosity};
pub use error::ScaffoldError;
pub use executor::{scaffold, Progress, RunReport, ScaffoldOutcome, Summary};
pub use plan::{plan, Task};
pub use runtime::{CommandRunner, Invocation, ProcessRunner, RuntimeInfo};

#[cfg(feature = "tui")]
pub use tui::{run, InitArgs};
