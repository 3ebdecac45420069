//! Runtime detection and process execution
//!
//! This module provides:
//! - Package manager and Node.js detection
//! - The `CommandRunner` seam used to spawn package manager commands

pub mod check;
pub mod process;

pub use check::{check_node, check_package_manager, RuntimeInfo};
pub use process::{CommandRunner, Invocation, ProcessRunner};
