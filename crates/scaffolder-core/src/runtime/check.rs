//! Runtime detection for package managers and Node.js

use crate::answers::{Choice, PackageManager};
use crate::error::ScaffoldError;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release current Vite supports
pub const MIN_NODE_VERSION: &str = "20.19.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether `program --version` runs successfully
pub fn check_tool(program: &str, name: &'static str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_tool("node", "Node.js")
}

/// Check that the selected package manager can be called
pub fn check_package_manager(package_manager: PackageManager) -> Result<RuntimeInfo, ScaffoldError> {
    let info = check_tool(package_manager.program(), package_manager.value());
    if info.available {
        Ok(info)
    } else {
        Err(ScaffoldError::MissingPackageManager(package_manager.value()))
    }
}

/// Whether the package manager runs on Node.js (bun and deno ship their own runtime)
pub fn needs_node(package_manager: PackageManager) -> bool {
    matches!(
        package_manager,
        PackageManager::Npm | PackageManager::Yarn | PackageManager::Pnpm
    )
}

/// Compare a `node --version` string against the minimum Vite supports
/// Returns a warning message if Node.js is older
pub fn node_version_warning(node_version: &str, minimum: &str) -> Option<String> {
    let installed = parse_version(node_version)?;
    let required = parse_version(minimum)?;

    if installed < required {
        Some(format!(
            "Node.js {} is older than {}, which Vite requires. \
             The dev server may fail to start.",
            node_version, minimum
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading 'v'
fn parse_version(version_str: &str) -> Option<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).ok()
}
