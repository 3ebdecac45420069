//! Command lines for each supported package manager

use crate::answers::{Choice, Framework, PackageManager};
use crate::runtime::Invocation;

impl PackageManager {
    /// Executable to spawn
    pub fn program(self) -> &'static str {
        match (self, cfg!(windows)) {
            (PackageManager::Npm, true) => "npm.cmd",
            (PackageManager::Yarn, true) => "yarn.cmd",
            (PackageManager::Pnpm, true) => "pnpm.cmd",
            (PackageManager::Npm, false) => "npm",
            (PackageManager::Yarn, false) => "yarn",
            (PackageManager::Pnpm, false) => "pnpm",
            (PackageManager::Bun, _) => "bun",
            (PackageManager::Deno, _) => "deno",
        }
    }

    fn invocation<I, S>(self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(self.program(), args)
    }

    /// Deno resolves npm packages through the `npm:` specifier
    fn package_spec(self, package: &str) -> String {
        match self {
            PackageManager::Deno => format!("npm:{}", package),
            _ => package.to_string(),
        }
    }

    /// Create a Vite project named `project` from the framework template
    pub fn create_vite(self, project: &str, framework: Framework) -> Invocation {
        let template = framework.vite_template();
        match self {
            // npm forwards flags to the initializer only after `--`
            PackageManager::Npm => self.invocation([
                "create",
                "vite@latest",
                project,
                "--",
                "--template",
                template,
            ]),
            PackageManager::Deno => self.invocation([
                "run",
                "-A",
                "npm:create-vite@latest",
                project,
                "--template",
                template,
            ]),
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => {
                self.invocation(["create", "vite", project, "--template", template])
            }
        }
    }

    /// Add runtime or development dependencies
    pub fn add(self, packages: &[&str], dev: bool) -> Invocation {
        let verb = match self {
            PackageManager::Npm => "install",
            _ => "add",
        };
        let mut args = vec![verb.to_string()];
        if dev {
            args.push("-D".to_string());
        }
        args.extend(packages.iter().map(|p| self.package_spec(p)));
        self.invocation(args)
    }

    /// Remove development dependencies
    pub fn remove_dev(self, packages: &[&str]) -> Invocation {
        let mut args: Vec<String> = match self {
            PackageManager::Npm => vec!["uninstall".into(), "-D".into()],
            PackageManager::Pnpm => vec!["remove".into(), "-D".into()],
            PackageManager::Yarn | PackageManager::Bun | PackageManager::Deno => {
                vec!["remove".into()]
            }
        };
        args.extend(packages.iter().map(|p| self.package_spec(p)));
        self.invocation(args)
    }

    /// Run a binary from a dependency
    pub fn exec(self, binary: &str, binary_args: &[&str]) -> Invocation {
        let mut args: Vec<String> = match self {
            PackageManager::Npm => vec!["exec".into(), "--".into(), binary.into()],
            PackageManager::Bun => vec!["x".into(), binary.into()],
            PackageManager::Deno => vec!["run".into(), "-A".into(), self.package_spec(binary)],
            PackageManager::Yarn | PackageManager::Pnpm => vec!["exec".into(), binary.into()],
        };
        args.extend(binary_args.iter().map(|a| a.to_string()));
        self.invocation(args)
    }

    /// Command line a user types to install dependencies
    pub fn install_command(self) -> String {
        format!("{} install", self.value())
    }

    /// Command line a user types to run a package script
    pub fn run_script_command(self, script: &str) -> String {
        match self {
            PackageManager::Deno => format!("deno task {}", script),
            _ => format!("{} run {}", self.value(), script),
        }
    }
}
