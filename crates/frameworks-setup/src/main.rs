//! cli-frameworks-setup - scaffold a Vite project with the libraries you pick

use anyhow::Result;
use clap::{Parser, Subcommand};
use scaffolder_core::tui::InitArgs;
use scaffolder_core::{Framework, PackageManager, PartialAnswers, Verbosity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cli-frameworks-setup")]
#[command(about = "Scaffold Vite + React + TS")]
#[command(version)]
pub struct Args {
    /// Stream package manager output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Hide package manager output unless a step fails (default)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize new project: Vite + React + TypeScript
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Project name; also the directory created for it
    pub project_name: String,

    /// YAML file answering some or all of the questions
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Base template (vite-react-ts, vue-ts)
    #[arg(long)]
    pub framework: Option<Framework>,

    /// Package manager (npm, yarn, pnpm, bun, deno)
    #[arg(short, long = "package-manager")]
    pub package_manager: Option<PackageManager>,

    /// Skip the package manager check
    #[arg(long = "skip-check")]
    pub skip_check: bool,

    /// Use defaults for every unanswered question (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl CliInitArgs {
    fn into_init_args(self, verbosity: Verbosity) -> InitArgs {
        InitArgs {
            project_name: self.project_name,
            preset: self.preset,
            answers: PartialAnswers {
                framework: self.framework,
                package_manager: self.package_manager,
                ..Default::default()
            },
            skip_check: self.skip_check,
            yes: self.yes,
            verbosity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.verbose, args.quiet);

    match args.command {
        Command::Init(init_args) => {
            let result = scaffolder_core::run(init_args.into_init_args(verbosity)).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
