//! Installation planner: turns answers into an ordered task list

use crate::answers::{Answers, Choice, Extra, Framework, Library, PackageManager};
use crate::runtime::Invocation;
use crate::templates::Template;
use serde_json::{json, Value};

/// Development dependencies for the ESLint + Prettier setup
pub const LINT_DEV_DEPENDENCIES: &[&str] = &[
    "eslint",
    "eslint-config-prettier",
    "eslint-import-resolver-typescript",
    "eslint-plugin-import",
    "eslint-plugin-jsx-a11y",
    "eslint-plugin-prettier",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "eslint-plugin-react-refresh",
    "@eslint/js",
    "prettier",
    "typescript-eslint",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
];

/// Dependency the lint config replaces
pub const LINT_REMOVED_DEPENDENCY: &str = "globals";

/// Permission bits for git hook scripts
pub const HOOK_MODE: u32 = 0o755;

/// Glob lint-staged runs the fixers on
pub const LINT_STAGED_PATTERN: &str = "*/**/*.{ts,tsx}";

/// Directory a command runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The directory the project is created in
    Parent,
    /// The project root
    Project,
}

/// One unit of work
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Run an external command
    Run {
        invocation: Invocation,
        location: Location,
    },
    /// Write a template to its path in the project, with optional permission bits
    WriteFile {
        template: Template,
        mode: Option<u32>,
    },
    /// Deep-merge keys into `package.json`
    MergeManifest(Value),
    /// Replace one top-level key of `package.json`
    SetManifestField { key: &'static str, value: Value },
}

impl Step {
    fn project(invocation: Invocation) -> Self {
        Step::Run {
            invocation,
            location: Location::Project,
        }
    }

    fn write(template: Template) -> Self {
        Step::WriteFile {
            template,
            mode: None,
        }
    }
}

/// Steps that share one failure boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// What is being set up (`React Router`, `ESLint and Prettier`, ...)
    pub name: String,
    /// Shown while the task runs
    pub pending: String,
    /// Shown when every step succeeded
    pub success: String,
    /// Shown when a step failed
    pub failure: String,
    /// Later tasks cannot run if this one fails
    pub required: bool,
    pub steps: Vec<Step>,
}

impl Task {
    fn install(name: &str, steps: Vec<Step>) -> Self {
        Self {
            name: name.to_string(),
            pending: format!("Installing {}...", name),
            success: format!("{} installed.", name),
            failure: format!("Error installing {}.", name),
            required: false,
            steps,
        }
    }

    fn setup(name: &str, steps: Vec<Step>) -> Self {
        Self {
            name: name.to_string(),
            pending: format!("Setting up {}...", name),
            success: format!("{} configured.", name),
            failure: format!("Error setting up {}.", name),
            required: false,
            steps,
        }
    }

    /// Every command this task would run, in order
    pub fn invocations(&self) -> impl Iterator<Item = &Invocation> {
        self.steps.iter().filter_map(|step| match step {
            Step::Run { invocation, .. } => Some(invocation),
            _ => None,
        })
    }
}

/// Derive the ordered task list for a project
pub fn plan(answers: &Answers, project_name: &str) -> Vec<Task> {
    let pm = answers.package_manager;
    let mut tasks = vec![framework_task(answers.framework, pm, project_name)];

    tasks.extend(library_task(answers.routing, pm));
    tasks.extend(library_task(answers.query, pm));
    tasks.extend(library_task(answers.forms, pm));
    tasks.extend(library_task(answers.state_management, pm));
    tasks.extend(library_task(answers.styling, pm));
    tasks.extend(library_task(answers.icons, pm));

    for extra in Extra::ALL.iter().copied().filter(|e| answers.has_extra(*e)) {
        tasks.push(extra_task(extra, answers.framework, pm));
    }

    tasks
}

fn framework_task(framework: Framework, pm: PackageManager, project_name: &str) -> Task {
    Task {
        name: framework.title().to_string(),
        pending: format!("Creating {} project...", framework.title()),
        success: format!("{} project created.", framework.title()),
        failure: format!("Error creating {} project.", framework.title()),
        required: true,
        steps: vec![Step::Run {
            invocation: pm.create_vite(project_name, framework),
            location: Location::Parent,
        }],
    }
}

fn library_task<L: Library>(choice: L, pm: PackageManager) -> Option<Task> {
    let packages = choice.packages();
    if packages.is_empty() {
        return None;
    }
    Some(Task::install(
        choice.label(),
        vec![Step::project(pm.add(packages, choice.dev()))],
    ))
}

fn extra_task(extra: Extra, framework: Framework, pm: PackageManager) -> Task {
    match extra {
        Extra::EslintPrettier => Task::setup(
            "ESLint and Prettier",
            vec![
                Step::project(pm.add(LINT_DEV_DEPENDENCIES, true)),
                Step::project(pm.remove_dev(&[LINT_REMOVED_DEPENDENCY])),
                Step::write(Template::EslintConfig),
                Step::write(Template::PrettierConfig),
                Step::write(Template::PrettierIgnore),
                Step::MergeManifest(json!({
                    "scripts": {
                        "lint": "eslint . --ext .ts,.tsx",
                        "format": "prettier --write ."
                    }
                })),
            ],
        ),
        Extra::HuskyLintStaged => Task::setup(
            "Husky and lint-staged",
            vec![
                Step::project(pm.add(&["husky"], true)),
                Step::project(pm.exec("husky", &["init"])),
                Step::project(pm.add(&["lint-staged"], true)),
                Step::WriteFile {
                    template: Template::HuskyPreCommit,
                    mode: Some(HOOK_MODE),
                },
                Step::SetManifestField {
                    key: "lint-staged",
                    value: json!({
                        LINT_STAGED_PATTERN: ["eslint --fix", "prettier --write"]
                    }),
                },
            ],
        ),
        Extra::ViteAliases => Task::setup(
            "Vite aliases",
            vec![
                Step::project(pm.add(&["vite-tsconfig-paths"], true)),
                Step::write(Template::ViteConfig(framework)),
                Step::write(Template::TsconfigApp(framework)),
            ],
        ),
        Extra::Clsx => Task::install("CLSX", vec![Step::project(pm.add(&["clsx"], true))]),
    }
}

/// Commands the user runs once the project is ready
pub fn next_steps(answers: &Answers, project_name: &str) -> Vec<String> {
    let pm = answers.package_manager;
    let mut steps = vec![
        format!("cd {}", project_name),
        pm.install_command(),
        pm.run_script_command("dev"),
    ];

    if answers.has_extra(Extra::EslintPrettier) {
        steps.push(pm.run_script_command("lint"));
        steps.push(pm.run_script_command("format"));
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Forms, Icons, Query, Routing, StateManagement, Styling};
    use std::collections::BTreeSet;

    fn answers(extras: &[Extra]) -> Answers {
        Answers {
            framework: Framework::ViteReactTs,
            package_manager: PackageManager::Pnpm,
            routing: Routing::None,
            query: Query::None,
            forms: Forms::None,
            state_management: StateManagement::None,
            styling: Styling::None,
            icons: Icons::None,
            extras: extras.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[cfg(not(windows))]
    #[test]
    fn test_framework_step_comes_first() {
        let mut all = answers(&Extra::ALL.to_vec());
        all.query = Query::Axios;
        let tasks = plan(&all, "my-app");

        let first = &tasks[0];
        assert!(first.required);
        assert_eq!(
            first.steps,
            vec![Step::Run {
                invocation: Invocation::new(
                    "pnpm",
                    ["create", "vite", "my-app", "--template", "react-ts"]
                ),
                location: Location::Parent,
            }]
        );
        assert!(tasks[1..].iter().all(|t| !t.required));
    }

    #[test]
    fn test_no_choices_only_creates_project() {
        let tasks = plan(&answers(&[]), "app");
        assert_eq!(tasks.len(), 1);
        assert_eq!(names(&tasks), vec!["Vite + React + TypeScript"]);
    }

    #[test]
    fn test_library_order_is_fixed() {
        let mut all = answers(&[]);
        all.icons = Icons::LucideIcons;
        all.routing = Routing::ReactRouter;
        all.styling = Styling::Sass;
        all.forms = Forms::ReactHookForm;
        all.query = Query::ReactQuery;
        all.state_management = StateManagement::Zustand;

        let tasks = plan(&all, "app");
        assert_eq!(
            names(&tasks[1..]),
            vec![
                "React Router",
                "React Query",
                "React Hook Form",
                "Zustand",
                "SASS",
                "Lucide Icons"
            ]
        );
        let query_args: Vec<&String> = tasks[2].invocations().flat_map(|i| &i.args).collect();
        assert_eq!(query_args, vec!["add", "@tanstack/react-query"]);
    }

    #[test]
    fn test_tailwind_installs_vite_plugin() {
        let mut all = answers(&[]);
        all.styling = Styling::Tailwindcss;
        let tasks = plan(&all, "app");
        let inv = tasks[1].invocations().next().unwrap();
        assert_eq!(inv.args, vec!["add", "tailwindcss", "@tailwindcss/vite"]);
        assert_eq!(tasks[1].pending, "Installing Tailwind CSS...");
    }

    #[test]
    fn test_formik_and_clsx_are_dev_dependencies() {
        let mut all = answers(&[Extra::Clsx]);
        all.forms = Forms::Formik;
        let tasks = plan(&all, "app");

        let args: Vec<Vec<String>> = tasks[1..]
            .iter()
            .flat_map(|t| t.invocations())
            .map(|i| i.args.clone())
            .collect();
        assert_eq!(
            args,
            vec![vec!["add", "-D", "formik"], vec!["add", "-D", "clsx"]]
        );
    }

    #[test]
    fn test_husky_replaces_lint_staged() {
        let tasks = plan(&answers(&[Extra::HuskyLintStaged]), "app");
        assert_eq!(
            tasks[1].steps.last(),
            Some(&Step::SetManifestField {
                key: "lint-staged",
                value: json!({ "*/**/*.{ts,tsx}": ["eslint --fix", "prettier --write"] }),
            })
        );
    }

    #[test]
    fn test_extras_follow_fixed_order() {
        let tasks = plan(
            &answers(&[Extra::Clsx, Extra::ViteAliases, Extra::EslintPrettier]),
            "app",
        );
        assert_eq!(
            names(&tasks[1..]),
            vec!["ESLint and Prettier", "Vite aliases", "CLSX"]
        );
    }

    #[test]
    fn test_eslint_prettier_steps() {
        let tasks = plan(&answers(&[Extra::EslintPrettier]), "app");
        let task = &tasks[1];

        let invocations: Vec<&Invocation> = task.invocations().collect();
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].args[..2], ["add", "-D"]);
        assert_eq!(invocations[0].args.len(), 2 + LINT_DEV_DEPENDENCIES.len());
        assert_eq!(invocations[1].args, vec!["remove", "-D", "globals"]);

        let templates: Vec<Template> = task
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::WriteFile { template, .. } => Some(*template),
                _ => None,
            })
            .collect();
        assert_eq!(
            templates,
            vec![
                Template::EslintConfig,
                Template::PrettierConfig,
                Template::PrettierIgnore
            ]
        );
        assert_eq!(
            task.steps.last(),
            Some(&Step::MergeManifest(json!({
                "scripts": { "lint": "eslint . --ext .ts,.tsx", "format": "prettier --write ." }
            })))
        );
    }

    #[test]
    fn test_husky_hook_is_executable() {
        let tasks = plan(&answers(&[Extra::HuskyLintStaged]), "app");
        let task = &tasks[1];
        assert!(task.steps.contains(&Step::WriteFile {
            template: Template::HuskyPreCommit,
            mode: Some(0o755),
        }));
        let init: Vec<&Invocation> = task.invocations().collect();
        assert_eq!(init[1].args, vec!["exec", "husky", "init"]);
    }

    #[test]
    fn test_aliases_use_framework_variant() {
        let mut vue = answers(&[Extra::ViteAliases]);
        vue.framework = Framework::VueTs;
        let tasks = plan(&vue, "app");
        assert!(tasks[1]
            .steps
            .contains(&Step::write(Template::ViteConfig(Framework::VueTs))));
        assert!(tasks[1]
            .steps
            .contains(&Step::write(Template::TsconfigApp(Framework::VueTs))));
    }

    #[test]
    fn test_next_steps() {
        assert_eq!(
            next_steps(&answers(&[]), "my-app"),
            vec!["cd my-app", "pnpm install", "pnpm run dev"]
        );

        let mut deno = answers(&[Extra::EslintPrettier]);
        deno.package_manager = PackageManager::Deno;
        assert_eq!(
            next_steps(&deno, "my-app"),
            vec![
                "cd my-app",
                "deno install",
                "deno task dev",
                "deno task lint",
                "deno task format"
            ]
        );
    }
}
