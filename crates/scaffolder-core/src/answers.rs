//! Answer types collected by the prompt flow
//!
//! Every question maps to a closed set of choices. Library questions carry a
//! `None` choice (value `none`, or an empty string) that skips the library.

use crate::error::UnknownChoice;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A closed set of values a question can be answered with
pub trait Choice: Copy + Eq + 'static {
    /// Answer field name, as used in presets and error messages
    const FIELD: &'static str;

    /// Every choice, in the order the prompt lists them
    const ALL: &'static [Self];

    /// Machine value (`vite-react-ts`, `pnpm`, ...)
    fn value(self) -> &'static str;

    /// Human-readable title shown in prompts
    fn title(self) -> &'static str;

    /// Parse a machine value; the empty string is read as `none`
    fn parse(value: &str) -> Result<Self, UnknownChoice> {
        let wanted = if value.trim().is_empty() {
            "none"
        } else {
            value.trim()
        };
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.value().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownChoice {
                field: Self::FIELD,
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|choice| choice.value())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// An optional library question; each choice installs a fixed package set
pub trait Library: Choice {
    /// Display name used in progress messages
    fn label(self) -> &'static str {
        self.title()
    }

    /// Packages added for this choice (empty for `None`)
    fn packages(self) -> &'static [&'static str];

    /// Whether the packages go into `devDependencies`
    fn dev(self) -> bool {
        false
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => ($value:literal, $title:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
        #[serde(try_from = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Choice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Choice>::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownChoice;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <Self as Choice>::parse(&value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }
    };
}

choice_enum! {
    /// Base project template
    Framework, "framework" {
        ViteReactTs => ("vite-react-ts", "Vite + React + TypeScript"),
        VueTs => ("vue-ts", "Vue + TypeScript"),
    }
}

choice_enum! {
    /// Package manager used for every install step
    PackageManager, "packageManager" {
        Npm => ("npm", "npm"),
        Yarn => ("yarn", "yarn"),
        Pnpm => ("pnpm", "pnpm"),
        Bun => ("bun", "bun"),
        Deno => ("deno", "deno"),
    }
}

choice_enum! {
    Routing, "routing" {
        None => ("none", "None"),
        ReactRouter => ("react-router", "React Router"),
    }
}

choice_enum! {
    /// Data fetching library
    Query, "query" {
        None => ("none", "None"),
        Axios => ("axios", "Axios"),
        Swr => ("swr", "SWR"),
        ReactQuery => ("react-query", "React Query"),
    }
}

choice_enum! {
    Forms, "forms" {
        None => ("none", "None"),
        ReactHookForm => ("react-hook-form", "React Hook Form"),
        Formik => ("formik", "Formik"),
    }
}

choice_enum! {
    StateManagement, "stateManagement" {
        None => ("none", "None"),
        Zustand => ("zustand", "Zustand"),
    }
}

choice_enum! {
    Styling, "styling" {
        None => ("none", "None"),
        Tailwindcss => ("tailwindcss", "Tailwind CSS"),
        Sass => ("sass", "SASS"),
    }
}

choice_enum! {
    Icons, "icons" {
        None => ("none", "None"),
        LucideIcons => ("lucide-icons", "Lucide Icons"),
    }
}

choice_enum! {
    /// Independently toggleable tooling additions
    Extra, "extras" {
        EslintPrettier => ("eslint-prettier", "ESLint + Prettier"),
        HuskyLintStaged => ("husky-lint-staged", "Husky + lint-staged"),
        ViteAliases => ("vite-aliases", "Vite aliases"),
        Clsx => ("clsx", "CLSX"),
    }
}

impl Framework {
    /// create-vite template name
    pub fn vite_template(self) -> &'static str {
        match self {
            Framework::ViteReactTs => "react-ts",
            Framework::VueTs => "vue-ts",
        }
    }
}

impl Library for Routing {
    fn packages(self) -> &'static [&'static str] {
        match self {
            Routing::None => &[],
            Routing::ReactRouter => &["react-router"],
        }
    }
}

impl Library for Query {
    fn packages(self) -> &'static [&'static str] {
        match self {
            Query::None => &[],
            Query::Axios => &["axios"],
            Query::Swr => &["swr"],
            Query::ReactQuery => &["@tanstack/react-query"],
        }
    }
}

impl Library for Forms {
    fn packages(self) -> &'static [&'static str] {
        match self {
            Forms::None => &[],
            Forms::ReactHookForm => &["react-hook-form"],
            Forms::Formik => &["formik"],
        }
    }

    fn dev(self) -> bool {
        self == Forms::Formik
    }
}

impl Library for StateManagement {
    fn packages(self) -> &'static [&'static str] {
        match self {
            StateManagement::None => &[],
            StateManagement::Zustand => &["zustand"],
        }
    }
}

impl Library for Styling {
    fn packages(self) -> &'static [&'static str] {
        match self {
            Styling::None => &[],
            Styling::Tailwindcss => &["tailwindcss", "@tailwindcss/vite"],
            Styling::Sass => &["sass"],
        }
    }
}

impl Library for Icons {
    fn packages(self) -> &'static [&'static str] {
        match self {
            Icons::None => &[],
            Icons::LucideIcons => &["lucide-react"],
        }
    }
}

/// A complete set of answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub framework: Framework,
    pub package_manager: PackageManager,
    pub routing: Routing,
    pub query: Query,
    pub forms: Forms,
    pub state_management: StateManagement,
    pub styling: Styling,
    pub icons: Icons,
    pub extras: BTreeSet<Extra>,
}

impl Answers {
    /// Whether an extra was selected
    pub fn has_extra(&self, extra: Extra) -> bool {
        self.extras.contains(&extra)
    }
}

/// Result of the prompt flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    /// The user left before answering every question
    Cancelled,
    Complete(Answers),
}

/// Answers gathered so far from presets, flags and prompts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialAnswers {
    pub framework: Option<Framework>,
    pub package_manager: Option<PackageManager>,
    pub routing: Option<Routing>,
    pub query: Option<Query>,
    pub forms: Option<Forms>,
    pub state_management: Option<StateManagement>,
    pub styling: Option<Styling>,
    pub icons: Option<Icons>,
    pub extras: Option<Vec<Extra>>,
}

impl PartialAnswers {
    /// Finalize the answers; any missing field means the run was cancelled
    pub fn complete(self) -> AnswerRecord {
        let (
            Some(framework),
            Some(package_manager),
            Some(routing),
            Some(query),
            Some(forms),
            Some(state_management),
            Some(styling),
            Some(icons),
            Some(extras),
        ) = (
            self.framework,
            self.package_manager,
            self.routing,
            self.query,
            self.forms,
            self.state_management,
            self.styling,
            self.icons,
            self.extras,
        )
        else {
            return AnswerRecord::Cancelled;
        };

        AnswerRecord::Complete(Answers {
            framework,
            package_manager,
            routing,
            query,
            forms,
            state_management,
            styling,
            icons,
            extras: extras.into_iter().collect(),
        })
    }

    /// Overlay answers from `other` on top of these (other wins)
    pub fn merge(&mut self, other: PartialAnswers) {
        self.framework = other.framework.or(self.framework);
        self.package_manager = other.package_manager.or(self.package_manager);
        self.routing = other.routing.or(self.routing);
        self.query = other.query.or(self.query);
        self.forms = other.forms.or(self.forms);
        self.state_management = other.state_management.or(self.state_management);
        self.styling = other.styling.or(self.styling);
        self.icons = other.icons.or(self.icons);
        if other.extras.is_some() {
            self.extras = other.extras;
        }
    }
}
