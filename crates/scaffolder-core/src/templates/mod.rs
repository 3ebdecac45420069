//! Template store for generated configuration files
//!
//! Every template is static text, returned verbatim. Templates that differ
//! between React and Vue projects come in one variant per framework.

pub mod configs;

use crate::answers::Framework;

/// A named configuration file template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    EslintConfig,
    PrettierConfig,
    PrettierIgnore,
    HuskyPreCommit,
    ViteConfig(Framework),
    TsconfigApp(Framework),
}

impl Template {
    /// Path of the generated file, relative to the project root
    pub fn path(self) -> &'static str {
        match self {
            Template::EslintConfig => "eslint.config.js",
            Template::PrettierConfig => ".prettierrc",
            Template::PrettierIgnore => ".prettierignore",
            Template::HuskyPreCommit => ".husky/pre-commit",
            Template::ViteConfig(_) => "vite.config.ts",
            Template::TsconfigApp(_) => "tsconfig.app.json",
        }
    }

    /// File contents
    pub fn contents(self) -> &'static str {
        match self {
            Template::EslintConfig => configs::ESLINT_CONFIG,
            Template::PrettierConfig => configs::PRETTIER_CONFIG,
            Template::PrettierIgnore => configs::PRETTIER_IGNORE,
            Template::HuskyPreCommit => configs::HUSKY_PRE_COMMIT,
            Template::ViteConfig(Framework::ViteReactTs) => configs::VITE_CONFIG_REACT,
            Template::ViteConfig(Framework::VueTs) => configs::VITE_CONFIG_VUE,
            Template::TsconfigApp(Framework::ViteReactTs) => configs::TSCONFIG_APP_REACT,
            Template::TsconfigApp(Framework::VueTs) => configs::TSCONFIG_APP_VUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// Drop `/* ... */` comments, which tsconfig files allow; string
    /// contents such as `"@/*"` are kept
    fn strip_block_comments(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars().peekable();
        let mut in_string = false;

        while let Some(c) = chars.next() {
            if in_string {
                out.push(c);
                match c {
                    '\\' => out.extend(chars.next()),
                    '"' => in_string = false,
                    _ => {}
                }
            } else if c == '"' {
                in_string = true;
                out.push(c);
            } else if c == '/' && chars.peek() == Some(&'*') {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_strip_block_comments_keeps_strings() {
        let text = "{ /* note */ \"paths\": { \"@/*\": [\"src/*\"] } }";
        assert_eq!(
            strip_block_comments(text),
            "{  \"paths\": { \"@/*\": [\"src/*\"] } }"
        );
    }

    #[test]
    fn test_prettier_config_values() {
        let config: Value = serde_json::from_str(Template::PrettierConfig.contents()).unwrap();
        assert_eq!(
            config,
            json!({
                "singleQuote": true,
                "tabWidth": 2,
                "trailingComma": "none",
                "printWidth": 120,
                "arrowParens": "always",
                "endOfLine": "auto"
            })
        );
    }

    #[test]
    fn test_prettier_ignore_entries() {
        let entries: Vec<&str> = Template::PrettierIgnore.contents().lines().collect();
        assert_eq!(entries, vec!["node_modules", "public"]);
    }

    #[test]
    fn test_tsconfig_alias_mapping() {
        for framework in [Framework::ViteReactTs, Framework::VueTs] {
            let text = strip_block_comments(Template::TsconfigApp(framework).contents());
            let config: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(
                config["compilerOptions"]["paths"],
                json!({ "@/*": ["src/*"] })
            );
            assert_eq!(config["compilerOptions"]["baseUrl"], json!("."));
        }
    }

    #[test]
    fn test_vite_config_variants() {
        let react = Template::ViteConfig(Framework::ViteReactTs).contents();
        let vue = Template::ViteConfig(Framework::VueTs).contents();
        assert!(react.contains("@vitejs/plugin-react"));
        assert!(vue.contains("@vitejs/plugin-vue"));
        assert!(react.contains("tsconfigPaths()"));
        assert!(vue.contains("tsconfigPaths()"));
    }

    #[test]
    fn test_template_paths() {
        assert_eq!(Template::HuskyPreCommit.path(), ".husky/pre-commit");
        assert_eq!(
            Template::ViteConfig(Framework::VueTs).path(),
            "vite.config.ts"
        );
        assert!(Template::HuskyPreCommit.contents().contains("lint-staged"));
        assert!(Template::EslintConfig.contents().contains("typescript-eslint"));
    }
}
