use std::path::{Component, Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Directories (relative to the project root) whose scripts are transpiled
pub const SCRIPT_SOURCE_DIRS: [&str; 2] = ["src", "demo"];

const SCRIPT_TEST: &str = r"\.jsx?$";
const LESS_TEST: &str = r"\.less$";
const CSS_TEST: &str = r"\.css$";

const SCRIPT_CHAIN: [&str; 2] = ["babel-loader", "eslint-loader"];
const LESS_CHAIN: [&str; 3] = ["style-loader", "css-loader", "less-loader"];
const CSS_CHAIN: [&str; 2] = ["style-loader", "css-loader"];

/// Loader rule: files matching `test` (and under one of `include`, when
/// given) pass through the `use` chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderRule {
    /// Regular expression source matched against the module path
    pub test: String,

    /// Directories the rule is restricted to (empty = everywhere)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    /// Transform chain, listed in bundler order
    #[serde(rename = "use")]
    pub chain: Vec<String>,
}

impl LoaderRule {
    pub fn new(test: impl Into<String>, chain: &[&str]) -> Self {
        Self {
            test: test.into(),
            include: Vec::new(),
            chain: chain.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_include(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.include.extend(dirs);
        self
    }

    /// `.js`/`.jsx` under `src/` and `demo/`: transpile then lint.
    pub fn script(root: &Path) -> Self {
        Self::new(SCRIPT_TEST, &SCRIPT_CHAIN)
            .with_include(SCRIPT_SOURCE_DIRS.iter().map(|dir| root.join(dir)))
    }

    /// `.less` stylesheets: preprocess, resolve, inject.
    pub fn less() -> Self {
        Self::new(LESS_TEST, &LESS_CHAIN)
    }

    /// Plain `.css`: the less chain without the preprocessor.
    pub fn css() -> Self {
        Self::new(CSS_TEST, &CSS_CHAIN)
    }

    /// Compile `test` into a [`Regex`].
    pub fn compiled_test(&self) -> Result<Regex> {
        Regex::new(&self.test).map_err(|e| ConfigError::SchemaValidation {
            message: format!("rule test '{}' is not a valid regular expression", self.test),
            hint: Some(e.to_string()),
        })
    }

    /// Whether a module at `path` is handled by this rule.
    ///
    /// A relative `path` is taken relative to the project root, i.e. the
    /// parent of each include directory. A rule whose test does not compile
    /// applies to nothing.
    pub fn applies_to(&self, path: &Path) -> bool {
        let Ok(test) = self.compiled_test() else {
            tracing::warn!(test = %self.test, "skipping rule with invalid test");
            return false;
        };

        let subject = path.to_string_lossy().replace('\\', "/");
        if !test.is_match(&subject) {
            return false;
        }

        if self.include.is_empty() {
            return true;
        }

        self.include.iter().any(|dir| {
            let resolved = match dir.parent() {
                Some(root) if path.is_relative() => root.join(path),
                _ => path.to_path_buf(),
            };
            normalize(&resolved).starts_with(normalize(dir))
        })
    }
}

// Drop `.` components so `./src` and `src` compare equal
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
