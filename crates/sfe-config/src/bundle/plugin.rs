use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mode::BuildMode;

/// A plugin directive, executed by the bundler in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options")]
pub enum PluginSpec {
    /// Deterministic module id ordering
    #[serde(rename = "webpack.optimize.OccurrenceOrderPlugin")]
    OccurrenceOrder,

    /// Compile-time substitution of expressions with JSON literals
    #[serde(rename = "webpack.DefinePlugin")]
    Define(IndexMap<String, Value>),

    /// Hot module replacement runtime
    #[serde(rename = "webpack.HotModuleReplacementPlugin")]
    HotModuleReplacement,
}

/// Discriminant of [`PluginSpec`], for lookups that ignore options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    OccurrenceOrder,
    Define,
    HotModuleReplacement,
}

impl PluginSpec {
    /// Environment substitution for `mode`.
    ///
    /// Injects `process.env.NODE_ENV` as the JSON string of the mode and
    /// `__DEV__` as the is-development flag.
    pub fn define_globals(mode: BuildMode) -> Self {
        let mut definitions = IndexMap::with_capacity(2);
        definitions.insert(
            "process.env.NODE_ENV".to_string(),
            Value::String(mode.as_str().to_string()),
        );
        definitions.insert("__DEV__".to_string(), Value::Bool(mode.is_development()));
        Self::Define(definitions)
    }

    pub fn kind(&self) -> PluginKind {
        match self {
            Self::OccurrenceOrder => PluginKind::OccurrenceOrder,
            Self::Define(_) => PluginKind::Define,
            Self::HotModuleReplacement => PluginKind::HotModuleReplacement,
        }
    }

    /// Fully qualified bundler constructor for this directive.
    pub fn constructor(&self) -> &'static str {
        match self.kind() {
            PluginKind::OccurrenceOrder => "webpack.optimize.OccurrenceOrderPlugin",
            PluginKind::Define => "webpack.DefinePlugin",
            PluginKind::HotModuleReplacement => "webpack.HotModuleReplacementPlugin",
        }
    }

    /// Constructor options, if the directive takes any.
    pub fn options(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Define(definitions) => Some(definitions),
            _ => None,
        }
    }
}
