//! Serialization of a [`BundlerConfig`] into what the bundler loads.
//!
//! JSON output is the plain record. Module output is a CommonJS config file:
//! plugins become constructor calls and rule tests become regex literals,
//! which JSON cannot express.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{BundlerConfig, LoaderRule, PluginSpec};
use crate::error::{ConfigError, Result};

/// Output format of a rendered configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Pretty-printed JSON record
    Json,
    /// CommonJS module (`module.exports = { ... }`)
    #[default]
    Module,
}

impl RenderFormat {
    /// Conventional file name for the format.
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => "webpack.config.json",
            Self::Module => "webpack.config.js",
        }
    }
}

pub fn render(config: &BundlerConfig, format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Json => render_json(config),
        RenderFormat::Module => render_module(config),
    }
}

/// Render `config` as pretty JSON.
pub fn render_json(config: &BundlerConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue {
        field: "config".to_string(),
        hint: Some(e.to_string()),
    })
}

/// Render `config` as a CommonJS module the bundler can load directly.
///
/// # Example
///
/// ```
/// use sfe_config::{build_config, render_module, BuildMode};
///
/// let source = render_module(&build_config(BuildMode::Production)).unwrap();
/// assert!(source.starts_with("const webpack = require('webpack');"));
/// assert!(!source.contains("HotModuleReplacementPlugin"));
/// ```
pub fn render_module(config: &BundlerConfig) -> Result<String> {
    let Value::Object(fields) = config.to_value()? else {
        return Err(ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some("configuration did not serialize to an object".to_string()),
        });
    };

    let entries = fields
        .into_iter()
        .map(|(key, value)| {
            let js = match key.as_str() {
                "plugins" => Js::Array(config.plugins.iter().map(plugin_call).collect()),
                "module" => Js::Object(vec![(
                    "rules".to_string(),
                    Js::Array(config.rules().iter().map(rule_object).collect()),
                )]),
                _ => Js::Json(value),
            };
            (key, js)
        })
        .collect();

    let mut out = String::from("const webpack = require('webpack');\n\nmodule.exports = ");
    Js::Object(entries).write(&mut out, 0);
    out.push_str(";\n");
    Ok(out)
}

fn plugin_call(plugin: &PluginSpec) -> Js {
    let args = plugin
        .options()
        .map(|definitions| {
            let entries = definitions
                .iter()
                .map(|(name, value)| (name.clone(), Js::Raw(format!("JSON.stringify({value})"))))
                .collect();
            vec![Js::Object(entries)]
        })
        .unwrap_or_default();

    Js::New {
        callee: plugin.constructor(),
        args,
    }
}

fn rule_object(rule: &LoaderRule) -> Js {
    let mut entries = vec![("test".to_string(), Js::Raw(regex_literal(&rule.test)))];
    if !rule.include.is_empty() {
        let dirs = rule
            .include
            .iter()
            .map(|dir| Js::Json(Value::String(dir.to_string_lossy().into_owned())))
            .collect();
        entries.push(("include".to_string(), Js::Array(dirs)));
    }
    let chain = rule.chain.iter().map(|l| Js::Json(Value::String(l.clone()))).collect();
    entries.push(("use".to_string(), Js::Array(chain)));
    Js::Object(entries)
}

fn regex_literal(source: &str) -> String {
    let mut literal = String::with_capacity(source.len() + 2);
    literal.push('/');
    let mut escaped = false;
    for c in source.chars() {
        if c == '/' && !escaped {
            literal.push('\\');
        }
        escaped = c == '\\' && !escaped;
        literal.push(c);
    }
    literal.push('/');
    literal
}

/// Minimal JavaScript expression tree for module output
enum Js {
    Json(Value),
    Raw(String),
    Object(Vec<(String, Js)>),
    Array(Vec<Js>),
    New { callee: &'static str, args: Vec<Js> },
}

impl Js {
    fn write(&self, out: &mut String, indent: usize) {
        match self {
            Js::Json(Value::Object(map)) => {
                let entries: Vec<_> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), Js::Json(v.clone())))
                    .collect();
                Js::Object(entries).write(out, indent);
            }
            Js::Json(Value::Array(items)) => {
                let items: Vec<_> = items.iter().cloned().map(Js::Json).collect();
                Js::Array(items).write(out, indent);
            }
            Js::Json(scalar) => {
                let _ = write!(out, "{scalar}");
            }
            Js::Raw(code) => out.push_str(code),
            Js::Object(entries) => {
                if entries.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (i, (key, value)) in entries.iter().enumerate() {
                    push_indent(out, indent + 1);
                    let _ = write!(out, "{}: ", Value::String(key.clone()));
                    value.write(out, indent + 1);
                    out.push_str(if i + 1 < entries.len() { ",\n" } else { "\n" });
                }
                push_indent(out, indent);
                out.push('}');
            }
            Js::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    push_indent(out, indent + 1);
                    item.write(out, indent + 1);
                    out.push_str(if i + 1 < items.len() { ",\n" } else { "\n" });
                }
                push_indent(out, indent);
                out.push(']');
            }
            Js::New { callee, args } => {
                let _ = write!(out, "new {callee}(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.write(out, indent);
                }
                out.push(')');
            }
        }
    }
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}
