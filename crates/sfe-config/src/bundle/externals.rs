use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Peer libraries supplied by the host page: `(import name, global name)`.
///
/// The last entry is referenced by its global name under every module
/// system; the others use their package name for CommonJS and AMD.
const PEER_DEPENDENCIES: [(&str, &str); 6] = [
    ("react", "React"),
    ("prop-types", "PropTypes"),
    ("react-dom", "ReactDOM"),
    ("react-dom/server", "ReactDOMServer"),
    ("antd", "antd"),
    ("moment", "moment"),
];

const FORM_CORE: (&str, &str) = ("scalable-form-core", "ScalableFormCore");

/// Import name → how the host environment provides it
pub type Externals = IndexMap<String, ExternalDependency>;

/// How an excluded module is resolved under each module system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDependency {
    /// Global variable (script-tag consumers)
    pub root: String,
    /// `module.exports` style CommonJS
    pub commonjs2: String,
    /// `exports` style CommonJS
    pub commonjs: String,
    pub amd: String,
}

impl ExternalDependency {
    /// Global `root`, and `module` for both CommonJS flavours and AMD.
    pub fn new(root: impl Into<String>, module: impl Into<String>) -> Self {
        let module = module.into();
        Self {
            root: root.into(),
            commonjs2: module.clone(),
            commonjs: module.clone(),
            amd: module,
        }
    }

    /// All four aliases, in `root, commonjs2, commonjs, amd` order.
    pub fn aliases(&self) -> [&str; 4] {
        [&self.root, &self.commonjs2, &self.commonjs, &self.amd]
    }
}

/// The fixed peer-dependency table.
pub fn peer_externals() -> Externals {
    let mut externals: Externals = PEER_DEPENDENCIES
        .iter()
        .map(|&(module, global)| (module.to_string(), ExternalDependency::new(global, module)))
        .collect();

    let (module, global) = FORM_CORE;
    externals.insert(module.to_string(), ExternalDependency::new(global, global));
    externals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_peers_in_declaration_order() {
        let externals = peer_externals();
        let keys: Vec<&str> = externals.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "react",
                "prop-types",
                "react-dom",
                "react-dom/server",
                "antd",
                "moment",
                "scalable-form-core",
            ]
        );
    }

    #[test]
    fn package_peers_use_module_name_for_loaders() {
        let externals = peer_externals();
        let react_dom = &externals["react-dom/server"];
        assert_eq!(
            react_dom.aliases(),
            ["ReactDOMServer", "react-dom/server", "react-dom/server", "react-dom/server"]
        );
    }

    #[test]
    fn form_core_uses_global_name_everywhere() {
        let externals = peer_externals();
        let core = &externals["scalable-form-core"];
        assert!(core.aliases().iter().all(|alias| *alias == "ScalableFormCore"));
    }
}
