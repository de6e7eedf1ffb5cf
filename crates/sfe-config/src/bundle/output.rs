use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle::types::LibraryTarget;

/// Global name the library bundle is published under
pub const LIBRARY_NAME: &str = "ScalableFormEditor";

/// Directory (relative to the project root) bundles are written to
pub const OUTPUT_DIR: &str = "build";

/// Source-map module URL: `<library>:///[resourcePath]?[hash]`
pub const DEVTOOL_MODULE_TEMPLATE: &str = "ScalableFormEditor:///[resourcePath]?[hash]";

/// Output options of the bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    pub public_path: String,

    /// Template for module paths in source maps
    pub devtool_module_filename_template: String,

    /// Template used when the primary one produces duplicates
    pub devtool_fallback_module_filename_template: String,

    pub library: Vec<String>,

    pub library_target: LibraryTarget,

    /// Absolute (or root-relative) output directory
    pub path: PathBuf,

    pub filename: String,
}

impl OutputDescriptor {
    /// UMD library output under `<root>/build`.
    pub fn library(root: &Path) -> Self {
        Self {
            public_path: "/".to_string(),
            devtool_module_filename_template: DEVTOOL_MODULE_TEMPLATE.to_string(),
            devtool_fallback_module_filename_template: DEVTOOL_MODULE_TEMPLATE.to_string(),
            library: vec![LIBRARY_NAME.to_string()],
            library_target: LibraryTarget::Umd,
            path: root.join(OUTPUT_DIR),
            filename: "[name].js".to_string(),
        }
    }

    /// Library name as a dotted global path (`["A", "B"]` → `A.B`).
    pub fn library_name(&self) -> String {
        self.library.join(".")
    }
}
