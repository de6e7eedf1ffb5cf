pub mod builder;
pub mod bundle;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod render;
pub mod settings;
pub mod validation;

// Re-export main types
pub use builder::*;
pub use bundle::*;
pub use error::*;
pub use mode::*;
pub use settings::*;

// Re-export discovery, rendering and validation
pub use discovery::ConfigDiscovery;
pub use render::{render, render_json, render_module, RenderFormat};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
