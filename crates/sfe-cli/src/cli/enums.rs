use clap::ValueEnum;
use sfe_config::RenderFormat;

/// Rendered configuration format
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Format {
    /// Plain JSON record
    ///
    /// Useful for inspecting or diffing the configuration. Plugins appear as
    /// `{ "plugin": <constructor>, "options": ... }` objects.
    #[value(name = "json")]
    Json,

    /// CommonJS config module
    ///
    /// `module.exports = { ... }` with plugin constructor calls and regex
    /// rule tests, loadable by the bundler as-is.
    #[value(name = "module", alias = "js")]
    Module,
}

impl From<Format> for RenderFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => RenderFormat::Json,
            Format::Module => RenderFormat::Module,
        }
    }
}
