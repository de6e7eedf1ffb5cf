use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Source map strategy handed to the bundler's `devtool` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevtoolStrategy {
    /// No source maps (`devtool: false`)
    None,
    /// Source map embedded in the bundle as a data URL
    #[default]
    Inline,
    /// Full source map written to a separate `.map` file
    ExternalProduction,
}

impl DevtoolStrategy {
    /// The bundler's devtool name, `None` when source maps are disabled.
    pub const fn as_devtool(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Inline => Some("inline-source-map"),
            Self::ExternalProduction => Some("source-map"),
        }
    }
}

impl Serialize for DevtoolStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_devtool() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for DevtoolStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(Self::None),
            Raw::Name(name) => match name.as_str() {
                "inline-source-map" => Ok(Self::Inline),
                "source-map" => Ok(Self::ExternalProduction),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["inline-source-map", "source-map"],
                )),
            },
            Raw::Flag(true) => Err(serde::de::Error::custom(
                "devtool must be `false` or a source map strategy name",
            )),
        }
    }
}

/// Environment the bundle is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Browser environment
    #[default]
    Web,
}

/// Module wrapper the library bundle is emitted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// Universal module definition: global, CommonJS and AMD in one file
    #[default]
    Umd,
}
