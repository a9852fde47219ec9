//! `automap.toml` loading.
//!
//! ```toml
//! [markers]
//! nullable = ["CheckForNull"]
//! name_attribute = ["JsonProperty"]
//! value_attribute = ["FormField"]
//! map_key = ["StoreKey"]
//!
//! [template]
//! path = "templates/custom.java.j2"
//! ```
//!
//! Every section is optional. Marker names listed here are added to the
//! built-in ones, never substituted for them.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Default config file name looked up by [`Config::discover`].
pub const CONFIG_FILE: &str = "automap.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub markers: MarkerConfig,
    pub template: TemplateConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&source)?;
        config.template.anchor(path.parent());

        Ok(config)
    }

    /// Load `automap.toml` from `dir` if present, otherwise the defaults.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);

        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

///
/// MarkerConfig
///
/// Extra marker simple names per role.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    /// Markers re-emitted as the property's nullability marker.
    pub nullable: Vec<String>,

    /// Key-bearing markers whose key is the `name` attribute.
    pub name_attribute: Vec<String>,

    /// Key-bearing markers whose key is the `value` attribute.
    pub value_attribute: Vec<String>,

    /// Markers whose `value` overrides every other key source.
    pub map_key: Vec<String>,
}

///
/// TemplateConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template replacing the embedded one. Relative paths resolve against
    /// the directory of the config file they were read from.
    pub path: Option<PathBuf>,
}

impl TemplateConfig {
    fn anchor(&mut self, base: Option<&Path>) {
        if let (Some(path), Some(base)) = (&self.path, base)
            && path.is_relative()
        {
            self.path = Some(base.join(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.template.path.is_none());
    }

    #[test]
    fn marker_section_is_read() {
        let config = Config::from_toml_str(
            r#"
            [markers]
            nullable = ["CheckForNull"]
            value_attribute = ["FormField"]
            "#,
        )
        .unwrap();

        assert_eq!(config.markers.nullable, vec!["CheckForNull"]);
        assert_eq!(config.markers.value_attribute, vec!["FormField"]);
        assert!(config.markers.map_key.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[markers]\nnulable = []\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn relative_template_path_is_anchored() {
        let mut template = TemplateConfig {
            path: Some(PathBuf::from("t.java.j2")),
        };
        template.anchor(Some(Path::new("/etc/automap")));

        assert_eq!(template.path, Some(PathBuf::from("/etc/automap/t.java.j2")));
    }

    #[test]
    fn discover_without_file_is_default() {
        let dir = std::env::temp_dir().join("automap-config-discover-none");
        let config = Config::discover(&dir).unwrap();

        assert_eq!(config, Config::default());
    }
}
