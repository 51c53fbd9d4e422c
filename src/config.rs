//! Document defaults.
//!
//! A [`DocumentConfig`] is the explicit starting point of every
//! [`Document`](crate::document::Document). The default loads `pgfplots` and
//! `pdfcomment`, passes `tikz` to the `standalone` class and pins
//! `compat=1.10`.
//!
//! With the `config` feature the defaults can be read from YAML:
//!
//! ```yaml
//! class_options:
//!   tikz: ~
//!   border: 2pt
//! packages:
//!   pgfplots: ~
//!   siunitx: 2021/01/01
//! compat: "1.18"
//! ```
//!
//! Tables present in the file replace the built-in ones; absent keys keep
//! their defaults. `compat` must be a quoted string and fractional table
//! values must be quoted too: YAML reads `1.10` as the float `1.1`, which
//! would silently drop the trailing zero.

use crate::options::{Options, Packages};

/// `compat` level passed to `\pgfplotsset`.
pub const DEFAULT_COMPAT: &str = "1.10";

/// Packages every document loads unless the configuration says otherwise.
pub const DEFAULT_PACKAGES: [&str; 2] = ["pgfplots", "pdfcomment"];

/// Class option flag enabled by default.
pub const DEFAULT_CLASS_FLAG: &str = "tikz";

/// Defaults a document starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Options of `\documentclass[...]{standalone}`.
    pub class_options: Options,
    /// Packages loaded in the preamble.
    pub packages: Packages,
    /// `compat` level for `\pgfplotsset`.
    pub compat: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            class_options: Options::new().flag(DEFAULT_CLASS_FLAG),
            packages: DEFAULT_PACKAGES
                .iter()
                .fold(Packages::new(), |pkgs, name| pkgs.with(*name)),
            compat: DEFAULT_COMPAT.to_string(),
        }
    }
}

impl DocumentConfig {
    /// Use a different `compat` level.
    #[must_use]
    pub fn compat(mut self, compat: impl Into<String>) -> Self {
        self.compat = compat.into();
        self
    }
}

#[cfg(feature = "config")]
mod yaml {
    use super::DocumentConfig;
    use crate::error::{Error, Result};
    use crate::options::{Options, Packages};
    use serde::Deserialize;
    use serde_yaml_ng::{Mapping, Value};
    use std::path::Path;
    use tracing::debug;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RawConfig {
        #[serde(default)]
        class_options: Option<Mapping>,
        #[serde(default)]
        packages: Option<Mapping>,
        #[serde(default)]
        compat: Option<Value>,
    }

    impl DocumentConfig {
        /// Parse defaults from a YAML string.
        ///
        /// # Errors
        ///
        /// Returns [`Error::Config`] for malformed YAML, unknown top-level
        /// keys, non-string table keys, non-scalar or unquoted fractional
        /// values, and a `compat` that is not a string.
        pub fn from_yaml_str(yaml: &str) -> Result<Self> {
            let raw: RawConfig =
                serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
            let mut config = Self::default();

            if let Some(table) = raw.class_options {
                config.class_options = table_entries(&table)?.into_iter().collect::<Options>();
            }
            if let Some(table) = raw.packages {
                config.packages = table_entries(&table)?.into_iter().collect::<Packages>();
            }
            if let Some(compat) = raw.compat {
                config.compat = match compat {
                    Value::String(s) => s,
                    other => {
                        return Err(Error::Config(format!(
                            "compat must be a quoted string, found {other:?}"
                        )));
                    }
                };
            }

            debug!(
                class_options = config.class_options.len(),
                packages = config.packages.len(),
                compat = %config.compat,
                "loaded document config"
            );
            Ok(config)
        }

        /// Read defaults from a YAML file.
        ///
        /// # Errors
        ///
        /// Returns [`Error::Io`] if the file cannot be read, otherwise see
        /// [`DocumentConfig::from_yaml_str`].
        pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let yaml = std::fs::read_to_string(path)?;
            Self::from_yaml_str(&yaml)
        }
    }

    fn table_entries(table: &Mapping) -> Result<Vec<(String, Option<String>)>> {
        table
            .iter()
            .map(|(key, value)| {
                let key = key
                    .as_str()
                    .ok_or_else(|| Error::Config(format!("table key {key:?} is not a string")))?;
                Ok((key.to_string(), scalar(value)?))
            })
            .collect()
    }

    fn scalar(value: &Value) -> Result<Option<String>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Number(n) if n.is_f64() => Err(Error::Config(format!(
                "fractional value {n} must be quoted to keep its digits"
            ))),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(Error::Config(format!("expected a scalar, found {other:?}"))),
        }
    }
}
