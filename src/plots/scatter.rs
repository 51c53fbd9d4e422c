//! Scatter plots coloured by per-point meta values.

use super::write_addplot;
use crate::coordinates::{Channel, Coordinates};
use crate::error::Result;
use crate::options::Options;
use std::fmt;
use tracing::debug;

/// Options every scatter plot carries, applied after the caller's options.
pub const SCATTER_MODE: [(&str, Option<&str>); 3] = [
    ("scatter", None),
    ("scatter src", Some("explicit")),
    ("only marks", None),
];

/// A marks-only plot whose points are coloured by explicit meta values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    coordinates: Coordinates,
    options: Options,
    use_cycle: bool,
    label: Option<String>,
}

impl ScatterPlot {
    /// Build from x, y and an optional meta channel.
    ///
    /// # Errors
    ///
    /// Returns an error if y or per-point meta does not match the length of x.
    pub fn from_data(x: &[f64], y: &[f64], meta: impl Into<Channel>) -> Result<Self> {
        let coordinates = Coordinates::new(x, y, Channel::Absent, meta)?;
        debug!(points = coordinates.len(), "built scatter plot");
        Ok(Self {
            coordinates,
            options: with_scatter_mode(Options::new()),
            use_cycle: true,
            label: None,
        })
    }

    /// Replace the caller options. The scatter mode options are re-applied.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = with_scatter_mode(options);
        self
    }

    /// Set a single `key={value}` option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.options = with_scatter_mode(self.options.with(key, value));
        self
    }

    /// Set a single flag option.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.options = with_scatter_mode(self.options.flag(key));
        self
    }

    /// Whether to advance the cycle list (`\addplot+`).
    #[must_use]
    pub fn use_cycle(mut self, enabled: bool) -> Self {
        self.use_cycle = enabled;
        self
    }

    /// Add a legend entry.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The coordinate series.
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// The effective options, scatter mode included.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The legend entry, if any.
    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Render the `\addplot` directive.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScatterPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_addplot(
            f,
            false,
            self.use_cycle,
            &self.options,
            &self.coordinates,
            self.label.as_deref(),
        )
    }
}

fn with_scatter_mode(mut options: Options) -> Options {
    for (key, value) in SCATTER_MODE {
        options.set(key.to_string(), value.map(str::to_string));
    }
    options
}
