//! `\addplot` with inline coordinates.

use super::write_addplot;
use crate::coordinates::{Channel, Coordinates};
use crate::error::Result;
use crate::options::Options;
use std::fmt;
use tracing::debug;

/// A plot of inline coordinates.
///
/// The directive becomes `\addplot3` when the series carries z values and
/// gains a `+` while the plot advances the axis cycle list (the default).
///
/// ```
/// use pgfplots::coordinates::Channel;
/// use pgfplots::plots::CoordinatePlot;
///
/// let plot = CoordinatePlot::from_data(&[0.0, 1.0], &[1.0, 2.0], Channel::Absent)
///     .unwrap()
///     .option("color", "red")
///     .label("data");
/// assert_eq!(
///     plot.render(),
///     "\\addplot+[color={red}] coordinates {(0,1) (1,2)};\n\\addlegendentry{data}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatePlot {
    coordinates: Coordinates,
    options: Options,
    use_cycle: bool,
    label: Option<String>,
    three_d: bool,
}

impl CoordinatePlot {
    /// Wrap an existing coordinate series.
    #[must_use]
    pub fn new(coordinates: Coordinates) -> Self {
        let three_d = coordinates.points().iter().any(|p| p.z.is_some());
        Self {
            coordinates,
            options: Options::new(),
            use_cycle: true,
            label: None,
            three_d,
        }
    }

    /// Build from x, y and an optional z channel.
    ///
    /// # Errors
    ///
    /// Returns an error if y or a per-point z does not match the length of x.
    pub fn from_data(x: &[f64], y: &[f64], z: impl Into<Channel>) -> Result<Self> {
        let z = z.into();
        let three_d = !z.is_absent();
        let coordinates = Coordinates::new(x, y, z, Channel::Absent)?;
        debug!(points = coordinates.len(), three_d, "built coordinate plot");
        Ok(Self {
            three_d,
            ..Self::new(coordinates)
        })
    }

    /// Replace the `\addplot` options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set a single `key={value}` option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Set a single flag option.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.options.insert_flag(key);
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

    /// The `\addplot` options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable access to the `\addplot` options.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// The legend entry, if any.
    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the plot renders as `\addplot3`.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.three_d
    }

    /// Render the `\addplot` directive.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CoordinatePlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_addplot(
            f,
            self.three_d,
            self.use_cycle,
            &self.options,
            &self.coordinates,
            self.label.as_deref(),
        )
    }
}
