//! Filled step plots held at a constant y level.
//!
//! A step function of z over x is turned into the closed outline of a
//! polygon so that `fill` draws one rectangle per input point. Each input
//! point becomes a step centred on its x value; the step edges sit halfway
//! between neighbouring x values and the outline starts and ends on z = 0.

use super::coordinate::CoordinatePlot;
use crate::coordinates::{Channel, Coordinates};
use crate::error::{Error, Result};
use crate::options::Options;
use std::fmt;
use tracing::debug;

/// Minimum number of input points for a step outline.
pub const MIN_STEP_POINTS: usize = 2;

/// Vertex sequences of a step outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutline {
    /// X values of the outline vertices.
    pub x: Vec<f64>,
    /// Y values (the constant level).
    pub y: Vec<f64>,
    /// Z values of the outline vertices.
    pub z: Vec<f64>,
}

impl StepOutline {
    /// Number of outline vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the outline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Convert a step function of `z` over `x` at a fixed `level` into the
/// doubled-vertex outline of a filled step region.
///
/// For `n` input points the outline has `2n + 2` vertices: a rise from the
/// baseline at the first x, one vertical edge at each midpoint between
/// neighbours, and a drop back to the baseline half a step past the last x.
///
/// # Errors
///
/// Returns [`Error::DataLengthMismatch`] if `x` and `z` differ in length and
/// [`Error::InsufficientPoints`] for fewer than two points, where no step
/// width can be derived.
///
/// ```
/// use pgfplots::plots::step_outline;
///
/// let outline = step_outline(&[0.0, 1.0], 3.0, &[4.0, 5.0]).unwrap();
/// assert_eq!(outline.x, vec![0.0, 0.0, 0.5, 0.5, 1.5, 1.5]);
/// assert_eq!(outline.z, vec![0.0, 4.0, 4.0, 5.0, 5.0, 0.0]);
/// ```
pub fn step_outline(x: &[f64], level: f64, z: &[f64]) -> Result<StepOutline> {
    if x.len() != z.len() {
        return Err(Error::DataLengthMismatch {
            channel: "z",
            expected: x.len(),
            actual: z.len(),
        });
    }
    if x.len() < MIN_STEP_POINTS {
        return Err(Error::InsufficientPoints {
            required: MIN_STEP_POINTS,
            actual: x.len(),
        });
    }

    let capacity = 2 * x.len() + 2;
    let mut out_x = Vec::with_capacity(capacity);
    let mut out_z = Vec::with_capacity(capacity);

    out_x.extend([x[0], x[0]]);
    out_z.extend([0.0, z[0]]);

    let mut half = 0.0;
    for (xs, zs) in x.windows(2).zip(z.windows(2)) {
        half = (xs[1] - xs[0]) / 2.0;
        let edge = xs[0] + half;
        out_x.extend([edge, edge]);
        out_z.extend([zs[0], zs[1]]);
    }

    let last_x = x[x.len() - 1];
    let last_z = z[z.len() - 1];
    let closing = last_x + half;
    out_x.extend([closing, closing]);
    out_z.extend([last_z, 0.0]);

    debug!(
        input_points = x.len(),
        outline_points = out_x.len(),
        level,
        "built step outline"
    );

    Ok(StepOutline {
        y: vec![level; out_x.len()],
        x: out_x,
        z: out_z,
    })
}

/// A filled step region inside a 3-D axis, drawn as `\addplot3`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepPlot {
    plot: CoordinatePlot,
}

impl StepPlot {
    /// Build a step plot of `z` over `x` held at y = `level`.
    ///
    /// # Errors
    ///
    /// See [`step_outline`].
    pub fn from_data(x: &[f64], level: f64, z: &[f64]) -> Result<Self> {
        let outline = step_outline(x, level, z)?;
        let coordinates = Coordinates::new(
            &outline.x,
            &outline.y,
            outline.z.as_slice(),
            Channel::Absent,
        )?;
        Ok(Self {
            plot: CoordinatePlot::new(coordinates),
        })
    }

    /// Replace the `\addplot3` options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.plot = self.plot.with_options(options);
        self
    }

    /// Set a single `key={value}` option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.plot = self.plot.option(key, value);
        self
    }

    /// Set a single flag option.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.plot = self.plot.flag(key);
        self
    }

    /// Whether to advance the cycle list (`\addplot3+`).
    #[must_use]
    pub fn use_cycle(mut self, enabled: bool) -> Self {
        self.plot = self.plot.use_cycle(enabled);
        self
    }

    /// Add a legend entry.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.plot = self.plot.label(label);
        self
    }

    /// The generated outline, read back from the plot's coordinates.
    #[must_use]
    pub fn outline(&self) -> StepOutline {
        let points = self.plot.coordinates().points();
        StepOutline {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z.unwrap_or(0.0)).collect(),
        }
    }

    /// The underlying coordinate plot.
    #[must_use]
    pub fn as_coordinate_plot(&self) -> &CoordinatePlot {
        &self.plot
    }

    /// Render the `\addplot3` directive.
    #[must_use]
    pub fn render(&self) -> String {
        self.plot.render()
    }
}

impl fmt::Display for StepPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.plot, f)
    }
}

impl From<StepPlot> for CoordinatePlot {
    fn from(step: StepPlot) -> Self {
        step.plot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_outline_three_points() {
        let outline = step_outline(&[0.0, 1.0, 2.0], 5.0, &[10.0, 20.0, 30.0]).unwrap();

        assert_eq!(outline.len(), 8);
        assert_eq!(outline.x, vec![0.0, 0.0, 0.5, 0.5, 1.5, 1.5, 2.5, 2.5]);
        assert_eq!(outline.z, vec![0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 0.0]);
        assert!(outline.y.iter().all(|&y| y == 5.0));
    }

    #[test]
    fn test_step_outline_uneven_spacing() {
        let outline = step_outline(&[0.0, 1.0, 4.0], 0.0, &[1.0, 2.0, 3.0]).unwrap();

        // Closing edge uses the last half-step (1.5) past the last x.
        assert_relative_eq!(outline.x[4], 2.5);
        assert_relative_eq!(outline.x[6], 5.5);
        assert_relative_eq!(outline.x[7], 5.5);
    }

    #[test]
    fn test_step_outline_starts_and_ends_on_baseline() {
        let outline = step_outline(&[2.0, 3.0, 4.0, 5.0], 1.0, &[9.0, 8.0, 7.0, 6.0]).unwrap();
        assert_eq!(outline.z.first(), Some(&0.0));
        assert_eq!(outline.z.last(), Some(&0.0));
        assert_eq!(outline.x[0], outline.x[1]);
    }

    #[test]
    fn test_step_outline_rejects_single_point() {
        let err = step_outline(&[1.0], 0.0, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientPoints {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_step_outline_rejects_empty() {
        let err = step_outline(&[], 0.0, &[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientPoints { actual: 0, .. }));
    }

    #[test]
    fn test_step_outline_length_mismatch() {
        let err = step_outline(&[0.0, 1.0, 2.0], 0.0, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::DataLengthMismatch { channel: "z", .. }));
    }

    #[test]
    fn test_step_plot_renders_addplot3() {
        let plot = StepPlot::from_data(&[0.0, 1.0], 2.0, &[3.0, 4.0])
            .unwrap()
            .option("fill", "green")
            .flag("no markers");

        assert_eq!(
            plot.render(),
            "\\addplot3+[fill={green},no markers] coordinates \
             {(0,2,0) (0,2,3) (0.5,2,3) (0.5,2,4) (1.5,2,4) (1.5,2,0)};"
        );
    }

    #[test]
    fn test_step_plot_outline_matches_coordinates() {
        let plot = StepPlot::from_data(&[0.0, 2.0, 4.0], 1.0, &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            plot.as_coordinate_plot().coordinates().len(),
            plot.outline().len()
        );
    }

    #[test]
    fn test_step_plot_with_options_replaces_table() {
        let plot = StepPlot::from_data(&[0.0, 1.0], 0.0, &[1.0, 2.0])
            .unwrap()
            .option("fill", "red")
            .with_options(Options::new().with("draw", "none"));
        assert_eq!(plot.as_coordinate_plot().options().render(), "draw={none}");
    }

    #[test]
    fn test_step_plot_outline_reads_back_transform() {
        let (x, z) = ([0.0, 1.0, 4.0], [1.5, -2.0, 3.25]);
        let plot = StepPlot::from_data(&x, 7.0, &z).unwrap();
        assert_eq!(plot.outline(), step_outline(&x, 7.0, &z).unwrap());
    }
}
