//! The pgfplots `axis` environment.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::options::Options;
use crate::plots::Plot;
use std::fmt;

/// An `axis` environment holding plots in drawing order.
///
/// ```
/// use pgfplots::axis::Axis;
/// use pgfplots::plots::RawTex;
///
/// let mut axis = Axis::new().option("xmin", 0);
/// axis.add_plot(RawTex::new(r"\legend{}"));
/// assert_eq!(axis.render(), "\n\\begin{axis}[xmin={0}]\n\\legend{}\n\\end{axis}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    options: Options,
    plots: Vec<Plot>,
}

impl Axis {
    /// Create an axis without options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an axis with the given environment options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            plots: Vec::new(),
        }
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

    /// Append a plot. Later plots are drawn on top.
    pub fn add_plot(&mut self, plot: impl Into<Plot>) {
        self.plots.push(plot.into());
    }

    /// Append a node, which must be a plot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedNode`] for any other node; the axis is left
    /// unchanged.
    pub fn push(&mut self, node: impl Into<Node>) -> Result<()> {
        match node.into() {
            Node::Plot(plot) => {
                self.plots.push(plot);
                Ok(())
            }
            other => Err(Error::UnexpectedNode {
                container: "Axis",
                expected: "Plot",
                found: other.kind(),
            }),
        }
    }

    /// Plots in drawing order.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// The environment options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable access to the environment options.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render the environment.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\\begin{{axis}}[{}]\n", self.options)?;
        for (i, plot) in self.plots.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{plot}")?;
        }
        f.write_str("\n\\end{axis}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Channel;
    use crate::figure::Figure;
    use crate::plots::{CoordinatePlot, RawTex};

    #[test]
    fn test_empty_axis() {
        assert_eq!(Axis::new().render(), "\n\\begin{axis}[]\n\n\\end{axis}");
    }

    #[test]
    fn test_axis_plots_in_insertion_order() {
        let mut axis = Axis::new();
        axis.add_plot(RawTex::new("first"));
        axis.add_plot(RawTex::new("second"));
        assert_eq!(axis.plots().len(), 2);
        assert_eq!(
            axis.render(),
            "\n\\begin{axis}[]\nfirst\nsecond\n\\end{axis}"
        );
    }

    #[test]
    fn test_axis_push_plot() {
        let mut axis = Axis::new();
        let plot = CoordinatePlot::from_data(&[0.0], &[1.0], Channel::Absent).unwrap();
        axis.push(plot).unwrap();
        assert_eq!(axis.plots()[0].kind(), "CoordinatePlot");
    }

    #[test]
    fn test_axis_rejects_non_plot() {
        let mut axis = Axis::new();
        axis.add_plot(RawTex::new("kept"));

        let err = axis.push(Figure::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedNode {
                container: "Axis",
                found: "Figure",
                ..
            }
        ));
        assert!(axis.push(Axis::new()).is_err());
        assert_eq!(axis.plots().len(), 1);
    }

    #[test]
    fn test_axis_options() {
        let mut axis = Axis::with_options(Options::new().with("xlabel", "X").flag("grid"));
        axis.options_mut().insert("ymax", 3);
        assert_eq!(axis.options().render(), "xlabel={X},grid,ymax={3}");
    }
}
