//! Plot types placed inside an axis.
//!
//! [`Plot`] is the closed set of things an [`Axis`](crate::axis::Axis) can
//! hold. Each variant renders one directive (or verbatim code).

mod coordinate;
mod raw;
mod scatter;
mod step;

pub use coordinate::CoordinatePlot;
pub use raw::RawTex;
pub use scatter::{ScatterPlot, SCATTER_MODE};
pub use step::{step_outline, StepOutline, StepPlot, MIN_STEP_POINTS};

use crate::coordinates::Coordinates;
use crate::options::Options;
use std::fmt;

/// Any element that can be added to an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    /// Verbatim TeX.
    Raw(RawTex),
    /// `\addplot` with inline coordinates.
    Coordinates(CoordinatePlot),
    /// Marks-only plot coloured by meta values.
    Scatter(ScatterPlot),
    /// Filled step region at a constant y level.
    Step(StepPlot),
}

impl Plot {
    /// Short name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Raw(_) => "RawTex",
            Self::Coordinates(_) => "CoordinatePlot",
            Self::Scatter(_) => "ScatterPlot",
            Self::Step(_) => "StepPlot",
        }
    }

    /// The coordinate series, if the variant has one.
    #[must_use]
    pub fn coordinates(&self) -> Option<&Coordinates> {
        match self {
            Self::Raw(_) => None,
            Self::Coordinates(plot) => Some(plot.coordinates()),
            Self::Scatter(plot) => Some(plot.coordinates()),
            Self::Step(plot) => Some(plot.as_coordinate_plot().coordinates()),
        }
    }

    /// The legend entry, if any.
    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        match self {
            Self::Raw(_) => None,
            Self::Coordinates(plot) => plot.legend(),
            Self::Scatter(plot) => plot.legend(),
            Self::Step(plot) => plot.as_coordinate_plot().legend(),
        }
    }

    /// Render the plot's TeX.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(plot) => fmt::Display::fmt(plot, f),
            Self::Coordinates(plot) => fmt::Display::fmt(plot, f),
            Self::Scatter(plot) => fmt::Display::fmt(plot, f),
            Self::Step(plot) => fmt::Display::fmt(plot, f),
        }
    }
}

impl From<RawTex> for Plot {
    fn from(plot: RawTex) -> Self {
        Self::Raw(plot)
    }
}

impl From<CoordinatePlot> for Plot {
    fn from(plot: CoordinatePlot) -> Self {
        Self::Coordinates(plot)
    }
}

impl From<ScatterPlot> for Plot {
    fn from(plot: ScatterPlot) -> Self {
        Self::Scatter(plot)
    }
}

impl From<StepPlot> for Plot {
    fn from(plot: StepPlot) -> Self {
        Self::Step(plot)
    }
}

/// Write `\addplot[3][+][options] coordinates {...};` plus an optional
/// legend entry on the following line.
fn write_addplot(
    f: &mut fmt::Formatter<'_>,
    three_d: bool,
    use_cycle: bool,
    options: &Options,
    coordinates: &Coordinates,
    label: Option<&str>,
) -> fmt::Result {
    f.write_str("\\addplot")?;
    if three_d {
        f.write_str("3")?;
    }
    if use_cycle {
        f.write_str("+")?;
    }
    write!(f, "[{options}] coordinates {coordinates};")?;
    if let Some(label) = label {
        write!(f, "\n\\addlegendentry{{{label}}}")?;
    }
    Ok(())
}
