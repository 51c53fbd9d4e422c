//! Dynamically typed tree nodes.
//!
//! The typed `add_*` methods on containers cannot be misused. [`Node`] exists
//! for callers that assemble a tree from heterogeneous parts, where the
//! container has to check the child's kind when it is pushed.

use crate::axis::Axis;
use crate::figure::Figure;
use crate::plots::{CoordinatePlot, Plot, RawTex, ScatterPlot, StepPlot};

/// Any element that can be placed under a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A `tikzpicture`.
    Figure(Figure),
    /// An `axis` environment.
    Axis(Axis),
    /// A plot or raw TeX inside an axis.
    Plot(Plot),
}

impl Node {
    /// Short name of the node kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Figure(_) => "Figure",
            Self::Axis(_) => "Axis",
            Self::Plot(_) => "Plot",
        }
    }
}

impl From<Figure> for Node {
    fn from(figure: Figure) -> Self {
        Self::Figure(figure)
    }
}

impl From<Axis> for Node {
    fn from(axis: Axis) -> Self {
        Self::Axis(axis)
    }
}

impl From<Plot> for Node {
    fn from(plot: Plot) -> Self {
        Self::Plot(plot)
    }
}

macro_rules! plot_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(plot: $ty) -> Self {
                    Self::Plot(plot.into())
                }
            }
        )*
    };
}

plot_node!(RawTex, CoordinatePlot, ScatterPlot, StepPlot);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kinds() {
        assert_eq!(Node::from(Figure::new()).kind(), "Figure");
        assert_eq!(Node::from(Axis::new()).kind(), "Axis");
        assert_eq!(Node::from(RawTex::new("x")).kind(), "Plot");
    }
}
