//! # pgfplots
//!
//! Build PGFPlots figures as a typed object graph and render them to LaTeX.
//!
//! A [`Document`](document::Document) holds [`Figure`](figure::Figure)s, each
//! figure holds [`Axis`](axis::Axis) environments and each axis holds
//! [`Plot`](plots::Plot)s. Rendering walks the tree child-first and returns
//! the TeX source; nothing is written until the caller asks for it.
//!
//! ## Quick Start
//!
//! ```rust
//! use pgfplots::prelude::*;
//!
//! # fn main() -> pgfplots::Result<()> {
//! let mut axis = Axis::new().option("xlabel", "Time").flag("grid");
//! axis.add_plot(
//!     CoordinatePlot::from_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], Channel::Absent)?
//!         .label("growth"),
//! );
//! axis.add_plot(
//!     StepPlot::from_data(&[0.0, 1.0, 2.0], 1.0, &[3.0, 2.0, 1.0])?.option("fill", "blue"),
//! );
//!
//! let mut figure = Figure::new().with_note("generated");
//! figure.add_axis(axis);
//!
//! let mut doc = Document::new();
//! doc.add_figure(figure);
//! let tex = doc.render();
//! assert!(tex.contains("\\addlegendentry{growth}"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: load [`DocumentConfig`](config::DocumentConfig) from YAML
//!
//! ## Logging
//!
//! Construction and file output emit [`tracing`] events. Install a
//! subscriber in the application to see them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Data Modules
// ============================================================================

/// TeX escaping for annotation text.
pub mod escape;

/// Ordered option and package tables.
pub mod options;

/// Coordinate series.
pub mod coordinates;

/// Plot variants, including the filled step outline.
pub mod plots;

// ============================================================================
// Container Modules
// ============================================================================

/// The `axis` environment.
pub mod axis;

/// The `tikzpicture` environment.
pub mod figure;

/// The top-level `standalone` document.
pub mod document;

/// Dynamically typed tree nodes.
pub mod node;

/// Document defaults.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pgfplots operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use pgfplots::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::config::DocumentConfig;
    pub use crate::coordinates::{Channel, Coordinate, Coordinates};
    pub use crate::document::Document;
    pub use crate::error::{Error, Result};
    pub use crate::escape::escape_note;
    pub use crate::figure::Figure;
    pub use crate::node::Node;
    pub use crate::options::{Options, Packages};
    pub use crate::plots::{
        step_outline, CoordinatePlot, Plot, RawTex, ScatterPlot, StepOutline, StepPlot,
    };
}
