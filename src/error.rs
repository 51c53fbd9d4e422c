//! Error types for pgfplots operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A container was handed a child it cannot hold.
    #[error("{container} cannot hold {found}, expected {expected}")]
    UnexpectedNode {
        /// Container receiving the child.
        container: &'static str,
        /// Kind of child the container accepts.
        expected: &'static str,
        /// Kind of child that was supplied.
        found: &'static str,
    },

    /// A coordinate channel does not have one entry per x value.
    #[error("Data length mismatch: x has {expected} elements, {channel} has {actual} elements")]
    DataLengthMismatch {
        /// Name of the offending channel (`y`, `z`, `meta`).
        channel: &'static str,
        /// Length of the x data.
        expected: usize,
        /// Length of the offending channel.
        actual: usize,
    },

    /// Too few points to build a step outline.
    #[error("Step outline needs at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Document configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
