//! Coordinate series for `\addplot ... coordinates {...}`.

use crate::error::{Error, Result};
use std::fmt;

// ============================================================================
// Channel
// ============================================================================

/// An optional per-point input: absent, one value broadcast to every point,
/// or one value per point.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Channel {
    /// No value for any point.
    #[default]
    Absent,
    /// The same value for every point.
    Scalar(f64),
    /// One value per point; must match the length of x.
    Series(Vec<f64>),
}

impl Channel {
    /// Whether the channel carries no values.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Expand to exactly `len` per-point values.
    fn expand(self, name: &'static str, len: usize) -> Result<Vec<Option<f64>>> {
        match self {
            Self::Absent => Ok(vec![None; len]),
            Self::Scalar(value) => Ok(vec![Some(value); len]),
            Self::Series(values) => {
                if values.len() != len {
                    return Err(Error::DataLengthMismatch {
                        channel: name,
                        expected: len,
                        actual: values.len(),
                    });
                }
                Ok(values.into_iter().map(Some).collect())
            }
        }
    }
}

impl From<f64> for Channel {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Option<f64>> for Channel {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }
}

impl From<Vec<f64>> for Channel {
    fn from(values: Vec<f64>) -> Self {
        Self::Series(values)
    }
}

impl From<&[f64]> for Channel {
    fn from(values: &[f64]) -> Self {
        Self::Series(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Channel {
    fn from(values: [f64; N]) -> Self {
        Self::Series(values.to_vec())
    }
}

// ============================================================================
// Coordinate
// ============================================================================

/// A single point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Optional z coordinate.
    pub z: Option<f64>,
    /// Optional point meta value (drives scatter colouring).
    pub meta: Option<f64>,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}", self.x, self.y)?;
        if let Some(z) = self.z {
            write!(f, ",{z}")?;
        }
        f.write_str(")")?;
        if let Some(meta) = self.meta {
            write!(f, " [{meta}]")?;
        }
        Ok(())
    }
}

// ============================================================================
// Coordinates
// ============================================================================

/// An immutable, ordered series of points.
///
/// ```
/// use pgfplots::coordinates::{Channel, Coordinates};
///
/// let c = Coordinates::new(&[0.0, 1.0], &[2.0, 3.0], 5.0, Channel::Absent).unwrap();
/// assert_eq!(c.render(), "{(0,2,5) (1,3,5)}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    points: Vec<Coordinate>,
}

impl Coordinates {
    /// Build a series from x and y plus optional z and meta channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if y, or a per-point z or meta
    /// channel, does not have one entry per x value.
    pub fn new(
        x: &[f64],
        y: &[f64],
        z: impl Into<Channel>,
        meta: impl Into<Channel>,
    ) -> Result<Self> {
        if y.len() != x.len() {
            return Err(Error::DataLengthMismatch {
                channel: "y",
                expected: x.len(),
                actual: y.len(),
            });
        }
        let z = z.into().expand("z", x.len())?;
        let meta = meta.into().expand("meta", x.len())?;

        let points = x
            .iter()
            .zip(y)
            .zip(z.into_iter().zip(meta))
            .map(|((&x, &y), (z, meta))| Coordinate { x, y, z, meta })
            .collect();

        Ok(Self { points })
    }

    /// Build a plain 2-D series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if x and y differ in length.
    pub fn xy(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(x, y, Channel::Absent, Channel::Absent)
    }

    /// Points in input order.
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Render as `{(x,y[,z]) [meta] ...}`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_xy_render() {
        let c = Coordinates::xy(&[0.0, 1.0, 2.0], &[0.0, 0.5, 4.0]).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.render(), "{(0,0) (1,0.5) (2,4)}");
    }

    #[test]
    fn test_coordinates_with_z_series() {
        let c = Coordinates::new(&[1.0, 2.0], &[3.0, 4.0], vec![5.0, 6.0], Channel::Absent)
            .unwrap();
        assert_eq!(c.render(), "{(1,3,5) (2,4,6)}");
    }

    #[test]
    fn test_coordinates_meta_broadcast() {
        let c = Coordinates::new(&[1.0, 2.0], &[3.0, 4.0], Channel::Absent, 0.25).unwrap();
        assert_eq!(c.render(), "{(1,3) [0.25] (2,4) [0.25]}");
        assert!(c.points().iter().all(|p| p.z.is_none()));
    }

    #[test]
    fn test_coordinates_z_and_meta() {
        let c = Coordinates::new(&[1.0], &[2.0], 3.0, [7.0]).unwrap();
        assert_eq!(c.render(), "{(1,2,3) [7]}");
    }

    #[test]
    fn test_coordinates_y_length_mismatch() {
        let err = Coordinates::xy(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataLengthMismatch {
                channel: "y",
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_coordinates_z_length_mismatch() {
        let err = Coordinates::new(&[1.0, 2.0], &[1.0, 2.0], vec![1.0], Channel::Absent)
            .unwrap_err();
        assert!(matches!(err, Error::DataLengthMismatch { channel: "z", .. }));
    }

    #[test]
    fn test_coordinates_meta_length_mismatch() {
        let err = Coordinates::new(&[1.0], &[1.0], Channel::Absent, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::DataLengthMismatch { channel: "meta", .. }));
    }

    #[test]
    fn test_coordinates_empty() {
        let c = Coordinates::xy(&[], &[]).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.render(), "{}");
    }

    #[test]
    fn test_channel_conversions() {
        assert!(Channel::from(None::<f64>).is_absent());
        assert_eq!(Channel::from(Some(2.0)), Channel::Scalar(2.0));
        assert_eq!(Channel::from(&[1.0, 2.0][..]), Channel::Series(vec![1.0, 2.0]));
    }

    #[test]
    fn test_negative_and_fractional_values() {
        let c = Coordinates::xy(&[-1.5], &[1e-3]).unwrap();
        assert_eq!(c.render(), "{(-1.5,0.001)}");
    }
}
