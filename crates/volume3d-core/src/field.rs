//! Regular 3D scalar fields.
//!
//! A [`ScalarField`] pairs three coordinate axes (not necessarily evenly spaced)
//! with a flattened value array. The x index varies fastest, then y, then z.

use glam::DVec3;

use crate::error::{Result, Volume3dError};

/// Converts 3D grid coordinates to a 1D array index.
/// Layout: `i + width * j + width * height * k`
#[inline]
#[must_use]
pub fn flatten_index(width: usize, height: usize, i: usize, j: usize, k: usize) -> usize {
    i + width * j + width * height * k
}

/// A validated scalar field on a rectilinear grid.
///
/// Construction checks the shape, so every `(i, j, k)` inside
/// [`ScalarField::dims`] addresses a valid sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    volume: Vec<f64>,
}

impl ScalarField {
    /// Creates a new scalar field.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Axis coordinates (lengths W, H, D)
    /// * `volume` - Sample values, `W * H * D` of them, in x-fastest order
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, volume: Vec<f64>) -> Result<Self> {
        for (axis, coords) in [("x", &x), ("y", &y), ("z", &z)] {
            if coords.is_empty() {
                return Err(Volume3dError::EmptyAxis(axis));
            }
        }

        let expected = x
            .len()
            .checked_mul(y.len())
            .and_then(|n| n.checked_mul(z.len()))
            .ok_or(Volume3dError::TooManySamples(usize::MAX))?;
        if volume.len() != expected {
            return Err(Volume3dError::SizeMismatch {
                expected,
                actual: volume.len(),
            });
        }
        // Triangle indices are u32, so the last sample must fit.
        if expected - 1 > u32::MAX as usize {
            return Err(Volume3dError::TooManySamples(expected));
        }

        Ok(Self { x, y, z, volume })
    }

    /// Returns the grid dimensions `(width, height, depth)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.x.len(), self.y.len(), self.z.len())
    }

    /// Returns the total number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.volume.len()
    }

    /// Always false for a constructed field; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volume.is_empty()
    }

    /// Flattens a 3D sample index to a linear index.
    #[must_use]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        flatten_index(self.x.len(), self.y.len(), i, j, k)
    }

    /// Returns the data-space position of the sample at `(i, j, k)`.
    #[must_use]
    pub fn position(&self, i: usize, j: usize, k: usize) -> DVec3 {
        DVec3::new(self.x[i], self.y[j], self.z[k])
    }

    /// Returns the value of the sample at `(i, j, k)`.
    #[must_use]
    pub fn value(&self, i: usize, j: usize, k: usize) -> f64 {
        self.volume[self.index(i, j, k)]
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Returns the flattened sample values.
    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    /// Returns the minimum and maximum sample value. NaN samples are skipped.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.volume.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.volume.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// One grid sample after classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Data-space position `(x[i], y[j], z[k])`.
    pub position: DVec3,
    /// The scalar value at this sample.
    pub value: f64,
    /// Whether the value falls inside the inclusion interval.
    pub included: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube(volume: Vec<f64>) -> Result<ScalarField> {
        ScalarField::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0], volume)
    }

    #[test]
    fn test_flatten_index_is_x_fastest() {
        assert_eq!(flatten_index(3, 4, 0, 0, 0), 0);
        assert_eq!(flatten_index(3, 4, 1, 0, 0), 1);
        assert_eq!(flatten_index(3, 4, 0, 1, 0), 3);
        assert_eq!(flatten_index(3, 4, 0, 0, 1), 12);
        assert_eq!(flatten_index(3, 4, 2, 3, 1), 2 + 9 + 12);
    }

    #[test]
    fn test_new_rejects_wrong_volume_length() {
        let err = unit_cube(vec![0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            Volume3dError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_new_rejects_empty_axis() {
        let err = ScalarField::new(vec![0.0], vec![], vec![0.0], vec![]).unwrap_err();
        assert!(matches!(err, Volume3dError::EmptyAxis("y")));
    }

    #[test]
    fn test_position_and_value() {
        let field = ScalarField::new(
            vec![0.0, 2.0, 5.0],
            vec![-1.0, 1.0],
            vec![10.0],
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        )
        .unwrap();
        assert_eq!(field.dims(), (3, 2, 1));
        assert_eq!(field.position(2, 1, 0), DVec3::new(5.0, 1.0, 10.0));
        assert_eq!(field.value(2, 1, 0), 5.0);
        assert_eq!(field.value(1, 0, 0), 1.0);
    }

    #[test]
    fn test_value_range_skips_nan() {
        let field = unit_cube(vec![3.0, f64::NAN, -2.0, 0.0, 0.0, 0.0, 0.0, 9.5]).unwrap();
        assert_eq!(field.value_range(), (-2.0, 9.5));
    }
}
