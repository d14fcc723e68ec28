//! 2D reference grids and dense sample lattices.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::{Axis, AxisSpacing};
use crate::error::{NoiseError, NoiseResult};

/// A unit-spaced 2D reference lattice over `[0, rows) x [0, cols)`.
///
/// The grid is a coordinate system, not a sample domain: generators scale it
/// by an octave period to place coarse control nodes, and dense sampling
/// happens on a [`PointField`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    /// Row coordinate of each lattice node
    pub x: Array2<f64>,
    /// Column coordinate of each lattice node
    pub y: Array2<f64>,
}

impl Grid {
    /// Builds a unit-spaced grid for the given shape.
    ///
    /// Fails with `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> NoiseResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(NoiseError::invalid_shape(rows, cols));
        }
        Ok(Self {
            x: Array2::from_shape_fn((rows, cols), |(i, _)| i as f64),
            y: Array2::from_shape_fn((rows, cols), |(_, j)| j as f64),
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }
}

/// A dense 2D sample lattice at sub-unit spacing `1/scale`.
///
/// Positions cover the same extent as a [`Grid`] of the originating shape but
/// at `scale` times the point density. Coordinates follow the grid
/// convention: `x` varies along the first array axis, `y` along the second.
///
/// # Examples
///
/// ```
/// use noise_field_core::PointField;
///
/// let points = PointField::new(8, 8, 4.0).unwrap();
/// assert_eq!(points.shape(), (32, 32));
/// // neighbouring points are 1/scale apart
/// assert!((points.x[[1, 0]] - points.x[[0, 0]] - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointField {
    /// Row coordinate of each sample position
    pub x: Array2<f64>,
    /// Column coordinate of each sample position
    pub y: Array2<f64>,
}

impl PointField {
    /// Builds a point field spanning `[0, rows) x [0, cols)` at spacing
    /// `1/scale`.
    ///
    /// Fails with `InvalidShape` on a zero dimension and `InvalidDomain` when
    /// `scale` is not positive.
    pub fn new(rows: usize, cols: usize, scale: f64) -> NoiseResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(NoiseError::invalid_shape(rows, cols));
        }
        Self::from_extents(rows as f64, cols as f64, scale)
    }

    /// Builds a point field over `[0, rows - 1) x [0, cols - 1)`, staying
    /// short of the final unit-grid node on each axis.
    ///
    /// Both dimensions must be at least 2.
    pub fn inset(rows: usize, cols: usize, scale: f64) -> NoiseResult<Self> {
        if rows < 2 || cols < 2 {
            return Err(NoiseError::invalid_shape(rows, cols));
        }
        Self::from_extents((rows - 1) as f64, (cols - 1) as f64, scale)
    }

    /// Re-derives a smaller point field at `scale * crop_fraction`.
    ///
    /// A field aligned to the uncropped lattice must be truncated to the new
    /// point count along each axis (a leading sub-block, not a re-sample);
    /// see `NoiseField::truncated`.
    pub fn cropped(rows: usize, cols: usize, scale: f64, crop_fraction: f64) -> NoiseResult<Self> {
        if !(crop_fraction > 0.0) || !crop_fraction.is_finite() {
            return Err(NoiseError::invalid_domain(
                "crop_fraction",
                crop_fraction,
                "crop_fraction > 0",
            ));
        }
        Self::new(rows, cols, scale * crop_fraction)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Sample positions along each array axis.
    ///
    /// The 2D coordinate arrays are separable; these are the two underlying
    /// 1D axes.
    pub fn sample_axes(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.x.column(0).to_vec();
        let ys = self.y.row(0).to_vec();
        (xs, ys)
    }

    fn from_extents(x_extent: f64, y_extent: f64, scale: f64) -> NoiseResult<Self> {
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(NoiseError::invalid_domain("scale", scale, "scale > 0"));
        }
        let spacing = 1.0 / scale;
        let xs = Axis::new(0.0, x_extent, AxisSpacing::Increment(spacing))?;
        let ys = Axis::new(0.0, y_extent, AxisSpacing::Increment(spacing))?;
        let (n, m) = (xs.len(), ys.len());
        Ok(Self {
            x: Array2::from_shape_fn((n, m), |(i, _)| xs.positions[i]),
            y: Array2::from_shape_fn((n, m), |(_, j)| ys.positions[j]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_unit_spacing() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.x[[2, 1]], 2.0);
        assert_eq!(grid.y[[2, 1]], 1.0);
        assert_eq!(grid.x[[1, 3]] - grid.x[[0, 3]], 1.0);
    }

    #[test]
    fn grid_rejects_zero_shape() {
        assert!(matches!(
            Grid::new(0, 4).unwrap_err(),
            NoiseError::InvalidShape { .. }
        ));
    }

    #[test]
    fn point_field_spacing_is_inverse_scale() {
        let points = PointField::new(4, 6, 2.0).unwrap();
        assert_eq!(points.shape(), (8, 12));
        assert!((points.x[[1, 0]] - 0.5).abs() < 1e-12);
        assert!((points.y[[0, 1]] - 0.5).abs() < 1e-12);
        // positions stay inside the shape extent
        assert!(points.x[[7, 0]] < 4.0);
        assert!(points.y[[0, 11]] < 6.0);
    }

    #[test]
    fn inset_field_stops_short_of_last_node() {
        let points = PointField::inset(4, 4, 2.0).unwrap();
        assert_eq!(points.shape(), (6, 6));
        assert!(points.x[[5, 0]] < 3.0);
    }

    #[test]
    fn cropped_field_is_coarser() {
        let full = PointField::new(8, 8, 4.0).unwrap();
        let cropped = PointField::cropped(8, 8, 4.0, 0.5).unwrap();
        let (rows, cols) = cropped.shape();
        assert!(rows < full.shape().0);
        assert!(cols < full.shape().1);
    }

    #[test]
    fn rejects_bad_scale_and_crop() {
        assert!(matches!(
            PointField::new(4, 4, 0.0).unwrap_err(),
            NoiseError::InvalidDomain { .. }
        ));
        assert!(matches!(
            PointField::cropped(4, 4, 2.0, 0.0).unwrap_err(),
            NoiseError::InvalidDomain { .. }
        ));
    }

    #[test]
    fn sample_axes_match_coordinates() {
        let points = PointField::new(3, 5, 1.0).unwrap();
        let (xs, ys) = points.sample_axes();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
