//! Separable Catmull-Rom interpolation from a regular control lattice.

use ndarray::Array2;
use rayon::prelude::*;

use crate::error::{NoiseError, NoiseResult};

/// Catmull-Rom cubic through `p1` (t = 0) and `p2` (t = 1), with tangents
/// taken from the neighbouring samples.
fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t * t
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t * t * t)
}

/// Maps a sample position to its lattice cell index and intra-cell offset.
///
/// The cell index is clamped to the last full cell, so positions past the
/// final node evaluate the edge cell's polynomial instead of failing.
fn locate(position: f64, spacing: f64, nodes: usize) -> (usize, f64) {
    let u = position / spacing;
    let cell = (u.floor().max(0.0) as usize).min(nodes - 2);
    (cell, u - cell as f64)
}

fn clamped(index: isize, nodes: usize) -> usize {
    index.clamp(0, nodes as isize - 1) as usize
}

/// Interpolates control `values` spaced `spacing` apart onto every position
/// in the cartesian product of `xs` and `ys`.
///
/// The control lattice must have at least 4 nodes along each axis so that
/// every evaluation has a full 4x4 neighbourhood; sparser lattices fail with
/// an interpolation error. Output rows are computed in parallel.
pub fn bicubic_lattice(
    values: &Array2<f64>,
    spacing: f64,
    xs: &[f64],
    ys: &[f64],
) -> NoiseResult<Array2<f64>> {
    let (nx, ny) = values.dim();
    if nx < 4 || ny < 4 {
        return Err(NoiseError::interpolation(format!(
            "control lattice of {}x{} nodes is too sparse for cubic interpolation (needs at least 4 per axis)",
            nx, ny
        )));
    }
    if !(spacing > 0.0) || !spacing.is_finite() {
        return Err(NoiseError::interpolation(format!(
            "control node spacing {} must be positive",
            spacing
        )));
    }

    let width = ys.len();
    let mut out = Array2::zeros((xs.len(), width));
    if width == 0 || xs.is_empty() {
        return Ok(out);
    }

    out.as_slice_mut()
        .expect("freshly allocated arrays are contiguous")
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, row)| {
            let (cx, tx) = locate(xs[i], spacing, nx);
            for (j, slot) in row.iter_mut().enumerate() {
                let (cy, ty) = locate(ys[j], spacing, ny);
                let mut column = [0.0f64; 4];
                for (r, sample) in column.iter_mut().enumerate() {
                    let xi = clamped(cx as isize + r as isize - 1, nx);
                    *sample = catmull_rom(
                        values[[xi, clamped(cy as isize - 1, ny)]],
                        values[[xi, cy]],
                        values[[xi, clamped(cy as isize + 1, ny)]],
                        values[[xi, clamped(cy as isize + 2, ny)]],
                        ty,
                    );
                }
                *slot = catmull_rom(column[0], column[1], column[2], column[3], tx);
            }
        });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_lattice_stays_constant() {
        let values = Array2::from_elem((5, 5), 2.5);
        let xs = [0.0, 0.7, 1.3, 3.9];
        let ys = [0.2, 2.0];
        let out = bicubic_lattice(&values, 1.0, &xs, &ys).unwrap();
        for &v in out.iter() {
            assert!((v - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn reproduces_node_values_at_node_positions() {
        let values =
            Array2::from_shape_fn((6, 6), |(i, j)| (i as f64 * 0.3).sin() + (j as f64 * 0.7).cos());
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 4.0];
        let out = bicubic_lattice(&values, 1.0, &xs, &ys).unwrap();
        for (a, &x) in xs.iter().enumerate() {
            for (b, &y) in ys.iter().enumerate() {
                let expected = values[[x as usize, y as usize]];
                assert!((out[[a, b]] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn respects_node_spacing() {
        // nodes at 0, 2, 4, 6, 8: position 4.0 lands exactly on node 2
        let values = Array2::from_shape_fn((5, 5), |(i, j)| (i * 10 + j) as f64);
        let out = bicubic_lattice(&values, 2.0, &[4.0], &[4.0]).unwrap();
        assert!((out[[0, 0]] - values[[2, 2]]).abs() < 1e-12);
    }

    #[test]
    fn rejects_sparse_lattices() {
        let values = Array2::zeros((3, 5));
        let err = bicubic_lattice(&values, 1.0, &[0.0], &[0.0]).unwrap_err();
        assert!(matches!(err, NoiseError::Interpolation { .. }));
    }

    #[test]
    fn positions_past_the_last_node_stay_finite() {
        let values = Array2::from_shape_fn((4, 4), |(i, j)| (i + j) as f64);
        let out = bicubic_lattice(&values, 1.0, &[3.9], &[3.9]).unwrap();
        assert!(out[[0, 0]].is_finite());
    }
}
