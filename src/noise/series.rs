//! 1D noise generation over an [`Axis`].
//!
//! Two interchangeable strategies produce a [`NoiseSeries`] aligned to a
//! given axis: independent Gaussian draws per position, and gradient-weighted
//! interpolation between sparse control nodes.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::domain::{Axis, AxisSpacing};
use crate::error::{NoiseError, NoiseResult};
use crate::interp::linear;

/// A dense 1D scalar field aligned 1:1 with an [`Axis`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseSeries {
    pub values: Array1<f64>,
}

impl NoiseSeries {
    pub fn from_values(values: Array1<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mutable view of the underlying samples, for in-place normalization
    /// and flooring.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.values
            .as_slice_mut()
            .expect("series storage is contiguous")
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().expect("series storage is contiguous")
    }
}

/// Parameters for independent Gaussian draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianSpec {
    pub mean: f64,
    pub std_dev: f64,
}

impl GaussianSpec {
    pub(crate) fn validate(&self) -> NoiseResult<()> {
        if !self.mean.is_finite() {
            return Err(NoiseError::invalid_domain("mean", self.mean, "finite mean"));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(NoiseError::invalid_domain(
                "std_dev",
                self.std_dev,
                "std_dev >= 0",
            ));
        }
        Ok(())
    }
}

/// Parameters for 1D gradient-interpolation noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientNoiseSpec {
    /// Number of control nodes placed evenly across the axis span
    pub chunks: usize,
}

/// Draws one independent normal sample per axis position.
///
/// # Examples
///
/// ```
/// use noise_field_core::{gaussian_series, seeded_rng, Axis, AxisSpacing, GaussianSpec};
///
/// let axis = Axis::new(0.0, 100.0, AxisSpacing::Increment(0.5)).unwrap();
/// let mut rng = seeded_rng(Some(42));
/// let series = gaussian_series(&axis, &GaussianSpec { mean: 0.0, std_dev: 1.0 }, &mut rng).unwrap();
/// assert_eq!(series.len(), axis.len());
/// ```
pub fn gaussian_series(
    axis: &Axis,
    spec: &GaussianSpec,
    rng: &mut StdRng,
) -> NoiseResult<NoiseSeries> {
    spec.validate()?;
    let normal = Normal::new(spec.mean, spec.std_dev)
        .map_err(|_| NoiseError::invalid_domain("std_dev", spec.std_dev, "std_dev >= 0"))?;
    let values: Vec<f64> = (0..axis.len()).map(|_| normal.sample(rng)).collect();
    Ok(NoiseSeries::from_values(Array1::from_vec(values)))
}

/// Interpolates gradient-weighted control values onto every axis position.
///
/// `chunks` control nodes are spread evenly across the axis span and each
/// receives one uniform(-1, 1) gradient scalar. Every position is bracketed
/// by its nearest node and that node's right neighbour; the edge value at a
/// bracket is its gradient times the signed distance to the position, scaled
/// by `2 / chunk_size`. The output is the linear interpolation between the
/// two edge values. When the nearest node is the last one both brackets
/// collapse onto it and the output is that node's edge value alone.
///
/// With a single chunk there is no node spacing to measure, so the axis span
/// stands in for the chunk size.
pub fn gradient_series(
    axis: &Axis,
    spec: &GradientNoiseSpec,
    rng: &mut StdRng,
) -> NoiseResult<NoiseSeries> {
    if spec.chunks < 1 {
        return Err(NoiseError::invalid_domain(
            "chunks",
            spec.chunks,
            "chunks >= 1",
        ));
    }
    if axis.span() <= 0.0 {
        return Err(NoiseError::invalid_domain(
            "axis",
            axis.span(),
            "an axis span greater than zero",
        ));
    }

    let nodes: Vec<f64> = if spec.chunks == 1 {
        vec![axis.first()]
    } else {
        Axis::new(axis.first(), axis.last(), AxisSpacing::Count(spec.chunks))?
            .positions
            .to_vec()
    };
    let chunk_size = if spec.chunks > 1 {
        nodes[1] - nodes[0]
    } else {
        axis.span()
    };
    let gradients: Vec<f64> = (0..nodes.len()).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let last = nodes.len() - 1;
    let scaling = 2.0 / chunk_size;
    let values: Vec<f64> = axis
        .positions
        .iter()
        .map(|&x| {
            let nearest = nearest_node(&nodes, x);
            let right = if nearest < last { nearest + 1 } else { nearest };
            let (loc0, loc1) = (nodes[nearest], nodes[right]);
            let edge0 = gradients[nearest] * (x - loc0) * scaling;
            let edge1 = gradients[right] * (loc1 - x) * scaling;
            linear(x, &[loc0, loc1], &[edge0, edge1])
        })
        .collect();

    Ok(NoiseSeries::from_values(Array1::from_vec(values)))
}

fn nearest_node(nodes: &[f64], x: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, &node) in nodes.iter().enumerate() {
        let distance = (node - x).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}
