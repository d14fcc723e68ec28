//! 2D noise field generation over a [`PointField`].
//!
//! The value-noise composer sums octaves of interpolated control values at
//! increasing frequency and halving amplitude, then normalizes the result to
//! [-1, 1]. A Gaussian variant draws one independent sample per position with
//! no normalization. Both log their output statistics as JSON lines.

use ndarray::{s, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Grid, PointField};
use crate::error::{NoiseError, NoiseResult};
use crate::interp::bicubic_lattice;
use crate::logging;
use crate::noise::normalize::rescale_or_midpoint;
use crate::noise::series::GaussianSpec;

/// A dense 2D scalar field aligned 1:1 with a [`PointField`].
///
/// Produced by a generator, mutated in place by normalization and flooring,
/// consumed by filters or external sinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseField {
    pub values: Array2<f64>,
}

impl NoiseField {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            values: Array2::zeros((rows, cols)),
        }
    }

    pub fn from_values(values: Array2<f64>) -> Self {
        Self { values }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Leading sub-block of the field, for aligning data with a cropped
    /// [`PointField`]. This truncates; it does not re-sample.
    pub fn truncated(&self, rows: usize, cols: usize) -> NoiseResult<Self> {
        let (r, c) = self.shape();
        if rows > r || cols > c {
            return Err(NoiseError::invalid_shape(rows, cols));
        }
        Ok(Self {
            values: self.values.slice(s![..rows, ..cols]).to_owned(),
        })
    }

    /// Mutable view of the underlying samples, for in-place normalization
    /// and flooring.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.values
            .as_slice_mut()
            .expect("field storage is contiguous")
    }

    pub fn statistics(&self) -> FieldStatistics {
        let slice = self.values.as_slice().expect("field storage is contiguous");
        if slice.is_empty() {
            return FieldStatistics {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }
        let min = slice.par_iter().cloned().reduce(|| f64::INFINITY, f64::min);
        let max = slice
            .par_iter()
            .cloned()
            .reduce(|| f64::NEG_INFINITY, f64::max);
        let sum: f64 = slice.par_iter().sum();
        FieldStatistics {
            min,
            max,
            mean: sum / slice.len() as f64,
        }
    }
}

/// Value-range summary of a generated field, logged after generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// How the control-lattice frequency advances with the octave index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrequencyProgression {
    /// Node period grows as `2 * octave`
    PeriodDoubling,
    /// Frequency grows as `0.1 * octave`, so the period is `10 / octave`
    LinearFrequency,
}

impl FrequencyProgression {
    /// Control-node period for the given octave index (starting at 1).
    pub fn period(&self, octave: usize) -> f64 {
        match self {
            FrequencyProgression::PeriodDoubling => 2.0 * octave as f64,
            FrequencyProgression::LinearFrequency => 1.0 / (0.1 * octave as f64),
        }
    }
}

/// Parameters for multi-octave value noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueNoiseSpec {
    /// Octave loop bound: octaves run from index 1 up to but excluding this
    /// count, so a count of 1 or less leaves the field at zero
    pub octaves: usize,
    pub progression: FrequencyProgression,
    /// Master seed; each octave derives an independent generator from it
    pub seed: u64,
}

impl Default for ValueNoiseSpec {
    fn default() -> Self {
        Self {
            octaves: 5,
            progression: FrequencyProgression::PeriodDoubling,
            seed: 42,
        }
    }
}

/// Parameters for a field of independent Gaussian draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGaussianSpec {
    pub mean: f64,
    pub std_dev: f64,
    pub seed: u64,
}

/// A coarse lattice of control nodes carrying one random value each.
///
/// Node positions come from a unit [`Grid`] scaled by the octave period, so
/// they span the same spatial extent as the dense sample lattice they are
/// interpolated onto.
#[derive(Debug, Clone)]
pub struct ControlLattice {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub values: Array2<f64>,
    pub period: f64,
}

impl ControlLattice {
    /// Places nodes every `period` units over `[0, x_extent] x [0, y_extent]`
    /// and draws one uniform(-1, 1) value per node in row-major order.
    pub fn sample(
        x_extent: f64,
        y_extent: f64,
        period: f64,
        rng: &mut StdRng,
    ) -> NoiseResult<Self> {
        if !(period > 0.0) || !period.is_finite() {
            return Err(NoiseError::invalid_domain("period", period, "period > 0"));
        }
        if !(x_extent > 0.0) || !(y_extent > 0.0) {
            return Err(NoiseError::invalid_domain(
                "extent",
                format!("{x_extent}x{y_extent}"),
                "positive extents",
            ));
        }
        let nx = (x_extent / period).floor() as usize + 1;
        let ny = (y_extent / period).floor() as usize + 1;
        let grid = Grid::new(nx, ny)?;
        let values = Array2::from_shape_vec(
            (nx, ny),
            (0..nx * ny).map(|_| rng.gen_range(-1.0..1.0)).collect(),
        )
        .expect("node count matches the lattice shape");
        Ok(Self {
            x: &grid.x * period,
            y: &grid.y * period,
            values,
            period,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }
}

/// Builds a deterministic generator from an optional seed.
///
/// `None` seeds from OS entropy, so generation is non-deterministic unless a
/// seed is supplied.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Derives the generator for one octave from the master seed.
///
/// Octaves consume independent random streams, so their results do not
/// depend on evaluation order.
pub fn octave_rng(master_seed: u64, octave: usize) -> StdRng {
    // splitmix-style mixing of seed and octave index
    let mut z = master_seed.wrapping_add((octave as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

/// Generates a multi-octave value noise field over a fresh [`PointField`].
///
/// For each octave index `i` in `1..octaves`, a coarse control lattice is
/// sampled at the progression's period, interpolated onto every point
/// position, scaled by `0.5^i`, and accumulated. The accumulated field is
/// then rescaled to [-1, 1]; an all-zero accumulation (octave count of 1 or
/// less) maps to the midpoint and stays zero.
///
/// # Examples
///
/// ```
/// use noise_field_core::{generate_value_field, FrequencyProgression, ValueNoiseSpec};
///
/// let spec = ValueNoiseSpec {
///     octaves: 4,
///     progression: FrequencyProgression::PeriodDoubling,
///     seed: 7,
/// };
/// let (points, field) = generate_value_field(32, 32, 2.0, &spec).unwrap();
/// assert_eq!(field.shape(), points.shape());
/// ```
pub fn generate_value_field(
    rows: usize,
    cols: usize,
    scale: f64,
    spec: &ValueNoiseSpec,
) -> NoiseResult<(PointField, NoiseField)> {
    let points = PointField::new(rows, cols, scale)?;
    let (xs, ys) = points.sample_axes();
    let mut field = NoiseField::zeros(xs.len(), ys.len());

    for octave in 1..spec.octaves {
        let layer = octave_layer(rows, cols, octave, spec, &xs, &ys)?;
        let amplitude = octave_amplitude(octave);
        field
            .values
            .zip_mut_with(&layer, |acc, &raw| *acc += amplitude * raw);
    }

    rescale_or_midpoint(field.as_mut_slice(), -1.0, 1.0)?;
    log_generated("value_field", &field);
    Ok((points, field))
}

/// One octave's raw (pre-amplitude) contribution to a value noise field.
///
/// Exposed so octave contributions can be recomputed independently; the
/// composer accumulates exactly these layers scaled by
/// [`octave_amplitude`].
pub fn octave_layer(
    rows: usize,
    cols: usize,
    octave: usize,
    spec: &ValueNoiseSpec,
    xs: &[f64],
    ys: &[f64],
) -> NoiseResult<Array2<f64>> {
    let period = spec.progression.period(octave);
    let mut rng = octave_rng(spec.seed, octave);
    let lattice = ControlLattice::sample(rows as f64, cols as f64, period, &mut rng)?;
    bicubic_lattice(&lattice.values, lattice.period, xs, ys)
}

/// Amplitude weight `0.5^octave` applied to an octave's raw layer.
pub fn octave_amplitude(octave: usize) -> f64 {
    0.5f64.powi(octave as i32)
}

/// Generates a field of independent Gaussian draws over a fresh
/// [`PointField`]. No normalization is applied.
pub fn generate_gaussian_field(
    rows: usize,
    cols: usize,
    scale: f64,
    spec: &FieldGaussianSpec,
) -> NoiseResult<(PointField, NoiseField)> {
    let gaussian = GaussianSpec {
        mean: spec.mean,
        std_dev: spec.std_dev,
    };
    gaussian.validate()?;
    let normal = Normal::new(spec.mean, spec.std_dev)
        .map_err(|_| NoiseError::invalid_domain("std_dev", spec.std_dev, "std_dev >= 0"))?;

    let points = PointField::new(rows, cols, scale)?;
    let (prows, pcols) = points.shape();
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let values = Array2::from_shape_vec(
        (prows, pcols),
        (0..prows * pcols).map(|_| normal.sample(&mut rng)).collect(),
    )
    .expect("sample count matches the field shape");

    let field = NoiseField::from_values(values);
    log_generated("gaussian_field", &field);
    Ok((points, field))
}

fn log_generated(operation: &str, field: &NoiseField) {
    let (rows, cols) = field.shape();
    if let Err(err) = logging::log_generation(operation, rows, cols, &field.statistics()) {
        eprintln!("failed to log field generation {operation}: {err}");
    }
}
