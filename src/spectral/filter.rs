//! Forward/inverse FFT band exclusion.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::{NoiseError, NoiseResult};
use crate::noise::NoiseSeries;

/// Complex frequency-domain image of a 1D noise series.
///
/// Produced by [`calculate_spectrum`]; consumed by the inverse transform
/// inside [`band_exclude`]. The buffer keeps the same length as the series it
/// was computed from.
#[derive(Debug, Clone)]
pub struct SpectrumBuffer {
    pub bins: Vec<Complex<f64>>,
}

impl SpectrumBuffer {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Computes the forward discrete Fourier transform of a series.
pub fn calculate_spectrum(series: &NoiseSeries) -> SpectrumBuffer {
    let mut bins: Vec<Complex<f64>> = series
        .values
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    if !bins.is_empty() {
        let mut planner = FftPlanner::new();
        planner.plan_fft_forward(bins.len()).process(&mut bins);
    }
    SpectrumBuffer { bins }
}

/// Zeroes frequency bands of `series` in place via the transform pair.
///
/// Bins with index below `round(low_fraction * n)` are zeroed, then bins
/// with index below `round(high_fraction * n)` are zeroed independently.
/// Both cutoffs count up from the zero-frequency bin: the upper fraction
/// widens the same low-side mask rather than carving a band from the top of
/// the spectrum. The inverse transform reconstructs the series in place,
/// normalized by `1/n`.
///
/// Fails with `InvalidRange` when a fraction lies outside [0, 1].
///
/// # Examples
///
/// ```
/// use ndarray::Array1;
/// use noise_field_core::{band_exclude, NoiseSeries};
///
/// let mut series = NoiseSeries::from_values(Array1::from_elem(64, 3.0));
/// // a zero-width mask reconstructs the constant series
/// band_exclude(&mut series, 0.0, 0.0).unwrap();
/// assert!(series.values.iter().all(|v| (v - 3.0).abs() < 1e-9));
/// ```
pub fn band_exclude(
    series: &mut NoiseSeries,
    low_fraction: f64,
    high_fraction: f64,
) -> NoiseResult<()> {
    for (name, fraction) in [
        ("low_fraction", low_fraction),
        ("high_fraction", high_fraction),
    ] {
        if !(0.0..=1.0).contains(&fraction) || !fraction.is_finite() {
            return Err(NoiseError::invalid_range(name, fraction));
        }
    }

    let mut spectrum = calculate_spectrum(series);
    let n = spectrum.len();
    if n == 0 {
        return Ok(());
    }

    let low_cut = mask_length(low_fraction, n);
    let high_cut = mask_length(high_fraction, n);
    for bin in &mut spectrum.bins[..low_cut] {
        *bin = Complex::new(0.0, 0.0);
    }
    for bin in &mut spectrum.bins[..high_cut] {
        *bin = Complex::new(0.0, 0.0);
    }

    let mut planner = FftPlanner::new();
    planner.plan_fft_inverse(n).process(&mut spectrum.bins);
    let norm = 1.0 / n as f64;
    for (value, bin) in series.values.iter_mut().zip(spectrum.bins.iter()) {
        *value = bin.re * norm;
    }
    Ok(())
}

fn mask_length(fraction: f64, n: usize) -> usize {
    ((fraction * n as f64).round() as usize).min(n)
}
