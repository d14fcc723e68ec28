//! # Noise Field Core
//!
//! A deterministic Rust engine that synthesizes procedural scalar noise
//! fields over 1D and 2D sample domains and filters them in the frequency
//! domain. Sparse control nodes receive pseudo-random values, interpolation
//! spreads them onto dense sample lattices, and multi-octave summation with
//! halving amplitudes builds the final field.
//!
//! ## Quick Start
//!
//! ```rust
//! use noise_field_core::{
//!     band_exclude, fill_level, gaussian_series, generate_value_field, seeded_rng, Axis,
//!     AxisSpacing, FrequencyProgression, GaussianSpec, ValueNoiseSpec,
//! };
//!
//! // a multi-octave 2D value noise field, normalized to [-1, 1]
//! let spec = ValueNoiseSpec {
//!     octaves: 4,
//!     progression: FrequencyProgression::PeriodDoubling,
//!     seed: 42,
//! };
//! let (points, mut field) = generate_value_field(32, 32, 2.0, &spec).unwrap();
//! assert_eq!(field.shape(), points.shape());
//!
//! // floor the field at sea level
//! fill_level(field.as_mut_slice(), 0.0);
//!
//! // a 1D Gaussian series with the low end of its spectrum removed
//! let axis = Axis::new(0.0, 100.0, AxisSpacing::Increment(0.5)).unwrap();
//! let mut rng = seeded_rng(Some(42));
//! let mut series =
//!     gaussian_series(&axis, &GaussianSpec { mean: 0.0, std_dev: 1.0 }, &mut rng).unwrap();
//! band_exclude(&mut series, 0.05, 0.0).unwrap();
//! ```
//!
//! ## Core Modules
//!
//! - [`domain`] - Axes, reference grids, and dense point lattices
//! - [`noise`] - 1D/2D generators, octave composition, normalization
//! - [`interp`] - Linear and bicubic control-value interpolation
//! - [`spectral`] - FFT band exclusion
//! - [`export`] - CSV persistence of 2D fields
//! - [`config`] - Engine configuration via TOML
//! - [`logging`] - JSON line-delimited generation logging

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod interp;
pub mod logging;
pub mod noise;
pub mod spectral;

pub use config::{ConfigError, EngineConfig};
pub use domain::{Axis, AxisSpacing, Grid, PointField};
pub use error::{NoiseError, NoiseResult};
pub use export::{load_field_csv, save_field_csv, ExportError};
pub use interp::{bicubic_lattice, linear};
pub use logging::{log_generation, GenerationLogEntry};
pub use noise::{
    fill_level, gaussian_series, generate_gaussian_field, generate_value_field, gradient_series,
    octave_amplitude, octave_layer, octave_rng, rescale, rescale_or_midpoint, seeded_rng,
    ControlLattice, FieldGaussianSpec, FieldStatistics, FrequencyProgression, GaussianSpec,
    GradientNoiseSpec, NoiseField, NoiseSeries, ValueNoiseSpec,
};
pub use spectral::{band_exclude, calculate_spectrum, SpectrumBuffer};
