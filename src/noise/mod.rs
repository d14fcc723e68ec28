//! Noise generation and in-place field conditioning.

pub mod field;
pub mod normalize;
pub mod series;

pub use field::{
    generate_gaussian_field, generate_value_field, octave_amplitude, octave_layer, octave_rng,
    seeded_rng, ControlLattice, FieldGaussianSpec, FieldStatistics, FrequencyProgression,
    NoiseField, ValueNoiseSpec,
};
pub use normalize::{fill_level, rescale, rescale_or_midpoint};
pub use series::{gaussian_series, gradient_series, GaussianSpec, GradientNoiseSpec, NoiseSeries};
