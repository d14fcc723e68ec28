//! Frequency-domain filtering of 1D noise fields.
//!
//! Provides the forward/inverse transform pair used to zero selected
//! frequency bands of a generated series.

pub mod filter;

pub use filter::{band_exclude, calculate_spectrum, SpectrumBuffer};
