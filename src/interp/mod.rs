//! Interpolation of sparse control values onto dense sample positions.
//!
//! 1D generation uses piecewise-linear interpolation between bracketing
//! control nodes; 2D generation uses separable Catmull-Rom bicubic
//! interpolation from a regular control lattice. Bicubic evaluation is the
//! dominant generation cost and is parallelized over output rows.

pub mod bicubic;
pub mod linear;

pub use bicubic::bicubic_lattice;
pub use linear::linear;
