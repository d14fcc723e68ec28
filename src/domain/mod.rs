//! Sample domain construction.
//!
//! Provides the 1D and 2D coordinate systems the generators sample over:
//! [`Axis`] for ordered 1D positions, [`Grid`] for unit-spaced reference
//! lattices, and [`PointField`] for dense sub-unit sample lattices.

pub mod axis;
pub mod lattice;

pub use axis::{Axis, AxisSpacing};
pub use lattice::{Grid, PointField};
