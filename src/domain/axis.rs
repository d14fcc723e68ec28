//! 1D sample axis construction.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};

/// How the positions of an [`Axis`] are laid out between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisSpacing {
    /// Fixed increment: `start, start + step, start + 2*step, ...`, strictly
    /// below `stop`. The stop value itself is never emitted.
    Increment(f64),
    /// Fixed sample count: `n` evenly spaced positions from `start` to `stop`
    /// inclusive. A count of 1 yields just `start`.
    Count(usize),
}

/// An ordered, strictly increasing sequence of 1D sample positions.
///
/// # Examples
///
/// ```
/// use noise_field_core::{Axis, AxisSpacing};
///
/// let by_step = Axis::new(0.0, 10.0, AxisSpacing::Increment(0.5)).unwrap();
/// assert_eq!(by_step.len(), 20);
///
/// let by_count = Axis::new(0.0, 10.0, AxisSpacing::Count(11)).unwrap();
/// assert_eq!(by_count.last(), 10.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    /// Sample positions, strictly increasing, never empty
    pub positions: Array1<f64>,
}

impl Axis {
    /// Builds an axis from `start` to `stop` with the given spacing.
    ///
    /// Fails with `InvalidDomain` if `stop <= start`, the increment is not
    /// positive, or the requested count is zero.
    pub fn new(start: f64, stop: f64, spacing: AxisSpacing) -> NoiseResult<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(NoiseError::invalid_domain(
                "start/stop",
                format!("{start}/{stop}"),
                "finite endpoints",
            ));
        }
        if stop <= start {
            return Err(NoiseError::invalid_domain(
                "stop",
                stop,
                "stop > start",
            ));
        }

        let positions = match spacing {
            AxisSpacing::Increment(step) => {
                if !(step > 0.0) || !step.is_finite() {
                    return Err(NoiseError::invalid_domain("step", step, "step > 0"));
                }
                let mut values = Vec::new();
                let mut k = 0usize;
                loop {
                    let value = start + k as f64 * step;
                    if value >= stop {
                        break;
                    }
                    values.push(value);
                    k += 1;
                }
                Array1::from_vec(values)
            }
            AxisSpacing::Count(n) => {
                if n < 1 {
                    return Err(NoiseError::invalid_domain("count", n, "count >= 1"));
                }
                if n == 1 {
                    Array1::from_elem(1, start)
                } else {
                    let stride = (stop - start) / (n - 1) as f64;
                    Array1::from_iter((0..n).map(|k| {
                        // pin the final position to stop exactly
                        if k == n - 1 {
                            stop
                        } else {
                            start + k as f64 * stride
                        }
                    }))
                }
            }
        };

        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// First sample position
    pub fn first(&self) -> f64 {
        self.positions[0]
    }

    /// Last sample position
    pub fn last(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }

    /// Distance between the first and last sample positions
    pub fn span(&self) -> f64 {
        self.last() - self.first()
    }
}
