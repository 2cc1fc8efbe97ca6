//! Time grids.

use crate::error::GridError;

/// An ordered sequence of time samples in seconds.
///
/// Samples are finite and non-decreasing. Evaluation is pointwise, so the
/// spacing does not have to be uniform.
///
/// # Example
///
/// ```rust
/// use oscillator::TimeGrid;
///
/// let grid = TimeGrid::linspace(0.0, 20.0, 1000).unwrap();
/// assert_eq!(grid.len(), 1000);
/// assert_eq!(grid.first(), Some(0.0));
/// assert_eq!(grid.last(), Some(20.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Creates a grid with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates `samples` evenly spaced times over `[start, end]`.
    ///
    /// Both endpoints are included: zero samples yields an empty grid, one
    /// sample yields `[start]`, and the last sample is exactly `end`.
    ///
    /// # Errors
    ///
    /// Fails like [`TimeGrid::from_samples`] when an endpoint is not finite,
    /// when `end < start`, or when the span itself overflows.
    pub fn linspace(start: f64, end: f64, samples: usize) -> Result<Self, GridError> {
        let values = match samples {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                let mut values: Vec<f64> = (0..n - 1).map(|i| start + step * i as f64).collect();
                values.push(end);
                values
            }
        };
        Self::from_samples(values)
    }

    /// Creates a grid from arbitrary samples.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NonFinite`] for a NaN or infinite sample and
    /// [`GridError::Decreasing`] when a sample is smaller than its predecessor.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self, GridError> {
        for (index, &value) in samples.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NonFinite { index, value });
            }
            if index > 0 {
                let previous = samples[index - 1];
                if value < previous {
                    return Err(GridError::Decreasing {
                        index,
                        previous,
                        value,
                    });
                }
            }
        }
        Ok(Self { samples })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.samples.iter().copied()
    }

    /// First sample, if any.
    pub fn first(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Consumes the grid and returns its samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }
}

impl AsRef<[f64]> for TimeGrid {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = GridError;

    fn try_from(samples: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_samples(samples)
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
