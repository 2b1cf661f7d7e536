//! Summary statistics over integer samples.

use alloc::vec::Vec;

#[cfg(feature = "std")]
fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn sqrt(value: f64) -> f64 {
    libm::sqrt(value)
}

/// A list of integer samples, such as session maxima or durations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerStatistics {
    values: Vec<u64>,
}

impl IntegerStatistics {
    /// Creates statistics over `values`.
    #[must_use]
    pub const fn new(values: Vec<u64>) -> Self {
        Self { values }
    }

    /// Appends a sample.
    pub fn push(&mut self, value: u64) {
        self.values.push(value);
    }

    /// Returns the samples.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the arithmetic mean, or `None` if there are no samples.
    ///
    /// # Example
    ///
    /// ```
    /// use roulette_sim::IntegerStatistics;
    ///
    /// let stats = IntegerStatistics::new(vec![10, 8, 13, 9, 11, 14, 6, 4, 12, 7, 5]);
    /// assert_eq!(stats.mean(), Some(9.0));
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for simulated stakes"
    )]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self.values.iter().map(|&v| v as f64).sum();
        Some(sum / self.values.len() as f64)
    }

    /// Returns the sample standard deviation (`n - 1` denominator), or `None`
    /// with fewer than two samples.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for simulated stakes"
    )]
    pub fn stdev(&self) -> Option<f64> {
        if self.values.len() < 2 {
            return None;
        }
        let mean = self.mean()?;
        let squares: f64 = self
            .values
            .iter()
            .map(|&v| {
                let deviation = v as f64 - mean;
                deviation * deviation
            })
            .sum();
        Some(sqrt(squares / (self.values.len() - 1) as f64))
    }

    /// Returns the largest sample.
    #[must_use]
    pub fn max(&self) -> Option<u64> {
        self.values.iter().copied().max()
    }
}

impl FromIterator<u64> for IntegerStatistics {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
