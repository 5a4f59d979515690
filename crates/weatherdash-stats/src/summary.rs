use crate::mode::Mode;

/// Summary statistics of a dataset.
///
/// This structure contains the measures shown next to every weather chart:
/// central tendency (mean, median, mode) and spread (min, max, range).
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Number of values the statistics were computed from.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    ///
    /// For an even number of values this is the midpoint of the two middle values.
    pub median: f64,
    /// The most frequent value(s) of the dataset.
    pub mode: Mode,
    /// The difference between the maximum and the minimum.
    pub range: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
}

impl SummaryStats {
    /// Computes summary statistics from unsorted values.
    ///
    /// Non-finite values (NaN, infinities) are dropped. The remaining values
    /// are sorted internally, so the result does not depend on input order.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values.
    ///
    /// # Returns
    ///
    /// * `Some(SummaryStats)` - if at least one finite value remains
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use weatherdash_stats::{mode::Mode, summary::SummaryStats};
    /// let stats = SummaryStats::new([2.0, 0.0, 1.0, 2.0, 0.0]).unwrap();
    /// assert_eq!(stats.mean, 1.0);
    /// assert_eq!(stats.median, 1.0);
    /// assert_eq!(stats.mode, Mode::Values(vec![0.0, 2.0]));
    /// assert_eq!(stats.range, 2.0);
    ///
    /// assert!(SummaryStats::new(Vec::<f64>::new()).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes summary statistics from pre-sorted finite values.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Finite values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(SummaryStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use weatherdash_stats::summary::SummaryStats;
    /// let stats = SummaryStats::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 4.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let sum = sorted_values.iter().sum::<f64>();
        // Rounding can push the quotient just outside the observed bounds
        let mean = (sum / count as f64).clamp(min, max);
        let mid = count / 2;
        let median = if count.is_multiple_of(2) {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };

        Some(Self {
            count,
            mean,
            median,
            mode: Mode::from_sorted(sorted_values),
            range: max - min,
            min,
            max,
        })
    }
}
