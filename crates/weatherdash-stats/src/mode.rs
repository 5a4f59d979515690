use std::fmt;

/// Most frequent value(s) of a dataset.
///
/// Values are grouped by exact `f64` equality. Every value that reaches the
/// highest occurrence count is reported, in ascending order.
///
/// When every value of the dataset reaches the highest count on its own, that
/// is when all values are distinct, the result is [`Mode::NoDominantValue`].
/// A dataset of one repeated value has that value as its mode.
///
/// # Examples
///
/// ```
/// use weatherdash_stats::mode::Mode;
///
/// let mode = Mode::from_sorted(&[1.0, 1.0, 2.0, 2.0, 3.0]);
/// assert_eq!(mode, Mode::Values(vec![1.0, 2.0]));
/// assert_eq!(mode.to_string(), "1, 2");
///
/// let mode = Mode::from_sorted(&[0.0, 0.0, 0.0]);
/// assert_eq!(mode.to_string(), "0");
///
/// let mode = Mode::from_sorted(&[1.0, 2.0, 3.0]);
/// assert_eq!(mode, Mode::NoDominantValue);
/// assert_eq!(mode.to_string(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// The values sharing the highest occurrence count, ascending.
    Values(Vec<f64>),
    /// Every value is distinct.
    NoDominantValue,
}

impl Mode {
    /// Computes the mode from values sorted in ascending order.
    ///
    /// An empty slice has no dominant value.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let mut max_count = 0;
        let mut modes = vec![];
        for run in sorted_values.chunk_by(|a, b| a == b) {
            let count = run.len();
            // `-0.0` sorts before `0.0` and groups with it
            let value = run[0] + 0.0;
            if count > max_count {
                max_count = count;
                modes.clear();
                modes.push(value);
            } else if count == max_count {
                modes.push(value);
            }
        }

        if modes.len() == sorted_values.len() {
            return Self::NoDominantValue;
        }
        Self::Values(modes)
    }

    /// Returns the dominant values, or an empty slice for the sentinel.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Values(values) => values,
            Self::NoDominantValue => &[],
        }
    }

    #[must_use]
    pub fn is_dominant(&self) -> bool {
        matches!(self, Self::Values(_))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::NoDominantValue => f.write_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_winner() {
        let mode = Mode::from_sorted(&[1.0, 2.0, 2.0, 2.0, 3.0]);
        assert_eq!(mode, Mode::Values(vec![2.0]));
        assert!(mode.is_dominant());
    }

    #[test]
    fn test_tie_reports_all_in_ascending_order() {
        let mode = Mode::from_sorted(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(mode.values(), &[1.0, 2.0]);
        assert_eq!(mode.to_string(), "1, 2");
    }

    #[test]
    fn test_all_distinct_is_sentinel() {
        let mode = Mode::from_sorted(&[0.5, 1.5, 2.5, 3.5]);
        assert_eq!(mode, Mode::NoDominantValue);
        assert!(mode.values().is_empty());
    }

    #[test]
    fn test_single_value_is_sentinel() {
        assert_eq!(Mode::from_sorted(&[5.0]), Mode::NoDominantValue);
    }

    #[test]
    fn test_repeated_single_value_is_mode() {
        assert_eq!(Mode::from_sorted(&[4.0, 4.0, 4.0]), Mode::Values(vec![4.0]));
        assert_eq!(Mode::from_sorted(&[0.0; 24]).to_string(), "0");
    }

    #[test]
    fn test_equally_frequent_groups_are_all_reported() {
        let mode = Mode::from_sorted(&[1.0, 1.0, 2.0, 2.0]);
        assert_eq!(mode, Mode::Values(vec![1.0, 2.0]));
        assert_eq!(mode.to_string(), "1, 2");
    }

    #[test]
    fn test_negative_zero_reported_as_zero() {
        let mut values = vec![0.0, -0.0, 0.0, 1.5];
        values.sort_by(f64::total_cmp);
        let mode = Mode::from_sorted(&values);
        assert_eq!(mode.to_string(), "0");
        assert!(mode.values()[0].is_sign_positive());
    }

    #[test]
    fn test_empty_is_sentinel() {
        assert_eq!(Mode::from_sorted(&[]), Mode::NoDominantValue);
    }

    #[test]
    fn test_counts_by_value_not_formatting() {
        // 0.1 + 0.2 differs from 0.3 even though both print close to "0.3"
        let mut values = vec![0.1 + 0.2, 0.3, 0.3, 1.0];
        values.sort_by(f64::total_cmp);
        assert_eq!(Mode::from_sorted(&values), Mode::Values(vec![0.3]));
    }

    #[test]
    fn test_display_uses_shortest_form() {
        let mode = Mode::Values(vec![0.0, 2.0, 12.5]);
        assert_eq!(mode.to_string(), "0, 2, 12.5");
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_unsorted_input_panics() {
        let _ = Mode::from_sorted(&[2.0, 1.0]);
    }
}
