use weatherdash_stats::summary::SummaryStats;

use crate::Reading;

/// The readings selected for analysis and display.
///
/// A sample borrows a contiguous, ordered run of readings from a series. It
/// may be empty; [`Sample::stats`] returns `None` in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    readings: &'a [Reading],
}

impl<'a> Sample<'a> {
    #[must_use]
    pub fn new(readings: &'a [Reading]) -> Self {
        Self { readings }
    }

    #[must_use]
    pub fn readings(&self) -> &'a [Reading] {
        self.readings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + use<'a> {
        self.readings.iter().map(|r| r.value)
    }

    /// Computes summary statistics over the reading values.
    #[must_use]
    pub fn stats(&self) -> Option<SummaryStats> {
        SummaryStats::new(self.values())
    }
}
