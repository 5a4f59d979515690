use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Metric, Sample, WindowSpec};

/// One timestamped observation of a weather metric.
///
/// The timestamp is the wall-clock time at the dashboard location, exactly as
/// delivered by the forecast API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl Reading {
    #[must_use]
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Hourly readings of one metric, as fetched for a number of past days.
///
/// Readings keep the order of the data source and are never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub metric: Metric,
    pub past_days: u32,
    pub readings: Vec<Reading>,
}

impl HourlySeries {
    #[must_use]
    pub fn new(metric: Metric, past_days: u32, readings: Vec<Reading>) -> Self {
        Self {
            metric,
            past_days,
            readings,
        }
    }

    /// Selects the part of this series covered by `window`.
    #[must_use]
    pub fn select(&self, window: WindowSpec) -> Sample<'_> {
        window.select(&self.readings)
    }

    /// Returns whether the timestamps are strictly increasing.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.readings
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp)
    }
}
