use chrono::NaiveDateTime;
use weatherdash_stats::summary::SummaryStats;

use crate::{Metric, Reading, Sample, WindowSpec};

/// Message shown in place of statistics when the window holds no readings.
pub const NO_READINGS: &str = "No readings in the selected window";

/// A metric's selected sample together with its statistics.
#[derive(Debug, Clone)]
pub struct MetricReport<'a> {
    metric: Metric,
    window: WindowSpec,
    sample: Sample<'a>,
    stats: Option<SummaryStats>,
}

impl<'a> MetricReport<'a> {
    /// Selects `window` from `series` and computes its statistics.
    #[must_use]
    pub fn new(metric: Metric, window: WindowSpec, series: &'a [Reading]) -> Self {
        let sample = window.select(series);
        let stats = sample.stats();
        Self {
            metric,
            window,
            sample,
            stats,
        }
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn window(&self) -> WindowSpec {
        self.window
    }

    #[must_use]
    pub fn sample(&self) -> Sample<'a> {
        self.sample
    }

    /// Statistics of the sample, `None` when it is empty.
    #[must_use]
    pub fn stats(&self) -> Option<&SummaryStats> {
        self.stats.as_ref()
    }

    /// One display row per reading, in sample order.
    pub fn table_rows(&self) -> impl Iterator<Item = TableRow> + use<'a> {
        self.sample.readings().iter().map(TableRow::from_reading)
    }

    /// Display lines for the statistics panel, `None` when the sample is empty.
    #[must_use]
    pub fn stat_lines(&self) -> Option<[StatLine; 6]> {
        self.stats
            .as_ref()
            .map(|stats| stat_lines(stats, self.metric.unit()))
    }
}

/// A reading formatted for the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub time: String,
    pub value: String,
}

impl TableRow {
    #[must_use]
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            time: format_timestamp(&reading.timestamp),
            value: format_value(reading.value),
        }
    }
}

/// One labelled line of the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

/// Formats a timestamp for tables and chart labels, e.g. `May 1, 01:00 PM`.
#[must_use]
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%b %-d, %I:%M %p").to_string()
}

/// Formats a reading value with one decimal.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Builds the statistics panel lines, each value followed by `unit`.
///
/// ```
/// # use weatherdash_core::report::stat_lines;
/// # use weatherdash_stats::summary::SummaryStats;
/// let stats = SummaryStats::new([0.0, 0.0, 1.0, 2.0, 2.0]).unwrap();
/// let lines = stat_lines(&stats, "mm");
/// assert_eq!(lines[0].label, "Average");
/// assert_eq!(lines[0].value, "1.00 mm");
/// assert_eq!(lines[2].value, "0, 2 mm");
/// ```
#[must_use]
pub fn stat_lines(stats: &SummaryStats, unit: &str) -> [StatLine; 6] {
    let number = |label, value: f64| StatLine {
        label,
        value: format!("{value:.2} {unit}"),
    };
    [
        number("Average", stats.mean),
        number("Median", stats.median),
        StatLine {
            label: "Most Common",
            value: format!("{} {unit}", stats.mode),
        },
        number("Range", stats.range),
        number("Min", stats.min),
        number("Max", stats.max),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn readings(values: &[f64]) -> Vec<Reading> {
        values
            .iter()
            .zip(0..)
            .map(|(&value, hour)| Reading::new(at(hour), value))
            .collect()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(&at(13)), "May 1, 01:00 PM");
        assert_eq!(format_timestamp(&at(0)), "May 1, 12:00 AM");
    }

    #[test]
    fn test_value_format() {
        assert_eq!(format_value(3.17), "3.2");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-2.26), "-2.3");
    }

    #[test]
    fn test_report_for_mixed_sample() {
        let series = readings(&[0.0, 0.0, 1.0, 2.0, 2.0]);
        let report = MetricReport::new(Metric::Precipitation, WindowSpec::LastDDays(1), &series);
        let lines = report.stat_lines().unwrap();
        let rendered = lines
            .iter()
            .map(|line| format!("{}: {}", line.label, line.value))
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            [
                "Average: 1.00 mm",
                "Median: 1.00 mm",
                "Most Common: 0, 2 mm",
                "Range: 2.00 mm",
                "Min: 0.00 mm",
                "Max: 2.00 mm",
            ]
        );
    }

    #[test]
    fn test_report_for_single_reading() {
        let series = readings(&[5.0]);
        let report = MetricReport::new(Metric::WindSpeed, WindowSpec::LastNReadings(20), &series);
        let lines = report.stat_lines().unwrap();
        assert_eq!(lines[2].value, "N/A km/h");
        assert_eq!(lines[3].value, "0.00 km/h");
    }

    #[test]
    fn test_report_applies_window() {
        let values = (0..30).map(f64::from).collect::<Vec<_>>();
        let series = readings(&values[..24]);
        let report = MetricReport::new(Metric::Temperature, WindowSpec::LastNReadings(20), &series);
        assert_eq!(report.sample().len(), 20);
        assert_eq!(report.stats().unwrap().min, 4.0);

        let rows = report.table_rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 20);
        assert_eq!(
            rows[0],
            TableRow {
                time: "May 1, 04:00 AM".to_owned(),
                value: "4.0".to_owned(),
            }
        );
    }

    #[test]
    fn test_empty_report_has_no_statistics() {
        let report = MetricReport::new(Metric::Temperature, WindowSpec::LastDDays(1), &[]);
        assert!(report.sample().is_empty());
        assert!(report.stats().is_none());
        assert!(report.stat_lines().is_none());
        assert_eq!(report.table_rows().count(), 0);
    }
}
