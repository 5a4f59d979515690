use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weatherdash_core::{Metric, MetricReport, Reading, WindowSpec};
use weatherdash_stats::{mode::Mode, summary::SummaryStats};

/// Exported readings and statistics of one metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedReport {
    /// Timestamp when the export was created (ISO 8601 format)
    pub exported_at: DateTime<Utc>,
    /// Data source, either a location or an offline file
    pub source: String,
    pub metric: Metric,
    pub unit: String,
    pub window: WindowSpec,
    /// Readings of the selected window, oldest first
    pub readings: Vec<Reading>,
    /// Statistics of the readings; absent when the window is empty
    pub statistics: Option<ExportedStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most common values; `null` when every value occurs equally often
    pub mode: Option<Vec<f64>>,
    pub range: f64,
    pub min: f64,
    pub max: f64,
}

impl ExportedReport {
    pub fn new(report: &MetricReport<'_>, source: String, exported_at: DateTime<Utc>) -> Self {
        let metric = report.metric();
        Self {
            exported_at,
            source,
            metric,
            unit: metric.unit().to_owned(),
            window: report.window(),
            readings: report.sample().readings().to_vec(),
            statistics: report.stats().map(ExportedStatistics::from),
        }
    }
}

impl From<&SummaryStats> for ExportedStatistics {
    fn from(stats: &SummaryStats) -> Self {
        let mode = match &stats.mode {
            Mode::Values(values) => Some(values.clone()),
            Mode::NoDominantValue => None,
        };
        Self {
            count: stats.count,
            mean: stats.mean,
            median: stats.median,
            mode,
            range: stats.range,
            min: stats.min,
            max: stats.max,
        }
    }
}
