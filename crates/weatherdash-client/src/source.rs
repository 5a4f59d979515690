use std::{io, path::PathBuf};

use weatherdash_core::{HourlySeries, Metric};

/// Errors returned while retrieving hourly data.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FetchError {
    #[display("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[display("request to the forecast API failed")]
    Http(reqwest::Error),
    #[display("failed to read forecast file {}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[display("failed to parse forecast response")]
    Parse(serde_json::Error),
    #[display("response has no hourly `{field}` series")]
    MissingSeries { field: String },
    #[display("response has {times} timestamps but {values} values")]
    LengthMismatch { times: usize, values: usize },
    #[display("invalid timestamp `{value}`")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// Provider of hourly readings for one fixed location.
pub trait HourlySource {
    /// Fetches hourly readings of `metric` covering the last `past_days` days.
    fn fetch_hourly(&self, metric: Metric, past_days: u32) -> Result<HourlySeries, FetchError>;
}

impl<S> HourlySource for Box<S>
where
    S: HourlySource + ?Sized,
{
    fn fetch_hourly(&self, metric: Metric, past_days: u32) -> Result<HourlySeries, FetchError> {
        (**self).fetch_hourly(metric, past_days)
    }
}
