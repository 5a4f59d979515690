use std::{fs, path::PathBuf};

use tracing::debug;
use weatherdash_core::{HourlySeries, Metric};

use crate::{FetchError, ForecastResponse, HourlySource};

/// Serves hourly data from a saved Open-Meteo response file.
///
/// The file is re-read on every fetch. It may contain several hourly
/// variables; `past_days` is not applied because the file already covers a
/// fixed range.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HourlySource for FileSource {
    fn fetch_hourly(&self, metric: Metric, past_days: u32) -> Result<HourlySeries, FetchError> {
        debug!(path = %self.path.display(), metric = metric.label(), "reading forecast file");
        let text = fs::read_to_string(&self.path).map_err(|source| FetchError::ReadFile {
            path: self.path.clone(),
            source,
        })?;
        let response =
            serde_json::from_str::<ForecastResponse>(&text).map_err(FetchError::Parse)?;
        response.into_series(metric, past_days)
    }
}
