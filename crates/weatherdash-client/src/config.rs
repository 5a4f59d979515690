use reqwest::Url;
use serde::{Deserialize, Serialize};
use weatherdash_core::Metric;

use crate::FetchError;

/// Geographic location the dashboard reports on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA time zone used for the returned timestamps.
    pub timezone: String,
}

impl Default for Location {
    /// Tampere, Finland.
    fn default() -> Self {
        Self {
            latitude: 61.4991,
            longitude: 23.7871,
            timezone: "Europe/Helsinki".to_owned(),
        }
    }
}

/// Settings for requesting data from the forecast API.
///
/// Missing fields in a configuration file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub location: Location,
    pub api_base: String,
    /// Number of forecast days to include; the API default is used when unset.
    pub forecast_days: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            location: Location::default(),
            api_base: "https://api.open-meteo.com/v1/forecast".to_owned(),
            forecast_days: None,
            timeout_secs: 30,
            user_agent: concat!("weatherdash/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl ClientConfig {
    /// Builds the request URL for `metric` over the last `past_days` days.
    pub fn request_url(&self, metric: Metric, past_days: u32) -> Result<Url, FetchError> {
        let Location {
            latitude,
            longitude,
            timezone,
        } = &self.location;
        let mut params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("hourly", metric.api_field().to_owned()),
            ("past_days", past_days.to_string()),
            ("timezone", timezone.clone()),
        ];
        if let Some(days) = self.forecast_days {
            params.push(("forecast_days", days.to_string()));
        }
        Url::parse_with_params(&self.api_base, &params).map_err(|e| FetchError::InvalidBaseUrl {
            url: self.api_base.clone(),
            reason: e.to_string(),
        })
    }
}
