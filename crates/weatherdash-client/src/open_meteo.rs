use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};
use weatherdash_core::{HourlySeries, Metric};

use crate::{ClientConfig, FetchError, ForecastResponse, HourlySource};

/// Blocking HTTP client for the Open-Meteo forecast API.
#[derive(Debug)]
pub struct OpenMeteoClient {
    config: ClientConfig,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Http)?;
        Ok(Self { config, http })
    }
}

impl HourlySource for OpenMeteoClient {
    fn fetch_hourly(&self, metric: Metric, past_days: u32) -> Result<HourlySeries, FetchError> {
        let url = self.config.request_url(metric, past_days)?;
        debug!(%url, "requesting hourly data");

        let response = self
            .http
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(FetchError::Http)?;
        let body = response
            .json::<ForecastResponse>()
            .map_err(FetchError::Http)?;
        let series = body.into_series(metric, past_days)?;

        info!(
            metric = metric.label(),
            past_days,
            readings = series.readings.len(),
            "fetched hourly data"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_configured_user_agent() {
        let config = ClientConfig {
            user_agent: "weatherdash-test/1.0".to_owned(),
            ..ClientConfig::default()
        };
        assert!(OpenMeteoClient::new(config).is_ok());
    }

    #[test]
    fn test_rejects_invalid_user_agent() {
        let config = ClientConfig {
            user_agent: "bad\nagent".to_owned(),
            ..ClientConfig::default()
        };
        let err = OpenMeteoClient::new(config).unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
