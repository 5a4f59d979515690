use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::warn;
use weatherdash_core::{HourlySeries, Metric, Reading};

use crate::FetchError;

/// Body of an Open-Meteo forecast response.
///
/// Only the `hourly` block is read; other top-level fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub hourly: HourlyBlock,
}

/// Parallel arrays of timestamps and per-variable values.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub variables: HashMap<String, Vec<Option<f64>>>,
}

impl ForecastResponse {
    /// Converts the response into the series of `metric`.
    ///
    /// Hours without a value (`null`) are dropped. Timestamps that are not
    /// strictly increasing are reported but kept in the delivered order.
    pub fn into_series(mut self, metric: Metric, past_days: u32) -> Result<HourlySeries, FetchError> {
        let field = metric.api_field();
        let values = self
            .hourly
            .variables
            .remove(field)
            .ok_or_else(|| FetchError::MissingSeries {
                field: field.to_owned(),
            })?;
        let times = self.hourly.time;
        if times.len() != values.len() {
            return Err(FetchError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }

        let mut readings = Vec::with_capacity(values.len());
        let mut missing = 0;
        for (time, value) in times.iter().zip(values) {
            let timestamp = parse_timestamp(time)?;
            match value {
                Some(value) => readings.push(Reading::new(timestamp, value)),
                None => missing += 1,
            }
        }
        if missing > 0 {
            warn!(field, missing, "dropped hours without a value");
        }

        let series = HourlySeries::new(metric, past_days, readings);
        if !series.is_chronological() {
            warn!(field, "timestamps are not strictly increasing");
        }
        Ok(series)
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, FetchError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| value.parse::<NaiveDateTime>())
        .map_err(|source| FetchError::InvalidTimestamp {
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const RESPONSE: &str = r#"{
        "latitude": 61.5,
        "longitude": 23.75,
        "timezone": "Europe/Helsinki",
        "hourly_units": { "time": "iso8601", "precipitation": "mm" },
        "hourly": {
            "time": ["2024-05-01T00:00", "2024-05-01T01:00", "2024-05-01T02:00"],
            "precipitation": [0.0, null, 1.2],
            "windspeed_10m": [3.1, 4.5, 5.0]
        }
    }"#;

    fn parse(json: &str) -> ForecastResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_series_for_requested_metric() {
        let series = parse(RESPONSE).into_series(Metric::WindSpeed, 1).unwrap();
        assert_eq!(series.metric, Metric::WindSpeed);
        assert_eq!(series.past_days, 1);
        assert_eq!(
            series.readings.iter().map(|r| r.value).collect::<Vec<_>>(),
            [3.1, 4.5, 5.0]
        );
        assert_eq!(
            series.readings[1].timestamp,
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_null_values_are_dropped() {
        let series = parse(RESPONSE)
            .into_series(Metric::Precipitation, 1)
            .unwrap();
        assert_eq!(series.readings.len(), 2);
        assert_eq!(series.readings[1].value, 1.2);
    }

    #[test]
    fn test_missing_series() {
        let err = parse(RESPONSE)
            .into_series(Metric::Temperature, 1)
            .unwrap_err();
        assert!(matches!(err, FetchError::MissingSeries { ref field } if field == "temperature_2m"));
        assert_eq!(err.to_string(), "response has no hourly `temperature_2m` series");
    }

    #[test]
    fn test_length_mismatch() {
        let json = r#"{ "hourly": { "time": ["2024-05-01T00:00"], "precipitation": [0.1, 0.2] } }"#;
        let err = parse(json).into_series(Metric::Precipitation, 1).unwrap_err();
        assert!(matches!(
            err,
            FetchError::LengthMismatch {
                times: 1,
                values: 2
            }
        ));
    }

    #[test]
    fn test_invalid_timestamp() {
        let json = r#"{ "hourly": { "time": ["yesterday"], "precipitation": [0.1] } }"#;
        let err = parse(json).into_series(Metric::Precipitation, 1).unwrap_err();
        assert!(matches!(err, FetchError::InvalidTimestamp { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn test_timestamps_with_seconds() {
        let json = r#"{ "hourly": { "time": ["2024-05-01T00:00:00"], "precipitation": [0.1] } }"#;
        let series = parse(json).into_series(Metric::Precipitation, 1).unwrap();
        assert_eq!(series.readings.len(), 1);
    }

    #[test]
    fn test_unordered_timestamps_are_kept_in_order() {
        let json = r#"{ "hourly": {
            "time": ["2024-05-01T02:00", "2024-05-01T01:00"],
            "precipitation": [2.0, 1.0]
        } }"#;
        let series = parse(json).into_series(Metric::Precipitation, 1).unwrap();
        assert!(!series.is_chronological());
        assert_eq!(series.readings[0].value, 2.0);
    }
}
