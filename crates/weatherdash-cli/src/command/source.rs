use std::path::PathBuf;

use anyhow::{Context as _, ensure};
use tracing::info;
use weatherdash_client::{ClientConfig, FileSource, HourlySource, OpenMeteoClient};

use crate::util;

/// Where hourly data comes from, shared by every mode.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SourceArg {
    /// Client configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Latitude of the location, overriding the configuration
    #[arg(long, global = true, allow_negative_numbers = true)]
    latitude: Option<f64>,
    /// Longitude of the location, overriding the configuration
    #[arg(long, global = true, allow_negative_numbers = true)]
    longitude: Option<f64>,
    /// IANA time zone of the returned timestamps, overriding the configuration
    #[arg(long, global = true)]
    timezone: Option<String>,
    /// Read hourly data from a saved forecast response instead of the API
    #[arg(long, global = true, value_name = "PATH")]
    offline: Option<PathBuf>,
}

impl SourceArg {
    /// Loads the configuration file (if any) and applies command line overrides.
    pub(crate) fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_json_file::<ClientConfig, _>("config", path)?,
            None => ClientConfig::default(),
        };
        if let Some(latitude) = self.latitude {
            config.location.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            config.location.longitude = longitude;
        }
        if let Some(timezone) = &self.timezone {
            config.location.timezone.clone_from(timezone);
        }

        let location = &config.location;
        ensure!(
            (-90.0..=90.0).contains(&location.latitude),
            "Latitude out of range: {}",
            location.latitude
        );
        ensure!(
            (-180.0..=180.0).contains(&location.longitude),
            "Longitude out of range: {}",
            location.longitude
        );
        Ok(config)
    }

    /// Short description of the source for status lines.
    pub(crate) fn describe(&self) -> anyhow::Result<String> {
        if let Some(path) = &self.offline {
            return Ok(format!("offline: {}", path.display()));
        }
        let config = self.client_config()?;
        let location = &config.location;
        Ok(format!(
            "{:.4}, {:.4} ({})",
            location.latitude, location.longitude, location.timezone
        ))
    }

    pub(crate) fn open(&self) -> anyhow::Result<Box<dyn HourlySource + Send>> {
        if let Some(path) = &self.offline {
            info!(path = %path.display(), "reading hourly data from file");
            return Ok(Box::new(FileSource::new(path)));
        }

        let config = self.client_config()?;
        info!(
            latitude = config.location.latitude,
            longitude = config.location.longitude,
            timezone = %config.location.timezone,
            api = %config.api_base,
            "fetching hourly data from the forecast API"
        );
        let client = OpenMeteoClient::new(config).context("Failed to create HTTP client")?;
        Ok(Box::new(client))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = SourceArg::default().client_config().unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_config_file() {
        let path = env::temp_dir().join(format!("weatherdash-config-{}.json", process::id()));
        fs::write(
            &path,
            r#"{ "location": { "latitude": 60.17, "longitude": 24.94, "timezone": "UTC" },
                 "timeout_secs": 5 }"#,
        )
        .unwrap();

        let arg = SourceArg {
            config: Some(path.clone()),
            longitude: Some(25.0),
            timezone: Some("Europe/Helsinki".to_owned()),
            ..SourceArg::default()
        };
        let config = arg.client_config().unwrap();
        assert_eq!(config.location.latitude, 60.17);
        assert_eq!(config.location.longitude, 25.0);
        assert_eq!(config.location.timezone, "Europe/Helsinki");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_base, ClientConfig::default().api_base);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let arg = SourceArg {
            latitude: Some(91.0),
            ..SourceArg::default()
        };
        assert!(arg.client_config().is_err());
    }

    #[test]
    fn test_offline_description() {
        let arg = SourceArg {
            offline: Some(PathBuf::from("saved.json")),
            ..SourceArg::default()
        };
        assert_eq!(arg.describe().unwrap(), "offline: saved.json");
    }
}
