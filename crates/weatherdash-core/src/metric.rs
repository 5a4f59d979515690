use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WindowSpec;

/// RGB color used to draw a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Weather metric shown on the dashboard.
///
/// Everything that differs between metrics (API field, unit, label, color)
/// is resolved here, so the statistics and selection code stay generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Precipitation,
    WindSpeed,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Precipitation, Self::WindSpeed];

    /// Name of the hourly variable in the forecast API.
    #[must_use]
    pub const fn api_field(self) -> &'static str {
        match self {
            Self::Temperature => "temperature_2m",
            Self::Precipitation => "precipitation",
            Self::WindSpeed => "windspeed_10m",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Precipitation => "mm",
            Self::WindSpeed => "km/h",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Precipitation => "Rainfall",
            Self::WindSpeed => "Wind Speed",
        }
    }

    /// Label of the plotted series, e.g. `Rainfall (mm)`.
    #[must_use]
    pub fn series_label(self) -> String {
        format!("{} ({})", self.label(), self.unit())
    }

    #[must_use]
    pub const fn color(self) -> DisplayColor {
        match self {
            Self::Temperature => DisplayColor::rgb(255, 159, 64),
            Self::Precipitation => DisplayColor::rgb(54, 162, 235),
            Self::WindSpeed => DisplayColor::rgb(255, 99, 132),
        }
    }

    /// Window selected when the metric is first shown.
    #[must_use]
    pub const fn default_window(self) -> WindowSpec {
        match self {
            Self::Temperature => WindowSpec::LastNReadings(20),
            Self::Precipitation | Self::WindSpeed => WindowSpec::LastDDays(1),
        }
    }

    /// Position of the metric in [`Metric::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Temperature => 0,
            Self::Precipitation => 1,
            Self::WindSpeed => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, metric) in Metric::ALL.into_iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_cycling() {
        assert_eq!(Metric::Temperature.next(), Metric::Precipitation);
        assert_eq!(Metric::WindSpeed.next(), Metric::Temperature);
        assert_eq!(Metric::Temperature.prev(), Metric::WindSpeed);
    }

    #[test]
    fn test_series_label() {
        assert_eq!(Metric::Precipitation.series_label(), "Rainfall (mm)");
        assert_eq!(Metric::WindSpeed.series_label(), "Wind Speed (km/h)");
    }

    #[test]
    fn test_default_windows() {
        assert_eq!(
            Metric::Temperature.default_window(),
            WindowSpec::LastNReadings(20)
        );
        assert_eq!(Metric::WindSpeed.default_window(), WindowSpec::LastDDays(1));
    }
}
