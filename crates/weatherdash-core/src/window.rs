use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Reading, Sample};

/// The time window a user selected for analysis.
///
/// Count-based windows are truncated locally. Day-based windows are handled
/// by requesting exactly that many past days from the data source, so
/// selecting one keeps the fetched series unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowSpec {
    /// The most recent `n` readings.
    LastNReadings(usize),
    /// Everything fetched for the last `d` days.
    LastDDays(u32),
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self::LastDDays(1)
    }
}

impl WindowSpec {
    /// Windows offered by the selector, in menu order.
    pub const CHOICES: [Self; 5] = [
        Self::LastNReadings(20),
        Self::LastDDays(1),
        Self::LastDDays(2),
        Self::LastDDays(3),
        Self::LastDDays(7),
    ];

    /// Maps a selector value to a window.
    ///
    /// Unrecognized values fall back to the last day.
    ///
    /// ```
    /// # use weatherdash_core::WindowSpec;
    /// assert_eq!(WindowSpec::from_selection("20"), WindowSpec::LastNReadings(20));
    /// assert_eq!(WindowSpec::from_selection("168"), WindowSpec::LastDDays(7));
    /// assert_eq!(WindowSpec::from_selection("xyz"), WindowSpec::LastDDays(1));
    /// ```
    #[must_use]
    pub fn from_selection(selection: &str) -> Self {
        match selection {
            "20" => Self::LastNReadings(20),
            "48" => Self::LastDDays(2),
            "72" => Self::LastDDays(3),
            "168" => Self::LastDDays(7),
            _ => Self::LastDDays(1),
        }
    }

    /// Returns the selector value for this window.
    ///
    /// This is the inverse of [`from_selection`](Self::from_selection) for the
    /// windows in [`CHOICES`](Self::CHOICES).
    #[must_use]
    pub fn selection(self) -> String {
        match self {
            Self::LastNReadings(n) => n.to_string(),
            Self::LastDDays(d) => (u64::from(d) * 24).to_string(),
        }
    }

    /// Number of past days to request from the data source.
    #[must_use]
    pub fn past_days(self) -> u32 {
        match self {
            Self::LastNReadings(_) => 1,
            Self::LastDDays(d) => d,
        }
    }

    /// Selects the readings covered by this window.
    ///
    /// `LastNReadings(n)` keeps the last `min(n, len)` readings in their
    /// original order; `LastDDays(_)` keeps the whole series.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use weatherdash_core::{Reading, WindowSpec};
    /// let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let series = (0..30)
    ///     .map(|h| Reading::new(start + chrono::Duration::hours(h), h as f64))
    ///     .collect::<Vec<_>>();
    ///
    /// let sample = WindowSpec::LastNReadings(20).select(&series);
    /// assert_eq!(sample.len(), 20);
    /// assert_eq!(sample.readings()[0].value, 10.0);
    ///
    /// assert_eq!(WindowSpec::LastDDays(2).select(&series).len(), 30);
    /// ```
    #[must_use]
    pub fn select(self, series: &[Reading]) -> Sample<'_> {
        match self {
            Self::LastNReadings(n) => Sample::new(&series[series.len().saturating_sub(n)..]),
            Self::LastDDays(_) => Sample::new(series),
        }
    }

    /// The next window in [`CHOICES`](Self::CHOICES), wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = self.choice_index().map_or(0, |i| (i + 1) % Self::CHOICES.len());
        Self::CHOICES[index]
    }

    /// The previous window in [`CHOICES`](Self::CHOICES), wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let index = self
            .choice_index()
            .and_then(|i| i.checked_sub(1))
            .unwrap_or(Self::CHOICES.len() - 1);
        Self::CHOICES[index]
    }

    fn choice_index(self) -> Option<usize> {
        Self::CHOICES.iter().position(|&choice| choice == self)
    }
}

impl FromStr for WindowSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selection(s))
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastNReadings(n) => write!(f, "Last {n} readings"),
            Self::LastDDays(7) => f.write_str("Last 7 days"),
            Self::LastDDays(d) => write!(f, "Last {} hours", u64::from(*d) * 24),
        }
    }
}
