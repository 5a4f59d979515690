//! Summary statistics for weather readings.
//!
//! This crate computes the figures shown next to every dashboard chart:
//!
//! - **Summary statistics**: mean, median, mode, range, min and max
//! - **Mode**: most frequent value(s) with an explicit "no dominant value" outcome
//!
//! The computations know nothing about metrics or timestamps; they operate on
//! plain `f64` samples and never depend on the order of the input.
//!
//! # Modules
//!
//! - [`summary`]: Summary statistics over a sample
//! - [`mode`]: Mode computation and its display form
//!
//! # Examples
//!
//! ```
//! use weatherdash_stats::summary::SummaryStats;
//!
//! let values = [12.5, 11.0, 12.5, 14.0];
//! let stats = SummaryStats::new(values).unwrap();
//! assert_eq!(stats.mode.to_string(), "12.5");
//! assert_eq!(stats.range, 3.0);
//! ```
//!
//! An empty sample has no statistics:
//!
//! ```
//! use weatherdash_stats::summary::SummaryStats;
//!
//! assert!(SummaryStats::new(Vec::<f64>::new()).is_none());
//! ```

pub mod mode;
pub mod summary;
