//! Weather readings, window selection and per-metric reports.
//!
//! The dashboard pipeline is: fetch an [`HourlySeries`] for a [`Metric`],
//! narrow it to a [`Sample`] with a [`WindowSpec`], then summarize it in a
//! [`MetricReport`] for the table, chart and statistics renderers.

pub use self::{
    metric::{DisplayColor, Metric},
    reading::{HourlySeries, Reading},
    report::{MetricReport, NO_READINGS, StatLine, TableRow},
    sample::Sample,
    window::WindowSpec,
};

pub mod metric;
pub mod reading;
pub mod report;
pub mod sample;
pub mod window;
