//! Hourly weather data sources.
//!
//! [`OpenMeteoClient`] queries the Open-Meteo forecast API over HTTP;
//! [`FileSource`] serves a previously saved API response from disk. Both
//! implement [`HourlySource`] and return an [`HourlySeries`] per metric.
//!
//! [`HourlySeries`]: weatherdash_core::HourlySeries

pub use self::{
    config::{ClientConfig, Location},
    file::FileSource,
    open_meteo::OpenMeteoClient,
    response::{ForecastResponse, HourlyBlock},
    source::{FetchError, HourlySource},
};

mod config;
mod file;
mod open_meteo;
mod response;
mod source;
