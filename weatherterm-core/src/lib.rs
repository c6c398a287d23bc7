//! Core library for the `weatherterm` CLI.
//!
//! This crate defines:
//! - The bundled city directory and startup lookup
//! - Wind-direction bucketing onto compass labels
//! - Abstraction over weather providers and the OpenWeatherMap client
//! - Report formatting, report sinks, and the periodic report loop
//!
//! It is used by `weatherterm-cli`, but can also be reused by other binaries or services.

pub mod cities;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod scheduler;
pub mod sink;
pub mod wind;

pub use cities::CityDirectory;
pub use config::Config;
pub use error::{Error, FetchError};
pub use model::{City, Unit, Weather, Wind};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use report::FALLBACK_REPORT;
pub use sink::{FileSink, ReportSink, StdoutSink};
