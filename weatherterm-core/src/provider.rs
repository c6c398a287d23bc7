use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::Error,
    model::{City, Unit, Weather},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current weather conditions.
///
/// Implementations make a single best-effort attempt per call: no retry,
/// no caching, no backoff. Each scheduler tick invokes this independently.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city, normalized into a [`Weather`]
    /// record.
    async fn report(&self, city: &City, unit: Unit) -> Result<Weather, Error>;
}
