use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the core crate.
///
/// Every variant is terminal for a reporter process: there is no retry or
/// backoff layer, a failed cycle ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured unit system is not `metric` or `imperial`.
    #[error("invalid unit '{0}', valid units are metric and imperial")]
    InvalidUnit(String),

    /// The country code and city name matched nothing in the city directory.
    #[error("city not found using country code '{country}' and city name '{city}'")]
    CityNotFound { country: String, city: String },

    /// The bundled city dataset could not be decoded.
    #[error("unable to parse city dataset: {0}")]
    Dataset(#[source] serde_json::Error),

    /// The weather provider could not produce a report.
    #[error("unable to get weather: {0}")]
    WeatherUnavailable(#[from] FetchError),

    /// The report sink rejected a write.
    #[error("unable to write weather report: {0}")]
    WriteFailure(#[from] std::io::Error),
}

/// What went wrong talking to the weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no weather condition")]
    NoConditions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_is_tagged_as_weather_unavailable() {
        let err = Error::from(FetchError::NoConditions);

        assert!(matches!(err, Error::WeatherUnavailable(_)));
        assert!(err.to_string().contains("unable to get weather"));
    }

    #[test]
    fn city_not_found_names_both_fields() {
        let err = Error::CityNotFound { country: "US".into(), city: "Unknown City".into() };

        let msg = err.to_string();
        assert!(msg.contains("'US'"));
        assert!(msg.contains("'Unknown City'"));
    }
}
