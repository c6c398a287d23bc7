use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::Error;

/// Unit system used for temperature display and the provider query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Metric units, used by most countries.
    Metric,
    /// Imperial units, used by the US.
    Imperial,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    /// Icon paired with a temperature rendered in this unit.
    pub fn icon(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Unit::Metric),
            "imperial" => Ok(Unit::Imperial),
            other => Err(Error::InvalidUnit(other.to_string())),
        }
    }
}

/// One record of the bundled city dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct City {
    pub id: u64,
    pub name: String,
    /// ISO country code, e.g. "US".
    pub country: String,
}

/// Current conditions normalized from a provider response.
///
/// Constructed fresh per report cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub temperature: f32,
    pub unit: Unit,
    /// Display icon for the current condition; empty when the provider's
    /// condition code has no mapping.
    pub icon: String,
    pub wind: Wind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wind {
    pub speed: f32,
    /// Compass label, e.g. "NNE"; empty when the degree had no bucket.
    pub direction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parses_metric_and_imperial() {
        assert_eq!("metric".parse::<Unit>().unwrap(), Unit::Metric);
        assert_eq!("imperial".parse::<Unit>().unwrap(), Unit::Imperial);
    }

    #[test]
    fn unknown_unit_is_a_configuration_error() {
        let err = "unknown".parse::<Unit>().unwrap_err();

        assert!(matches!(err, Error::InvalidUnit(_)));
        assert!(err.to_string().contains("valid units are metric and imperial"));
    }

    #[test]
    fn unit_icon_follows_unit_system() {
        assert_eq!(Unit::Metric.icon(), "°C");
        assert_eq!(Unit::Imperial.icon(), "°F");
    }

    #[test]
    fn city_deserializes_from_dataset_record() {
        let city: City =
            serde_json::from_str(r#"{"id": 5128581, "name": "New York", "country": "US"}"#)
                .expect("record should deserialize");

        assert_eq!(city, City { id: 5128581, name: "New York".into(), country: "US".into() });
    }
}
