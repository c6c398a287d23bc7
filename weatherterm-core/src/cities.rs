//! Bundled city directory and startup lookup.

use crate::{error::Error, model::City};

/// OpenWeatherMap city list bundled into the binary.
const BUNDLED_DATASET: &str = include_str!("../data/city.list.min.json");

/// Read-only directory of known cities, loaded once at startup.
///
/// Dataset order is preserved exactly as loaded: lookups scan linearly and
/// the first match wins, so duplicate entries resolve deterministically.
#[derive(Debug, Clone)]
pub struct CityDirectory {
    cities: Vec<City>,
}

impl CityDirectory {
    /// Load the directory from the dataset bundled into the binary.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a directory from a JSON array of `{id, name, country}` records.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let cities = serde_json::from_str(json).map_err(Error::Dataset)?;
        Ok(Self { cities })
    }

    /// Look up a city by country code and city name.
    ///
    /// Both fields are compared case-insensitively; no trimming or other
    /// normalization is applied. A miss is a `CityNotFound` error for the
    /// caller to treat as fatal or not.
    pub fn resolve(&self, country: &str, name: &str) -> Result<&City, Error> {
        let country_folded = country.to_lowercase();
        let name_folded = name.to_lowercase();

        self.cities
            .iter()
            .find(|city| {
                city.country.to_lowercase() == country_folded
                    && city.name.to_lowercase() == name_folded
            })
            .ok_or_else(|| Error::CityNotFound {
                country: country.to_string(),
                city: name.to_string(),
            })
    }
}

impl From<Vec<City>> for CityDirectory {
    fn from(cities: Vec<City>) -> Self {
        Self { cities }
    }
}
