use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{Error, FetchError},
    model::{City, Unit, Weather, Wind},
    wind,
};

use super::WeatherProvider;

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Upper bound on a single request so a hung remote cannot stall shutdown.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenWeatherMap client.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }

    async fn fetch_current(&self, city: &City, unit: Unit) -> Result<Weather, FetchError> {
        let city_id = city.id.to_string();

        let res = self
            .http
            .get(API_URL)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("id", city_id.as_str()),
                ("units", unit.as_str()),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OwResponse = serde_json::from_str(&body)?;
        weather_from_response(&parsed, unit)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn report(&self, city: &City, unit: Unit) -> Result<Weather, Error> {
        Ok(self.fetch_current(city, unit).await?)
    }
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f32,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f32,
    deg: f32,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    weather: Vec<OwCondition>,
    main: OwMain,
    wind: OwWind,
}

/// Normalize a decoded provider response into the domain record.
fn weather_from_response(parsed: &OwResponse, unit: Unit) -> Result<Weather, FetchError> {
    let condition = parsed.weather.first().ok_or(FetchError::NoConditions)?;

    Ok(Weather {
        temperature: parsed.main.temp,
        unit,
        icon: condition_icon(condition.id).to_string(),
        wind: Wind {
            speed: parsed.wind.speed,
            direction: wind::compass_label(parsed.wind.deg).unwrap_or_default().to_string(),
        },
    })
}

/// Display icons for OpenWeatherMap condition codes,
/// see <https://openweathermap.org/weather-conditions>.
///
/// An unmapped code renders as no icon, not as an error.
fn condition_icon(code: u32) -> &'static str {
    match code {
        // Group 2xx: Thunderstorm
        200..=202 | 230..=232 => "⛈️",
        210..=212 | 221 => "🌩️",

        // Group 3xx: Drizzle
        300..=302 | 310..=314 | 321 => "🌦️",

        // Group 5xx: Rain
        500..=504 | 520..=522 | 531 => "🌧️",
        511 => "🌨️", // freezing rain

        // Group 6xx: Snow
        600..=602 | 620..=622 => "❄️",
        611..=613 | 615 | 616 => "🌨️", // sleet

        // Group 7xx: Atmosphere
        701 | 721 | 741 => "🌫️", // mist, haze, fog
        711 | 731 | 751 | 761 => "💨", // smoke, dust, sand
        762 => "🌋", // volcanic ash
        771 => "🌬️", // squalls
        781 => "🌪️", // tornado

        // Group 800: Clear
        800 => "☀️",

        // Group 80x: Clouds
        801 => "🌤️",
        802 => "⛅",
        803 => "🌥️",
        804 => "☁️",

        _ => "",
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
