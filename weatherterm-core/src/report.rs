//! Fixed-layout rendering of a weather report.

use crate::model::Weather;

/// Icon leading the temperature segment.
pub const THERMOMETER_ICON: &str = "🌡";
/// Icon leading the wind segment.
pub const WIND_ICON: &str = "💨";
/// Wind speed is always labelled in meters per second.
pub const WIND_SPEED_UNIT: &str = "m/s";

/// Fixed message emitted in place of a report when a cycle fails.
pub const FALLBACK_REPORT: &str = "⚠️ Unable to Get Weather";

/// Render a weather record into the single-line report layout.
///
/// Pure function: identical input always yields the identical string.
pub fn render(weather: &Weather) -> String {
    let conditions = format!(
        "{}   {}{} {}",
        THERMOMETER_ICON,
        weather.temperature,
        weather.unit.icon(),
        weather.icon
    );
    let wind = format!(
        "{}   {}{} {}",
        WIND_ICON, weather.wind.speed, WIND_SPEED_UNIT, weather.wind.direction
    );

    format!("{conditions}  {wind}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Unit, Wind};

    fn weather(unit: Unit) -> Weather {
        Weather {
            temperature: 20.5,
            unit,
            icon: "☀️".to_string(),
            wind: Wind { speed: 5.0, direction: "N".to_string() },
        }
    }

    #[test]
    fn renders_the_fixed_metric_layout() {
        let report = render(&weather(Unit::Metric));

        assert_eq!(report, "🌡   20.5°C ☀️  💨   5m/s N");
    }

    #[test]
    fn renders_the_fixed_imperial_layout() {
        let report = render(&weather(Unit::Imperial));

        assert_eq!(report, "🌡   20.5°F ☀️  💨   5m/s N");
    }

    #[test]
    fn whole_number_temperatures_drop_the_fraction() {
        let mut weather = weather(Unit::Metric);
        weather.temperature = -2.0;

        assert!(render(&weather).contains("-2°C"));
    }

    #[test]
    fn unmapped_icon_and_direction_render_as_empty() {
        let weather = Weather {
            temperature: 1.0,
            unit: Unit::Metric,
            icon: String::new(),
            wind: Wind { speed: 0.0, direction: String::new() },
        };

        assert_eq!(render(&weather), "🌡   1°C   💨   0m/s ");
    }

    #[test]
    fn render_is_deterministic() {
        let weather = weather(Unit::Metric);

        assert_eq!(render(&weather), render(&weather));
    }
}
