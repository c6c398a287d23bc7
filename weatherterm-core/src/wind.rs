//! Bucketing of wind direction degrees onto compass labels.

/// Half-width of the window each compass point owns, in degrees.
const HALF_WINDOW: f32 = 11.25;

/// Compass points in lookup order.
///
/// 0° and 360° both carry "N" so that degrees on either side of the wrap
/// boundary (e.g. 359° and 1°) resolve to the same label.
const COMPASS_POINTS: [(f32, &str); 17] = [
    (0.0, "N"),
    (360.0, "N"),
    (22.5, "NNE"),
    (45.0, "NE"),
    (67.5, "ENE"),
    (90.0, "E"),
    (112.5, "ESE"),
    (135.0, "SE"),
    (157.5, "SSE"),
    (180.0, "S"),
    (202.5, "SSW"),
    (225.0, "SW"),
    (247.5, "WSW"),
    (270.0, "W"),
    (292.5, "WNW"),
    (315.0, "NW"),
    (337.5, "NNW"),
];

/// Map a wind direction in degrees onto a compass label.
///
/// Degrees outside [0, 360] match no bucket and yield `None`; that is an
/// unknown direction, not an error.
pub fn compass_label(degrees: f32) -> Option<&'static str> {
    COMPASS_POINTS
        .iter()
        .find(|(center, _)| within_window(degrees, *center))
        .map(|(_, label)| *label)
}

/// The 0° and 360° points keep only the half of their window that lies inside
/// [0, 360]; every other point owns the full window around its center.
fn within_window(degrees: f32, center: f32) -> bool {
    if center == 0.0 {
        degrees >= center && degrees < center + HALF_WINDOW
    } else if center == 360.0 {
        degrees <= center && degrees > center - HALF_WINDOW
    } else {
        (degrees >= center && degrees < center + HALF_WINDOW)
            || (degrees <= center && degrees > center - HALF_WINDOW)
    }
}
