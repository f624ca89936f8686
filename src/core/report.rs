use chrono::{DateTime, Utc};

/// Offset shown when the place string carries no "45km N of ..." phrase.
pub const NEAR_THE: &str = "Near the";

const OFFSET_SEPARATOR: &str = " of ";

/// Magnitude with one decimal place, e.g. "6.2".
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{:.1}", magnitude)
}

/// Severity bucket 1..=10 from the floored magnitude. Everything below 2
/// (negative magnitudes included) lands in band 1, 10 and above in band 10.
pub fn magnitude_band(magnitude: f64) -> u8 {
    let floor = magnitude.floor();
    if floor < 2.0 {
        1
    } else if floor >= 10.0 {
        10
    } else {
        floor as u8
    }
}

/// Splits "45km N of Example City" into ("45km N of", "Example City").
/// Without an offset phrase, the whole place becomes the primary location
/// behind a "Near the" prefix.
pub fn split_location(place: &str) -> (String, String) {
    match place.find(OFFSET_SEPARATOR) {
        Some(idx) => (
            place[..idx + 3].to_string(),
            place[idx + 4..].to_string(),
        ),
        None => (NEAR_THE.to_string(), place.to_string()),
    }
}

/// Event date in UTC, e.g. "Jul 14, 2017". Out-of-range millis render empty.
pub fn format_date(occurred_at_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(occurred_at_millis)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Event time of day in UTC, e.g. "2:40 AM".
pub fn format_time(occurred_at_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(occurred_at_millis)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
