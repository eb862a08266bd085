//! Prompts sent to the suggestion provider.
//!
//! Numbers go through [`crate::display`] so the model sees exactly what the
//! report printed.

use chrono::NaiveDate;

use crate::{
    display::decimal,
    model::{DailyOutlookEntry, WeatherSnapshot},
};

fn conditions(s: &WeatherSnapshot) -> String {
    format!(
        "{}, {}°C, humidity {}%, wind {} m/s",
        s.description,
        decimal(s.temperature_c),
        s.humidity_pct,
        decimal(s.wind_speed_mps)
    )
}

/// Three activity ideas for one city, now or on `date`.
pub fn activities(city: &str, date: Option<NaiveDate>, snapshot: &WeatherSnapshot) -> String {
    match date {
        Some(date) => format!(
            "Weather forecast for {city} on {date}: {}.\n\
             Suggest 3 short, realistic activities for that day (no clothing advice).",
            conditions(snapshot)
        ),
        None => format!(
            "Current weather in {city}: {}.\n\
             Suggest 3 short, realistic activities based on this weather (no clothing advice).",
            conditions(snapshot)
        ),
    }
}

/// Which of two cities is better to visit.
pub fn travel(origin: &str, a: &WeatherSnapshot, destination: &str, b: &WeatherSnapshot) -> String {
    format!(
        "Compare weather for travel between {origin} ({}) and {destination} ({}). \
         Give a short, realistic travel recommendation: which city is better to visit and why.",
        conditions(a),
        conditions(b)
    )
}

/// Packing list for the destination.
///
/// `representative` is the day whose description stands for the trip; the
/// destination snapshot's own description is used when there is none.
pub fn packing(
    origin: &str,
    destination: &str,
    snapshot: &WeatherSnapshot,
    representative: Option<&DailyOutlookEntry>,
) -> String {
    let description =
        representative.map_or(snapshot.description.as_str(), |day| day.description.as_str());
    format!(
        "You are helping a traveler going from {origin} to {destination}. \
         Destination weather: {description}, {}°C, humidity {}%, wind {} m/s. \
         Suggest 4-5 short, practical items to pack for this trip.",
        decimal(snapshot.temperature_c),
        snapshot.humidity_pct,
        decimal(snapshot.wind_speed_mps)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(t: f64, h: u8, w: f64, d: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: t,
            humidity_pct: h,
            wind_speed_mps: w,
            description: d.to_string(),
        }
    }

    #[test]
    fn current_activity_prompt_uses_displayed_values() {
        let p = activities("Paris", None, &snap(18.0, 60, 3.2, "clear sky"));
        assert_eq!(
            p,
            "Current weather in Paris: clear sky, 18.0°C, humidity 60%, wind 3.2 m/s.\n\
             Suggest 3 short, realistic activities based on this weather (no clothing advice)."
        );
    }

    #[test]
    fn forecast_activity_prompt_names_the_day() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 23).unwrap();
        let p = activities("Paris", Some(date), &snap(12.5, 81, 5.0, "light rain"));
        assert!(p.starts_with("Weather forecast for Paris on 2025-10-23: light rain, 12.5°C"));
        assert!(p.contains("Suggest 3 short, realistic activities for that day"));
        assert!(p.contains("no clothing advice"));
    }

    #[test]
    fn travel_prompt_includes_both_snapshots() {
        let p = travel(
            "Paris",
            &snap(18.0, 60, 3.2, "clear sky"),
            "Tokyo",
            &snap(24.5, 70, 1.0, "light rain"),
        );
        assert!(p.contains("Paris (clear sky, 18.0°C, humidity 60%, wind 3.2 m/s)"));
        assert!(p.contains("Tokyo (light rain, 24.5°C, humidity 70%, wind 1.0 m/s)"));
        assert!(p.contains("which city is better to visit and why"));
    }

    #[test]
    fn packing_prompt_prefers_representative_day() {
        let day = DailyOutlookEntry {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            temperature_c: 19.0,
            description: "thunderstorm".to_string(),
        };
        let destination = snap(24.5, 70, 1.0, "light rain");

        let p = packing("Paris", "Tokyo", &destination, Some(&day));
        assert!(p.contains("going from Paris to Tokyo"));
        assert!(
            p.contains("Destination weather: thunderstorm, 24.5°C, humidity 70%, wind 1.0 m/s.")
        );

        let p = packing("Paris", "Tokyo", &destination, None);
        assert!(p.contains("Destination weather: light rain, 24.5°C"));
    }
}
