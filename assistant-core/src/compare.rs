use chrono::NaiveDate;
use tracing::info;

use crate::{
    display::{capitalize, decimal, round1},
    error::{AssistantError, Result},
    forecast::find_for_date,
    model::{ComparisonResult, DailyOutlookEntry, ForecastFeed, WeatherSnapshot},
    outlook::{OUTLOOK_DAYS, daily_outlook},
    prompt,
    provider::WeatherProvider,
};

/// `b - a` for temperature (one decimal) and humidity (exact).
pub fn compare_snapshots(a: &WeatherSnapshot, b: &WeatherSnapshot) -> ComparisonResult {
    ComparisonResult {
        city_a: a.clone(),
        city_b: b.clone(),
        temperature_delta: round1(b.temperature_c - a.temperature_c),
        humidity_delta: i16::from(b.humidity_pct) - i16::from(a.humidity_pct),
    }
}

/// Everything the travel mode prints and asks the suggestion provider about.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelPlan {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
    pub comparison: ComparisonResult,
    /// Up to three days of the destination's forecast.
    pub outlook: Vec<DailyOutlookEntry>,
}

impl TravelPlan {
    pub fn title(&self) -> String {
        match self.date {
            Some(date) => format!(
                "Travel Weather Comparison: {} vs {} on {date}",
                self.origin, self.destination
            ),
            None => format!("Travel Weather Comparison: {} vs {}", self.origin, self.destination),
        }
    }

    pub fn comparison_lines(&self) -> Vec<String> {
        let c = &self.comparison;
        vec![
            city_line(&self.origin, &c.city_a),
            city_line(&self.destination, &c.city_b),
            String::new(),
            format!("Temperature difference: {}°C", decimal(c.temperature_delta)),
            format!("Humidity difference: {}%", c.humidity_delta),
        ]
    }

    pub fn outlook_lines(&self) -> Vec<String> {
        self.outlook
            .iter()
            .map(|day| {
                format!("{}: {}°C, {}", day.date, decimal(day.temperature_c), day.description)
            })
            .collect()
    }

    pub fn travel_prompt(&self) -> String {
        prompt::travel(
            &self.origin,
            &self.comparison.city_a,
            &self.destination,
            &self.comparison.city_b,
        )
    }

    /// Packing prompt, represented by the last outlook day when there is one.
    pub fn packing_prompt(&self) -> String {
        prompt::packing(
            &self.origin,
            &self.destination,
            &self.comparison.city_b,
            self.outlook.last(),
        )
    }
}

fn city_line(city: &str, s: &WeatherSnapshot) -> String {
    format!(
        "{city}: {}°C, {}% humidity, {} m/s wind",
        decimal(s.temperature_c),
        s.humidity_pct,
        decimal(s.wind_speed_mps)
    )
}

/// Compare `origin` and `destination`, now or on a shared `date`.
///
/// Either city failing fails the whole plan.
pub async fn plan_trip(
    provider: &dyn WeatherProvider,
    origin: &str,
    destination: &str,
    date: Option<NaiveDate>,
) -> Result<TravelPlan> {
    let (a, b, destination_feed) = match date {
        Some(date) => {
            info!(origin, destination, %date, "comparing forecasts");
            let horizon = provider.id().forecast_horizon_days();

            let origin_feed = forecast_on(provider, origin, date, horizon).await?;
            let a = find_for_date(&origin_feed, date, horizon)?.snapshot.clone();

            let destination_feed = forecast_on(provider, destination, date, horizon).await?;
            let b = find_for_date(&destination_feed, date, horizon)?.snapshot.clone();

            (a, b, destination_feed)
        }
        None => {
            info!(origin, destination, "comparing current conditions");
            let a = provider.current(origin).await?.snapshot;
            let b = provider.current(destination).await?.snapshot;
            let destination_feed = provider.forecast(destination).await?;
            (a, b, destination_feed)
        }
    };

    Ok(TravelPlan {
        origin: capitalize(origin),
        destination: capitalize(destination),
        date,
        comparison: compare_snapshots(&a, &b),
        outlook: daily_outlook(&destination_feed, OUTLOOK_DAYS),
    })
}

/// A dated comparison reports any city without a forecast for `date` the
/// same way, whether the provider knows the city or not.
async fn forecast_on(
    provider: &dyn WeatherProvider,
    city: &str,
    date: NaiveDate,
    horizon_days: u32,
) -> Result<ForecastFeed> {
    provider.forecast(city).await.map_err(|err| match err {
        AssistantError::CityNotFound { city } => {
            AssistantError::ForecastUnavailable { city, date, horizon_days }
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        date::resolve_day_month,
        error::AssistantError,
        forecast::tests::{entry, feed},
        provider::tests::{FakeProvider, snapshot},
    };

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deltas_are_destination_minus_origin() {
        let a = snapshot(18.0, 60, 3.2, "clear sky");
        let b = snapshot(24.25, 72, 1.0, "light rain");

        let c = compare_snapshots(&a, &b);
        assert_eq!(c.temperature_delta, 6.2);
        assert_eq!(c.humidity_delta, 12);
    }

    #[test]
    fn temperature_delta_ties_round_to_even() {
        let a = snapshot(18.0, 60, 3.2, "clear sky");

        let c = compare_snapshots(&a, &snapshot(20.25, 60, 3.2, "clear sky"));
        assert_eq!(c.temperature_delta, 2.2);

        let c = compare_snapshots(&a, &snapshot(18.75, 60, 3.2, "clear sky"));
        assert_eq!(c.temperature_delta, 0.8);
    }

    #[test]
    fn negative_deltas() {
        let a = snapshot(21.3, 90, 3.2, "mist");
        let b = snapshot(-4.0, 35, 7.5, "snow");

        let c = compare_snapshots(&a, &b);
        assert_eq!(c.temperature_delta, -25.3);
        assert_eq!(c.humidity_delta, -55);
    }

    #[test]
    fn humidity_delta_spans_full_range() {
        let c = compare_snapshots(&snapshot(0.0, 100, 0.0, ""), &snapshot(0.0, 0, 0.0, ""));
        assert_eq!(c.humidity_delta, -100);
        assert_eq!(c.temperature_delta, 0.0);
    }

    fn paris_and_tokyo() -> FakeProvider {
        FakeProvider::default()
            .with_current("Paris", snapshot(18.0, 60, 3.2, "clear sky"))
            .with_current("Tokyo", snapshot(24.5, 70, 1.0, "light rain"))
            .with_feed(feed(
                "Paris",
                vec![
                    entry("2025-10-22 00:00:00", 11.0, "fog"),
                    entry("2025-10-23 00:00:00", 12.0, "overcast clouds"),
                ],
            ))
            .with_feed(feed(
                "Tokyo",
                vec![
                    entry("2025-10-22 00:00:00", 20.0, "clear sky"),
                    entry("2025-10-22 03:00:00", 21.0, "few clouds"),
                    entry("2025-10-23 00:00:00", 19.5, "rain"),
                    entry("2025-10-24 00:00:00", 18.0, "thunderstorm"),
                    entry("2025-10-25 00:00:00", 17.0, "drizzle"),
                ],
            ))
    }

    #[tokio::test]
    async fn current_comparison_with_destination_outlook() {
        let plan = plan_trip(&paris_and_tokyo(), "paris", "tokyo", None).await.unwrap();

        assert_eq!(plan.title(), "Travel Weather Comparison: Paris vs Tokyo");
        assert_eq!(
            plan.comparison_lines(),
            vec![
                "Paris: 18.0°C, 60% humidity, 3.2 m/s wind",
                "Tokyo: 24.5°C, 70% humidity, 1.0 m/s wind",
                "",
                "Temperature difference: 6.5°C",
                "Humidity difference: 10%",
            ]
        );
        assert_eq!(
            plan.outlook_lines(),
            vec![
                "2025-10-22: 20.0°C, clear sky",
                "2025-10-23: 19.5°C, rain",
                "2025-10-24: 18.0°C, thunderstorm",
            ]
        );
        assert!(plan.travel_prompt().contains("between Paris (clear sky, 18.0°C"));
        assert!(plan.packing_prompt().contains("Destination weather: thunderstorm, 24.5°C"));
    }

    #[tokio::test]
    async fn forecast_comparison_on_resolved_date() {
        let resolved = resolve_day_month("23-10", ymd(2024, 11, 1)).unwrap();
        assert_eq!(resolved.date, ymd(2025, 10, 23));

        let plan = plan_trip(&paris_and_tokyo(), "Paris", "Tokyo", Some(resolved.date))
            .await
            .unwrap();

        assert_eq!(plan.comparison.city_a.description, "overcast clouds");
        assert_eq!(plan.comparison.city_b.description, "rain");
        assert_eq!(plan.comparison.temperature_delta, 7.5);
        assert_eq!(plan.title(), "Travel Weather Comparison: Paris vs Tokyo on 2025-10-23");
        assert_eq!(plan.outlook.len(), 3);
    }

    #[tokio::test]
    async fn missing_forecast_for_either_city_fails_whole_plan() {
        let err = plan_trip(&paris_and_tokyo(), "Paris", "Tokyo", Some(ymd(2025, 10, 24)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AssistantError::ForecastUnavailable { ref city, .. } if city == "Paris"
        ));

        let err = plan_trip(&paris_and_tokyo(), "Tokyo", "Paris", Some(ymd(2025, 10, 25)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AssistantError::ForecastUnavailable { ref city, .. } if city == "Paris"
        ));
    }

    #[tokio::test]
    async fn unknown_city_fails_whole_plan() {
        let err = plan_trip(&paris_and_tokyo(), "Paris", "Atlantis", None).await.unwrap_err();
        assert!(matches!(err, AssistantError::CityNotFound { ref city } if city == "Atlantis"));

        let err = plan_trip(&paris_and_tokyo(), "Atlantis", "Tokyo", None).await.unwrap_err();
        assert!(matches!(err, AssistantError::CityNotFound { .. }));
    }

    #[tokio::test]
    async fn unknown_city_with_date_is_forecast_unavailable() {
        let date = ymd(2025, 10, 23);

        let err = plan_trip(&paris_and_tokyo(), "Paris", "Atlantis", Some(date)).await.unwrap_err();
        match err {
            AssistantError::ForecastUnavailable { city, date: missing, horizon_days } => {
                assert_eq!(city, "Atlantis");
                assert_eq!(missing, date);
                assert_eq!(horizon_days, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = plan_trip(&paris_and_tokyo(), "Atlantis", "Tokyo", Some(date)).await.unwrap_err();
        assert!(matches!(
            err,
            AssistantError::ForecastUnavailable { ref city, .. } if city == "Atlantis"
        ));
    }

    #[tokio::test]
    async fn empty_destination_feed_falls_back_to_snapshot_description() {
        let provider = FakeProvider::default()
            .with_current("Paris", snapshot(18.0, 60, 3.2, "clear sky"))
            .with_current("Oslo", snapshot(2.0, 85, 6.0, "light snow"))
            .with_feed(feed("Oslo", vec![]));

        let plan = plan_trip(&provider, "Paris", "Oslo", None).await.unwrap();
        assert!(plan.outlook.is_empty());
        assert!(plan.packing_prompt().contains("Destination weather: light snow, 2.0°C"));
    }
}
