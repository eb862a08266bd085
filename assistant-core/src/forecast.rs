use chrono::NaiveDate;

use crate::{
    error::{AssistantError, Result},
    model::{ForecastEntry, ForecastFeed},
};

/// First entry in feed order whose date is `date`.
///
/// Feeds are chronological, so this is the earliest slot of that day.
/// `horizon_days` is only used to explain a miss to the user.
pub fn find_for_date(
    feed: &ForecastFeed,
    date: NaiveDate,
    horizon_days: u32,
) -> Result<&ForecastEntry> {
    feed.entries
        .iter()
        .find(|entry| entry.date() == date)
        .ok_or_else(|| AssistantError::ForecastUnavailable {
            city: feed.city.clone(),
            date,
            horizon_days,
        })
}
