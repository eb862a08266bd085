use crate::model::{DailyOutlookEntry, ForecastFeed};

/// Number of distinct days shown for the travel destination.
pub const OUTLOOK_DAYS: usize = 3;

/// One entry per distinct calendar day, the first slot of each, for at most
/// `days` days.
pub fn daily_outlook(feed: &ForecastFeed, days: usize) -> Vec<DailyOutlookEntry> {
    let mut outlook: Vec<DailyOutlookEntry> = Vec::with_capacity(days);

    for entry in &feed.entries {
        if outlook.len() >= days {
            break;
        }
        let date = entry.date();
        if outlook.iter().any(|day| day.date == date) {
            continue;
        }
        outlook.push(DailyOutlookEntry {
            date,
            temperature_c: entry.snapshot.temperature_c,
            description: entry.snapshot.description.clone(),
        });
    }

    outlook
}
