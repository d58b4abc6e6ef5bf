use crate::api::{Activity, Preferences};
use chrono::NaiveDate;

pub fn filter_by_category(activities: &[Activity], category: &str) -> Vec<Activity> {
    if category.is_empty() {
        return activities.to_vec();
    }
    activities
        .iter()
        .filter(|a| a.category == category)
        .cloned()
        .collect()
}

/// Next sessions from today on, soonest first, capped for the side list.
pub fn upcoming(activities: &[Activity], today: NaiveDate, limit: usize) -> Vec<Activity> {
    let mut future: Vec<Activity> = activities
        .iter()
        .filter(|a| a.date >= today)
        .cloned()
        .collect();
    future.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));
    future.truncate(limit);
    future
}

pub fn preferences_summary(preferences: Option<&Preferences>) -> String {
    match preferences {
        Some(prefs) if !prefs.activities.is_empty() => prefs.activities.join(", "),
        _ => "Aucune préférence renseignée".to_string(),
    }
}
