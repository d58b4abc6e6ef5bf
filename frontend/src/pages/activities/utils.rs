use crate::api::Activity;

pub const ITEMS_PER_PAGE: usize = 9;
pub const PREVIEW_COUNT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityFilters {
    pub search: String,
    pub category: String,
    pub location: String,
    /// ISO date (YYYY-MM-DD); empty means no date filter.
    pub date: String,
}

impl ActivityFilters {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_empty()
            && self.location.is_empty()
            && self.date.is_empty()
    }
}

/// Free-text search on name/description plus exact category/location/date
/// filters, sorted chronologically.
pub fn filter_activities(activities: &[Activity], filters: &ActivityFilters) -> Vec<Activity> {
    let search = filters.search.trim().to_lowercase();
    let mut filtered: Vec<Activity> = activities
        .iter()
        .filter(|a| {
            if !search.is_empty()
                && !(a.name.to_lowercase().contains(&search)
                    || a.description.to_lowercase().contains(&search))
            {
                return false;
            }
            if !filters.category.is_empty() && a.category != filters.category {
                return false;
            }
            if !filters.location.is_empty() && a.location != filters.location {
                return false;
            }
            if !filters.date.is_empty() && a.date.to_string() != filters.date {
                return false;
            }
            true
        })
        .cloned()
        .collect();
    filtered.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));
    filtered
}

pub fn page_count(total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (total + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
    }
}

/// Collapsed view shows a short preview; expanded view pages through the
/// filtered list (1-based page index).
pub fn paginate(filtered: &[Activity], show_all: bool, current_page: usize) -> Vec<Activity> {
    if !show_all {
        return filtered.iter().take(PREVIEW_COUNT).cloned().collect();
    }
    let start = current_page.saturating_sub(1) * ITEMS_PER_PAGE;
    filtered
        .iter()
        .skip(start)
        .take(ITEMS_PER_PAGE)
        .cloned()
        .collect()
}

pub fn unique_categories(activities: &[Activity]) -> Vec<String> {
    unique_values(activities, |a| &a.category)
}

pub fn unique_locations(activities: &[Activity]) -> Vec<String> {
    unique_values(activities, |a| &a.location)
}

pub fn unique_levels(activities: &[Activity]) -> Vec<String> {
    unique_values(activities, |a| &a.level)
}

fn unique_values(activities: &[Activity], select: impl Fn(&Activity) -> &str) -> Vec<String> {
    let mut values: Vec<String> = activities.iter().map(|a| select(a).to_string()).collect();
    values.sort();
    values.dedup();
    values
}

/// Activity count per calendar month ("YYYY-MM"), sorted by month.
pub fn monthly_counts(activities: &[Activity]) -> Vec<(String, usize)> {
    let mut counts: std::collections::BTreeMap<String, usize> = std::collections::BTreeMap::new();
    for activity in activities {
        *counts
            .entry(activity.date.format("%Y-%m").to_string())
            .or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Top three activity names for a level, by number of scheduled sessions.
pub fn podium_for_level(activities: &[Activity], level: &str) -> Vec<(String, usize)> {
    let mut by_name: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for activity in activities.iter().filter(|a| a.level == level) {
        *by_name.entry(activity.name.clone()).or_default() += 1;
    }
    let mut podium: Vec<(String, usize)> = by_name.into_iter().collect();
    podium.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    podium.truncate(3);
    podium
}
