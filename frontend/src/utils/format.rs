use chrono::NaiveDate;

/// "2026-03-14" -> "14/03/2026" for display; falls back to the raw ISO
/// string when formatting is not possible.
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Normalizes a price label: empty or zero-like values render as "Gratuit".
pub fn display_price(price: &str) -> String {
    let trimmed = price.trim();
    if trimmed.is_empty() || trimmed == "0" || trimmed == "0€" {
        "Gratuit".to_string()
    } else {
        trimmed.to_string()
    }
}

/// "7/20 places" style occupancy label.
pub fn occupancy_label(participants: i32, max_participants: i32) -> String {
    format!("{}/{} places", participants, max_participants)
}

pub fn is_full(participants: i32, max_participants: i32) -> bool {
    max_participants > 0 && participants >= max_participants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_uses_french_order() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(display_date(&date), "14/03/2026");
    }

    #[test]
    fn display_price_maps_zero_to_gratuit() {
        assert_eq!(display_price(""), "Gratuit");
        assert_eq!(display_price("0"), "Gratuit");
        assert_eq!(display_price("0€"), "Gratuit");
        assert_eq!(display_price(" 15€ "), "15€");
    }

    #[test]
    fn occupancy_and_fullness() {
        assert_eq!(occupancy_label(7, 20), "7/20 places");
        assert!(!is_full(7, 20));
        assert!(is_full(20, 20));
        assert!(is_full(25, 20));
        assert!(!is_full(5, 0));
    }
}
