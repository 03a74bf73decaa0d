//! Day-cell decoration tags.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

pub const SUNDAY_CLASS: &str = "sunday";
pub const HOLIDAY_CLASS: &str = "holiday";

/// Decoration tags for one day cell: `sunday` by weekday, `holiday` by
/// membership in the current holiday-date set.
pub fn day_cell_classes(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> Vec<&'static str> {
    let mut classes = Vec::new();

    if date.weekday() == Weekday::Sun {
        classes.push(SUNDAY_CLASS);
    }
    if holidays.contains(&date) {
        classes.push(HOLIDAY_CLASS);
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_weekday() {
        let holidays = BTreeSet::new();
        assert!(day_cell_classes(date(2024, 3, 4), &holidays).is_empty());
    }

    #[test]
    fn test_sunday() {
        let holidays = BTreeSet::new();
        assert_eq!(
            day_cell_classes(date(2024, 3, 3), &holidays),
            vec![SUNDAY_CLASS]
        );
    }

    #[test]
    fn test_holiday() {
        let holidays = BTreeSet::from([date(2024, 3, 1)]);
        assert_eq!(
            day_cell_classes(date(2024, 3, 1), &holidays),
            vec![HOLIDAY_CLASS]
        );
    }

    #[test]
    fn test_sunday_holiday() {
        // 2024-09-15 falls on a Sunday within the Chuseok block.
        let holidays = BTreeSet::from([date(2024, 9, 15)]);
        assert_eq!(
            day_cell_classes(date(2024, 9, 15), &holidays),
            vec![SUNDAY_CLASS, HOLIDAY_CLASS]
        );
    }
}
