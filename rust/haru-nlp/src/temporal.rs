//! Temporal resolution — relative date keywords to calendar dates.
//!
//! Spoken to-dos anchor themselves with a handful of relative keywords
//! (내일, 주말, …) and part-of-day nouns (아침, 오후, …). Resolution is a
//! pure function of the keyword and an injected "today"; propagating a
//! resolved date to later, dateless clauses is the orchestrator's job, not
//! this module's.
//!
//! Weeks start on Monday.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Relative date keywords recognized in a clause.
pub const DATE_KEYWORDS: &[&str] = &["오늘", "내일", "이번주", "다음주", "주말"];

/// Part-of-day nouns copied verbatim into a record's `time` field.
pub const PART_OF_DAY: &[&str] = &["아침", "점심", "저녁", "오전", "오후", "새벽", "밤"];

/// The hour-unit noun; a numeral followed by it reads as an hour of day.
pub const HOUR_UNIT: &str = "시";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `surface` is one of the relative date keywords.
pub fn is_date_keyword(surface: &str) -> bool {
    DATE_KEYWORDS.contains(&surface)
}

/// Whether `surface` is a part-of-day noun.
pub fn is_part_of_day(surface: &str) -> bool {
    PART_OF_DAY.contains(&surface)
}

/// Format a date the way records carry it (ISO-8601, `YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolve a relative date keyword against `today`.
///
/// | keyword | resolves to |
/// |---|---|
/// | 오늘 / empty | today |
/// | 내일 | today + 1 day |
/// | 주말 | the next Saturday, never today |
/// | 이번주 | the most recent Monday on or before today |
/// | 다음주 | the Monday strictly after today |
///
/// Anything else is returned unchanged and treated as already absolute;
/// an unrecognized keyword is a best-effort passthrough, not an error.
pub fn resolve(keyword: &str, today: NaiveDate) -> String {
    let days_ahead = |target: Weekday| {
        u64::from((target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7)
    };

    match keyword {
        "" | "오늘" => format_date(today),
        "내일" => format_date(plus_days(today, 1)),
        "주말" => {
            let mut ahead = days_ahead(Weekday::Sat);
            // Already Saturday: the weekend being planned is the next one.
            if ahead == 0 {
                ahead = 7;
            }
            format_date(plus_days(today, ahead))
        }
        "이번주" => {
            let back = u64::from(today.weekday().num_days_from_monday());
            format_date(today.checked_sub_days(Days::new(back)).unwrap_or(today))
        }
        "다음주" => {
            let mut ahead = days_ahead(Weekday::Mon);
            if ahead == 0 {
                ahead = 7;
            }
            format_date(plus_days(today, ahead))
        }
        absolute => absolute.to_string(),
    }
}

fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // 2025-10-15 is a Wednesday.
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
    }

    #[test]
    fn today_and_empty_resolve_to_today() {
        assert_eq!(resolve("오늘", wednesday()), "2025-10-15");
        assert_eq!(resolve("", wednesday()), "2025-10-15");
    }

    #[test]
    fn tomorrow_adds_one_day() {
        assert_eq!(resolve("내일", wednesday()), "2025-10-16");
    }

    #[test]
    fn weekend_resolves_to_next_saturday() {
        assert_eq!(resolve("주말", wednesday()), "2025-10-18");
    }

    #[test]
    fn weekend_on_saturday_advances_a_full_week() {
        assert_eq!(resolve("주말", saturday()), "2025-10-25");
    }

    #[test]
    fn this_week_is_the_most_recent_monday() {
        assert_eq!(resolve("이번주", wednesday()), "2025-10-13");
        assert_eq!(resolve("이번주", monday()), "2025-10-13");
    }

    #[test]
    fn next_week_is_the_monday_strictly_after_today() {
        assert_eq!(resolve("다음주", wednesday()), "2025-10-20");
        // On a Monday the answer is the NEXT Monday, not today.
        assert_eq!(resolve("다음주", monday()), "2025-10-20");
    }

    #[test]
    fn unknown_keyword_passes_through_unchanged() {
        assert_eq!(resolve("2025-01-01", wednesday()), "2025-01-01");
        assert_eq!(resolve("크리스마스", wednesday()), "크리스마스");
    }
}
