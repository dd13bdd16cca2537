//! Recurrence label rendering
//!
//! Turns a recurring task's occurrence anchor into the human-readable
//! description shown in the dashboard, e.g. "15th of every month" or
//! "Monday of every week". Rendering is purely calendrical: the stored
//! date's components are used as-is, with no timezone conversion that
//! could shift the day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::task::{RecurrenceKind, TaskRecord};

/// English ordinal suffix for a day of the month
///
/// 11, 12 and 13 always take "th" regardless of their last digit.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Describe a monthly recurrence anchor, e.g. "3rd of every month"
///
/// A missing anchor renders as an empty string; display must never fail.
pub fn format_monthly_recurrence(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => {
            let day = date.day();
            format!("{}{} of every month", day, ordinal_suffix(day))
        }
        None => String::new(),
    }
}

/// Describe a weekly recurrence anchor, e.g. "Monday of every week"
///
/// A missing anchor renders as an empty string; display must never fail.
pub fn format_weekly_recurrence(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{} of every week", weekday_name(date.weekday())),
        None => String::new(),
    }
}

/// Recurrence description for a record, None for one-time tasks
pub fn recurrence_label(task: &TaskRecord) -> Option<String> {
    match task.recurrence? {
        RecurrenceKind::Weekly => Some(format_weekly_recurrence(task.due_date)),
        RecurrenceKind::Monthly => Some(format_monthly_recurrence(task.due_date)),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Status, TaskRecord};

    #[test]
    fn test_ordinal_suffix_basic_rule() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(10), "th");
    }

    #[test]
    fn test_ordinal_suffix_teens_always_th() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
    }

    #[test]
    fn test_ordinal_suffix_last_digit_rule_above_teens() {
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(24), "th");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_monthly_label() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 3);
        assert_eq!(format_monthly_recurrence(date), "3rd of every month");

        let date = NaiveDate::from_ymd_opt(2025, 6, 21);
        assert_eq!(format_monthly_recurrence(date), "21st of every month");
    }

    #[test]
    fn test_weekly_label() {
        // 2025-06-02 is a Monday
        let date = NaiveDate::from_ymd_opt(2025, 6, 2);
        assert_eq!(format_weekly_recurrence(date), "Monday of every week");
    }

    #[test]
    fn test_missing_anchor_renders_empty() {
        assert_eq!(format_monthly_recurrence(None), "");
        assert_eq!(format_weekly_recurrence(None), "");
    }

    #[test]
    fn test_recurrence_label_dispatch() {
        let mut task = TaskRecord {
            title: "Payroll".to_string(),
            status: Status::NotStarted,
            due_date: NaiveDate::from_ymd_opt(2025, 6, 15),
            recurrence: Some(RecurrenceKind::Monthly),
            ..TaskRecord::default()
        };
        assert_eq!(
            recurrence_label(&task).as_deref(),
            Some("15th of every month")
        );

        task.recurrence = None;
        assert_eq!(recurrence_label(&task), None);
    }
}
