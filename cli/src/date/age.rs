use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{Result, ToolError};

const MS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub days_to_next_birthday: i64,
    pub next_birthday: NaiveDate,
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| ToolError::malformed(format!("'{}' is not a YYYY-MM-DD date: {}", s, e)))
}

/// Length of the month before the one `date` falls in.
fn days_in_previous_month(date: NaiveDate) -> i32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}

fn previous_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// The birthday in `year`. Feb 29 rolls over to Mar 1 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn ceil_days(ms: i64) -> i64 {
    -(-ms).div_euclid(MS_PER_DAY)
}

pub fn age_between(birth: NaiveDate, now: NaiveDateTime) -> Result<AgeBreakdown> {
    let today = now.date();
    if birth > today {
        return Err(ToolError::out_of_range(format!(
            "birth date {} is after {}",
            birth, today
        )));
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Borrow whole months until the day count is non-negative. A single
    // borrow suffices except when the previous month is shorter than the
    // day deficit (e.g. Jan 31 -> Mar 1).
    let mut borrow_from = today;
    while days < 0 {
        months -= 1;
        days += days_in_previous_month(borrow_from);
        borrow_from = previous_month(borrow_from);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    let birth_midnight = birth.and_hms_opt(0, 0, 0).unwrap_or_default();
    let elapsed: Duration = now - birth_midnight;
    let total_days = elapsed.num_milliseconds().div_euclid(MS_PER_DAY);

    let mut next_birthday = birthday_in(birth, today.year())
        .ok_or_else(|| ToolError::out_of_range(format!("no birthday in {}", today.year())))?;
    if next_birthday < today {
        next_birthday = birthday_in(birth, today.year() + 1).ok_or_else(|| {
            ToolError::out_of_range(format!("no birthday in {}", today.year() + 1))
        })?;
    }
    let until: Duration = next_birthday.and_hms_opt(0, 0, 0).unwrap_or_default() - now;
    let days_to_next_birthday = ceil_days(until.num_milliseconds());

    Ok(AgeBreakdown {
        years,
        months: months as u32,
        days: days as u32,
        total_days,
        days_to_next_birthday,
        next_birthday,
    })
}

/// Age as of midnight on `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Result<AgeBreakdown> {
    let now = today
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ToolError::malformed(format!("invalid date {}", today)))?;
    age_between(birth, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_reference_example() {
        let age = age_on(date("2000-01-01"), date("2024-06-15")).unwrap();
        assert_eq!(age.years, 24);
        assert_eq!(age.months, 5);
        assert_eq!(age.days, 14);
        assert_eq!(age.total_days, 8932);
        assert_eq!(age.next_birthday, date("2025-01-01"));
        assert_eq!(age.days_to_next_birthday, 200);
    }

    #[test]
    fn test_day_borrow_uses_previous_month_length() {
        // May has 31 days: 2024-06-10 minus a 20th birthday
        let age = age_on(date("1990-03-20"), date("2024-06-10")).unwrap();
        assert_eq!(age.years, 34);
        assert_eq!(age.months, 2);
        assert_eq!(age.days, 21);
    }

    #[test]
    fn test_month_borrow_takes_a_year() {
        let age = age_on(date("1990-11-05"), date("2024-02-10")).unwrap();
        assert_eq!(age.years, 33);
        assert_eq!(age.months, 3);
        assert_eq!(age.days, 5);
    }

    #[test]
    fn test_days_never_negative() {
        let age = age_on(date("2023-01-31"), date("2023-03-01")).unwrap();
        assert_eq!(age.years, 0);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 29);
    }

    #[test]
    fn test_birthday_today() {
        let age = age_on(date("2000-06-15"), date("2024-06-15")).unwrap();
        assert_eq!((age.years, age.months, age.days), (24, 0, 0));
        assert_eq!(age.next_birthday, date("2024-06-15"));
        assert_eq!(age.days_to_next_birthday, 0);

        // later in the day it still counts as today
        let afternoon = date("2024-06-15").and_hms_opt(15, 30, 0).unwrap();
        let age = age_between(date("2000-06-15"), afternoon).unwrap();
        assert_eq!(age.days_to_next_birthday, 0);
    }

    #[test]
    fn test_countdown_rounds_up_partial_days() {
        let now = date("2024-06-14").and_hms_opt(18, 0, 0).unwrap();
        let age = age_between(date("2000-06-15"), now).unwrap();
        assert_eq!(age.days_to_next_birthday, 1);
        assert_eq!(age.total_days, 8765);
    }

    #[test]
    fn test_leap_day_birthday() {
        let age = age_on(date("2000-02-29"), date("2023-02-10")).unwrap();
        assert_eq!(age.next_birthday, date("2023-03-01"));

        let age = age_on(date("2000-02-29"), date("2023-06-01")).unwrap();
        assert_eq!(age.next_birthday, date("2024-02-29"));
    }

    #[test]
    fn test_future_birth_rejected() {
        assert!(matches!(
            age_on(date("2030-01-01"), date("2024-01-01")),
            Err(ToolError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("15/06/2024"),
            Err(ToolError::MalformedInput(_))
        ));
        assert!(parse_date("2024-02-30").is_err());
    }
}
