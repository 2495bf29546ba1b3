use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, EnumString};

/// Parses a calendar date from `YYYY-MM-DD` or from an ISO datetime.
///
/// Only the date prefix is kept, so `2025-01-26T18:30:00.000Z` is the 26th
/// regardless of what the time component would mean in another timezone.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let prefix = value.get(..10)?;
    if value.len() > 10 && !value[10..].starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}")))
}

pub fn deserialize_optional_calendar_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_calendar_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}"))),
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// Wall clock of the mess. "Today" is whatever date it is at the mess.
#[derive(Debug, Clone, Copy)]
pub struct MessClock {
    timezone: FixedOffset,
}

impl MessClock {
    pub fn new(timezone: FixedOffset) -> Self {
        Self { timezone }
    }

    pub fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// First and last day of a month, inclusive.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_and_timestamped_dates_resolve_to_the_same_day() {
        assert_eq!(parse_calendar_date("2025-01-26"), Some(date(2025, 1, 26)));
        assert_eq!(
            parse_calendar_date("2025-01-26T00:00:00.000Z"),
            Some(date(2025, 1, 26))
        );
        assert_eq!(
            parse_calendar_date("2025-01-26T23:59:59+05:30"),
            Some(date(2025, 1, 26))
        );
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("26/01/2025"), None);
        assert_eq!(parse_calendar_date("2025-02-30"), None);
        assert_eq!(parse_calendar_date("2025-01-2612"), None);
    }

    #[test]
    fn day_of_week_uses_the_calendar_date() {
        assert_eq!(DayOfWeek::of(date(2025, 1, 26)), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::of(date(2025, 1, 27)), DayOfWeek::Monday);
        assert_eq!("friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert!("funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn month_bounds_cover_whole_month() {
        assert_eq!(
            month_bounds(2024, 2),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            month_bounds(2025, 12),
            Some((date(2025, 12, 1), date(2025, 12, 31)))
        );
        assert_eq!(month_bounds(2025, 13), None);
    }

    #[test]
    fn deserializes_calendar_date_fields() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(deserialize_with = "deserialize_calendar_date")]
            date: NaiveDate,
        }
        let body: Body = serde_json::from_str(r#"{"date":"2025-03-04T10:00:00Z"}"#).unwrap();
        assert_eq!(body.date, date(2025, 3, 4));
        assert!(serde_json::from_str::<Body>(r#"{"date":"yesterday"}"#).is_err());
    }
}
