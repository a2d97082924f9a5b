use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// One roster entry, built fresh on every ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub join_date: NaiveDate,
    /// Always `join_date` plus one calendar year.
    pub expiration_date: NaiveDate,
    pub join_date_source: JoinDateSource,
}

/// How a record's join date was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JoinDateSource {
    /// Parsed from the feed with the named layout.
    Parsed { layout: &'static str },
    /// The feed value was unparseable; the processing date was used.
    Fallback,
}

impl MemberRecord {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        join_date: NaiveDate,
        join_date_source: JoinDateSource,
    ) -> Self {
        MemberRecord {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            join_date,
            expiration_date: expiration_for(join_date),
            join_date_source,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.join_date_source == JoinDateSource::Fallback
    }
}

/// Same month and day one year on. A day the target year lacks rolls
/// forward, so Feb 29 lands on Mar 1.
pub fn expiration_for(join_date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(join_date.year() + 1, join_date.month(), 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(join_date.day() - 1))))
        .unwrap_or(NaiveDate::MAX)
}
