use crate::date::parse_expiry_date;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Number of days before expiry at which a `Voucher` is considered to be expiring soon
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryStatus {
    Active,
    ExpiringSoon,
    Expired,
    /// The expiry date could not be parsed. Such vouchers are left out of
    /// every date based computation.
    Unparseable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryClassification {
    pub status: ExpiryStatus,
    /// Whole days from today until the expiry date, negative when expired.
    /// `None` when the expiry date is unparseable.
    pub days_until_expiry: Option<i64>,
}

impl ExpiryClassification {
    fn unparseable() -> Self {
        Self {
            status: ExpiryStatus::Unparseable,
            days_until_expiry: None,
        }
    }
}

/// Classifies an expiry date with the default expiring soon window
pub fn classify<Tz: TimeZone>(expiry_date: &str, now: &DateTime<Tz>) -> ExpiryClassification {
    classify_within(expiry_date, now, DEFAULT_EXPIRING_SOON_DAYS)
}

/// Classifies an expiry date relative to `now`.
///
/// Comparisons are date only: today is the calendar date of `now` in its own
/// timezone, and a voucher expiring today is still expiring soon, not expired.
pub fn classify_within<Tz: TimeZone>(
    expiry_date: &str,
    now: &DateTime<Tz>,
    window_days: i64,
) -> ExpiryClassification {
    let expiry_date = match parse_expiry_date(expiry_date) {
        Some(date) => date,
        None => return ExpiryClassification::unparseable(),
    };
    let today = now.date_naive();
    let days_until_expiry = expiry_date.signed_duration_since(today).num_days();

    let status = if days_until_expiry < 0 {
        ExpiryStatus::Expired
    } else if days_until_expiry <= window_days {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Active
    };

    ExpiryClassification {
        status,
        days_until_expiry: Some(days_until_expiry),
    }
}
