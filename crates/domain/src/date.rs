use chrono::prelude::*;

/// Parses the expiry date of a `Voucher`.
///
/// Accepts a plain ISO date (`2024-12-31`) and, for records written by older
/// clients, ISO date-times of which only the date part is kept.
pub fn parse_expiry_date(datestr: &str) -> Option<NaiveDate> {
    let datestr = datestr.trim();
    if let Ok(date) = NaiveDate::parse_from_str(datestr, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(datestr) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(datestr, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}
