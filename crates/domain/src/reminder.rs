use crate::shared::entity::{Entity, ID};
use crate::voucher::Voucher;
use chrono::{DateTime, TimeZone, Utc};
use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;

/// Days before expiry at which reminders fire when nothing else is configured
pub const DEFAULT_REMINDER_DAYS: [i64; 3] = [7, 3, 1];

#[derive(Error, Debug, PartialEq)]
pub enum InvalidSettingsError {
    #[error("Reminder days must be positive, got: {0}")]
    NonPositiveReminderDay(i64),
    #[error("Currency code must not be empty")]
    EmptyCurrency,
}

/// Notification preferences of the user. There is only one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSettings {
    pub email_enabled: bool,
    pub email_address: Option<String>,
    pub browser_notifications_enabled: bool,
    /// Deduplicated and sorted with the largest threshold first
    reminder_days: Vec<i64>,
    default_currency: String,
    /// When the last reminder sweep ran
    pub last_check: Option<DateTime<Utc>>,
}

impl ReminderSettings {
    pub fn new(default_currency: &str) -> Self {
        Self {
            email_enabled: false,
            email_address: None,
            browser_notifications_enabled: true,
            reminder_days: DEFAULT_REMINDER_DAYS.to_vec(),
            default_currency: default_currency.to_uppercase(),
            last_check: None,
        }
    }

    pub fn reminder_days(&self) -> &[i64] {
        &self.reminder_days
    }

    pub fn set_reminder_days(&mut self, days: Vec<i64>) -> Result<(), InvalidSettingsError> {
        if let Some(day) = days.iter().find(|d| **d <= 0) {
            return Err(InvalidSettingsError::NonPositiveReminderDay(*day));
        }
        self.reminder_days = days
            .into_iter()
            .sorted_by(|a, b| b.cmp(a))
            .dedup()
            .collect();
        Ok(())
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn set_default_currency(&mut self, currency: &str) -> Result<(), InvalidSettingsError> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(InvalidSettingsError::EmptyCurrency);
        }
        self.default_currency = currency.to_uppercase();
        Ok(())
    }

    pub fn is_reminder_day(&self, days_left: i64) -> bool {
        days_left > 0 && self.reminder_days.contains(&days_left)
    }
}

/// A reminder decided by a sweep, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub voucher_id: ID,
    pub brand_name: String,
    pub days_left: i64,
}

impl ReminderDraft {
    pub fn into_pending(self, created_at: DateTime<Utc>) -> PendingReminder {
        PendingReminder {
            id: Default::default(),
            voucher_id: self.voucher_id,
            brand_name: self.brand_name,
            days_left: self.days_left,
            created_at,
        }
    }
}

/// A reminder waiting to be picked up by the notification surface.
/// It is deleted when it is read.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReminder {
    pub id: ID,
    pub voucher_id: ID,
    pub brand_name: String,
    pub days_left: i64,
    pub created_at: DateTime<Utc>,
}

impl PendingReminder {
    pub fn to_sent(&self) -> SentReminder {
        SentReminder {
            voucher_id: self.voucher_id,
            days_left: self.days_left,
            sent_at: self.created_at,
        }
    }
}

impl Entity for PendingReminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Records that the reminder for a `(voucher, threshold)` pair has been emitted
#[derive(Debug, Clone, PartialEq)]
pub struct SentReminder {
    pub voucher_id: ID,
    pub days_left: i64,
    pub sent_at: DateTime<Utc>,
}

/// Decides which `Voucher`s have reached one of the configured reminder thresholds.
///
/// Only positive day counts that are members of `ReminderSettings::reminder_days`
/// produce a draft. Vouchers with an unparseable expiry date are skipped.
pub fn sweep<Tz: TimeZone>(
    vouchers: &[Voucher],
    settings: &ReminderSettings,
    now: &DateTime<Tz>,
) -> Vec<ReminderDraft> {
    vouchers
        .iter()
        .filter_map(|voucher| {
            let days_left = voucher.classify(now).days_until_expiry?;
            if !settings.is_reminder_day(days_left) {
                return None;
            }
            Some(ReminderDraft {
                voucher_id: voucher.id,
                brand_name: voucher.brand_name.clone(),
                days_left,
            })
        })
        .collect()
}

/// The `(voucher, threshold)` pairs that already produced a reminder within the
/// retention window. Used to emit each threshold crossing at most once across sweeps.
#[derive(Debug, Default)]
pub struct SentReminderLog {
    sent: HashSet<(ID, i64)>,
}

impl SentReminderLog {
    /// Entries sent before `retention_start` are ignored
    pub fn new(sent: &[SentReminder], retention_start: DateTime<Utc>) -> Self {
        Self {
            sent: sent
                .iter()
                .filter(|s| s.sent_at >= retention_start)
                .map(|s| (s.voucher_id, s.days_left))
                .collect(),
        }
    }

    pub fn contains(&self, voucher_id: &ID, days_left: i64) -> bool {
        self.sent.contains(&(*voucher_id, days_left))
    }

    pub fn retain_unsent(&self, drafts: Vec<ReminderDraft>) -> Vec<ReminderDraft> {
        drafts
            .into_iter()
            .filter(|d| !self.contains(&d.voucher_id, d.days_left))
            .collect()
    }
}
