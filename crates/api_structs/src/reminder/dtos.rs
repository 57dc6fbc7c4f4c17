use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voucher_tracker_domain::{PendingReminder, ReminderSettings, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettingsDTO {
    pub email_enabled: bool,
    pub email_address: Option<String>,
    pub browser_notifications_enabled: bool,
    pub reminder_days: Vec<i64>,
    pub default_currency: String,
    pub last_check: Option<DateTime<Utc>>,
}

impl ReminderSettingsDTO {
    pub fn new(settings: ReminderSettings) -> Self {
        Self {
            reminder_days: settings.reminder_days().to_vec(),
            default_currency: settings.default_currency().to_string(),
            email_enabled: settings.email_enabled,
            email_address: settings.email_address,
            browser_notifications_enabled: settings.browser_notifications_enabled,
            last_check: settings.last_check,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PendingReminderDTO {
    pub id: ID,
    pub voucher_id: ID,
    pub brand_name: String,
    pub days_left: i64,
    pub created_at: DateTime<Utc>,
}

impl PendingReminderDTO {
    pub fn new(reminder: PendingReminder) -> Self {
        Self {
            id: reminder.id,
            voucher_id: reminder.voucher_id,
            brand_name: reminder.brand_name,
            days_left: reminder.days_left,
            created_at: reminder.created_at,
        }
    }
}
