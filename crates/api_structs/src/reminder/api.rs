use crate::dtos::{PendingReminderDTO, ReminderSettingsDTO};
use serde::{Deserialize, Serialize};
use voucher_tracker_domain::{PendingReminder, ReminderSettings};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettingsResponse {
    pub settings: ReminderSettingsDTO,
}

impl ReminderSettingsResponse {
    pub fn new(settings: ReminderSettings) -> Self {
        Self {
            settings: ReminderSettingsDTO::new(settings),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<PendingReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<PendingReminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(PendingReminderDTO::new).collect(),
        }
    }
}

pub mod get_reminder_settings {
    use super::*;

    pub type APIResponse = ReminderSettingsResponse;
}

pub mod update_reminder_settings {
    use super::*;

    /// Fields that are not given keep their current value
    #[derive(Debug, Deserialize, Serialize, Clone, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub email_enabled: Option<bool>,
        #[serde(default)]
        pub email_address: Option<String>,
        #[serde(default)]
        pub browser_notifications_enabled: Option<bool>,
        #[serde(default)]
        pub reminder_days: Option<Vec<i64>>,
        #[serde(default)]
        pub default_currency: Option<String>,
    }

    pub type APIResponse = ReminderSettingsResponse;
}

pub mod check_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_pending_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}
