use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use voucher_tracker_api_structs::*;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

/// Fields that are `None` are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateReminderSettingsInput {
    pub email_enabled: Option<bool>,
    pub email_address: Option<String>,
    pub browser_notifications_enabled: Option<bool>,
    pub reminder_days: Option<Vec<i64>>,
    pub default_currency: Option<String>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_settings(&self) -> APIResponse<get_reminder_settings::APIResponse> {
        self.base
            .get("reminders/settings".into(), StatusCode::OK)
            .await
    }

    pub async fn update_settings(
        &self,
        input: UpdateReminderSettingsInput,
    ) -> APIResponse<update_reminder_settings::APIResponse> {
        let body = update_reminder_settings::RequestBody {
            email_enabled: input.email_enabled,
            email_address: input.email_address,
            browser_notifications_enabled: input.browser_notifications_enabled,
            reminder_days: input.reminder_days,
            default_currency: input.default_currency,
        };
        self.base
            .put(body, "reminders/settings".into(), StatusCode::OK)
            .await
    }

    /// Runs a reminder sweep and returns the reminders it created
    pub async fn check(&self) -> APIResponse<check_reminders::APIResponse> {
        self.base
            .post((), "reminders/check".into(), StatusCode::OK)
            .await
    }

    /// Returns the pending reminders. They are removed on the server.
    pub async fn get_pending(&self) -> APIResponse<get_pending_reminders::APIResponse> {
        self.base
            .get("reminders/pending".into(), StatusCode::OK)
            .await
    }
}
