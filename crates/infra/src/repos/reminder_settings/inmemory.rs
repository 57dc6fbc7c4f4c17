use super::IReminderSettingsRepo;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use voucher_tracker_domain::ReminderSettings;

pub struct InMemoryReminderSettingsRepo {
    settings: Mutex<Option<ReminderSettings>>,
}

impl InMemoryReminderSettingsRepo {
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl IReminderSettingsRepo for InMemoryReminderSettingsRepo {
    async fn get(&self) -> anyhow::Result<Option<ReminderSettings>> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, settings: &ReminderSettings) -> anyhow::Result<()> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }

    async fn update_last_check(&self, last_check: DateTime<Utc>) -> anyhow::Result<bool> {
        match self.settings.lock().unwrap().as_mut() {
            Some(settings) => {
                settings.last_check = Some(last_check);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
