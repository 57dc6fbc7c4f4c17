mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryReminderSettingsRepo;
pub use postgres::PostgresReminderSettingsRepo;
use voucher_tracker_domain::ReminderSettings;

/// Stores the single `ReminderSettings` instance
#[async_trait::async_trait]
pub trait IReminderSettingsRepo: Send + Sync {
    /// `None` when the settings have never been saved
    async fn get(&self) -> anyhow::Result<Option<ReminderSettings>>;
    async fn save(&self, settings: &ReminderSettings) -> anyhow::Result<()>;
    /// Returns false when there are no stored settings to update
    async fn update_last_check(&self, last_check: DateTime<Utc>) -> anyhow::Result<bool>;
}
