mod pending_reminder;
mod reminder_settings;
mod sent_reminder;
mod shared;
mod voucher;

use pending_reminder::{
    IPendingReminderRepo, InMemoryPendingReminderRepo, PostgresPendingReminderRepo,
};
use reminder_settings::{
    IReminderSettingsRepo, InMemoryReminderSettingsRepo, PostgresReminderSettingsRepo,
};
use sent_reminder::{ISentReminderRepo, InMemorySentReminderRepo, PostgresSentReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use voucher::{IVoucherRepo, InMemoryVoucherRepo, PostgresVoucherRepo};

#[derive(Clone)]
pub struct Repos {
    pub vouchers: Arc<dyn IVoucherRepo>,
    pub reminder_settings: Arc<dyn IReminderSettingsRepo>,
    pub pending_reminders: Arc<dyn IPendingReminderRepo>,
    pub sent_reminders: Arc<dyn ISentReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            vouchers: Arc::new(PostgresVoucherRepo::new(pool.clone())),
            reminder_settings: Arc::new(PostgresReminderSettingsRepo::new(pool.clone())),
            pending_reminders: Arc::new(PostgresPendingReminderRepo::new(pool.clone())),
            sent_reminders: Arc::new(PostgresSentReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let sent_reminders = Arc::new(InMemorySentReminderRepo::new());
        Self {
            vouchers: Arc::new(InMemoryVoucherRepo::new()),
            reminder_settings: Arc::new(InMemoryReminderSettingsRepo::new()),
            pending_reminders: Arc::new(InMemoryPendingReminderRepo::new(sent_reminders.clone())),
            sent_reminders,
        }
    }
}
