use super::IReminderSettingsRepo;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::warn;
use voucher_tracker_domain::ReminderSettings;

pub struct PostgresReminderSettingsRepo {
    pool: PgPool,
}

impl PostgresReminderSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderSettingsRaw {
    email_enabled: bool,
    email_address: Option<String>,
    browser_notifications_enabled: bool,
    reminder_days: Vec<i64>,
    default_currency: String,
    last_check: Option<DateTime<Utc>>,
}

impl From<ReminderSettingsRaw> for ReminderSettings {
    fn from(raw: ReminderSettingsRaw) -> Self {
        let mut settings = ReminderSettings::new(&raw.default_currency);
        if let Err(e) = settings.set_reminder_days(raw.reminder_days) {
            warn!("Stored reminder days are invalid, using the defaults. Err: {}", e);
        }
        settings.email_enabled = raw.email_enabled;
        settings.email_address = raw.email_address;
        settings.browser_notifications_enabled = raw.browser_notifications_enabled;
        settings.last_check = raw.last_check;
        settings
    }
}

// The settings are a singleton stored in the row with `settings_id = 1`
#[async_trait::async_trait]
impl IReminderSettingsRepo for PostgresReminderSettingsRepo {
    async fn get(&self) -> anyhow::Result<Option<ReminderSettings>> {
        let settings = sqlx::query_as::<_, ReminderSettingsRaw>(
            r#"
            SELECT * FROM reminder_settings AS s
            WHERE s.settings_id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings.map(|s| s.into()))
    }

    async fn save(&self, settings: &ReminderSettings) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_settings
            (settings_id, email_enabled, email_address, browser_notifications_enabled,
            reminder_days, default_currency, last_check)
            VALUES(1, $1, $2, $3, $4, $5, $6)
            ON CONFLICT (settings_id) DO UPDATE SET
                email_enabled = EXCLUDED.email_enabled,
                email_address = EXCLUDED.email_address,
                browser_notifications_enabled = EXCLUDED.browser_notifications_enabled,
                reminder_days = EXCLUDED.reminder_days,
                default_currency = EXCLUDED.default_currency,
                last_check = EXCLUDED.last_check
            "#,
        )
        .bind(settings.email_enabled)
        .bind(&settings.email_address)
        .bind(settings.browser_notifications_enabled)
        .bind(settings.reminder_days().to_vec())
        .bind(settings.default_currency())
        .bind(settings.last_check)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_last_check(&self, last_check: DateTime<Utc>) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminder_settings
            SET last_check = $1
            WHERE settings_id = 1
            "#,
        )
        .bind(last_check)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }
}
