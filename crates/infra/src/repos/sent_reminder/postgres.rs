use super::ISentReminderRepo;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use voucher_tracker_domain::{SentReminder, ID};

pub struct PostgresSentReminderRepo {
    pool: PgPool,
}

impl PostgresSentReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SentReminderRaw {
    voucher_uid: Uuid,
    days_left: i64,
    sent_at: DateTime<Utc>,
}

impl From<SentReminderRaw> for SentReminder {
    fn from(raw: SentReminderRaw) -> Self {
        Self {
            voucher_id: raw.voucher_uid.into(),
            days_left: raw.days_left,
            sent_at: raw.sent_at,
        }
    }
}

#[async_trait::async_trait]
impl ISentReminderRepo for PostgresSentReminderRepo {
    async fn find_by_vouchers(&self, voucher_ids: &[ID]) -> anyhow::Result<Vec<SentReminder>> {
        let voucher_ids = voucher_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let sent = sqlx::query_as::<_, SentReminderRaw>(
            r#"
            SELECT * FROM sent_reminders AS s
            WHERE s.voucher_uid = ANY($1)
            "#,
        )
        .bind(voucher_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(sent.into_iter().map(|s| s.into()).collect())
    }

    async fn bulk_insert(&self, sent: &[SentReminder]) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        for entry in sent {
            sqlx::query(
                r#"
                INSERT INTO sent_reminders
                (voucher_uid, days_left, sent_at)
                VALUES($1, $2, $3)
                ON CONFLICT (voucher_uid, days_left) DO UPDATE SET
                    sent_at = EXCLUDED.sent_at
                "#,
            )
            .bind(entry.voucher_id.inner())
            .bind(entry.days_left)
            .bind(entry.sent_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(())
    }

    async fn delete_all_before(&self, before: DateTime<Utc>) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM sent_reminders AS s
            WHERE s.sent_at < $1
            "#,
        )
        .bind(before)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
