use super::IPendingReminderRepo;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use voucher_tracker_domain::{PendingReminder, ID};

pub struct PostgresPendingReminderRepo {
    pool: PgPool,
}

impl PostgresPendingReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PendingReminderRaw {
    reminder_uid: Uuid,
    voucher_uid: Uuid,
    brand_name: String,
    days_left: i64,
    created_at: DateTime<Utc>,
}

impl From<PendingReminderRaw> for PendingReminder {
    fn from(raw: PendingReminderRaw) -> Self {
        Self {
            id: raw.reminder_uid.into(),
            voucher_id: raw.voucher_uid.into(),
            brand_name: raw.brand_name,
            days_left: raw.days_left,
            created_at: raw.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IPendingReminderRepo for PostgresPendingReminderRepo {
    async fn bulk_insert(
        &self,
        reminders: &[PendingReminder],
    ) -> anyhow::Result<Vec<PendingReminder>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(reminders.len());
        for reminder in reminders {
            // Vouchers deleted since the sweep loaded them are skipped
            let res = sqlx::query(
                r#"
                INSERT INTO pending_reminders
                (reminder_uid, voucher_uid, brand_name, days_left, created_at)
                SELECT $1::uuid, $2::uuid, $3::text, $4::bigint, $5::timestamptz
                WHERE EXISTS (SELECT 1 FROM vouchers AS v WHERE v.voucher_uid = $2)
                "#,
            )
            .bind(reminder.id.inner())
            .bind(reminder.voucher_id.inner())
            .bind(&reminder.brand_name)
            .bind(reminder.days_left)
            .bind(reminder.created_at)
            .execute(&mut *tx)
            .await?;
            if res.rows_affected() == 1 {
                inserted.push(reminder.clone());
            }
        }
        tx.commit().await?;

        Ok(inserted)
    }

    async fn bulk_insert_unsent(
        &self,
        reminders: &[PendingReminder],
    ) -> anyhow::Result<Vec<PendingReminder>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(reminders.len());
        for reminder in reminders {
            // A concurrent sweep holding the same pair makes this wait for its commit,
            // after which the conflict leaves nothing to insert.
            let res = sqlx::query(
                r#"
                WITH logged AS (
                    INSERT INTO sent_reminders
                    (voucher_uid, days_left, sent_at)
                    SELECT $2::uuid, $4::bigint, $5::timestamptz
                    WHERE EXISTS (SELECT 1 FROM vouchers AS v WHERE v.voucher_uid = $2)
                    ON CONFLICT (voucher_uid, days_left) DO NOTHING
                    RETURNING voucher_uid
                )
                INSERT INTO pending_reminders
                (reminder_uid, voucher_uid, brand_name, days_left, created_at)
                SELECT $1::uuid, l.voucher_uid, $3::text, $4::bigint, $5::timestamptz
                FROM logged AS l
                "#,
            )
            .bind(reminder.id.inner())
            .bind(reminder.voucher_id.inner())
            .bind(&reminder.brand_name)
            .bind(reminder.days_left)
            .bind(reminder.created_at)
            .execute(&mut *tx)
            .await?;
            if res.rows_affected() == 1 {
                inserted.push(reminder.clone());
            }
        }
        tx.commit().await?;

        Ok(inserted)
    }

    async fn drain(&self) -> anyhow::Result<Vec<PendingReminder>> {
        let mut reminders = sqlx::query_as::<_, PendingReminderRaw>(
            r#"
            DELETE FROM pending_reminders
            RETURNING *
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(PendingReminder::from)
        .collect::<Vec<_>>();
        reminders.sort_by_key(|r| (r.created_at, r.days_left));

        Ok(reminders)
    }

    async fn delete_by_voucher(&self, voucher_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM pending_reminders AS r
            WHERE r.voucher_uid = $1
            "#,
        )
        .bind(voucher_id.inner())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
