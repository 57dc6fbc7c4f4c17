mod inmemory;
mod postgres;

pub use inmemory::InMemoryPendingReminderRepo;
pub use postgres::PostgresPendingReminderRepo;
use voucher_tracker_domain::{PendingReminder, ID};

/// Queue of reminders waiting for the notification surface
#[async_trait::async_trait]
pub trait IPendingReminderRepo: Send + Sync {
    /// Returns the stored reminders. Reminders of vouchers that no longer exist
    /// are skipped.
    async fn bulk_insert(
        &self,
        reminders: &[PendingReminder],
    ) -> anyhow::Result<Vec<PendingReminder>>;
    /// Like `bulk_insert`, but only for reminders whose `(voucher, threshold)` pair
    /// is not in the sent reminder log yet. The pair is logged in the same step,
    /// so concurrent callers store each pair at most once.
    async fn bulk_insert_unsent(
        &self,
        reminders: &[PendingReminder],
    ) -> anyhow::Result<Vec<PendingReminder>>;
    /// Removes and returns every pending reminder, oldest first and then by
    /// days left
    async fn drain(&self) -> anyhow::Result<Vec<PendingReminder>>;
    async fn delete_by_voucher(&self, voucher_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::repos::Repos;
    use crate::VoucherTrackerContext;
    use chrono::{Duration, TimeZone, Utc};
    use voucher_tracker_domain::{PendingReminder, RedemptionType, StoreType, Voucher, ID};

    fn reminder_factory(voucher_id: ID, days_left: i64, minutes: i64) -> PendingReminder {
        PendingReminder {
            id: Default::default(),
            voucher_id,
            brand_name: "Nike".into(),
            days_left,
            created_at: Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn drain_removes_reminders() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let voucher_id = ID::default();
        let reminders = vec![
            reminder_factory(voucher_id, 7, 0),
            reminder_factory(voucher_id, 3, 1),
        ];

        assert!(ctx
            .repos
            .pending_reminders
            .bulk_insert(&reminders)
            .await
            .is_ok());

        let drained = ctx.repos.pending_reminders.drain().await.unwrap();
        assert_eq!(drained, reminders);

        // Second drain is empty
        let drained = ctx.repos.pending_reminders.drain().await.unwrap();
        assert!(drained.is_empty());
    }

    #[tokio::test]
    async fn delete_by_voucher() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let voucher_id = ID::default();
        let other_voucher_id = ID::default();
        let reminders = vec![
            reminder_factory(voucher_id, 7, 0),
            reminder_factory(other_voucher_id, 7, 1),
            reminder_factory(voucher_id, 3, 2),
        ];
        ctx.repos
            .pending_reminders
            .bulk_insert(&reminders)
            .await
            .expect("To insert reminders");

        assert!(ctx
            .repos
            .pending_reminders
            .delete_by_voucher(&voucher_id)
            .await
            .is_ok());

        let drained = ctx.repos.pending_reminders.drain().await.unwrap();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].voucher_id, other_voucher_id);
    }

    #[tokio::test]
    async fn drain_orders_reminders_of_one_sweep_by_days_left() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let reminders = vec![
            reminder_factory(ID::default(), 7, 0),
            reminder_factory(ID::default(), 1, 0),
            reminder_factory(ID::default(), 3, 0),
            reminder_factory(ID::default(), 14, -1),
        ];
        ctx.repos
            .pending_reminders
            .bulk_insert(&reminders)
            .await
            .expect("To insert reminders");

        let drained = ctx.repos.pending_reminders.drain().await.unwrap();
        let days_left = drained.iter().map(|r| r.days_left).collect::<Vec<_>>();
        assert_eq!(days_left, vec![14, 1, 3, 7]);
    }

    #[tokio::test]
    async fn bulk_insert_unsent_stores_each_pair_once() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let repo = &ctx.repos.pending_reminders;
        let voucher_id = ID::default();
        let other_voucher_id = ID::default();

        // Two overlapping sweeps that both saw an empty sent log
        let first = vec![
            reminder_factory(voucher_id, 3, 0),
            reminder_factory(other_voucher_id, 1, 0),
        ];
        let second = vec![
            reminder_factory(voucher_id, 3, 0),
            reminder_factory(other_voucher_id, 1, 0),
        ];
        let (first, second) = tokio::join!(
            repo.bulk_insert_unsent(&first),
            repo.bulk_insert_unsent(&second)
        );
        assert_eq!(first.unwrap().len() + second.unwrap().len(), 2);

        let sent = ctx
            .repos
            .sent_reminders
            .find_by_vouchers(&[voucher_id, other_voucher_id])
            .await
            .unwrap();
        assert_eq!(sent.len(), 2);

        // Other thresholds of the same voucher are still open
        let stored = repo
            .bulk_insert_unsent(&[reminder_factory(voucher_id, 1, 0)])
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);

        let drained = repo.drain().await.unwrap();
        assert_eq!(drained.len(), 3);
    }

    fn voucher_factory() -> Voucher {
        Voucher {
            id: Default::default(),
            brand_name: "Nike".into(),
            discount_amount: "15% OFF".into(),
            discount_value: None,
            voucher_code: "NIKE15".into(),
            expiry_date: "2024-03-13".into(),
            store_type: StoreType::International,
            redemption_type: RedemptionType::Online,
            store_location: None,
            region: None,
            category: None,
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    async fn postgres_repos() -> Option<Repos> {
        let connection_string = std::env::var("DATABASE_URL").ok()?;
        Some(
            Repos::create_postgres(&connection_string)
                .await
                .expect("To connect to postgres"),
        )
    }

    #[tokio::test]
    async fn postgres_stores_each_pair_once_for_concurrent_sweeps() {
        let repos = match postgres_repos().await {
            Some(repos) => repos,
            None => return,
        };
        let voucher = voucher_factory();
        repos.vouchers.insert(&voucher).await.unwrap();

        let first = vec![reminder_factory(voucher.id, 3, 0)];
        let second = vec![reminder_factory(voucher.id, 3, 0)];
        let (first, second) = tokio::join!(
            repos.pending_reminders.bulk_insert_unsent(&first),
            repos.pending_reminders.bulk_insert_unsent(&second)
        );
        assert_eq!(first.unwrap().len() + second.unwrap().len(), 1);

        let sent = repos
            .sent_reminders
            .find_by_vouchers(&[voucher.id])
            .await
            .unwrap();
        assert_eq!(sent.len(), 1);

        repos.vouchers.delete(&voucher.id).await;
    }

    #[tokio::test]
    async fn postgres_skips_reminders_of_deleted_vouchers() {
        let repos = match postgres_repos().await {
            Some(repos) => repos,
            None => return,
        };
        let voucher = voucher_factory();
        repos.vouchers.insert(&voucher).await.unwrap();
        let deleted_voucher_id = ID::default();

        let reminders = vec![
            reminder_factory(deleted_voucher_id, 3, 0),
            reminder_factory(voucher.id, 3, 0),
        ];
        let stored = repos
            .pending_reminders
            .bulk_insert(&reminders)
            .await
            .expect("Missing vouchers to be skipped");
        assert_eq!(stored, vec![reminders[1].clone()]);

        let reminders = vec![
            reminder_factory(deleted_voucher_id, 1, 0),
            reminder_factory(voucher.id, 1, 0),
        ];
        let stored = repos
            .pending_reminders
            .bulk_insert_unsent(&reminders)
            .await
            .expect("Missing vouchers to be skipped");
        assert_eq!(stored, vec![reminders[1].clone()]);

        repos.vouchers.delete(&voucher.id).await;
    }
}
