mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemorySentReminderRepo;
pub use postgres::PostgresSentReminderRepo;
use voucher_tracker_domain::{SentReminder, ID};

/// Log of the `(voucher, threshold)` pairs that already produced a reminder
#[async_trait::async_trait]
pub trait ISentReminderRepo: Send + Sync {
    async fn find_by_vouchers(&self, voucher_ids: &[ID]) -> anyhow::Result<Vec<SentReminder>>;
    /// Entries for an already logged `(voucher, threshold)` pair replace the old entry
    async fn bulk_insert(&self, sent: &[SentReminder]) -> anyhow::Result<()>;
    async fn delete_all_before(&self, before: DateTime<Utc>) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::VoucherTrackerContext;
    use chrono::{Duration, TimeZone, Utc};
    use voucher_tracker_domain::{SentReminder, ID};

    #[tokio::test]
    async fn find_insert_and_prune() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let repo = &ctx.repos.sent_reminders;
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let voucher_id = ID::default();
        let other_voucher_id = ID::default();

        let sent = vec![
            SentReminder {
                voucher_id,
                days_left: 7,
                sent_at: now - Duration::days(40),
            },
            SentReminder {
                voucher_id,
                days_left: 3,
                sent_at: now,
            },
            SentReminder {
                voucher_id: other_voucher_id,
                days_left: 1,
                sent_at: now,
            },
        ];
        assert!(repo.bulk_insert(&sent).await.is_ok());

        let res = repo.find_by_vouchers(&[voucher_id]).await.unwrap();
        assert_eq!(res.len(), 2);
        assert!(res.iter().all(|s| s.voucher_id == voucher_id));
        assert!(repo.find_by_vouchers(&[]).await.unwrap().is_empty());

        // Logging the same pair again replaces the entry
        let resent = SentReminder {
            voucher_id,
            days_left: 7,
            sent_at: now,
        };
        assert!(repo.bulk_insert(&[resent.clone()]).await.is_ok());
        let res = repo.find_by_vouchers(&[voucher_id]).await.unwrap();
        assert_eq!(res.len(), 2);
        assert!(res.contains(&resent));

        assert!(repo.delete_all_before(now - Duration::days(1)).await.is_ok());
        let res = repo
            .find_by_vouchers(&[voucher_id, other_voucher_id])
            .await
            .unwrap();
        assert_eq!(res.len(), 3);

        assert!(repo.delete_all_before(now + Duration::days(1)).await.is_ok());
        let res = repo
            .find_by_vouchers(&[voucher_id, other_voucher_id])
            .await
            .unwrap();
        assert!(res.is_empty());
    }
}
