use super::ISentReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use voucher_tracker_domain::{SentReminder, ID};

pub struct InMemorySentReminderRepo {
    sent: std::sync::Mutex<Vec<SentReminder>>,
}

impl InMemorySentReminderRepo {
    pub fn new() -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Logs the entry unless its `(voucher, threshold)` pair is already logged.
    /// Returns whether it was logged.
    pub fn insert_unsent(&self, entry: &SentReminder) -> bool {
        let mut sent = self.sent.lock().unwrap();
        if sent
            .iter()
            .any(|s| s.voucher_id == entry.voucher_id && s.days_left == entry.days_left)
        {
            return false;
        }
        sent.push(entry.clone());
        true
    }
}

#[async_trait::async_trait]
impl ISentReminderRepo for InMemorySentReminderRepo {
    async fn find_by_vouchers(&self, voucher_ids: &[ID]) -> anyhow::Result<Vec<SentReminder>> {
        Ok(find_by(&self.sent, |s| voucher_ids.contains(&s.voucher_id)))
    }

    async fn bulk_insert(&self, sent: &[SentReminder]) -> anyhow::Result<()> {
        for entry in sent {
            find_and_delete_by(&self.sent, |s| {
                s.voucher_id == entry.voucher_id && s.days_left == entry.days_left
            });
        }
        bulk_insert(sent, &self.sent);
        Ok(())
    }

    async fn delete_all_before(&self, before: DateTime<Utc>) -> anyhow::Result<()> {
        find_and_delete_by(&self.sent, |s| s.sent_at < before);
        Ok(())
    }
}
