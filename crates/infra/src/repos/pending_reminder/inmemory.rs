use super::IPendingReminderRepo;
use crate::repos::sent_reminder::InMemorySentReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use std::sync::Arc;
use voucher_tracker_domain::{PendingReminder, ID};

pub struct InMemoryPendingReminderRepo {
    reminders: std::sync::Mutex<Vec<PendingReminder>>,
    sent_reminders: Arc<InMemorySentReminderRepo>,
}

impl InMemoryPendingReminderRepo {
    pub fn new(sent_reminders: Arc<InMemorySentReminderRepo>) -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
            sent_reminders,
        }
    }
}

#[async_trait::async_trait]
impl IPendingReminderRepo for InMemoryPendingReminderRepo {
    async fn bulk_insert(
        &self,
        reminders: &[PendingReminder],
    ) -> anyhow::Result<Vec<PendingReminder>> {
        bulk_insert(reminders, &self.reminders);
        Ok(reminders.to_vec())
    }

    async fn bulk_insert_unsent(
        &self,
        reminders: &[PendingReminder],
    ) -> anyhow::Result<Vec<PendingReminder>> {
        let unsent = reminders
            .iter()
            .filter(|r| self.sent_reminders.insert_unsent(&r.to_sent()))
            .cloned()
            .collect::<Vec<_>>();
        bulk_insert(&unsent, &self.reminders);
        Ok(unsent)
    }

    async fn drain(&self) -> anyhow::Result<Vec<PendingReminder>> {
        let mut reminders = find_and_delete_by(&self.reminders, |_| true);
        reminders.sort_by_key(|r| (r.created_at, r.days_left));
        Ok(reminders)
    }

    async fn delete_by_voucher(&self, voucher_id: &ID) -> anyhow::Result<()> {
        find_and_delete_by(&self.reminders, |r| r.voucher_id == *voucher_id);
        Ok(())
    }
}
