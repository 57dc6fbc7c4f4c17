use super::IBackupSink;
use std::sync::Mutex;
use voucher_tracker_domain::VoucherSnapshot;

/// Keeps every pushed snapshot, serialized, in memory. Used by tests.
pub struct InMemoryBackupSink {
    files: Mutex<Vec<(String, String)>>,
}

impl InMemoryBackupSink {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
        }
    }

    /// `(file_name, json)` of every push, oldest first
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.files.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IBackupSink for InMemoryBackupSink {
    async fn push(&self, file_name: &str, snapshot: &VoucherSnapshot) -> anyhow::Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.files
            .lock()
            .unwrap()
            .push((file_name.to_string(), json));
        Ok(())
    }
}
