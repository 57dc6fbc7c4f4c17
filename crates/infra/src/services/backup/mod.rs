mod http;
mod inmemory;

pub use http::HttpBackupSink;
pub use inmemory::InMemoryBackupSink;
use voucher_tracker_domain::VoucherSnapshot;

/// Remote storage that receives full voucher snapshots
#[async_trait::async_trait]
pub trait IBackupSink: Send + Sync {
    /// Overwrites the file called `file_name` with the snapshot
    async fn push(&self, file_name: &str, snapshot: &VoucherSnapshot) -> anyhow::Result<()>;
}
