mod inmemory;
mod postgres;

pub use inmemory::InMemoryVoucherRepo;
pub use postgres::PostgresVoucherRepo;
use voucher_tracker_domain::{Voucher, ID};

#[async_trait::async_trait]
pub trait IVoucherRepo: Send + Sync {
    async fn insert(&self, voucher: &Voucher) -> anyhow::Result<()>;
    async fn find(&self, voucher_id: &ID) -> Option<Voucher>;
    /// At most `limit` vouchers, oldest first
    async fn find_all(&self, limit: usize) -> anyhow::Result<Vec<Voucher>>;
    async fn delete(&self, voucher_id: &ID) -> Option<Voucher>;
}
