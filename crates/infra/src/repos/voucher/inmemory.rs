use super::IVoucherRepo;
use crate::repos::shared::inmemory_repo::*;
use voucher_tracker_domain::{Voucher, ID};

pub struct InMemoryVoucherRepo {
    vouchers: std::sync::Mutex<Vec<Voucher>>,
}

impl InMemoryVoucherRepo {
    pub fn new() -> Self {
        Self {
            vouchers: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IVoucherRepo for InMemoryVoucherRepo {
    async fn insert(&self, voucher: &Voucher) -> anyhow::Result<()> {
        insert(voucher, &self.vouchers);
        Ok(())
    }

    async fn find(&self, voucher_id: &ID) -> Option<Voucher> {
        find(voucher_id, &self.vouchers)
    }

    async fn find_all(&self, limit: usize) -> anyhow::Result<Vec<Voucher>> {
        let mut vouchers = find_by(&self.vouchers, |_| true);
        vouchers.sort_by_key(|v| v.created_at);
        vouchers.truncate(limit);
        Ok(vouchers)
    }

    async fn delete(&self, voucher_id: &ID) -> Option<Voucher> {
        delete(voucher_id, &self.vouchers)
    }
}
