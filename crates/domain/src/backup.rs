use crate::voucher::Voucher;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point in time copy of all `Voucher`s that is pushed to the backup target
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherSnapshot {
    pub exported_at: DateTime<Utc>,
    pub voucher_count: usize,
    pub vouchers: Vec<Voucher>,
}

impl VoucherSnapshot {
    pub fn new(vouchers: Vec<Voucher>, exported_at: DateTime<Utc>) -> Self {
        Self {
            exported_at,
            voucher_count: vouchers.len(),
            vouchers,
        }
    }
}
