use crate::expiry::ExpiryStatus;
use crate::voucher::Voucher;
use chrono::{DateTime, TimeZone};

/// Counts of `Voucher`s per expiry status.
///
/// Vouchers with an unparseable expiry date are only counted in `total`, so
/// the three status buckets can add up to less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoucherStats {
    pub total: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

pub fn aggregate<Tz: TimeZone>(vouchers: &[Voucher], now: &DateTime<Tz>) -> VoucherStats {
    vouchers.iter().fold(
        VoucherStats {
            total: vouchers.len(),
            ..Default::default()
        },
        |mut stats, voucher| {
            match voucher.classify(now).status {
                ExpiryStatus::Active => stats.active += 1,
                ExpiryStatus::ExpiringSoon => stats.expiring_soon += 1,
                ExpiryStatus::Expired => stats.expired += 1,
                ExpiryStatus::Unparseable => (),
            }
            stats
        },
    )
}
