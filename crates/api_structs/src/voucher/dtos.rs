use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voucher_tracker_domain::{
    DiscountValue, ExpiryClassification, ExpiryStatus, RedemptionType, StoreType, Voucher,
    VoucherStats, ID,
};

/// A `Voucher` together with its expiry classification at the time of the request
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoucherDTO {
    pub id: ID,
    pub brand_name: String,
    pub discount_amount: String,
    pub discount_value: Option<DiscountValue>,
    pub voucher_code: String,
    pub expiry_date: String,
    pub store_type: StoreType,
    pub redemption_type: RedemptionType,
    pub store_location: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ExpiryStatus,
    pub days_until_expiry: Option<i64>,
}

impl VoucherDTO {
    pub fn new(voucher: Voucher, classification: ExpiryClassification) -> Self {
        Self {
            id: voucher.id,
            brand_name: voucher.brand_name,
            discount_amount: voucher.discount_amount,
            discount_value: voucher.discount_value,
            voucher_code: voucher.voucher_code,
            expiry_date: voucher.expiry_date,
            store_type: voucher.store_type,
            redemption_type: voucher.redemption_type,
            store_location: voucher.store_location,
            region: voucher.region,
            category: voucher.category,
            description: voucher.description,
            created_at: voucher.created_at,
            status: classification.status,
            days_until_expiry: classification.days_until_expiry,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoucherStatsDTO {
    pub total: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl VoucherStatsDTO {
    pub fn new(stats: VoucherStats) -> Self {
        Self {
            total: stats.total,
            active: stats.active,
            expiring_soon: stats.expiring_soon,
            expired: stats.expired,
        }
    }
}
