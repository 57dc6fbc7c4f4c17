use crate::dtos::{VoucherDTO, VoucherStatsDTO};
use serde::{Deserialize, Serialize};
use voucher_tracker_domain::{
    ExpiryClassification, RedemptionType, StoreType, Voucher, VoucherStats, ID,
};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherResponse {
    pub voucher: VoucherDTO,
}

impl VoucherResponse {
    pub fn new(voucher: Voucher, classification: ExpiryClassification) -> Self {
        Self {
            voucher: VoucherDTO::new(voucher, classification),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VouchersResponse {
    pub vouchers: Vec<VoucherDTO>,
}

impl VouchersResponse {
    pub fn new(vouchers: Vec<(Voucher, ExpiryClassification)>) -> Self {
        Self {
            vouchers: vouchers
                .into_iter()
                .map(|(voucher, classification)| VoucherDTO::new(voucher, classification))
                .collect(),
        }
    }
}

pub mod create_voucher {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Clone, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub brand_name: String,
        pub discount_amount: String,
        /// Structured amount of the discount
        #[serde(default)]
        pub discount_value: Option<f64>,
        /// Currency of `discount_value`, the configured default currency when not given
        #[serde(default)]
        pub currency_code: Option<String>,
        pub voucher_code: String,
        pub expiry_date: String,
        #[serde(default)]
        pub store_type: Option<StoreType>,
        #[serde(default)]
        pub redemption_type: Option<RedemptionType>,
        #[serde(default)]
        pub store_location: Option<String>,
        #[serde(default)]
        pub region: Option<String>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
    }

    pub type APIResponse = VoucherResponse;
}

pub mod get_voucher {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub voucher_id: ID,
    }

    pub type APIResponse = VoucherResponse;
}

pub mod delete_voucher {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub voucher_id: ID,
    }

    pub type APIResponse = VoucherResponse;
}

pub mod get_vouchers {
    use super::*;

    pub type APIResponse = VouchersResponse;
}

pub mod get_expiring_vouchers {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// Size of the expiring soon window in days. Defaults to 7.
        pub days: Option<i64>,
    }

    pub type APIResponse = VouchersResponse;
}

pub mod get_nearby_vouchers {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Clone, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub region: Option<String>,
        #[serde(default)]
        pub store_name: Option<String>,
    }

    pub type APIResponse = VouchersResponse;
}

pub mod get_voucher_stats {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: VoucherStatsDTO,
    }

    impl APIResponse {
        pub fn new(stats: VoucherStats) -> Self {
            Self {
                stats: VoucherStatsDTO::new(stats),
            }
        }
    }
}
