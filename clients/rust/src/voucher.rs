use crate::{APIResponse, BaseClient, RedemptionType, StoreType, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use voucher_tracker_api_structs::*;

#[derive(Clone)]
pub struct VoucherClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateVoucherInput {
    pub brand_name: String,
    pub discount_amount: String,
    pub discount_value: Option<f64>,
    pub currency_code: Option<String>,
    pub voucher_code: String,
    pub expiry_date: String,
    pub store_type: Option<StoreType>,
    pub redemption_type: Option<RedemptionType>,
    pub store_location: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetNearbyVouchersInput {
    pub region: Option<String>,
    pub store_name: Option<String>,
}

impl VoucherClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateVoucherInput,
    ) -> APIResponse<create_voucher::APIResponse> {
        let body = create_voucher::RequestBody {
            brand_name: input.brand_name,
            discount_amount: input.discount_amount,
            discount_value: input.discount_value,
            currency_code: input.currency_code,
            voucher_code: input.voucher_code,
            expiry_date: input.expiry_date,
            store_type: input.store_type,
            redemption_type: input.redemption_type,
            store_location: input.store_location,
            region: input.region,
            category: input.category,
            description: input.description,
        };
        self.base
            .post(body, "vouchers".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, voucher_id: ID) -> APIResponse<get_voucher::APIResponse> {
        self.base
            .get(format!("vouchers/{}", voucher_id), StatusCode::OK)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_vouchers::APIResponse> {
        self.base.get("vouchers".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, voucher_id: ID) -> APIResponse<delete_voucher::APIResponse> {
        self.base
            .delete(format!("vouchers/{}", voucher_id), StatusCode::OK)
            .await
    }

    /// `None` uses the default window of the server
    pub async fn get_expiring(
        &self,
        days: Option<i64>,
    ) -> APIResponse<get_expiring_vouchers::APIResponse> {
        let path = match days {
            Some(days) => format!("vouchers/expiring-soon?days={}", days),
            None => "vouchers/expiring-soon".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get_nearby(
        &self,
        input: GetNearbyVouchersInput,
    ) -> APIResponse<get_nearby_vouchers::APIResponse> {
        let body = get_nearby_vouchers::RequestBody {
            region: input.region,
            store_name: input.store_name,
        };
        self.base
            .post(body, "vouchers/nearby".into(), StatusCode::OK)
            .await
    }

    pub async fn get_stats(&self) -> APIResponse<get_voucher_stats::APIResponse> {
        self.base.get("vouchers/stats".into(), StatusCode::OK).await
    }
}
