use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::create_voucher::*;
use voucher_tracker_domain::{DiscountValue, RedemptionType, StoreType, Voucher};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn create_voucher_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let body = body.into_inner();
    let usecase = CreateVoucherUseCase {
        brand_name: body.brand_name,
        discount_amount: body.discount_amount,
        discount_value: body.discount_value,
        currency_code: body.currency_code,
        voucher_code: body.voucher_code,
        expiry_date: body.expiry_date,
        store_type: body.store_type.unwrap_or_default(),
        redemption_type: body.redemption_type.unwrap_or_default(),
        store_location: body.store_location,
        region: body.region,
        category: body.category,
        description: body.description,
    };

    execute(usecase, &ctx)
        .await
        .map(|voucher| {
            let classification = voucher.classify(&ctx.local_now());
            HttpResponse::Created().json(APIResponse::new(voucher, classification))
        })
        .map_err(VoucherTrackerError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyField(String),
    StorageError,
}

impl From<UseCaseError> for VoucherTrackerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyField(field) => {
                Self::BadClientData(format!("The field: {}, must not be empty.", field))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct CreateVoucherUseCase {
    pub brand_name: String,
    pub discount_amount: String,
    pub discount_value: Option<f64>,
    pub currency_code: Option<String>,
    pub voucher_code: String,
    /// Stored as given, a malformed date is not rejected
    pub expiry_date: String,
    pub store_type: StoreType,
    pub redemption_type: RedemptionType,
    pub store_location: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateVoucherUseCase {
    type Response = Voucher;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateVoucher";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        let required_fields = [
            ("brandName", &self.brand_name),
            ("discountAmount", &self.discount_amount),
            ("voucherCode", &self.voucher_code),
            ("expiryDate", &self.expiry_date),
        ];
        for (field, value) in required_fields {
            if value.trim().is_empty() {
                return Err(UseCaseError::EmptyField(field.into()));
            }
        }

        let discount_value = match self.discount_value {
            Some(amount) => {
                // Stored settings take precedence over the configured default
                let default_currency = match ctx.repos.reminder_settings.get().await {
                    Ok(Some(settings)) => settings.default_currency().to_string(),
                    Ok(None) => ctx.config.default_currency.clone(),
                    Err(_) => return Err(UseCaseError::StorageError),
                };
                Some(DiscountValue::new(
                    amount,
                    self.currency_code.clone(),
                    &default_currency,
                ))
            }
            None => None,
        };

        let voucher = Voucher {
            id: Default::default(),
            brand_name: self.brand_name.clone(),
            discount_amount: self.discount_amount.clone(),
            discount_value,
            voucher_code: self.voucher_code.clone(),
            expiry_date: self.expiry_date.trim().to_string(),
            store_type: self.store_type,
            redemption_type: self.redemption_type,
            store_location: non_blank(&self.store_location),
            region: non_blank(&self.region),
            category: non_blank(&self.category),
            description: non_blank(&self.description),
            created_at: ctx.sys.now(),
        };

        ctx.repos
            .vouchers
            .insert(&voucher)
            .await
            .map(|_| voucher)
            .map_err(|_| UseCaseError::StorageError)
    }
}
