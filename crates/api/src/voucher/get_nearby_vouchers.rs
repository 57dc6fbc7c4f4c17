use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_nearby_vouchers::*;
use voucher_tracker_domain::{match_vouchers, LocationContext, Voucher};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_nearby_vouchers_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let body = body.into_inner();
    let usecase = GetNearbyVouchersUseCase {
        location: LocationContext::new(body.region, body.store_name),
    };

    execute(usecase, &ctx)
        .await
        .map(|vouchers| {
            let now = ctx.local_now();
            let vouchers = vouchers
                .into_iter()
                .map(|voucher| {
                    let classification = voucher.classify(&now);
                    (voucher, classification)
                })
                .collect();
            HttpResponse::Ok().json(APIResponse::new(vouchers))
        })
        .map_err(VoucherTrackerError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for VoucherTrackerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Vouchers usable at the location of the user
#[derive(Debug)]
pub struct GetNearbyVouchersUseCase {
    pub location: LocationContext,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNearbyVouchersUseCase {
    type Response = Vec<Voucher>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNearbyVouchers";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        let vouchers = ctx
            .repos
            .vouchers
            .find_all(ctx.config.max_vouchers)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(match_vouchers(vouchers, &self.location))
    }
}
