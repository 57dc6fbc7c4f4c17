use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_vouchers::*;
use voucher_tracker_domain::Voucher;
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_vouchers_controller(
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = GetVouchersUseCase {};

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

/// Lists the stored vouchers, oldest first
#[derive(Debug)]
pub struct GetVouchersUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVouchersUseCase {
    type Response = Vec<Voucher>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetVouchers";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .vouchers
            .find_all(ctx.config.max_vouchers)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
