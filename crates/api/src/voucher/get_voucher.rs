use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_voucher::*;
use voucher_tracker_domain::{Voucher, ID};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_voucher_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = GetVoucherUseCase {
        voucher_id: path.voucher_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|voucher| {
            let classification = voucher.classify(&ctx.local_now());
            HttpResponse::Ok().json(APIResponse::new(voucher, classification))
        })
        .map_err(VoucherTrackerError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for VoucherTrackerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(voucher_id) => Self::NotFound(format!(
                "The voucher with id: {}, was not found.",
                voucher_id
            )),
        }
    }
}

#[derive(Debug)]
pub struct GetVoucherUseCase {
    pub voucher_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVoucherUseCase {
    type Response = Voucher;

    type Error = UseCaseError;

    const NAME: &'static str = "GetVoucher";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .vouchers
            .find(&self.voucher_id)
            .await
            .ok_or(UseCaseError::NotFound(self.voucher_id))
    }
}
