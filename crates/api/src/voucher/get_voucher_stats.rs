use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_voucher_stats::*;
use voucher_tracker_domain::{aggregate, VoucherStats};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_voucher_stats_controller(
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = GetVoucherStatsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::new(stats)))
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

#[derive(Debug)]
pub struct GetVoucherStatsUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVoucherStatsUseCase {
    type Response = VoucherStats;

    type Error = UseCaseError;

    const NAME: &'static str = "GetVoucherStats";

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

        Ok(aggregate(&vouchers, &ctx.local_now()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::*;
    use voucher_tracker_domain::StoreType;

    #[actix_web::main]
    #[test]
    async fn it_counts_vouchers_per_status() {
        let ctx = setup_context();
        let mut usecase = GetVoucherStatsUseCase {};
        assert_eq!(usecase.execute(&ctx).await.unwrap(), VoucherStats::default());

        let vouchers = vec![
            voucher_factory("Expired", StoreType::International, &days_from_now(-3)),
            voucher_factory("Today", StoreType::International, &days_from_now(0)),
            voucher_factory("Soon", StoreType::Regional, &days_from_now(7)),
            voucher_factory("Later", StoreType::Specific, &days_from_now(8)),
            voucher_factory("Broken", StoreType::International, "not-a-date"),
        ];
        insert_vouchers(&ctx, &vouchers).await;

        let stats = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            stats,
            VoucherStats {
                total: 5,
                active: 1,
                expiring_soon: 2,
                expired: 1,
            }
        );
    }
}
