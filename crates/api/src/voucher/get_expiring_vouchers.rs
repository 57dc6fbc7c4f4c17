use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_expiring_vouchers::*;
use voucher_tracker_domain::{
    classify_within, ExpiryClassification, ExpiryStatus, Voucher, DEFAULT_EXPIRING_SOON_DAYS,
};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_expiring_vouchers_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = GetExpiringVouchersUseCase {
        days: query_params.days.unwrap_or(DEFAULT_EXPIRING_SOON_DAYS),
    };

    execute(usecase, &ctx)
        .await
        .map(|vouchers| HttpResponse::Ok().json(APIResponse::new(vouchers)))
        .map_err(VoucherTrackerError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidWindow(i64),
    StorageError,
}

impl From<UseCaseError> for VoucherTrackerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidWindow(days) => Self::BadClientData(format!(
                "The number of days: {}, must not be negative.",
                days
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Vouchers expiring between today and `days` days from today, both inclusive.
/// Keeps the stored order.
#[derive(Debug)]
pub struct GetExpiringVouchersUseCase {
    pub days: i64,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExpiringVouchersUseCase {
    type Response = Vec<(Voucher, ExpiryClassification)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetExpiringVouchers";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        if self.days < 0 {
            return Err(UseCaseError::InvalidWindow(self.days));
        }

        let vouchers = ctx
            .repos
            .vouchers
            .find_all(ctx.config.max_vouchers)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let now = ctx.local_now();
        Ok(vouchers
            .into_iter()
            .filter_map(|voucher| {
                let classification = classify_within(&voucher.expiry_date, &now, self.days);
                match classification.status {
                    ExpiryStatus::ExpiringSoon => Some((voucher, classification)),
                    _ => None,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::*;
    use voucher_tracker_domain::StoreType;

    fn brands(res: &[(Voucher, ExpiryClassification)]) -> Vec<&str> {
        res.iter().map(|(v, _)| v.brand_name.as_str()).collect()
    }

    #[actix_web::main]
    #[test]
    async fn it_lists_vouchers_within_window() {
        let ctx = setup_context();
        let vouchers = vec![
            voucher_factory("Yesterday", StoreType::International, &days_from_now(-1)),
            voucher_factory("Today", StoreType::International, &days_from_now(0)),
            voucher_factory("In three days", StoreType::Regional, &days_from_now(3)),
            voucher_factory("Broken", StoreType::International, "not-a-date"),
            voucher_factory("In a week", StoreType::Specific, &days_from_now(7)),
            voucher_factory("In a month", StoreType::International, &days_from_now(30)),
        ];
        insert_vouchers(&ctx, &vouchers).await;

        let mut usecase = GetExpiringVouchersUseCase {
            days: DEFAULT_EXPIRING_SOON_DAYS,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(brands(&res), vec!["Today", "In three days", "In a week"]);
        assert_eq!(res[1].1.days_until_expiry, Some(3));

        let mut usecase = GetExpiringVouchersUseCase { days: 30 };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            brands(&res),
            vec!["Today", "In three days", "In a week", "In a month"]
        );

        let mut usecase = GetExpiringVouchersUseCase { days: 0 };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(brands(&res), vec!["Today"]);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_negative_window() {
        let ctx = setup_context();
        let mut usecase = GetExpiringVouchersUseCase { days: -1 };
        assert_eq!(
            usecase.execute(&ctx).await.map(|res| res.len()),
            Err(UseCaseError::InvalidWindow(-1))
        );
    }
}
