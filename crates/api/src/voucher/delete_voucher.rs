use super::subscribers::DeletePendingRemindersOnVoucherDeleted;
use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::delete_voucher::*;
use voucher_tracker_domain::{Voucher, ID};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn delete_voucher_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = DeleteVoucherUseCase {
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
pub struct DeleteVoucherUseCase {
    pub voucher_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteVoucherUseCase {
    type Response = Voucher;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteVoucher";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .vouchers
            .delete(&self.voucher_id)
            .await
            .ok_or(UseCaseError::NotFound(self.voucher_id))
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(DeletePendingRemindersOnVoucherDeleted)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::voucher::create_voucher::CreateVoucherUseCase;
    use voucher_tracker_domain::{RedemptionType, StoreType};

    async fn create_voucher(ctx: &VoucherTrackerContext) -> Voucher {
        let usecase = CreateVoucherUseCase {
            brand_name: "Nike".into(),
            discount_amount: "10 USD".into(),
            discount_value: None,
            currency_code: None,
            voucher_code: "NIKE10".into(),
            expiry_date: "2030-01-01".into(),
            store_type: StoreType::International,
            redemption_type: RedemptionType::Online,
            store_location: None,
            region: None,
            category: None,
            description: None,
        };
        execute(usecase, ctx).await.expect("To create voucher")
    }

    #[actix_web::main]
    #[test]
    async fn it_deletes_voucher_and_its_pending_reminders() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let voucher = create_voucher(&ctx).await;
        let other_voucher = create_voucher(&ctx).await;

        let now = ctx.sys.now();
        let reminders = vec![
            voucher_tracker_domain::PendingReminder {
                id: Default::default(),
                voucher_id: voucher.id,
                brand_name: voucher.brand_name.clone(),
                days_left: 3,
                created_at: now,
            },
            voucher_tracker_domain::PendingReminder {
                id: Default::default(),
                voucher_id: other_voucher.id,
                brand_name: other_voucher.brand_name.clone(),
                days_left: 3,
                created_at: now,
            },
        ];
        ctx.repos
            .pending_reminders
            .bulk_insert(&reminders)
            .await
            .unwrap();

        let usecase = DeleteVoucherUseCase {
            voucher_id: voucher.id,
        };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res.map(|v| v.id).ok(), Some(voucher.id));
        assert!(ctx.repos.vouchers.find(&voucher.id).await.is_none());

        let pending = ctx.repos.pending_reminders.drain().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].voucher_id, other_voucher.id);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_unknown_voucher() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let mut usecase = DeleteVoucherUseCase {
            voucher_id: ID::default(),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
