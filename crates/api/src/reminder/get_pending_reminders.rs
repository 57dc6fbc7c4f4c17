use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_pending_reminders::*;
use voucher_tracker_domain::PendingReminder;
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_pending_reminders_controller(
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = GetPendingRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
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

/// Returns the pending reminders and removes them, so every reminder is
/// handed out once
#[derive(Debug)]
pub struct GetPendingRemindersUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPendingRemindersUseCase {
    type Response = Vec<PendingReminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPendingReminders";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .pending_reminders
            .drain()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
