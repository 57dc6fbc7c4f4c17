use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::get_reminder_settings::*;
use voucher_tracker_domain::ReminderSettings;
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn get_reminder_settings_controller(
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = GetReminderSettingsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
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

/// The stored settings, or the defaults when nothing has been stored yet
#[derive(Debug)]
pub struct GetReminderSettingsUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderSettingsUseCase {
    type Response = ReminderSettings;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminderSettings";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminder_settings.get().await {
            Ok(Some(settings)) => Ok(settings),
            Ok(None) => Ok(ReminderSettings::new(&ctx.config.default_currency)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
