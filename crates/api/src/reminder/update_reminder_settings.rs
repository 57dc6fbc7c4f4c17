use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::update_reminder_settings::*;
use voucher_tracker_domain::{InvalidSettingsError, ReminderSettings};
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn update_reminder_settings_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let body = body.into_inner();
    let usecase = UpdateReminderSettingsUseCase {
        email_enabled: body.email_enabled,
        email_address: body.email_address,
        browser_notifications_enabled: body.browser_notifications_enabled,
        reminder_days: body.reminder_days,
        default_currency: body.default_currency,
    };

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(VoucherTrackerError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidSettings(InvalidSettingsError),
    StorageError,
}

impl From<UseCaseError> for VoucherTrackerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidSettings(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl From<InvalidSettingsError> for UseCaseError {
    fn from(e: InvalidSettingsError) -> Self {
        Self::InvalidSettings(e)
    }
}

/// Fields that are `None` keep their current value. An empty `email_address`
/// removes the address.
#[derive(Debug)]
pub struct UpdateReminderSettingsUseCase {
    pub email_enabled: Option<bool>,
    pub email_address: Option<String>,
    pub browser_notifications_enabled: Option<bool>,
    pub reminder_days: Option<Vec<i64>>,
    pub default_currency: Option<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderSettingsUseCase {
    type Response = ReminderSettings;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminderSettings";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        let mut settings = ctx
            .repos
            .reminder_settings
            .get()
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .unwrap_or_else(|| ReminderSettings::new(&ctx.config.default_currency));

        if let Some(reminder_days) = &self.reminder_days {
            settings.set_reminder_days(reminder_days.clone())?;
        }
        if let Some(default_currency) = &self.default_currency {
            settings.set_default_currency(default_currency)?;
        }
        if let Some(email_enabled) = self.email_enabled {
            settings.email_enabled = email_enabled;
        }
        if let Some(email_address) = &self.email_address {
            let email_address = email_address.trim();
            settings.email_address = if email_address.is_empty() {
                None
            } else {
                Some(email_address.to_string())
            };
        }
        if let Some(browser_notifications_enabled) = self.browser_notifications_enabled {
            settings.browser_notifications_enabled = browser_notifications_enabled;
        }

        ctx.repos
            .reminder_settings
            .save(&settings)
            .await
            .map(|_| settings)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn usecase_factory() -> UpdateReminderSettingsUseCase {
        UpdateReminderSettingsUseCase {
            email_enabled: None,
            email_address: None,
            browser_notifications_enabled: None,
            reminder_days: None,
            default_currency: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_updates_given_fields() {
        let ctx = VoucherTrackerContext::create_inmemory();
        let mut usecase = usecase_factory();
        usecase.reminder_days = Some(vec![1, 14, 1]);
        usecase.email_enabled = Some(true);
        usecase.email_address = Some(" me@example.com ".into());

        let settings = usecase.execute(&ctx).await.unwrap();
        assert_eq!(settings.reminder_days(), &[14, 1]);
        assert!(settings.email_enabled);
        assert_eq!(settings.email_address, Some("me@example.com".into()));
        assert!(settings.browser_notifications_enabled);

        let stored = ctx.repos.reminder_settings.get().await.unwrap();
        assert_eq!(stored, Some(settings));

        // Untouched fields are kept
        let mut usecase = usecase_factory();
        usecase.default_currency = Some("nok".into());
        usecase.email_address = Some("".into());
        let settings = usecase.execute(&ctx).await.unwrap();
        assert_eq!(settings.reminder_days(), &[14, 1]);
        assert_eq!(settings.default_currency(), "NOK");
        assert!(settings.email_enabled);
        assert!(settings.email_address.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_settings() {
        let ctx = VoucherTrackerContext::create_inmemory();

        let mut usecase = usecase_factory();
        usecase.reminder_days = Some(vec![3, -1]);
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidSettings(
                InvalidSettingsError::NonPositiveReminderDay(-1)
            ))
        );

        let mut usecase = usecase_factory();
        usecase.default_currency = Some("  ".into());
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidSettings(
                InvalidSettingsError::EmptyCurrency
            ))
        );

        // Nothing was stored
        assert!(ctx.repos.reminder_settings.get().await.unwrap().is_none());
    }
}
