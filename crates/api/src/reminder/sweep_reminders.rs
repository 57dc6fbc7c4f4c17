use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Duration, Utc};
use tracing::info;
use voucher_tracker_api_structs::check_reminders::*;
use voucher_tracker_domain::{sweep, PendingReminder, ReminderSettings, SentReminderLog};
use voucher_tracker_infra::{VoucherTrackerContext, MAX_REMINDER_RETENTION_DAYS};

pub async fn check_reminders_controller(
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = SweepRemindersUseCase {};

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

impl From<anyhow::Error> for UseCaseError {
    fn from(_: anyhow::Error) -> Self {
        Self::StorageError
    }
}

/// Creates a `PendingReminder` for every voucher that is exactly at one of the
/// configured reminder thresholds today.
///
/// With reminder dedup enabled a `(voucher, threshold)` pair produces at most one
/// reminder within the retention window, no matter how often the sweep runs.
/// Responds with the reminders created by this sweep.
#[derive(Debug)]
pub struct SweepRemindersUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for SweepRemindersUseCase {
    type Response = Vec<PendingReminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "SweepReminders";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let stored_settings = ctx.repos.reminder_settings.get().await?;
        let mut settings = stored_settings
            .clone()
            .unwrap_or_else(|| ReminderSettings::new(&ctx.config.default_currency));

        let vouchers = ctx.repos.vouchers.find_all(ctx.config.max_vouchers).await?;
        let mut drafts = sweep(&vouchers, &settings, &ctx.local_now());

        if ctx.config.reminder_dedup {
            let retention_days = ctx
                .config
                .reminder_retention_days
                .clamp(1, MAX_REMINDER_RETENTION_DAYS);
            let retention_start = now
                .checked_sub_signed(Duration::days(retention_days))
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            ctx.repos
                .sent_reminders
                .delete_all_before(retention_start)
                .await?;
            let voucher_ids = drafts.iter().map(|d| d.voucher_id).collect::<Vec<_>>();
            let sent = ctx.repos.sent_reminders.find_by_vouchers(&voucher_ids).await?;
            drafts = SentReminderLog::new(&sent, retention_start).retain_unsent(drafts);
        }

        let mut reminders = drafts
            .into_iter()
            .map(|draft| draft.into_pending(now))
            .collect::<Vec<_>>();
        if !reminders.is_empty() {
            let pending_reminders = &ctx.repos.pending_reminders;
            // The sent log read above may be stale when sweeps overlap
            reminders = if ctx.config.reminder_dedup {
                pending_reminders.bulk_insert_unsent(&reminders).await?
            } else {
                pending_reminders.bulk_insert(&reminders).await?
            };
        }

        match stored_settings {
            Some(_) => {
                ctx.repos.reminder_settings.update_last_check(now).await?;
            }
            None => {
                settings.last_check = Some(now);
                ctx.repos.reminder_settings.save(&settings).await?;
            }
        }

        info!(
            "Reminder sweep over {} vouchers created {} reminders",
            vouchers.len(),
            reminders.len()
        );
        Ok(reminders)
    }
}
