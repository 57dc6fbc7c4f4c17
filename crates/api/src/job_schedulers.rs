use crate::{reminder::SweepRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval_at, Instant};
use std::time::Duration;
use tracing::info;
use voucher_tracker_infra::VoucherTrackerContext;

/// Runs the reminder sweep every `reminder_sweep_interval_secs`. The first
/// sweep runs one full interval after startup.
pub fn start_reminder_sweep_job(ctx: VoucherTrackerContext) {
    actix_web::rt::spawn(async move {
        let period = Duration::from_secs(ctx.config.reminder_sweep_interval_secs);
        info!("Reminder sweep scheduled every {} seconds", period.as_secs());
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;

            let usecase = SweepRemindersUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}
