use super::delete_voucher::DeleteVoucherUseCase;
use crate::shared::usecase::Subscriber;
use tracing::error;
use voucher_tracker_domain::Voucher;
use voucher_tracker_infra::VoucherTrackerContext;

pub struct DeletePendingRemindersOnVoucherDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteVoucherUseCase> for DeletePendingRemindersOnVoucherDeleted {
    async fn notify(&self, e: &Voucher, ctx: &VoucherTrackerContext) {
        // Sideeffect, ignore result
        if let Err(err) = ctx.repos.pending_reminders.delete_by_voucher(&e.id).await {
            error!(
                "Unable to delete pending reminders of voucher: {}. Err: {:?}",
                e.id, err
            );
        }
    }
}
