mod backup;
mod base;
mod reminder;
mod status;
mod voucher;

use backup::BackupClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use reqwest::StatusCode;
use reminder::ReminderClient;
pub use reminder::UpdateReminderSettingsInput;
use status::StatusClient;
use std::sync::Arc;
use voucher::VoucherClient;
pub use voucher::{CreateVoucherInput, GetNearbyVouchersInput};

pub use voucher_tracker_api_structs::dtos::*;
pub use voucher_tracker_domain::{DiscountValue, ExpiryStatus, RedemptionType, StoreType, ID};

// Domain
pub use voucher_tracker_api_structs::dtos::PendingReminderDTO as PendingReminder;
pub use voucher_tracker_api_structs::dtos::ReminderSettingsDTO as ReminderSettings;
pub use voucher_tracker_api_structs::dtos::VoucherDTO as Voucher;
pub use voucher_tracker_api_structs::dtos::VoucherStatsDTO as VoucherStats;

/// Voucher Tracker Server SDK
///
/// The SDK contains methods for interacting with the Voucher Tracker server
/// API.
#[derive(Clone)]
pub struct VoucherTrackerSDK {
    pub backup: BackupClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub voucher: VoucherClient,
}

impl VoucherTrackerSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let backup = BackupClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let voucher = VoucherClient::new(base);

        Self {
            backup,
            reminder,
            status,
            voucher,
        }
    }
}
