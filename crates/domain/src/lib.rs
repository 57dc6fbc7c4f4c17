mod backup;
mod date;
mod expiry;
mod relevance;
mod reminder;
mod shared;
mod stats;
mod voucher;

pub use backup::VoucherSnapshot;
pub use date::parse_expiry_date;
pub use expiry::{
    classify, classify_within, ExpiryClassification, ExpiryStatus, DEFAULT_EXPIRING_SOON_DAYS,
};
pub use relevance::{is_relevant, match_vouchers, LocationContext};
pub use reminder::{
    sweep, InvalidSettingsError, PendingReminder, ReminderDraft, ReminderSettings, SentReminder,
    SentReminderLog, DEFAULT_REMINDER_DAYS,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use stats::{aggregate, VoucherStats};
pub use voucher::{DiscountValue, RedemptionType, StoreType, Voucher};

pub use chrono_tz::Tz;
