use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use voucher_tracker_domain::{RedemptionType, StoreType, Voucher};
use voucher_tracker_infra::{StaticTimeSys, VoucherTrackerContext};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
}

/// In memory context with the clock frozen at `now()`
pub fn setup_context() -> VoucherTrackerContext {
    let mut ctx = VoucherTrackerContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now()));
    ctx
}

pub fn days_from_now(days: i64) -> String {
    (now() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

pub fn voucher_factory(brand_name: &str, store_type: StoreType, expiry_date: &str) -> Voucher {
    Voucher {
        id: Default::default(),
        brand_name: brand_name.into(),
        discount_amount: "10% OFF".into(),
        discount_value: None,
        voucher_code: "CODE".into(),
        expiry_date: expiry_date.into(),
        store_type,
        redemption_type: RedemptionType::Both,
        store_location: None,
        region: None,
        category: None,
        description: None,
        created_at: now(),
    }
}

pub async fn insert_vouchers(ctx: &VoucherTrackerContext, vouchers: &[Voucher]) {
    for voucher in vouchers {
        ctx.repos
            .vouchers
            .insert(voucher)
            .await
            .expect("To insert voucher");
    }
}
