use chrono::{DateTime, Duration, Utc};
use voucher_tracker_sdk::{CreateVoucherInput, StoreType, Voucher};

pub fn format_date(dt: &DateTime<Utc>) -> String {
    // 2001-07-08
    dt.format("%F").to_string()
}

pub fn days_from(now: &DateTime<Utc>, days: i64) -> String {
    format_date(&(*now + Duration::days(days)))
}

pub fn voucher_input(
    brand_name: &str,
    store_type: StoreType,
    expiry_date: String,
) -> CreateVoucherInput {
    CreateVoucherInput {
        brand_name: brand_name.into(),
        discount_amount: "20% OFF".into(),
        voucher_code: format!("{}-CODE", brand_name.to_uppercase()),
        expiry_date,
        store_type: Some(store_type),
        ..Default::default()
    }
}

pub fn brands(vouchers: &[Voucher]) -> Vec<&str> {
    vouchers.iter().map(|v| v.brand_name.as_str()).collect()
}
