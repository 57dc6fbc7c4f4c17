use super::IVoucherRepo;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;
use voucher_tracker_domain::{DiscountValue, Voucher, ID};

pub struct PostgresVoucherRepo {
    pool: PgPool,
}

impl PostgresVoucherRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VoucherRaw {
    voucher_uid: Uuid,
    brand_name: String,
    discount_amount: String,
    discount_value: Option<f64>,
    discount_currency: Option<String>,
    voucher_code: String,
    expiry_date: String,
    store_type: String,
    redemption_type: String,
    store_location: Option<String>,
    region: Option<String>,
    category: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<VoucherRaw> for Voucher {
    fn from(raw: VoucherRaw) -> Self {
        let discount_value = match (raw.discount_value, raw.discount_currency) {
            (Some(amount), Some(currency_code)) => Some(DiscountValue {
                amount,
                currency_code,
            }),
            _ => None,
        };
        Self {
            id: raw.voucher_uid.into(),
            brand_name: raw.brand_name,
            discount_amount: raw.discount_amount,
            discount_value,
            voucher_code: raw.voucher_code,
            expiry_date: raw.expiry_date,
            store_type: raw.store_type.parse().unwrap_or_default(),
            redemption_type: raw.redemption_type.parse().unwrap_or_default(),
            store_location: raw.store_location,
            region: raw.region,
            category: raw.category,
            description: raw.description,
            created_at: raw.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IVoucherRepo for PostgresVoucherRepo {
    async fn insert(&self, voucher: &Voucher) -> anyhow::Result<()> {
        let discount_value = voucher.discount_value.as_ref();
        sqlx::query(
            r#"
            INSERT INTO vouchers
            (voucher_uid, brand_name, discount_amount, discount_value, discount_currency,
            voucher_code, expiry_date, store_type, redemption_type, store_location,
            region, category, description, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(voucher.id.inner())
        .bind(&voucher.brand_name)
        .bind(&voucher.discount_amount)
        .bind(discount_value.map(|d| d.amount))
        .bind(discount_value.map(|d| d.currency_code.clone()))
        .bind(&voucher.voucher_code)
        .bind(&voucher.expiry_date)
        .bind(voucher.store_type.to_string())
        .bind(voucher.redemption_type.to_string())
        .bind(&voucher.store_location)
        .bind(&voucher.region)
        .bind(&voucher.category)
        .bind(&voucher.description)
        .bind(voucher.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, voucher_id: &ID) -> Option<Voucher> {
        let res = sqlx::query_as::<_, VoucherRaw>(
            r#"
            SELECT * FROM vouchers AS v
            WHERE v.voucher_uid = $1
            "#,
        )
        .bind(voucher_id.inner())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(voucher) => voucher.map(|v| v.into()),
            Err(e) => {
                error!("Unable to find voucher {}. Err: {:?}", voucher_id, e);
                None
            }
        }
    }

    async fn find_all(&self, limit: usize) -> anyhow::Result<Vec<Voucher>> {
        let vouchers = sqlx::query_as::<_, VoucherRaw>(
            r#"
            SELECT * FROM vouchers AS v
            ORDER BY v.created_at
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(vouchers.into_iter().map(|v| v.into()).collect())
    }

    async fn delete(&self, voucher_id: &ID) -> Option<Voucher> {
        sqlx::query_as::<_, VoucherRaw>(
            r#"
            DELETE FROM vouchers AS v
            WHERE v.voucher_uid = $1
            RETURNING *
            "#,
        )
        .bind(voucher_id.inner())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|v| v.into())
    }
}
