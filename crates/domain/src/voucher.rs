use crate::expiry::{classify, ExpiryClassification};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Visibility scope of a `Voucher`. Decides which location fields are used
/// when matching the `Voucher` against a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    /// Only redeemable at a specific store, matched by brand or store location
    Specific,
    /// Redeemable within a region, matched by region
    Regional,
    /// Redeemable everywhere
    International,
}

impl Default for StoreType {
    fn default() -> Self {
        Self::International
    }
}

impl Display for StoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Specific => "specific",
            Self::Regional => "regional",
            Self::International => "international",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "specific" => Ok(Self::Specific),
            "regional" => Ok(Self::Regional),
            "international" => Ok(Self::International),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

/// Where a `Voucher` can be redeemed. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedemptionType {
    Online,
    Offline,
    Both,
}

impl Default for RedemptionType {
    fn default() -> Self {
        Self::Both
    }
}

impl Display for RedemptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Both => "both",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RedemptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            "both" => Ok(Self::Both),
            _ => Err(format!("Unknown redemption type: {}", s)),
        }
    }
}

/// Structured amount of a discount, kept next to the free form
/// `Voucher::discount_amount` display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountValue {
    pub amount: f64,
    pub currency_code: String,
}

impl DiscountValue {
    /// Falls back to `default_currency` when no (or a blank) currency code is given
    pub fn new(amount: f64, currency_code: Option<String>, default_currency: &str) -> Self {
        let currency_code = currency_code
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_currency.to_uppercase());
        Self {
            amount,
            currency_code,
        }
    }
}

/// A stored discount voucher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: ID,
    pub brand_name: String,
    /// Display text of the discount, e.g. "20% OFF"
    pub discount_amount: String,
    pub discount_value: Option<DiscountValue>,
    /// Not required to be unique
    pub voucher_code: String,
    /// ISO date without time of day, e.g. "2024-12-31". Kept as given by the client,
    /// malformed values are classified as unparseable instead of rejected.
    pub expiry_date: String,
    pub store_type: StoreType,
    pub redemption_type: RedemptionType,
    pub store_location: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Voucher {
    pub fn classify<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ExpiryClassification {
        classify(&self.expiry_date, now)
    }
}

impl Entity for Voucher {
    fn id(&self) -> &ID {
        &self.id
    }
}
