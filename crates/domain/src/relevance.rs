use crate::voucher::{StoreType, Voucher};

/// Where the user currently is. Both fields are optional, empty values are
/// treated as not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationContext {
    region: Option<String>,
    store_name: Option<String>,
}

impl LocationContext {
    pub fn new(region: Option<String>, store_name: Option<String>) -> Self {
        Self {
            region: fold_non_empty(region),
            store_name: fold_non_empty(store_name),
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }
}

/// Unicode full case folding, independent of the server locale.
/// "ß" folds to "ss", so "STRASSE" and "Straße" compare equal.
fn fold(value: &str) -> String {
    caseless::default_case_fold_str(value)
}

fn fold_non_empty(value: Option<String>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| fold(&v))
}

/// `needle` must already be folded
fn contains_folded(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(haystack) if !haystack.is_empty() => fold(haystack).contains(needle),
        _ => false,
    }
}

/// Checks if a `Voucher` is usable at the given location. Exactly one rule applies,
/// chosen by the `StoreType` of the `Voucher`.
pub fn is_relevant(voucher: &Voucher, location: &LocationContext) -> bool {
    match voucher.store_type {
        StoreType::International => true,
        StoreType::Regional => match location.region() {
            Some(region) => contains_folded(voucher.region.as_deref(), region),
            None => false,
        },
        StoreType::Specific => match location.store_name() {
            Some(store_name) => {
                contains_folded(Some(&voucher.brand_name), store_name)
                    || contains_folded(voucher.store_location.as_deref(), store_name)
            }
            None => false,
        },
    }
}

/// Selects the `Voucher`s relevant for the location, keeping their order
pub fn match_vouchers(vouchers: Vec<Voucher>, location: &LocationContext) -> Vec<Voucher> {
    vouchers
        .into_iter()
        .filter(|v| is_relevant(v, location))
        .collect()
}
