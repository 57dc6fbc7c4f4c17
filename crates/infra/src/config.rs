use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};
use tracing::{info, warn};

/// Upper bound for `REMINDER_RETENTION_DAYS`
pub const MAX_REMINDER_RETENTION_DAYS: i64 = 3650;

/// Where to push voucher backups
#[derive(Debug, Clone)]
pub struct BackupConfig {
    /// Base url of the sync target. The snapshot is uploaded to `{url}/{file_name}`
    pub url: String,
    pub token: Option<String>,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Currency code used for structured discounts without a currency and for
    /// the default `ReminderSettings`
    pub default_currency: String,
    /// The timezone that decides which calendar day it is when comparing
    /// expiry dates
    pub timezone: Tz,
    /// How often the reminder sweep runs
    pub reminder_sweep_interval_secs: u64,
    /// Emit each `(voucher, threshold)` reminder only once within
    /// `reminder_retention_days`. When disabled a reminder is created on every
    /// sweep for as long as the voucher sits at the threshold.
    pub reminder_dedup: bool,
    pub reminder_retention_days: i64,
    /// Upper bound on the number of vouchers loaded for a single evaluation
    pub max_vouchers: usize,
    pub backup: Option<BackupConfig>,
    pub cors_origins: Vec<String>,
}

fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn get_backup_config() -> Option<BackupConfig> {
    let url = std::env::var("BACKUP_URL").ok()?;
    match url::Url::parse(&url) {
        Ok(parsed_url) if ["https", "http"].contains(&parsed_url.scheme()) => (),
        _ => {
            warn!(
                "The given BACKUP_URL: {} is not a valid http(s) url, backups are disabled.",
                url
            );
            return None;
        }
    }
    let file_name =
        std::env::var("BACKUP_FILE_NAME").unwrap_or_else(|_| "voucher-backup.json".into());
    Some(BackupConfig {
        url: url.trim_end_matches('/').to_string(),
        token: std::env::var("BACKUP_TOKEN").ok(),
        file_name,
    })
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", 5000);

        let default_currency = std::env::var("DEFAULT_CURRENCY")
            .ok()
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "USD".into());

        let timezone = parse_env_or("TIMEZONE", Tz::UTC);

        let mut reminder_sweep_interval_secs =
            parse_env_or("REMINDER_SWEEP_INTERVAL_SECS", 6 * 60 * 60);
        if reminder_sweep_interval_secs == 0 {
            warn!("REMINDER_SWEEP_INTERVAL_SECS must be positive, falling back to 6 hours.");
            reminder_sweep_interval_secs = 6 * 60 * 60;
        }

        let mut reminder_retention_days = parse_env_or("REMINDER_RETENTION_DAYS", 30);
        if !(1..=MAX_REMINDER_RETENTION_DAYS).contains(&reminder_retention_days) {
            warn!(
                "REMINDER_RETENTION_DAYS must be between 1 and {}, falling back to 30 days.",
                MAX_REMINDER_RETENTION_DAYS
            );
            reminder_retention_days = 30;
        }

        let backup = get_backup_config();
        if backup.is_none() {
            info!("Did not find a valid BACKUP_URL environment variable. Backups are disabled.");
        }

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            port,
            default_currency,
            timezone,
            reminder_sweep_interval_secs,
            reminder_dedup: parse_env_or("REMINDER_DEDUP", true),
            reminder_retention_days,
            max_vouchers: parse_env_or("MAX_VOUCHERS", 1000),
            backup,
            cors_origins,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
