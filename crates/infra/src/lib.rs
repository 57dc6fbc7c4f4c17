mod config;
mod repos;
mod services;
mod system;

use chrono::DateTime;
use chrono_tz::Tz;
pub use config::{BackupConfig, Config, MAX_REMINDER_RETENTION_DAYS};
use repos::Repos;
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct VoucherTrackerContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    /// `None` when no backup target is configured
    pub backup_sink: Option<Arc<dyn IBackupSink>>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl VoucherTrackerContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                warn!("DATABASE_URL is not set, vouchers are only kept in memory.");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        let backup_sink = config
            .backup
            .as_ref()
            .map(|backup| Arc::new(HttpBackupSink::new(backup)) as Arc<dyn IBackupSink>);

        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            backup_sink,
        })
    }

    /// The current instant in the configured timezone. Its calendar date is
    /// "today" for every expiry comparison.
    pub fn local_now(&self) -> DateTime<Tz> {
        self.sys.now().with_timezone(&self.config.timezone)
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            backup_sink: None,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<VoucherTrackerContext> {
    let postgres_connection_string = std::env::var("DATABASE_URL").ok();
    if postgres_connection_string.is_some() {
        info!("Using postgres as storage");
    }
    VoucherTrackerContext::create(ContextParams {
        postgres_connection_string,
    })
    .await
}
