use super::IBackupSink;
use crate::config::BackupConfig;
use reqwest::Client;
use tracing::error;
use voucher_tracker_domain::VoucherSnapshot;

/// Uploads snapshots with a `PUT` to `{url}/{file_name}`
pub struct HttpBackupSink {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpBackupSink {
    pub fn new(config: &BackupConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait::async_trait]
impl IBackupSink for HttpBackupSink {
    async fn push(&self, file_name: &str, snapshot: &VoucherSnapshot) -> anyhow::Result<()> {
        let mut req = self
            .client
            .put(&format!("{}/{}", self.url, file_name))
            .json(snapshot);
        if let Some(token) = &self.token {
            req = req.header("authorization", format!("Bearer {}", token));
        }

        match req.send().await {
            Ok(res) => res.error_for_status().map(|_| ()).map_err(|e| {
                error!(
                    "[Unexpected Response] Backup PUT error. Error message: {:?}",
                    e
                );
                anyhow::Error::new(e)
            }),
            Err(e) => {
                error!("[Network Error] Backup PUT error. Error message: {:?}", e);
                Err(anyhow::Error::new(e))
            }
        }
    }
}
