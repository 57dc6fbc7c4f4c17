use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use voucher_tracker_api_structs::*;

#[derive(Clone)]
pub struct BackupClient {
    base: Arc<BaseClient>,
}

impl BackupClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn push(&self) -> APIResponse<push_backup::APIResponse> {
        self.base.post((), "backup".into(), StatusCode::OK).await
    }
}
