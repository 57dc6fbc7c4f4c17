use crate::error::VoucherTrackerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use voucher_tracker_api_structs::push_backup::*;
use voucher_tracker_domain::VoucherSnapshot;
use voucher_tracker_infra::VoucherTrackerContext;

pub async fn push_backup_controller(
    ctx: web::Data<VoucherTrackerContext>,
) -> Result<HttpResponse, VoucherTrackerError> {
    let usecase = PushBackupUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|backup| {
            HttpResponse::Ok().json(APIResponse {
                file_name: backup.file_name,
                voucher_count: backup.snapshot.voucher_count,
                exported_at: backup.snapshot.exported_at,
            })
        })
        .map_err(VoucherTrackerError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    NotConfigured,
    StorageError,
    BackupUnavailable(String),
}

impl From<UseCaseError> for VoucherTrackerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotConfigured => Self::Conflict(
                "No backup target is configured. Set the BACKUP_URL environment variable."
                    .into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::BackupUnavailable(e) => Self::BackupUnavailable(e),
        }
    }
}

#[derive(Debug)]
pub struct PushedBackup {
    pub file_name: String,
    pub snapshot: VoucherSnapshot,
}

/// Uploads a snapshot of all vouchers to the configured backup target,
/// replacing the previous backup
#[derive(Debug)]
pub struct PushBackupUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for PushBackupUseCase {
    type Response = PushedBackup;

    type Error = UseCaseError;

    const NAME: &'static str = "PushBackup";

    async fn execute(
        &mut self,
        ctx: &VoucherTrackerContext,
    ) -> Result<Self::Response, Self::Error> {
        let (sink, config) = match (&ctx.backup_sink, &ctx.config.backup) {
            (Some(sink), Some(config)) => (sink, config),
            _ => return Err(UseCaseError::NotConfigured),
        };

        let vouchers = ctx
            .repos
            .vouchers
            .find_all(ctx.config.max_vouchers)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let snapshot = VoucherSnapshot::new(vouchers, ctx.sys.now());

        sink.push(&config.file_name, &snapshot)
            .await
            .map_err(|e| UseCaseError::BackupUnavailable(e.to_string()))?;

        Ok(PushedBackup {
            file_name: config.file_name.clone(),
            snapshot,
        })
    }
}
