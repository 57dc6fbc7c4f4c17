use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use voucher_tracker_api::Application;
use voucher_tracker_infra::{
    BackupConfig, Config, InMemoryBackupSink, StaticTimeSys, VoucherTrackerContext,
};
use voucher_tracker_sdk::VoucherTrackerSDK;

pub struct TestApp {
    pub config: Config,
    /// The frozen clock of the application
    pub now: DateTime<Utc>,
    /// Receives the backups when the app is spawned with `spawn_app_with_backup`
    pub backup_sink: Arc<InMemoryBackupSink>,
}

pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
}

async fn launch(
    mut ctx: VoucherTrackerContext,
    backup_sink: Arc<InMemoryBackupSink>,
) -> (TestApp, VoucherTrackerSDK) {
    ctx.config.port = 0; // Random port
    ctx.sys = Arc::new(StaticTimeSys(frozen_now()));

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        now: frozen_now(),
        backup_sink,
    };
    let sdk = VoucherTrackerSDK::new(address);
    (app, sdk)
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, VoucherTrackerSDK) {
    let mut ctx = VoucherTrackerContext::create_inmemory();
    ctx.config.backup = None;
    launch(ctx, Arc::new(InMemoryBackupSink::new())).await
}

// Launch the application with an in memory backup target
pub async fn spawn_app_with_backup() -> (TestApp, VoucherTrackerSDK) {
    let mut ctx = VoucherTrackerContext::create_inmemory();
    let backup_sink = Arc::new(InMemoryBackupSink::new());
    ctx.backup_sink = Some(backup_sink.clone());
    ctx.config.backup = Some(BackupConfig {
        url: "https://backup.example.com".into(),
        token: None,
        file_name: "voucher-backup.json".into(),
    });
    launch(ctx, backup_sink).await
}
