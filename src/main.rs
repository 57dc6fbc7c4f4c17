mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use tracing::info;
use voucher_tracker_api::Application;
use voucher_tracker_infra::setup_context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("voucher_tracker_server".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    info!("Listening on port {}", app.port());
    app.start().await?;
    Ok(())
}
