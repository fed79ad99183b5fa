use oneview::app_config::AppConfig;
use oneview::ov::get_support_server_hardware;
use oneview::rest::OvClient;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = Arc::new(OvClient::new(&config)?);

    for id in config.support().server_hardware_ids() {
        match get_support_server_hardware(&client, id).await {
            Ok(hardware) => {
                let offer_end = hardware
                    .offer_end_date()
                    .map(|date| date.to_rfc3339())
                    .unwrap_or_else(|_| "unknown".to_string());
                info!(
                    id = %id,
                    support_enabled = hardware.support_enabled,
                    entitlement_status = %hardware.entitlement_details.entitlement_status,
                    "🔸 {} is covered until {}",
                    hardware.acquired_serial_number,
                    offer_end
                );
            }
            Err(e) => warn!(id = %id, "⚠️ Unable to retrieve support server hardware: {}", e),
        }
    }

    client.session_logout().await?;

    Ok(())
}
