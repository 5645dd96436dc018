//! HA light host - drives a Zigbee Home Automation light from decoded frames
//!
//! Reads one JSON APS indication per line on stdin and writes the light's
//! state as one JSON line per processed frame on stdout.

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod ingest;

use config::HostConfig;
use ingest::Host;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stdout carries light state)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ha_light_host=debug,zigbee_ha=debug,info".into()),
        )
        .init();

    tracing::info!("Starting HA light host");

    let config = HostConfig::from_env()?;
    tracing::info!(
        "Hosting color dimmable light on endpoint {} ({:?} color)",
        config.endpoint,
        config.color_model
    );

    let mut host = Host::new(config);
    if let Some(state) = host.snapshot() {
        tracing::info!(
            "Initial state: on={} level={:#06x}",
            state.on,
            state.stored_level
        );
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let processed = ingest::run(&mut host, stdin, tokio::io::stdout()).await?;

    tracing::info!("Input closed after {} frames", processed);
    Ok(())
}
