use anyhow::Result;
use log::info;

use buildcard_domain::shared::DomainError;
use buildcard_infrastructure::config::{load_build_signals, load_step_config, EnvSource};
use buildcard_infrastructure::logging;
use buildcard_infrastructure::notification::create_sender;

use super::services::NotificationService;

/// Run the notification step once: read the inputs, then compose and send
/// the card.
///
/// Configuration errors are returned before the logger is set up.
pub async fn run_step(env: &impl EnvSource) -> Result<()> {
    let config = load_step_config(env).map_err(DomainError::from)?;

    if let Err(e) = logging::init_logger(config.debug) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
    }

    println!("Configs:\n{}", config);

    let signals = load_build_signals(env);
    let service = NotificationService::new(create_sender(&config.webhook_url));
    let composed = service.notify(&signals, &config).await?;

    info!(
        "Card delivered with {} body section(s), {} element(s) skipped",
        composed.card.body.len(),
        composed.diagnostics.len()
    );

    Ok(())
}
