use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;

use buildcard_domain::card::{compose_card, ComposedCard};
use buildcard_domain::config::StepConfig;
use buildcard_domain::notification::CardSender;
use buildcard_domain::outcome::{resolve_outcome, BuildSignals};
use buildcard_domain::shared::DomainError;

/// Notification application service
/// Turns the build signals into a card and hands it to the sender
pub struct NotificationService {
    sender: Arc<dyn CardSender>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn CardSender>) -> Self {
        Self { sender }
    }

    /// Resolve the outcome, compose the card and deliver it once
    pub async fn notify(
        &self,
        signals: &BuildSignals,
        config: &StepConfig,
    ) -> Result<ComposedCard> {
        let outcome = resolve_outcome(signals);
        debug!(
            "Build signals: workflow={:?}, pipeline={:?}",
            signals.workflow_status, signals.pipeline_status
        );
        info!("Build {}, composing notification card", outcome);

        let composed = compose_card(outcome, config);
        for diagnostic in &composed.diagnostics {
            warn!("Could not add element to card: {}", diagnostic);
        }

        self.sender
            .send(&composed.card)
            .await
            .map_err(DomainError::from)?;

        Ok(composed)
    }
}
