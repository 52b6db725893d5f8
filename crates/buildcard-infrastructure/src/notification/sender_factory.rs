use std::sync::Arc;

use buildcard_domain::notification::CardSender;
use buildcard_domain::shared::Secret;

use super::teams::TeamsWebhookSender;

/// Create the sender for the configured webhook
pub fn create_sender(webhook_url: &Secret) -> Arc<dyn CardSender> {
    Arc::new(TeamsWebhookSender::new(webhook_url.clone()))
}
