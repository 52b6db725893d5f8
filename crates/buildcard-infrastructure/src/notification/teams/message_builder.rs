use buildcard_domain::card::AdaptiveCard;
use buildcard_domain::shared::DeliveryError;
use serde_json::json;

use super::ADAPTIVE_CARD_CONTENT_TYPE;

impl super::TeamsWebhookSender {
    /// Wrap the card in the `message` envelope expected by Teams workflows
    pub(super) fn build_message(
        &self,
        card: &AdaptiveCard,
    ) -> Result<serde_json::Value, DeliveryError> {
        let content = serde_json::to_value(card)
            .map_err(|e| DeliveryError::Serialization(e.to_string()))?;

        Ok(json!({
            "type": "message",
            "attachments": [
                {
                    "contentType": ADAPTIVE_CARD_CONTENT_TYPE,
                    "contentUrl": null,
                    "content": content
                }
            ]
        }))
    }
}
