mod message_builder;
mod sender;

use buildcard_domain::shared::Secret;
use reqwest::{Client, StatusCode};

/// Attachment content type of an Adaptive Card
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Status a Teams workflow webhook answers with once the message is queued
pub const ACCEPTED_STATUS: StatusCode = StatusCode::ACCEPTED;

/// Microsoft Teams workflow webhook sender
pub struct TeamsWebhookSender {
    webhook_url: Secret,
    client: Client,
}

impl TeamsWebhookSender {
    pub fn new(webhook_url: Secret) -> Self {
        Self {
            webhook_url,
            client: Client::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildcard_domain::card::{AdaptiveCard, Container, TextBlock};

    fn sample_card() -> AdaptiveCard {
        let mut banner = Container::new().with_style("good");
        banner.items.push(TextBlock::heading("Build passed", "good").into());

        let mut card = AdaptiveCard::new();
        card.push(banner);
        card
    }

    #[test]
    fn test_build_message_envelope() {
        let sender = TeamsWebhookSender::new(Secret::new("https://example.com/hook"));
        let payload = sender.build_message(&sample_card()).unwrap();

        assert_eq!(payload["type"], "message");
        let attachments = payload["attachments"].as_array().unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0]["contentType"], ADAPTIVE_CARD_CONTENT_TYPE);
        assert!(attachments[0]["contentUrl"].is_null());
        assert_eq!(attachments[0]["content"]["type"], "AdaptiveCard");
        assert_eq!(attachments[0]["content"]["version"], "1.5");
    }

    #[test]
    fn test_attachment_content_round_trip() {
        let sender = TeamsWebhookSender::new(Secret::new("https://example.com/hook"));
        let card = sample_card();

        let payload = sender.build_message(&card).unwrap();
        let content = payload["attachments"][0]["content"].clone();
        let parsed: AdaptiveCard = serde_json::from_value(content).unwrap();

        assert_eq!(parsed, card);
    }
}
