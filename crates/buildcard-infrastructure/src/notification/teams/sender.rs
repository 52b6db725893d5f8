use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use std::error::Error as _;

use buildcard_domain::card::AdaptiveCard;
use buildcard_domain::notification::CardSender;
use buildcard_domain::shared::DeliveryError;

use super::ACCEPTED_STATUS;

/// Error text with its source chain, minus the request URL
fn describe(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut detail = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

#[async_trait]
impl CardSender for super::TeamsWebhookSender {
    async fn send(&self, card: &AdaptiveCard) -> Result<(), DeliveryError> {
        let payload = self.build_message(card)?;
        let body = serde_json::to_vec(&payload)
            .map_err(|e| DeliveryError::Serialization(e.to_string()))?;

        debug!("Post Json Data: {}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(self.webhook_url.expose())
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(describe(e)))?;

        let status = response.status();
        if status != ACCEPTED_STATUS {
            let body = response.text().await.map_err(|e| {
                DeliveryError::Transport(format!(
                    "server error: {}, failed to read response: {}",
                    status,
                    describe(e)
                ))
            })?;
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
