use async_trait::async_trait;

use crate::card::AdaptiveCard;
use crate::shared::DeliveryError;

/// Delivers a composed card to a chat channel.
///
/// Implementations make a single attempt; there are no retries.
#[async_trait]
pub trait CardSender: Send + Sync {
    /// Send the card
    async fn send(&self, card: &AdaptiveCard) -> Result<(), DeliveryError>;
}
