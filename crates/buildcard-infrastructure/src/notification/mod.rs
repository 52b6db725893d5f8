mod sender_factory;
mod teams;

pub use sender_factory::create_sender;
pub use teams::{TeamsWebhookSender, ACCEPTED_STATUS, ADAPTIVE_CARD_CONTENT_TYPE};
