mod sender;

pub use sender::CardSender;
