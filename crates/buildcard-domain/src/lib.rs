// Domain layer - Pure business logic
// No dependencies on infrastructure or application layers

pub mod card;
pub mod config;
pub mod notification;
pub mod outcome;
pub mod pairs;
pub mod shared;

// Re-exports for convenience
pub use card::{compose_card, AdaptiveCard, ComposedCard, Diagnostic};
pub use config::{OutcomeValue, StepConfig};
pub use outcome::{resolve_outcome, BuildSignals, Outcome};
pub use pairs::{parse_pairs, Pair};
pub use shared::{ConfigError, DeliveryError, DomainError, Secret};
