mod composer;
mod diagnostics;
mod model;

#[cfg(test)]
mod composer_test;

pub use composer::{compose_card, ComposedCard};
pub use diagnostics::{Diagnostic, Section};
pub use model::{
    Action, ActionSet, AdaptiveCard, Container, Element, ElementError, Fact, FactSet, Image,
    OpenUrlAction, TextBlock, CARD_SCHEMA, CARD_VERSION,
};
