use super::diagnostics::{Diagnostic, Section};
use super::model::{
    Action, ActionSet, AdaptiveCard, Container, ElementError, Fact, FactSet, Image, TextBlock,
};
use crate::config::StepConfig;
use crate::outcome::Outcome;
use crate::pairs::parse_pairs;

/// A finished card together with everything that was left out of it
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedCard {
    pub card: AdaptiveCard,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the notification card for `outcome` from the step settings.
///
/// Never fails: elements that cannot be added are skipped and reported in
/// [`ComposedCard::diagnostics`].
pub fn compose_card(outcome: Outcome, config: &StepConfig) -> ComposedCard {
    CardComposer::new(outcome, config).compose()
}

struct CardComposer<'a> {
    outcome: Outcome,
    config: &'a StepConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> CardComposer<'a> {
    fn new(outcome: Outcome, config: &'a StepConfig) -> Self {
        Self {
            outcome,
            config,
            diagnostics: Vec::new(),
        }
    }

    fn compose(mut self) -> ComposedCard {
        let mut card = AdaptiveCard::new();

        card.push(self.banner());

        let main = self.main_section();
        if !main.is_empty() {
            card.push(main);
        }

        let images = self.images();
        if !images.is_empty() {
            card.push(images);
        }

        let actions = self.actions();
        if !actions.is_empty() {
            card.push(actions);
        }

        ComposedCard {
            card,
            diagnostics: self.diagnostics,
        }
    }

    fn discard(&mut self, section: Section, label: &str, error: &ElementError) {
        self.diagnostics
            .push(Diagnostic::discarded(section, label, error));
    }

    /// Status banner, present even when the headline is empty
    fn banner(&self) -> Container {
        let style = self.config.card_style.pick(self.outcome);
        let headline = self.config.card_headline.pick(self.outcome);

        let mut banner = Container::new()
            .with_style(style)
            .with_spacing("None")
            .with_separator();
        banner
            .items
            .push(TextBlock::heading(headline, style).into());
        banner
    }

    fn main_section(&mut self) -> Container {
        let mut main = Container::new()
            .with_style("default")
            .with_spacing("medium");

        let title = self.config.title.pick(self.outcome);
        if !title.is_empty() {
            main.items.push(TextBlock::new(title, false).into());
        }

        if !self.config.author_name.is_empty() {
            main.items
                .push(TextBlock::new(self.config.author_name.as_str(), false).into());
        }

        if !self.config.subject.is_empty() {
            main.items
                .push(TextBlock::new(self.config.subject.as_str(), true).into());
        }

        let facts = self.facts();
        if !facts.is_empty() {
            main.items.push(facts.into());
        }

        main
    }

    fn facts(&mut self) -> FactSet {
        let config = self.config;
        let mut facts = FactSet::new();
        for pair in parse_pairs(&config.fields) {
            if let Err(e) = facts.add_fact(Fact::new(pair.label.as_str(), pair.value)) {
                self.discard(Section::Facts, &pair.label, &e);
            }
        }
        facts
    }

    fn images(&mut self) -> Container {
        let config = self.config;
        let mut images = Container::new();
        let blob = config.images.pick(self.outcome);
        for pair in parse_pairs(blob) {
            if let Err(e) = images.add_element(Image::large(pair.value)) {
                self.discard(Section::Images, &pair.label, &e);
            }
        }
        images
    }

    fn actions(&mut self) -> ActionSet {
        let config = self.config;
        let mut actions = ActionSet::new();
        let blob = config.buttons.pick(self.outcome);
        for pair in parse_pairs(blob) {
            match Action::open_url(pair.label.as_str(), pair.value) {
                Ok(action) => actions.push(action),
                Err(e) => self.discard(Section::Actions, &pair.label, &e),
            }
        }
        actions
    }
}
