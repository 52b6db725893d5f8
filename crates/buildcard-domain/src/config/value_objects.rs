use std::fmt;

use crate::outcome::Outcome;
use crate::shared::{ConfigError, Secret};

/// A setting with a success value and an optional override used on failure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeValue {
    pub on_success: String,
    pub on_error: Option<String>,
}

impl OutcomeValue {
    pub fn new(on_success: impl Into<String>) -> Self {
        Self {
            on_success: on_success.into(),
            on_error: None,
        }
    }

    pub fn with_error(mut self, on_error: impl Into<String>) -> Self {
        self.on_error = Some(on_error.into());
        self
    }

    /// Resolve the value for the given outcome
    pub fn pick(&self, outcome: Outcome) -> &str {
        outcome.select(&self.on_success, self.on_error.as_deref().unwrap_or(""))
    }
}

/// All user settings for one notification run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepConfig {
    pub debug: bool,
    pub webhook_url: Secret,

    // Banner
    pub card_style: OutcomeValue,
    pub card_headline: OutcomeValue,

    // Main section
    pub title: OutcomeValue,
    pub author_name: String,
    pub subject: String,

    // Content, encoded as `label|value` lines
    pub fields: String,
    pub images: OutcomeValue,
    pub buttons: OutcomeValue,
}

impl StepConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::Missing("webhook_url".to_string()));
        }

        // The parse error is reported without echoing the URL back.
        let url = url::Url::parse(self.webhook_url.expose())
            .map_err(|e| ConfigError::invalid("webhook_url", format!("not a valid URL ({e})")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "webhook_url",
                format!("unsupported scheme `{}`", url.scheme()),
            ));
        }

        Ok(())
    }
}

fn write_outcome_value(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    value: &OutcomeValue,
) -> fmt::Result {
    writeln!(f, "- {}: {}", name, value.on_success)?;
    writeln!(
        f,
        "- {}_on_error: {}",
        name,
        value.on_error.as_deref().unwrap_or("")
    )
}

/// One `- name: value` line per input, with the webhook URL redacted
impl fmt::Display for StepConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- is_debug_mode: {}", if self.debug { "yes" } else { "no" })?;
        writeln!(f, "- webhook_url: {}", self.webhook_url)?;
        write_outcome_value(f, "card_style", &self.card_style)?;
        write_outcome_value(f, "card_headline", &self.card_headline)?;
        write_outcome_value(f, "title", &self.title)?;
        writeln!(f, "- author_name: {}", self.author_name)?;
        writeln!(f, "- subject: {}", self.subject)?;
        writeln!(f, "- fields: {}", self.fields)?;
        write_outcome_value(f, "images", &self.images)?;
        write_outcome_value(f, "buttons", &self.buttons)
    }
}
