use std::collections::HashMap;

use buildcard_domain::config::{OutcomeValue, StepConfig};
use buildcard_domain::outcome::BuildSignals;
use buildcard_domain::shared::{ConfigError, Secret};

/// Workflow status exported by the CI runner (`0` on success)
pub const BUILD_STATUS_VAR: &str = "BITRISE_BUILD_STATUS";

/// Pipeline status exported by the CI runner, unset outside a pipeline
pub const PIPELINE_STATUS_VAR: &str = "BITRISEIO_PIPELINE_BUILD_STATUS";

/// Read-only view of the process environment
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

fn text(env: &impl EnvSource, name: &str) -> String {
    env.var(name).unwrap_or_default()
}

fn outcome_value(env: &impl EnvSource, name: &str) -> OutcomeValue {
    OutcomeValue {
        on_success: text(env, name),
        on_error: env
            .var(&format!("{name}_on_error"))
            .filter(|value| !value.is_empty()),
    }
}

/// `yes`/`no` switch, `no` when unset
fn flag(env: &impl EnvSource, name: &str) -> Result<bool, ConfigError> {
    match env.var(name).as_deref() {
        None | Some("") | Some("no") => Ok(false),
        Some("yes") => Ok(true),
        Some(other) => Err(ConfigError::invalid(
            name,
            format!("value `{other}` is not one of: yes, no"),
        )),
    }
}

/// Build the step configuration from the environment and validate it
pub fn load_step_config(env: &impl EnvSource) -> Result<StepConfig, ConfigError> {
    let config = StepConfig {
        debug: flag(env, "is_debug_mode")?,
        webhook_url: Secret::new(text(env, "webhook_url")),
        card_style: outcome_value(env, "card_style"),
        card_headline: outcome_value(env, "card_headline"),
        title: outcome_value(env, "title"),
        author_name: text(env, "author_name"),
        subject: text(env, "subject"),
        fields: text(env, "fields"),
        images: outcome_value(env, "images"),
        buttons: outcome_value(env, "buttons"),
    };

    config.validate()?;
    Ok(config)
}

/// Read the build status signals once, as exported by the runner
pub fn load_build_signals(env: &impl EnvSource) -> BuildSignals {
    BuildSignals::new(env.var(BUILD_STATUS_VAR), env.var(PIPELINE_STATUS_VAR))
}
