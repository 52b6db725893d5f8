use std::fmt;

use super::model::ElementError;

/// Card section a discarded element belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Facts,
    Images,
    Actions,
}

impl Section {
    pub fn as_str(&self) -> &str {
        match self {
            Section::Facts => "facts",
            Section::Images => "images",
            Section::Actions => "actions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element left out of the card, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub section: Section,
    pub label: String,
    pub reason: String,
}

impl Diagnostic {
    pub fn discarded(section: Section, label: impl Into<String>, error: &ElementError) -> Self {
        Self {
            section,
            label: label.into(),
            reason: error.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {} entry `{}`: {}", self.section, self.label, self.reason)
    }
}
