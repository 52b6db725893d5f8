use serde::{Deserialize, Serialize};

pub const CARD_TYPE: &str = "AdaptiveCard";
pub const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const CARD_VERSION: &str = "1.5";

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reasons an element is refused by its parent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    #[error("fact title is empty")]
    EmptyFactTitle,

    #[error("fact value is empty")]
    EmptyFactValue,

    #[error("duplicate fact title `{0}`")]
    DuplicateFact(String),

    #[error("action title is empty")]
    EmptyActionTitle,

    #[error("URL is empty")]
    EmptyUrl,
}

/// The URL is passed through as written; `data:`, `mailto:` and relative
/// links are all left to the client.
fn validate_url(raw: &str) -> Result<(), ElementError> {
    if raw.is_empty() {
        return Err(ElementError::EmptyUrl);
    }
    Ok(())
}

/// Top level Adaptive Card document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveCard {
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    #[serde(default)]
    pub body: Vec<Element>,
}

impl AdaptiveCard {
    pub fn new() -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            schema: CARD_SCHEMA.to_string(),
            version: CARD_VERSION.to_string(),
            body: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.body.push(element.into());
    }
}

impl Default for AdaptiveCard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    Container(Container),
    TextBlock(TextBlock),
    FactSet(FactSet),
    Image(Image),
    ActionSet(ActionSet),
}

impl Element {
    /// Check the element before it is attached to a parent
    pub fn validate(&self) -> Result<(), ElementError> {
        match self {
            Element::Container(container) => {
                container.items.iter().try_for_each(Element::validate)
            }
            Element::TextBlock(_) => Ok(()),
            Element::FactSet(fact_set) => fact_set.facts.iter().try_for_each(Fact::validate),
            Element::Image(image) => validate_url(&image.url),
            Element::ActionSet(action_set) => {
                action_set.actions.iter().try_for_each(Action::validate)
            }
        }
    }
}

macro_rules! impl_into_element {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Element {
                fn from(value: $name) -> Self {
                    Element::$name(value)
                }
            }
        )*
    };
}

impl_into_element!(Container, TextBlock, FactSet, Image, ActionSet);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub style: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub spacing: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub separator: bool,
    #[serde(default)]
    pub items: Vec<Element>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = spacing.into();
        self
    }

    pub fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }

    /// Append an element after validating it
    pub fn add_element(&mut self, element: impl Into<Element>) -> Result<(), ElementError> {
        let element = element.into();
        element.validate()?;
        self.items.push(element);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub wrap: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub weight: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub style: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, wrap: bool) -> Self {
        Self {
            text: text.into(),
            wrap,
            ..Default::default()
        }
    }

    /// Large bold heading in the given color
    pub fn heading(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: "large".to_string(),
            weight: "bolder".to_string(),
            style: "heading".to_string(),
            color: color.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    fn validate(&self) -> Result<(), ElementError> {
        if self.title.is_empty() {
            return Err(ElementError::EmptyFactTitle);
        }
        if self.value.is_empty() {
            return Err(ElementError::EmptyFactValue);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactSet {
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact; titles must be non-empty and unique within the set
    pub fn add_fact(&mut self, fact: Fact) -> Result<(), ElementError> {
        fact.validate()?;
        if self.facts.iter().any(|f| f.title == fact.title) {
            return Err(ElementError::DuplicateFact(fact.title));
        }
        self.facts.push(fact);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,
}

impl Image {
    pub fn large(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: "large".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenUrlAction {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl(OpenUrlAction),
}

impl Action {
    /// Button that opens `url` in the browser
    pub fn open_url(title: impl Into<String>, url: impl Into<String>) -> Result<Self, ElementError> {
        let action = Action::OpenUrl(OpenUrlAction {
            title: title.into(),
            url: url.into(),
        });
        action.validate()?;
        Ok(action)
    }

    fn validate(&self) -> Result<(), ElementError> {
        match self {
            Action::OpenUrl(action) => {
                if action.title.is_empty() {
                    return Err(ElementError::EmptyActionTitle);
                }
                validate_url(&action.url)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSet {
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
