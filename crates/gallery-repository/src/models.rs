//! Prompt library records

use serde::{Deserialize, Serialize};

/// Discriminator stored on every library record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Prompt,
    PromptComponent,
}

/// A complete, categorized prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub prompt_id: String,
    pub service_type: String,
    pub prompt: String,
    /// Evaluation score, in percent
    pub prompt_accuracy: f64,
    pub agent_type: String,
    pub use_case: String,
    pub language: String,
    pub component_type: ComponentType,
}

/// A reusable prompt fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptComponent {
    pub prompt_component_id: String,
    pub prompt_component: String,
    /// Evaluation score, in percent
    pub accuracy: f64,
    pub component_type: ComponentType,
}

/// Fields supplied when adding a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrompt {
    pub service_type: String,
    pub prompt: String,
    #[serde(default)]
    pub agent_type: String,
    pub use_case: String,
    pub language: String,
}

/// Partial update of a prompt; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptUpdate {
    pub prompt: Option<String>,
    pub prompt_accuracy: Option<f64>,
    pub service_type: Option<String>,
    pub agent_type: Option<String>,
    pub language: Option<String>,
    pub use_case: Option<String>,
}

impl PromptUpdate {
    pub fn is_empty(&self) -> bool {
        self.prompt.is_none()
            && self.prompt_accuracy.is_none()
            && self.service_type.is_none()
            && self.agent_type.is_none()
            && self.language.is_none()
            && self.use_case.is_none()
    }

    pub(crate) fn apply(self, prompt: &mut Prompt) {
        if let Some(text) = self.prompt {
            prompt.prompt = text;
        }
        if let Some(accuracy) = self.prompt_accuracy {
            prompt.prompt_accuracy = accuracy;
        }
        if let Some(service_type) = self.service_type {
            prompt.service_type = service_type;
        }
        if let Some(agent_type) = self.agent_type {
            prompt.agent_type = agent_type;
        }
        if let Some(language) = self.language {
            prompt.language = language;
        }
        if let Some(use_case) = self.use_case {
            prompt.use_case = use_case;
        }
    }
}

/// Filter for listing prompts
///
/// Both fields match case-insensitively anywhere in the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptQuery {
    pub service_type: String,
    pub language: Option<String>,
}

impl PromptQuery {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("healthcare"), "Healthcare");
        assert_eq!(capitalize("eNGLISH"), "English");
        assert_eq!(capitalize("customer support"), "Customer support");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_component_type_serialization() {
        assert_eq!(
            serde_json::to_value(ComponentType::PromptComponent).unwrap(),
            "prompt_component"
        );
        assert_eq!(serde_json::to_value(ComponentType::Prompt).unwrap(), "prompt");
    }

    #[test]
    fn test_update_apply_is_partial() {
        let mut prompt = Prompt {
            prompt_id: "id".to_string(),
            service_type: "Banking".to_string(),
            prompt: "old".to_string(),
            prompt_accuracy: 75.0,
            agent_type: "voice".to_string(),
            use_case: "Support".to_string(),
            language: "English".to_string(),
            component_type: ComponentType::Prompt,
        };

        PromptUpdate {
            prompt: Some("new".to_string()),
            prompt_accuracy: Some(90.5),
            ..Default::default()
        }
        .apply(&mut prompt);

        assert_eq!(prompt.prompt, "new");
        assert_eq!(prompt.prompt_accuracy, 90.5);
        assert_eq!(prompt.service_type, "Banking");
        assert_eq!(prompt.language, "English");
    }

    #[test]
    fn test_empty_update() {
        assert!(PromptUpdate::default().is_empty());
        assert!(!PromptUpdate {
            language: Some("Hindi".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
