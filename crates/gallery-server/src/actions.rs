//! Built-in action templates

use serde::Serialize;

/// A starter function offered to gallery users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreCall,
    PostCall,
    CurrentDateTimeTool,
    DigitsToWordsTool,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::PreCall,
        Action::PostCall,
        Action::CurrentDateTimeTool,
        Action::DigitsToWordsTool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::PreCall => "pre_call",
            Action::PostCall => "post_call",
            Action::CurrentDateTimeTool => "get_current_date_time_tool",
            Action::DigitsToWordsTool => "convert_digit_to_words_tool",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    /// Python source of the template
    pub fn template(self) -> &'static str {
        match self {
            Action::PreCall => include_str!("templates/pre_call.py"),
            Action::PostCall => include_str!("templates/post_call.py"),
            Action::CurrentDateTimeTool => include_str!("templates/current_date_time.py"),
            Action::DigitsToWordsTool => include_str!("templates/digits_to_words.py"),
        }
    }
}

/// Names of every available action
pub fn available_actions() -> Vec<&'static str> {
    Action::ALL.into_iter().map(Action::name).collect()
}

#[derive(Debug, Serialize)]
pub struct ActionTemplate {
    pub action_name: &'static str,
    pub template: &'static str,
}

impl From<Action> for ActionTemplate {
    fn from(action: Action) -> Self {
        Self {
            action_name: action.name(),
            template: action.template(),
        }
    }
}
