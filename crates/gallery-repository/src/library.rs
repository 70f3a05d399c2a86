//! In-process library state shared by the store implementations

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{
    capitalize, ComponentType, NewPrompt, Prompt, PromptComponent, PromptQuery, PromptUpdate,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LibraryEntry {
    Prompt(Prompt),
    Component(PromptComponent),
}

/// On-disk layout of a library
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct LibrarySnapshot {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub prompt_components: Vec<PromptComponent>,
}

/// Entries keyed by id, in insertion order
#[derive(Debug, Default)]
pub(crate) struct Library {
    entries: IndexMap<String, LibraryEntry>,
}

impl Library {
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        let mut entries = IndexMap::new();
        for prompt in snapshot.prompts {
            entries.insert(prompt.prompt_id.clone(), LibraryEntry::Prompt(prompt));
        }
        for component in snapshot.prompt_components {
            entries.insert(
                component.prompt_component_id.clone(),
                LibraryEntry::Component(component),
            );
        }
        Self { entries }
    }

    pub fn snapshot(&self) -> LibrarySnapshot {
        let mut snapshot = LibrarySnapshot::default();
        for entry in self.entries.values() {
            match entry {
                LibraryEntry::Prompt(p) => snapshot.prompts.push(p.clone()),
                LibraryEntry::Component(c) => snapshot.prompt_components.push(c.clone()),
            }
        }
        snapshot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.entries.values().filter_map(|entry| match entry {
            LibraryEntry::Prompt(p) => Some(p),
            LibraryEntry::Component(_) => None,
        })
    }

    pub fn components(&self) -> Vec<PromptComponent> {
        self.entries
            .values()
            .filter_map(|entry| match entry {
                LibraryEntry::Component(c) => Some(c.clone()),
                LibraryEntry::Prompt(_) => None,
            })
            .collect()
    }

    pub fn find_prompts(&self, query: &PromptQuery) -> RepositoryResult<Vec<Prompt>> {
        let service_type = substring_matcher(&query.service_type)?;
        let language = query
            .language
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(substring_matcher)
            .transpose()?;

        Ok(self
            .prompts()
            .filter(|p| service_type.is_match(&p.service_type))
            .filter(|p| language.as_ref().map_or(true, |re| re.is_match(&p.language)))
            .cloned()
            .collect())
    }

    pub fn service_types(&self) -> Vec<String> {
        self.prompts()
            .map(|p| p.service_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn languages(&self) -> Vec<String> {
        self.prompts()
            .map(|p| p.language.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn insert_prompt(&mut self, new: NewPrompt, accuracy: f64) -> Prompt {
        let prompt = Prompt {
            prompt_id: Uuid::new_v4().to_string(),
            service_type: capitalize(&new.service_type),
            prompt: new.prompt,
            prompt_accuracy: accuracy,
            agent_type: new.agent_type,
            use_case: capitalize(&new.use_case),
            language: capitalize(&new.language),
            component_type: ComponentType::Prompt,
        };
        self.entries
            .insert(prompt.prompt_id.clone(), LibraryEntry::Prompt(prompt.clone()));
        prompt
    }

    pub fn insert_component(&mut self, text: String, accuracy: f64) -> PromptComponent {
        let component = PromptComponent {
            prompt_component_id: Uuid::new_v4().to_string(),
            prompt_component: text,
            accuracy,
            component_type: ComponentType::PromptComponent,
        };
        self.entries.insert(
            component.prompt_component_id.clone(),
            LibraryEntry::Component(component.clone()),
        );
        component
    }

    pub fn update_prompt(&mut self, id: &str, update: PromptUpdate) -> RepositoryResult<Prompt> {
        let key = validate_id(id)?;
        match self.entries.get_mut(&key) {
            Some(LibraryEntry::Prompt(prompt)) => {
                update.apply(prompt);
                Ok(prompt.clone())
            }
            _ => Err(RepositoryError::NotFound { id: id.to_string() }),
        }
    }

    pub fn update_component(
        &mut self,
        id: &str,
        text: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent> {
        let key = validate_id(id)?;
        match self.entries.get_mut(&key) {
            Some(LibraryEntry::Component(component)) => {
                component.prompt_component = text;
                component.accuracy = accuracy;
                Ok(component.clone())
            }
            _ => Err(RepositoryError::NotFound { id: id.to_string() }),
        }
    }

    pub fn delete(&mut self, id: &str) -> RepositoryResult<LibraryEntry> {
        let key = validate_id(id)?;
        self.entries
            .shift_remove(&key)
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }
}

/// Whether `id` has the shape of a library id
pub fn is_valid_id(id: &str) -> bool {
    Uuid::parse_str(id.trim()).is_ok()
}

/// Canonical form of a well-formed id
fn validate_id(id: &str) -> RepositoryResult<String> {
    Uuid::parse_str(id.trim())
        .map(|uuid| uuid.to_string())
        .map_err(|_| RepositoryError::InvalidId { id: id.to_string() })
}

fn substring_matcher(needle: &str) -> RepositoryResult<Regex> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|e| RepositoryError::InvalidQuery(e.to_string()))
}
