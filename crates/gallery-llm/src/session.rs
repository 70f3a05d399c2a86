//! Per-session conversation memory

use crate::client::ChatMessage;
use dashmap::DashMap;

/// Conversation histories keyed by session id
///
/// Lives for the lifetime of the process. Nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Vec<ChatMessage>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded for `session_id`, oldest first
    pub fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Append messages, creating the session if needed
    pub fn append<I>(&self, session_id: &str, messages: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .extend(messages);
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn remove(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        self.sessions.remove(session_id).map(|(_, messages)| messages)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
