use crate::model::{Conversation, Message};
use crate::store::ChatStore;
use std::sync::Arc;
use tracing::debug;

/// The active-conversation view: holds the current selection over a shared
/// store and projects its message history.
///
/// The projection is recomputed from the store on every read — there is no
/// cached copy that could go stale after an append or a clear.
pub struct ChatSession {
    store: Arc<ChatStore>,
    active: Option<String>,
}

impl ChatSession {
    pub fn new(store: Arc<ChatStore>) -> Self {
        Self {
            store,
            active: None,
        }
    }

    /// Select a conversation by id. Unknown ids clear the selection instead
    /// of failing — the view falls back to its "no chat open" state.
    pub async fn select(&mut self, id: &str) -> Option<Conversation> {
        match self.store.conversation(id).await {
            Some(conversation) => {
                debug!("selected conversation {}", id);
                self.active = Some(conversation.id.clone());
                Some(conversation)
            }
            None => {
                debug!("conversation {} not found, clearing selection", id);
                self.active = None;
                None
            }
        }
    }

    pub fn deselect(&mut self) {
        self.active = None;
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active conversation, re-resolved from the store so that mute and
    /// status edits made elsewhere are always visible.
    pub async fn active(&self) -> Option<Conversation> {
        match &self.active {
            Some(id) => self.store.conversation(id).await,
            None => None,
        }
    }

    /// The message projection for the active conversation, in append order.
    /// Empty when nothing is selected.
    pub async fn messages(&self) -> Vec<Message> {
        match &self.active {
            Some(id) => self.store.messages_for(id).await,
            None => Vec::new(),
        }
    }

    /// Clear the active conversation's history. Returns the removed count;
    /// zero when nothing is selected or the history was already empty.
    pub async fn clear_active(&self) -> usize {
        match &self.active {
            Some(id) => self.store.clear(id).await,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests;
